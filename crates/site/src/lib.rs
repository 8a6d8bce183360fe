mod components;
mod hooks;
mod pages;
mod runtime;
mod web_app;

pub use hooks::{
    use_history, use_projects, use_public_asset, use_public_asset_with_extensions, use_ui_strings,
};
pub use runtime::{use_site_runtime, SiteProvider, SiteRuntimeContext, SiteServices};
pub use web_app::PortfolioApp;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <PortfolioApp /> })
}
