use content_model::Locale;
use leptos::*;
use leptos_router::A;

use crate::{hooks::use_ui_strings, runtime::use_site_runtime};

#[component]
pub fn Navbar() -> impl IntoView {
    let runtime = use_site_runtime();
    let strings = use_ui_strings();

    view! {
        <nav class="site-navbar">
            <div class="site-navbar-links">
                <A href="/" exact=true>{move || strings.get().nav.home}</A>
                <A href="/history">{move || strings.get().nav.history}</A>
                <A href="/projects">{move || strings.get().nav.projects}</A>
                <A href="/contact">{move || strings.get().nav.contact}</A>
            </div>
            <div class="site-navbar-locales">
                {Locale::ALL
                    .into_iter()
                    .map(|locale| {
                        view! {
                            <button
                                type="button"
                                class="locale-switch"
                                class:active=move || runtime.locale.get() == locale
                                on:click=move |_| runtime.set_locale(locale)
                            >
                                {locale.display_name()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
