//! Runtime provider and context wiring for the portfolio site.
//!
//! This module owns the long-lived service bundle, the shared asset cache, the embedded
//! content catalog, and the active-locale signal. UI composition stays in
//! [`crate::components`] and [`crate::pages`].

use std::rc::Rc;

use asset_resolver::{AssetCache, AssetProbe, NoopAssetProbe};
use content_model::Locale;
use content_provider::{ContentFetcher, EagerCatalog, NoopContentFetcher, ProviderMode};
use leptos::*;
use platform_web::{
    ContactSubmitService, LocalePrefs, NoopContactSubmitService, WebContactSubmitService,
    WebContentFetcher, WebImageProbe,
};

/// Host service bundle assembled by the entry layer and injected into the provider.
#[derive(Clone)]
pub struct SiteServices {
    /// Existence oracle for static image assets.
    pub asset_probe: Rc<dyn AssetProbe>,
    /// Document loader for lazy-mode content.
    pub content_fetcher: Rc<dyn ContentFetcher>,
    /// Contact-form submission endpoint.
    pub contact: Rc<dyn ContactSubmitService>,
}

impl SiteServices {
    /// Browser composition. Without a contact endpoint the form accepts submissions
    /// locally instead of failing.
    pub fn browser(contact_endpoint: Option<String>) -> Self {
        let contact: Rc<dyn ContactSubmitService> = match contact_endpoint {
            Some(endpoint) => Rc::new(WebContactSubmitService::new(endpoint)),
            None => Rc::new(NoopContactSubmitService),
        };
        Self {
            asset_probe: Rc::new(WebImageProbe),
            content_fetcher: Rc::new(WebContentFetcher),
            contact,
        }
    }

    /// All-no-op composition for tests and non-browser targets.
    pub fn stub() -> Self {
        Self {
            asset_probe: Rc::new(NoopAssetProbe),
            content_fetcher: Rc::new(NoopContentFetcher),
            contact: Rc::new(NoopContactSubmitService),
        }
    }
}

/// Leptos context for reading site-wide state: active locale, services, caches.
#[derive(Clone, Copy)]
pub struct SiteRuntimeContext {
    /// Active locale signal; writes persist through the locale preference store.
    pub locale: RwSignal<Locale>,
    /// Injected service bundle.
    pub services: StoredValue<SiteServices>,
    /// Shared asset-resolution cache, one per mounted app.
    pub assets: StoredValue<AssetCache>,
    /// Embedded content catalog (always present; lazy mode still uses it for strings).
    pub catalog: StoredValue<Rc<EagerCatalog>>,
    /// Content-loading design selected at composition time.
    pub provider_mode: ProviderMode,
}

impl SiteRuntimeContext {
    /// Switches the active locale; a no-op when it already matches.
    pub fn set_locale(&self, locale: Locale) {
        if self.locale.get_untracked() != locale {
            self.locale.set(locale);
        }
    }
}

#[component]
/// Provides [`SiteRuntimeContext`] to descendant components and hydrates the persisted
/// locale preference.
pub fn SiteProvider(
    /// Injected browser or stub service bundle assembled by the entry layer.
    services: SiteServices,
    /// Content-loading design for this deployment.
    #[prop(default = ProviderMode::Eager)]
    provider_mode: ProviderMode,
    /// Catalog override for tests; defaults to the embedded documents.
    #[prop(optional)]
    catalog: Option<Rc<EagerCatalog>>,
    children: Children,
) -> impl IntoView {
    let initial_locale = LocalePrefs.load().unwrap_or_default();
    let locale = create_rw_signal(initial_locale);

    let runtime = SiteRuntimeContext {
        locale,
        services: store_value(services),
        assets: store_value(AssetCache::new()),
        catalog: store_value(catalog.unwrap_or_else(|| Rc::new(EagerCatalog::built_in()))),
        provider_mode,
    };

    // Persist locale switches, not the boot value.
    create_effect(move |previous: Option<Locale>| {
        let current = locale.get();
        if previous.is_some() && previous != Some(current) {
            if let Err(err) = LocalePrefs.save(current) {
                logging::warn!("locale preference save failed: {err}");
            }
        }
        current
    });

    provide_context(runtime);

    children().into_view()
}

/// Returns the current [`SiteRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`SiteProvider`].
pub fn use_site_runtime() -> SiteRuntimeContext {
    use_context::<SiteRuntimeContext>().expect("SiteRuntimeContext not provided")
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_web::ContactRequest;

    use super::*;

    #[test]
    fn stub_services_accept_contact_submissions() {
        let services = SiteServices::stub();
        let result = block_on(services.contact.submit(&ContactRequest::default()));
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn browser_services_without_endpoint_fall_back_to_noop_contact() {
        let services = SiteServices::browser(None);
        let result = block_on(services.contact.submit(&ContactRequest::default()));
        assert_eq!(result, Ok(()));
    }
}
