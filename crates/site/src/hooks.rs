//! Reactive wrappers over the asset resolver and the content provider.

use std::{cell::Cell, rc::Rc};

use asset_resolver::{resolve_asset, AssetRequest};
use content_model::{HistoryEntry, ProjectRecord, UiStrings};
use content_provider::{load_history_with, load_projects_with, ProviderMode};
use leptos::*;

use crate::runtime::use_site_runtime;

/// Resolves a public image asset for `logical_name` under `base_path` with the default
/// extension order. The returned signal starts as `None` and transitions at most once
/// per name to the resolved path; exhaustion leaves it `None` and the caller renders a
/// placeholder.
pub fn use_public_asset(
    base_path: &'static str,
    logical_name: Signal<String>,
) -> ReadSignal<Option<String>> {
    use_public_asset_with_extensions(base_path, logical_name, None)
}

/// [`use_public_asset`] with a caller-supplied extension trial order.
pub fn use_public_asset_with_extensions(
    base_path: &'static str,
    logical_name: Signal<String>,
    extensions: Option<Vec<String>>,
) -> ReadSignal<Option<String>> {
    let runtime = use_site_runtime();
    let (resolved, set_resolved) = create_signal(None::<String>);

    // A resolution settles after the view that asked for it may be gone, and a name
    // change mid-flight starts a fresh resolution. The liveness flag drops completions
    // after teardown; the generation counter drops completions of superseded requests.
    let alive = Rc::new(Cell::new(true));
    let generation = Rc::new(Cell::new(0u64));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.set(false));
    }

    create_effect(move |_| {
        let name = logical_name.get();
        set_resolved.set(None);
        generation.set(generation.get() + 1);
        let request_generation = generation.get();

        let request = match &extensions {
            Some(extensions) => {
                AssetRequest::with_extensions(base_path, name, extensions.clone())
            }
            None => AssetRequest::new(base_path, name),
        };
        let services = runtime.services.get_value();
        let cache = runtime.assets.get_value();
        let alive = alive.clone();
        let generation = generation.clone();
        spawn_local(async move {
            let path = resolve_asset(services.asset_probe.as_ref(), &cache, &request).await;
            if !alive.get() || generation.get() != request_generation {
                return;
            }
            if let Some(path) = path {
                set_resolved.set(Some(path));
            }
        });
    });

    resolved
}

/// Localized project records for the active locale, in document order.
pub fn use_projects() -> Signal<Vec<ProjectRecord>> {
    let runtime = use_site_runtime();
    match runtime.provider_mode {
        ProviderMode::Eager => {
            let catalog = runtime.catalog.get_value();
            Signal::derive(move || catalog.projects(runtime.locale.get()).to_vec())
        }
        ProviderMode::Lazy => {
            let (records, set_records) = create_signal(Vec::new());
            lazy_load(move |generation, current| {
                let locale = runtime.locale.get();
                let services = runtime.services.get_value();
                spawn_local(async move {
                    let outcome =
                        load_projects_with(services.content_fetcher.as_ref(), locale).await;
                    if generation.get() != current {
                        return;
                    }
                    if let Some(diagnostic) = &outcome.diagnostic {
                        logging::warn!("{diagnostic}");
                    }
                    set_records.set(outcome.records);
                });
            });
            records.into()
        }
    }
}

/// Localized history entries for the active locale, in document order.
pub fn use_history() -> Signal<Vec<HistoryEntry>> {
    let runtime = use_site_runtime();
    match runtime.provider_mode {
        ProviderMode::Eager => {
            let catalog = runtime.catalog.get_value();
            Signal::derive(move || catalog.history(runtime.locale.get()).to_vec())
        }
        ProviderMode::Lazy => {
            let (records, set_records) = create_signal(Vec::new());
            lazy_load(move |generation, current| {
                let locale = runtime.locale.get();
                let services = runtime.services.get_value();
                spawn_local(async move {
                    let outcome =
                        load_history_with(services.content_fetcher.as_ref(), locale).await;
                    if generation.get() != current {
                        return;
                    }
                    if let Some(diagnostic) = &outcome.diagnostic {
                        logging::warn!("{diagnostic}");
                    }
                    set_records.set(outcome.records);
                });
            });
            records.into()
        }
    }
}

/// Localized UI strings for the active locale. Strings come from the embedded catalog in
/// both provider modes; only record content-sets go through the lazy fetch path.
pub fn use_ui_strings() -> Signal<UiStrings> {
    let runtime = use_site_runtime();
    let catalog = runtime.catalog.get_value();
    let strings = create_memo(move |_| catalog.ui_strings(runtime.locale.get()));
    strings.into()
}

/// Re-runs `start` whenever its tracked signals change, handing it a generation counter
/// and the generation that the started load belongs to. Cleanup bumps the counter one
/// last time, so completions arriving after teardown fail the generation check too.
fn lazy_load(start: impl Fn(Rc<Cell<u64>>, u64) + 'static) {
    let generation = Rc::new(Cell::new(0u64));
    {
        let generation = generation.clone();
        on_cleanup(move || generation.set(generation.get() + 1));
    }
    create_effect(move |_| {
        generation.set(generation.get() + 1);
        start(generation.clone(), generation.get());
    });
}
