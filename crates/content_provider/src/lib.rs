//! Localized content-set loading with default-locale fallback.
//!
//! Two modes exist and are never blended. Eager mode embeds every content document at
//! compile time and answers lookups synchronously. Lazy mode fetches documents on demand
//! through an injected [`ContentFetcher`] and falls back to the default locale when the
//! active locale misses. Both preserve source-document order and degrade to empty
//! sequences instead of surfacing errors; the UI layer logs the diagnostics lazy loads
//! report.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod catalog;
mod fetch;

pub use catalog::EagerCatalog;
pub use fetch::{
    content_document_path, load_history_with, load_projects_with, load_records_with,
    ContentFetchFuture, ContentFetcher, LoadOutcome, MemoryContentFetcher, NoopContentFetcher,
};

/// Composition-time choice between the two content-loading designs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderMode {
    /// All documents embedded at compile time; lookups are synchronous.
    #[default]
    Eager,
    /// Documents fetched per (locale, content-set) on demand.
    Lazy,
}

impl ProviderMode {
    /// Stable token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eager => "eager",
            Self::Lazy => "lazy",
        }
    }
}
