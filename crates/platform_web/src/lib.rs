//! Browser (`wasm32`) implementations of the asset-probe, content-fetch, locale
//! preference, and contact-submission contracts.
//!
//! Every adapter carries a twin non-wasm body so the crate compiles and tests on the
//! host: probes find nothing, fetches return no document, preference access is inert,
//! and submissions report the missing browser environment.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod asset_probe;
mod contact;
mod content_fetch;
mod locale_prefs;

pub use asset_probe::WebImageProbe;
pub use contact::{
    ContactRequest, ContactSubmitFuture, ContactSubmitService, NoopContactSubmitService,
    WebContactSubmitService,
};
pub use content_fetch::WebContentFetcher;
pub use locale_prefs::{LocalePrefs, LOCALE_PREF_KEY};
