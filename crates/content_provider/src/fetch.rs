//! On-demand content fetching with default-locale fallback (lazy mode).

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    future::Future,
    pin::Pin,
    rc::Rc,
};

use content_model::{HistoryEntry, Locale, ProjectRecord, CONTENT_SET_HISTORY, CONTENT_SET_PROJECTS};
use serde::de::DeserializeOwned;

/// Object-safe boxed future used by [`ContentFetcher`] implementations.
pub type ContentFetchFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Fetches one raw content document by (locale, content-set).
///
/// `Ok(None)` means the document does not exist for that locale; `Err` is a transport or
/// server failure. The browser adapter lives in `platform_web`.
pub trait ContentFetcher {
    /// Fetches the raw JSON document for `locale` and `content_set`.
    fn fetch_document<'a>(
        &'a self,
        locale: Locale,
        content_set: &'a str,
    ) -> ContentFetchFuture<'a, Result<Option<String>, String>>;
}

/// Serving-path convention for content documents.
pub fn content_document_path(locale: Locale, content_set: &str) -> String {
    format!("/content/{locale}/{content_set}.json")
}

/// Fetcher adapter with no documents, for unsupported targets and baseline tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopContentFetcher;

impl ContentFetcher for NoopContentFetcher {
    fn fetch_document<'a>(
        &'a self,
        _locale: Locale,
        _content_set: &'a str,
    ) -> ContentFetchFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }
}

/// In-memory fetcher adapter seeded by tests, counting fetches per invocation.
#[derive(Debug, Clone, Default)]
pub struct MemoryContentFetcher {
    documents: Rc<RefCell<HashMap<(Locale, String), String>>>,
    failures: Rc<RefCell<HashMap<(Locale, String), String>>>,
    fetch_count: Rc<Cell<usize>>,
}

impl MemoryContentFetcher {
    /// Seeds a raw document for one (locale, content-set) pair.
    pub fn insert_document(&self, locale: Locale, content_set: &str, raw: &str) {
        self.documents
            .borrow_mut()
            .insert((locale, content_set.to_string()), raw.to_string());
    }

    /// Makes fetches for one (locale, content-set) pair fail with `message`.
    pub fn fail_with(&self, locale: Locale, content_set: &str, message: &str) {
        self.failures
            .borrow_mut()
            .insert((locale, content_set.to_string()), message.to_string());
    }

    /// Number of fetches issued so far.
    pub fn fetch_count(&self) -> usize {
        self.fetch_count.get()
    }
}

impl ContentFetcher for MemoryContentFetcher {
    fn fetch_document<'a>(
        &'a self,
        locale: Locale,
        content_set: &'a str,
    ) -> ContentFetchFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move {
            self.fetch_count.set(self.fetch_count.get() + 1);
            let key = (locale, content_set.to_string());
            if let Some(message) = self.failures.borrow().get(&key) {
                return Err(message.clone());
            }
            Ok(self.documents.borrow().get(&key).cloned())
        })
    }
}

/// Result of a lazy load: the records (possibly from the fallback locale, possibly
/// empty) plus an optional diagnostic for the UI layer to log. Failures never propagate
/// as errors; the caller always gets a renderable sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome<T> {
    /// Loaded records in document order; empty when every attempt missed.
    pub records: Vec<T>,
    /// Human-readable description of what went wrong, when anything did.
    pub diagnostic: Option<String>,
}

impl<T> LoadOutcome<T> {
    fn ok(records: Vec<T>) -> Self {
        Self {
            records,
            diagnostic: None,
        }
    }

    fn degraded(records: Vec<T>, diagnostic: String) -> Self {
        Self {
            records,
            diagnostic: Some(diagnostic),
        }
    }
}

/// Loads the projects content-set for `locale` with default-locale fallback.
pub async fn load_projects_with<F>(fetcher: &F, locale: Locale) -> LoadOutcome<ProjectRecord>
where
    F: ContentFetcher + ?Sized,
{
    load_records_with(fetcher, locale, CONTENT_SET_PROJECTS).await
}

/// Loads the history content-set for `locale` with default-locale fallback.
pub async fn load_history_with<F>(fetcher: &F, locale: Locale) -> LoadOutcome<HistoryEntry>
where
    F: ContentFetcher + ?Sized,
{
    load_records_with(fetcher, locale, CONTENT_SET_HISTORY).await
}

/// Loads one record-sequence content-set: active locale first, then the default locale,
/// then an empty sequence. A document that exists but fails to parse counts as a failed
/// attempt, the same as a transport error.
pub async fn load_records_with<F, T>(
    fetcher: &F,
    locale: Locale,
    content_set: &str,
) -> LoadOutcome<T>
where
    F: ContentFetcher + ?Sized,
    T: DeserializeOwned,
{
    let primary = match attempt(fetcher, locale, content_set).await {
        Ok(records) => return LoadOutcome::ok(records),
        Err(diagnostic) => diagnostic,
    };

    if locale == Locale::default() {
        return LoadOutcome::degraded(Vec::new(), primary);
    }

    match attempt(fetcher, Locale::default(), content_set).await {
        Ok(records) => LoadOutcome::degraded(records, primary),
        Err(fallback) => LoadOutcome::degraded(Vec::new(), format!("{primary}; {fallback}")),
    }
}

async fn attempt<F, T>(fetcher: &F, locale: Locale, content_set: &str) -> Result<Vec<T>, String>
where
    F: ContentFetcher + ?Sized,
    T: DeserializeOwned,
{
    let raw = fetcher
        .fetch_document(locale, content_set)
        .await
        .map_err(|err| format!("content load failed for {content_set} ({locale}): {err}"))?
        .ok_or_else(|| format!("content-set {content_set} missing for {locale}"))?;
    serde_json::from_str(&raw)
        .map_err(|err| format!("content-set {content_set} malformed for {locale}: {err}"))
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    const PROJECTS_DOC: &str = r#"[
        {"id": "p-1", "title": "One", "description": "first"},
        {"id": "p-2", "title": "Two", "description": "second"}
    ]"#;

    #[test]
    fn document_path_follows_the_serving_convention() {
        assert_eq!(
            content_document_path(Locale::Jp, CONTENT_SET_HISTORY),
            "/content/jp/history.json"
        );
    }

    #[test]
    fn active_locale_document_loads_without_fallback_fetch() {
        let fetcher = MemoryContentFetcher::default();
        fetcher.insert_document(Locale::Cn, CONTENT_SET_PROJECTS, PROJECTS_DOC);

        let outcome = block_on(load_projects_with(&fetcher, Locale::Cn));
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.records[0].id, "p-1");
        assert_eq!(outcome.diagnostic, None);
        assert_eq!(fetcher.fetch_count(), 1);
    }

    #[test]
    fn missing_locale_document_falls_back_to_default_locale() {
        let fetcher = MemoryContentFetcher::default();
        fetcher.insert_document(Locale::En, CONTENT_SET_PROJECTS, PROJECTS_DOC);

        let outcome = block_on(load_projects_with(&fetcher, Locale::Jp));
        assert_eq!(outcome.records.len(), 2);
        assert!(outcome
            .diagnostic
            .as_deref()
            .is_some_and(|d| d.contains("missing for jp")));
        assert_eq!(fetcher.fetch_count(), 2);
    }

    #[test]
    fn transport_failure_falls_back_and_reports_a_diagnostic() {
        let fetcher = MemoryContentFetcher::default();
        fetcher.fail_with(Locale::Cn, CONTENT_SET_HISTORY, "http 500");
        fetcher.insert_document(
            Locale::En,
            CONTENT_SET_HISTORY,
            r#"[{"id": "w-1", "type": "work", "year": "2020", "title": "Dev",
                 "company": "Acme", "description": "d"}]"#,
        );

        let outcome = block_on(load_history_with(&fetcher, Locale::Cn));
        assert_eq!(outcome.records.len(), 1);
        assert!(outcome
            .diagnostic
            .as_deref()
            .is_some_and(|d| d.contains("http 500")));
    }

    #[test]
    fn double_miss_yields_empty_records_never_an_error() {
        let fetcher = NoopContentFetcher;
        let outcome = block_on(load_projects_with(&fetcher, Locale::Jp));
        assert!(outcome.records.is_empty());
        assert!(outcome.diagnostic.is_some());
    }

    #[test]
    fn default_locale_miss_does_not_fetch_twice() {
        let fetcher = MemoryContentFetcher::default();
        let outcome: LoadOutcome<ProjectRecord> =
            block_on(load_records_with(&fetcher, Locale::En, "unknown-set"));
        assert!(outcome.records.is_empty());
        assert_eq!(fetcher.fetch_count(), 1);
    }

    #[test]
    fn malformed_active_document_falls_back_to_default() {
        let fetcher = MemoryContentFetcher::default();
        fetcher.insert_document(Locale::Cn, CONTENT_SET_PROJECTS, "{not json");
        fetcher.insert_document(Locale::En, CONTENT_SET_PROJECTS, PROJECTS_DOC);

        let outcome = block_on(load_projects_with(&fetcher, Locale::Cn));
        assert_eq!(outcome.records.len(), 2);
        assert!(outcome
            .diagnostic
            .as_deref()
            .is_some_and(|d| d.contains("malformed")));
    }

    #[test]
    fn record_order_matches_the_document() {
        let fetcher = MemoryContentFetcher::default();
        fetcher.insert_document(Locale::En, CONTENT_SET_PROJECTS, PROJECTS_DOC);
        let outcome = block_on(load_projects_with(&fetcher, Locale::En));
        let ids: Vec<&str> = outcome.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["p-1", "p-2"]);
    }
}
