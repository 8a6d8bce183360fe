//! Compile-time embedded content catalog (eager mode).

use std::collections::HashMap;

use content_model::{ids_are_unique, HistoryEntry, Locale, ProjectRecord, UiStrings};

const EN_PROJECTS_JSON: &str = include_str!("../content/en/projects.json");
const EN_HISTORY_JSON: &str = include_str!("../content/en/history.json");
const EN_COMMON_JSON: &str = include_str!("../content/en/common.json");
const CN_PROJECTS_JSON: &str = include_str!("../content/cn/projects.json");
const CN_COMMON_JSON: &str = include_str!("../content/cn/common.json");
const JP_COMMON_JSON: &str = include_str!("../content/jp/common.json");

/// Two-level lookup of locale → content-set → records, loaded once at construction.
///
/// Lookups are pure and synchronous. A locale missing a content-set falls back to the
/// default locale; the default locale embeds every content-set, which the constructor
/// enforces. Malformed embedded JSON is a build defect and panics at startup, matching
/// the generated-catalog handling elsewhere in the workspace lineage.
#[derive(Debug, Clone, Default)]
pub struct EagerCatalog {
    projects: HashMap<Locale, Vec<ProjectRecord>>,
    history: HashMap<Locale, Vec<HistoryEntry>>,
    strings: HashMap<Locale, UiStrings>,
}

impl EagerCatalog {
    /// Builds the catalog from the embedded content documents.
    ///
    /// # Panics
    ///
    /// Panics when an embedded document is malformed, duplicates a record id, or the
    /// default locale is missing a content-set. All three are authoring defects caught
    /// the first time the app (or any test) constructs the catalog.
    pub fn built_in() -> Self {
        let mut catalog = Self::default();
        catalog.insert_projects(
            Locale::En,
            parse_document(EN_PROJECTS_JSON, "en/projects"),
        );
        catalog.insert_history(Locale::En, parse_document(EN_HISTORY_JSON, "en/history"));
        catalog.insert_strings(Locale::En, parse_document(EN_COMMON_JSON, "en/common"));
        catalog.insert_projects(
            Locale::Cn,
            parse_document(CN_PROJECTS_JSON, "cn/projects"),
        );
        catalog.insert_strings(Locale::Cn, parse_document(CN_COMMON_JSON, "cn/common"));
        catalog.insert_strings(Locale::Jp, parse_document(JP_COMMON_JSON, "jp/common"));

        assert!(
            catalog.projects.contains_key(&Locale::default())
                && catalog.history.contains_key(&Locale::default())
                && catalog.strings.contains_key(&Locale::default()),
            "default locale must embed every content-set"
        );
        catalog
    }

    /// Creates an empty catalog for tests that seed their own documents.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Seeds the projects content-set for one locale.
    pub fn insert_projects(&mut self, locale: Locale, records: Vec<ProjectRecord>) {
        debug_assert!(
            ids_are_unique(&records, |record| &record.id),
            "duplicate project id in {locale} document"
        );
        self.projects.insert(locale, records);
    }

    /// Seeds the history content-set for one locale.
    pub fn insert_history(&mut self, locale: Locale, entries: Vec<HistoryEntry>) {
        debug_assert!(
            ids_are_unique(&entries, |entry| &entry.id),
            "duplicate history id in {locale} document"
        );
        self.history.insert(locale, entries);
    }

    /// Seeds the common-strings content-set for one locale.
    pub fn insert_strings(&mut self, locale: Locale, strings: UiStrings) {
        self.strings.insert(locale, strings);
    }

    /// Project records for `locale`, in document order, with default-locale fallback.
    pub fn projects(&self, locale: Locale) -> &[ProjectRecord] {
        lookup_with_fallback(&self.projects, locale)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// History entries for `locale`, in document order, with default-locale fallback.
    pub fn history(&self, locale: Locale) -> &[HistoryEntry] {
        lookup_with_fallback(&self.history, locale)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// UI strings for `locale`, falling back to the default locale and finally to the
    /// built-in English defaults.
    pub fn ui_strings(&self, locale: Locale) -> UiStrings {
        lookup_with_fallback(&self.strings, locale)
            .cloned()
            .unwrap_or_default()
    }
}

fn lookup_with_fallback<T>(map: &HashMap<Locale, T>, locale: Locale) -> Option<&T> {
    map.get(&locale).or_else(|| map.get(&Locale::default()))
}

fn parse_document<T: serde::de::DeserializeOwned>(raw: &str, label: &str) -> T {
    serde_json::from_str(raw)
        .unwrap_or_else(|err| panic!("embedded content document {label} should parse: {err}"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn built_in_catalog_parses_and_is_complete_for_default_locale() {
        let catalog = EagerCatalog::built_in();
        assert!(!catalog.projects(Locale::En).is_empty());
        assert!(!catalog.history(Locale::En).is_empty());
        assert_ne!(catalog.ui_strings(Locale::En).nav.home, "");
    }

    #[test]
    fn built_in_record_ids_are_unique_per_content_set() {
        let catalog = EagerCatalog::built_in();
        for locale in Locale::ALL {
            assert!(ids_are_unique(catalog.projects(locale), |r| &r.id));
            assert!(ids_are_unique(catalog.history(locale), |e| &e.id));
        }
    }

    #[test]
    fn missing_content_set_falls_back_to_default_locale_element_for_element() {
        let catalog = EagerCatalog::built_in();
        // jp embeds no history document.
        assert_eq!(catalog.history(Locale::Jp), catalog.history(Locale::En));
    }

    #[test]
    fn locale_with_own_document_does_not_fall_back() {
        let catalog = EagerCatalog::built_in();
        let cn = catalog.projects(Locale::Cn);
        let en = catalog.projects(Locale::En);
        assert_eq!(cn.len(), en.len());
        assert_ne!(cn[0].description, en[0].description);
        // Ids line up across translations of the same document.
        assert_eq!(cn[0].id, en[0].id);
    }

    #[test]
    fn empty_catalog_returns_empty_sequences_not_errors() {
        let catalog = EagerCatalog::empty();
        assert!(catalog.projects(Locale::En).is_empty());
        assert!(catalog.history(Locale::Cn).is_empty());
        assert_eq!(catalog.ui_strings(Locale::Jp), UiStrings::default());
    }

    #[test]
    fn document_order_is_preserved() {
        let catalog = EagerCatalog::built_in();
        let ids: Vec<&str> = catalog
            .projects(Locale::En)
            .iter()
            .map(|record| record.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec![
                "proj-fleet-console",
                "proj-billing-revamp",
                "proj-trailhead",
                "proj-pixelsort"
            ]
        );
    }
}
