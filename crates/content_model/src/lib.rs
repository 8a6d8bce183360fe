//! Typed content-domain contracts shared by the catalog, provider, and site layers.
//!
//! This crate is the API-first boundary for localized portfolio content. It owns the
//! closed locale set, the record shapes for each content-set, and the localized UI
//! string bundle, while loading and presentation live in `content_provider` and `site`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod history;
mod locale;
mod project;
mod strings;

pub use history::{HistoryEntry, HistoryKind};
pub use locale::Locale;
pub use project::ProjectRecord;
pub use strings::{
    ContactStrings, HistoryStrings, IntroStrings, NavStrings, ProjectsStrings, SkillStrings,
    TimelineStrings, UiStrings,
};

/// Content-set name for the localized project cards.
pub const CONTENT_SET_PROJECTS: &str = "projects";
/// Content-set name for the localized work/education timeline.
pub const CONTENT_SET_HISTORY: &str = "history";
/// Content-set name for the localized UI string bundle.
pub const CONTENT_SET_COMMON: &str = "common";

/// Returns whether every record id produced by `id_of` is unique within `items`.
///
/// Content documents are authored by hand; the eager catalog and the content tests use
/// this to catch duplicated ids before they reach rendering keys.
pub fn ids_are_unique<T>(items: &[T], id_of: impl Fn(&T) -> &str) -> bool {
    let mut seen = std::collections::HashSet::new();
    items.iter().all(|item| seen.insert(id_of(item)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_ids_accepts_distinct_and_rejects_duplicates() {
        let distinct = ["a".to_string(), "b".to_string()];
        assert!(ids_are_unique(&distinct, |id| id));

        let duplicated = ["a".to_string(), "a".to_string()];
        assert!(!ids_are_unique(&duplicated, |id| id));
    }
}
