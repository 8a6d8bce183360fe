use content_model::{HistoryEntry, HistoryKind};
use leptos::*;
use leptos_meta::Title;

use crate::{
    components::TimelineItem,
    hooks::{use_history, use_ui_strings},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HistoryTab {
    Work,
    Education,
}

impl HistoryTab {
    fn kind(self) -> HistoryKind {
        match self {
            Self::Work => HistoryKind::Work,
            Self::Education => HistoryKind::Education,
        }
    }
}

/// Entries for one tab, preserving document order.
pub(crate) fn entries_for_tab(entries: &[HistoryEntry], tab: HistoryTab) -> Vec<HistoryEntry> {
    entries
        .iter()
        .filter(|entry| entry.kind == tab.kind())
        .cloned()
        .collect()
}

#[component]
pub fn History() -> impl IntoView {
    let strings = use_ui_strings();
    let entries = use_history();
    let active_tab = create_rw_signal(HistoryTab::Work);

    let visible = create_memo(move |_| entries_for_tab(&entries.get(), active_tab.get()));

    view! {
        <div class="page page-history">
            <Title text=move || strings.get().nav.history />
            <h1 class="page-title">{move || strings.get().nav.history}</h1>
            <div class="history-tabs" role="tablist">
                <button
                    type="button"
                    role="tab"
                    class="history-tab"
                    class:active=move || active_tab.get() == HistoryTab::Work
                    on:click=move |_| active_tab.set(HistoryTab::Work)
                >
                    {move || strings.get().history.work_experience}
                </button>
                <button
                    type="button"
                    role="tab"
                    class="history-tab"
                    class:active=move || active_tab.get() == HistoryTab::Education
                    on:click=move |_| active_tab.set(HistoryTab::Education)
                >
                    {move || strings.get().history.education}
                </button>
            </div>
            <div class="history-entries">
                <For
                    each=move || visible.get()
                    key=|entry| entry.id.clone()
                    children=|entry| view! { <TimelineItem entry=entry /> }
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(id: &str, kind: HistoryKind) -> HistoryEntry {
        HistoryEntry {
            id: id.to_string(),
            kind,
            year: "2020".to_string(),
            title: "Title".to_string(),
            organization: "Org".to_string(),
            logo: None,
            description: "Desc".to_string(),
            projects: Vec::new(),
            contributions: Vec::new(),
            additional_info: None,
        }
    }

    #[test]
    fn tabs_split_entries_by_kind_preserving_order() {
        let entries = vec![
            entry("w-1", HistoryKind::Work),
            entry("e-1", HistoryKind::Education),
            entry("w-2", HistoryKind::Work),
        ];

        let work = entries_for_tab(&entries, HistoryTab::Work);
        let education = entries_for_tab(&entries, HistoryTab::Education);

        let work_ids: Vec<&str> = work.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(work_ids, vec!["w-1", "w-2"]);
        assert_eq!(education.len(), 1);
        assert_eq!(education[0].id, "e-1");
    }

    #[test]
    fn empty_input_yields_empty_tabs() {
        assert!(entries_for_tab(&[], HistoryTab::Work).is_empty());
        assert!(entries_for_tab(&[], HistoryTab::Education).is_empty());
    }
}
