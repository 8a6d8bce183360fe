use content_model::ProjectRecord;
use leptos::*;
use leptos_meta::Title;

use crate::{
    components::ProjectCard,
    hooks::{use_projects, use_ui_strings},
};

/// Splits records into (professional, side) groups, each preserving document order.
pub(crate) fn partition_projects(
    records: &[ProjectRecord],
) -> (Vec<ProjectRecord>, Vec<ProjectRecord>) {
    records
        .iter()
        .cloned()
        .partition(|record| record.is_professional)
}

#[component]
pub fn Projects() -> impl IntoView {
    let strings = use_ui_strings();
    let records = use_projects();

    let professional = create_memo(move |_| partition_projects(&records.get()).0);
    let side = create_memo(move |_| partition_projects(&records.get()).1);

    view! {
        <div class="page page-projects">
            <Title text=move || strings.get().nav.projects />
            <h1 class="page-title">{move || strings.get().nav.projects}</h1>
            <section class="projects-section projects-professional">
                <h2>{move || strings.get().projects.professional}</h2>
                <div class="project-grid">
                    <For
                        each=move || professional.get()
                        key=|record| record.id.clone()
                        children=|record| view! { <ProjectCard record=record /> }
                    />
                </div>
            </section>
            <section class="projects-section projects-side">
                <h2>{move || strings.get().projects.side}</h2>
                <div class="project-grid">
                    <For
                        each=move || side.get()
                        key=|record| record.id.clone()
                        children=|record| view! { <ProjectCard record=record /> }
                    />
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn record(id: &str, is_professional: bool) -> ProjectRecord {
        ProjectRecord {
            id: id.to_string(),
            title: "Title".to_string(),
            description: "Desc".to_string(),
            tags: Vec::new(),
            github_url: None,
            live_url: None,
            is_professional,
        }
    }

    #[test]
    fn partition_keeps_document_order_within_each_group() {
        let records = vec![
            record("a", true),
            record("b", false),
            record("c", true),
            record("d", false),
        ];

        let (professional, side) = partition_projects(&records);

        let professional_ids: Vec<&str> = professional.iter().map(|r| r.id.as_str()).collect();
        let side_ids: Vec<&str> = side.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(professional_ids, vec!["a", "c"]);
        assert_eq!(side_ids, vec!["b", "d"]);
    }
}
