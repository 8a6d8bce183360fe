use content_model::HistoryEntry;
use leptos::*;

use crate::hooks::{use_public_asset, use_ui_strings};

/// One timeline entry. Work entries list notable projects and contributions; education
/// entries carry free-text additional activities. Entries without a logo skip asset
/// resolution entirely via the resolver's empty-name short circuit.
#[component]
pub fn TimelineItem(entry: HistoryEntry) -> impl IntoView {
    let strings = use_ui_strings();

    let logo_name = entry.logo.clone().unwrap_or_default();
    let logo = use_public_asset(
        "/assets/companies/",
        Signal::derive(move || logo_name.clone()),
    );
    let logo_alt = format!("{} logo", entry.organization);

    let kind_token = if entry.is_work() { "work" } else { "education" };
    let project_items = entry.projects.clone().into_iter().filter(|_| entry.is_work());
    let contribution_items = entry
        .contributions
        .clone()
        .into_iter()
        .filter(|_| entry.is_work());
    let additional_info = entry.additional_info.clone().filter(|_| entry.is_education());

    let projects_section = {
        let items: Vec<String> = project_items.collect();
        (!items.is_empty()).then(|| {
            view! {
                <section class="timeline-item-section">
                    <h4>{move || strings.get().timeline.notable_projects}</h4>
                    <ul>
                        {items
                            .into_iter()
                            .map(|item| view! { <li>{item}</li> })
                            .collect_view()}
                    </ul>
                </section>
            }
        })
    };
    let contributions_section = {
        let items: Vec<String> = contribution_items.collect();
        (!items.is_empty()).then(|| {
            view! {
                <section class="timeline-item-section">
                    <h4>{move || strings.get().timeline.notable_contributions}</h4>
                    <ul>
                        {items
                            .into_iter()
                            .map(|item| view! { <li>{item}</li> })
                            .collect_view()}
                    </ul>
                </section>
            }
        })
    };
    let additional_section = additional_info.map(|info| {
        view! {
            <section class="timeline-item-section">
                <h4>{move || strings.get().timeline.additional_activities}</h4>
                <p>{info}</p>
            </section>
        }
    });

    view! {
        <article class="timeline-item" data-kind=kind_token>
            <header class="timeline-item-header">
                <h3 class="timeline-item-title">
                    {entry.title.clone()}
                    " "
                    <span class="timeline-item-year">"(" {entry.year.clone()} ")"</span>
                </h3>
                <div class="timeline-item-organization">{entry.organization.clone()}</div>
            </header>
            <div class="timeline-item-main">
                <div class="timeline-item-logo">
                    {move || match logo.get() {
                        Some(src) => view! {
                            <img src=src alt=logo_alt.clone() width="64" height="64" />
                        }
                            .into_view(),
                        None => view! {
                            <span class="timeline-item-logo-placeholder" aria-hidden="true"></span>
                        }
                            .into_view(),
                    }}
                </div>
                <p class="timeline-item-description">{entry.description.clone()}</p>
            </div>
            {projects_section}
            {contributions_section}
            {additional_section}
        </article>
    }
}
