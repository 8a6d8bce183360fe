use content_model::ProjectRecord;
use leptos::*;

use crate::hooks::use_public_asset;

/// Card for one project record. The header image resolves from the project-assets folder
/// by title; link icons appear only for links the record actually carries.
#[component]
pub fn ProjectCard(record: ProjectRecord) -> impl IntoView {
    let title = record.title.clone();
    let image = use_public_asset("/assets/projects/", {
        let title = title.clone();
        Signal::derive(move || title.clone())
    });
    let image_alt = title.clone();

    view! {
        <article class="project-card">
            <div class="project-card-header">
                {move || match image.get() {
                    Some(src) => view! {
                        <img class="project-card-image" src=src alt=image_alt.clone() />
                    }
                        .into_view(),
                    None => view! {
                        <span class="project-card-placeholder" aria-hidden="true"></span>
                    }
                        .into_view(),
                }}
            </div>
            <div class="project-card-body">
                <div class="project-card-title-row">
                    <h3 class="project-card-title">{title}</h3>
                    <div class="project-card-links">
                        {record.github_url.clone().map(|url| view! {
                            <a
                                class="project-card-link"
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                                title="View Code"
                            >
                                "Code"
                            </a>
                        })}
                        {record.live_url.clone().map(|url| view! {
                            <a
                                class="project-card-link"
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                                title="Live Demo"
                            >
                                "Live"
                            </a>
                        })}
                    </div>
                </div>
                <p class="project-card-description">{record.description.clone()}</p>
                <div class="project-card-tags">
                    {record
                        .tags
                        .iter()
                        .map(|tag| view! { <span class="project-tag">{tag.clone()}</span> })
                        .collect_view()}
                </div>
            </div>
        </article>
    }
}
