use leptos::*;

use crate::hooks::use_public_asset;

/// Badge for one technology. The icon comes from the skill-assets folder when a matching
/// file exists; otherwise a neutral glyph stands in.
#[component]
pub fn SkillCard(#[prop(into)] name: String) -> impl IntoView {
    let logical = name.clone();
    let icon = use_public_asset(
        "/assets/skills/",
        Signal::derive(move || logical.clone()),
    );
    let alt = name.clone();

    view! {
        <div class="skill-card">
            {move || match icon.get() {
                Some(src) => view! {
                    <img class="skill-card-icon" src=src alt=alt.clone() width="48" height="48" />
                }
                    .into_view(),
                None => view! {
                    <span class="skill-card-icon skill-card-placeholder" aria-hidden="true">
                        "{ }"
                    </span>
                }
                    .into_view(),
            }}
            <span class="skill-card-name">{name}</span>
        </div>
    }
}
