use leptos::*;
use leptos_meta::Title;
use leptos_router::A;

use crate::{components::SkillCard, hooks::use_ui_strings};

/// Technologies highlighted on the home page; each resolves its own icon asset.
const SKILL_NAMES: [&str; 8] = [
    "Python",
    "Django",
    "Tailwind",
    "React",
    "Git",
    "PostgreSQL",
    "Docker",
    "AWS",
];

#[component]
pub fn Home() -> impl IntoView {
    let strings = use_ui_strings();

    view! {
        <div class="page page-home">
            <Title text=move || strings.get().nav.home />
            <img
                class="profile-picture"
                src="/assets/profile-picture.webp"
                alt="Profile"
                width="256"
                height="256"
            />
            <div class="home-badges">
                <span class="home-badge">{move || strings.get().skills.fullstack}</span>
                <span class="home-badge">{move || strings.get().skills.leadership}</span>
                <span class="home-badge">{move || strings.get().skills.performance}</span>
            </div>
            <h1 class="home-title">{move || strings.get().intro.title}</h1>
            <p class="home-description">{move || strings.get().intro.description}</p>
            <section class="home-skills">
                <h2>"Skills"</h2>
                <div class="skill-grid">
                    {SKILL_NAMES
                        .iter()
                        .map(|name| view! { <SkillCard name=*name /> })
                        .collect_view()}
                </div>
            </section>
            <div class="home-links">
                <A href="/projects" class="home-link-primary">
                    {move || strings.get().nav.projects}
                </A>
                <A href="/history" class="home-link-secondary">
                    {move || strings.get().nav.history}
                </A>
            </div>
        </div>
    }
}
