use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::{
    components::Navbar,
    pages::{Contact, History, Home, Projects},
    runtime::{SiteProvider, SiteServices},
};

/// Third-party form endpoint baked in at build time; absent in local builds.
const CONTACT_ENDPOINT: Option<&str> = option_env!("SITE_CONTACT_ENDPOINT");

#[component]
pub fn PortfolioApp() -> impl IntoView {
    provide_meta_context();

    let services = SiteServices::browser(CONTACT_ENDPOINT.map(str::to_string));

    view! {
        <Title text="Portfolio" />
        <Meta name="description" content="Personal portfolio: projects, work history, and contact." />

        <SiteProvider services=services>
            <Router>
                <Navbar />
                <main class="site-root">
                    <Routes>
                        <Route path="" view=Home />
                        <Route path="/history" view=History />
                        <Route path="/projects" view=Projects />
                        <Route path="/contact" view=Contact />
                    </Routes>
                </main>
            </Router>
        </SiteProvider>
    }
}
