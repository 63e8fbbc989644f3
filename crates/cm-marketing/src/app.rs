//! Main application component

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::*;
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Clearmetrics - Product Analytics"/>
        <Meta
            name="description"
            content="Clearmetrics is the product analytics platform for teams who want answers, not dashboards to babysit."
        />
        <Router>
            <div class="min-h-screen bg-white">
                <MarketingNav/>
                <main>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/features" view=FeaturesPage/>
                        <Route path="/pricing" view=PricingPage/>
                        <Route path="/signup" view=SignupPage/>
                        <Route path="/privacy" view=PrivacyPage/>
                        <Route path="/terms" view=TermsPage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
