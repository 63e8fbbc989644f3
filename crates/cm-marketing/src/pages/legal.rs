//! Legal pages: privacy policy and terms of service

use leptos::*;
use leptos_meta::*;

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <div>
            <Title text="Privacy Policy - Clearmetrics"/>
            <Meta name="description" content="How Clearmetrics collects, stores, and deletes data."/>

            <section class="bg-gray-900 text-white py-16">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center">
                        <h1 class="text-4xl font-bold mb-4">"Privacy Policy"</h1>
                        <p class="text-gray-300">"Last updated: August 2026"</p>
                    </div>
                </div>
            </section>

            <section class="py-16 bg-white">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto space-y-10">
                        <LegalSection title="What We Collect">
                            "We collect the account details you give us at signup (name, work email, "
                            "company) and the product events your integrations send to your workspace. "
                            "Event data belongs to your workspace; we process it only to provide the "
                            "analytics you configure."
                        </LegalSection>
                        <LegalSection title="Where Data Lives">
                            "Your workspace is pinned to the region you choose at creation (EU or US). "
                            "Event data is stored and queried in that region and is not replicated "
                            "across regions."
                        </LegalSection>
                        <LegalSection title="How Long We Keep It">
                            "Event data is retained for the window your plan defines. When a retention "
                            "window lapses or a workspace is deleted, the underlying data is purged "
                            "from primary storage within 24 hours and from backups within 30 days."
                        </LegalSection>
                        <LegalSection title="Deletion Requests">
                            "User-level deletion requests, whether made in the dashboard or via the "
                            "API, propagate to all derived tables within 24 hours. We do not require "
                            "support tickets for deletion."
                        </LegalSection>
                        <LegalSection title="Subprocessors">
                            "We use a small set of infrastructure subprocessors, listed with their "
                            "regions at clearmetrics.io/subprocessors. We notify workspace owners "
                            "30 days before adding one."
                        </LegalSection>
                        <LegalSection title="Contact">
                            "Questions about this policy go to privacy@clearmetrics.io."
                        </LegalSection>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <div>
            <Title text="Terms of Service - Clearmetrics"/>
            <Meta name="description" content="The terms that govern use of the Clearmetrics platform."/>

            <section class="bg-gray-900 text-white py-16">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center">
                        <h1 class="text-4xl font-bold mb-4">"Terms of Service"</h1>
                        <p class="text-gray-300">"Last updated: August 2026"</p>
                    </div>
                </div>
            </section>

            <section class="py-16 bg-white">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto space-y-10">
                        <LegalSection title="The Service">
                            "Clearmetrics provides hosted product analytics: event ingestion, storage, "
                            "querying, and alerting, as described on the features page and your order "
                            "form. We may improve the service continuously; we will not materially "
                            "reduce its functionality during a paid term."
                        </LegalSection>
                        <LegalSection title="Your Data">
                            "You retain all rights to the event data you send us. You grant us the "
                            "rights needed to operate the service on that data. You are responsible "
                            "for having a lawful basis to collect the events you track."
                        </LegalSection>
                        <LegalSection title="Acceptable Use">
                            "No tracking of individuals without a lawful basis, no attempts to "
                            "re-identify anonymized records, and no use of the service to build a "
                            "competing product. We may suspend workspaces that endanger the platform."
                        </LegalSection>
                        <LegalSection title="Billing">
                            "Plans bill monthly in advance. Event overage bills in arrears at the "
                            "rate on your plan. You can cancel any time; paid terms run to the end "
                            "of the billing period."
                        </LegalSection>
                        <LegalSection title="Liability">
                            "The service is provided as-is during trials. For paid plans, our "
                            "aggregate liability is capped at the fees you paid in the preceding "
                            "twelve months."
                        </LegalSection>
                        <LegalSection title="Contact">
                            "Questions about these terms go to legal@clearmetrics.io."
                        </LegalSection>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
fn LegalSection(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div>
            <h2 class="text-2xl font-bold text-gray-900 mb-3">{title}</h2>
            <p class="text-gray-600 leading-relaxed">{children()}</p>
        </div>
    }
}
