//! Registration page

use leptos::*;
use leptos_meta::*;

use crate::components::FeatureHighlight;

#[component]
pub fn SignupPage() -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (company, set_company) = create_signal(String::new());
    let (team_size, set_team_size) = create_signal(String::from("1-10"));
    let (password, set_password) = create_signal(String::new());
    let (plan, set_plan) = create_signal(String::from("growth"));
    let (submitted, set_submitted) = create_signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // In production, this posts to the signup API
        set_submitted.set(true);
    };

    view! {
        <div>
            <Title text="Start Your Free Trial - Clearmetrics"/>
            <Meta
                name="description"
                content="Create a Clearmetrics workspace. 14 days on full features, no card required."
            />

            // Hero
            <section class="bg-gradient-to-br from-gray-900 to-gray-800 text-white py-20">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center">
                        <h1 class="text-4xl md:text-5xl font-bold mb-6">"Start Your Free Trial"</h1>
                        <p class="text-xl text-gray-300">
                            "14 days on full features. No card required."
                        </p>
                    </div>
                </div>
            </section>

            // Registration Form
            <section class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="grid md:grid-cols-2 gap-12 max-w-5xl mx-auto">
                        // Form
                        <div class="bg-white rounded-xl shadow-lg p-8">
                            <Show
                                when=move || !submitted.get()
                                fallback=move || view! {
                                    <div class="text-center py-12">
                                        <div class="text-5xl mb-4">"✓"</div>
                                        <h3 class="text-2xl font-bold text-gray-900 mb-2">"Check Your Inbox!"</h3>
                                        <p class="text-gray-600">"We've sent a link to finish setting up your workspace."</p>
                                    </div>
                                }
                            >
                                <form on:submit=on_submit class="space-y-6">
                                    <div>
                                        <label class="block text-sm font-medium text-gray-700 mb-2">"Name"</label>
                                        <input
                                            type="text"
                                            required
                                            class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-emerald-500 focus:border-emerald-500"
                                            placeholder="Your name"
                                            on:input=move |ev| set_name.set(event_target_value(&ev))
                                            prop:value=name
                                        />
                                    </div>

                                    <div>
                                        <label class="block text-sm font-medium text-gray-700 mb-2">"Work Email"</label>
                                        <input
                                            type="email"
                                            required
                                            class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-emerald-500 focus:border-emerald-500"
                                            placeholder="you@company.com"
                                            on:input=move |ev| set_email.set(event_target_value(&ev))
                                            prop:value=email
                                        />
                                    </div>

                                    <div>
                                        <label class="block text-sm font-medium text-gray-700 mb-2">"Company"</label>
                                        <input
                                            type="text"
                                            class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-emerald-500 focus:border-emerald-500"
                                            placeholder="Your company (optional)"
                                            on:input=move |ev| set_company.set(event_target_value(&ev))
                                            prop:value=company
                                        />
                                    </div>

                                    <div>
                                        <label class="block text-sm font-medium text-gray-700 mb-2">"Team Size"</label>
                                        <select
                                            class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-emerald-500 focus:border-emerald-500"
                                            on:change=move |ev| set_team_size.set(event_target_value(&ev))
                                            prop:value=team_size
                                        >
                                            <option value="1-10">"1–10 people"</option>
                                            <option value="11-50">"11–50 people"</option>
                                            <option value="51-200">"51–200 people"</option>
                                            <option value="200+">"200+ people"</option>
                                        </select>
                                    </div>

                                    <div>
                                        <label class="block text-sm font-medium text-gray-700 mb-2">"Password"</label>
                                        <input
                                            type="password"
                                            required
                                            minlength="12"
                                            class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-emerald-500 focus:border-emerald-500"
                                            placeholder="At least 12 characters"
                                            on:input=move |ev| set_password.set(event_target_value(&ev))
                                            prop:value=password
                                        />
                                    </div>

                                    <div>
                                        <label class="block text-sm font-medium text-gray-700 mb-2">"Plan"</label>
                                        <select
                                            class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-emerald-500 focus:border-emerald-500"
                                            on:change=move |ev| set_plan.set(event_target_value(&ev))
                                            prop:value=plan
                                        >
                                            <option value="starter">"Starter"</option>
                                            <option value="growth">"Growth"</option>
                                            <option value="enterprise">"Enterprise"</option>
                                        </select>
                                    </div>

                                    <button
                                        type="submit"
                                        class="w-full py-4 bg-emerald-600 hover:bg-emerald-700 text-white font-semibold rounded-lg transition"
                                    >
                                        "Create Workspace"
                                    </button>
                                </form>
                            </Show>
                        </div>

                        // Reassurance
                        <div class="space-y-8">
                            <div>
                                <h2 class="text-2xl font-bold text-gray-900 mb-4">"What Happens Next"</h2>
                                <p class="text-gray-600">
                                    "You get an empty workspace and a one-page setup guide. Most teams "
                                    "see their first live funnel within the hour."
                                </p>
                            </div>

                            <div class="space-y-6">
                                <FeatureHighlight
                                    icon="⏱️"
                                    title="14-Day Trial"
                                    description="Full features, no card. Exports stay open if you walk away."
                                />
                                <FeatureHighlight
                                    icon="🌍"
                                    title="Pick Your Region"
                                    description="EU or US data residency, chosen at workspace creation."
                                />
                                <FeatureHighlight
                                    icon="🔒"
                                    title="Your Data Stays Yours"
                                    description="Encrypted in transit and at rest. Deletion requests honored within 24 hours."
                                />
                            </div>

                            <div class="bg-gray-100 rounded-lg p-6">
                                <h3 class="font-semibold text-gray-900 mb-2">"Enterprise Teams"</h3>
                                <p class="text-gray-600 mb-4">
                                    "For SAML SSO, custom retention, or bring-your-own-cloud deployment, "
                                    "talk to us directly."
                                </p>
                                <a href="mailto:sales@clearmetrics.io" class="text-emerald-700 hover:text-emerald-900 font-medium">
                                    "sales@clearmetrics.io →"
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_form_renders_all_fields() {
        let html = leptos::ssr::render_to_string(SignupPage);
        assert!(html.contains(r#"type="text""#));
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains(r#"type="password""#));
        // Team size and plan selects.
        assert_eq!(html.matches("<select").count(), 2);
    }
}
