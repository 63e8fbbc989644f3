//! Features page

use leptos::*;
use leptos_meta::*;

#[component]
pub fn FeaturesPage() -> impl IntoView {
    view! {
        <div>
            <Title text="Features - Clearmetrics"/>
            <Meta
                name="description"
                content="Funnels, retention cohorts, live dashboards, schema enforcement, and alerting. Everything Clearmetrics does, in depth."
            />

            // Hero
            <section class="bg-gradient-to-br from-gray-900 to-gray-800 text-white py-20">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center">
                        <h1 class="text-4xl md:text-5xl font-bold mb-6">"Platform Features"</h1>
                        <p class="text-xl text-gray-300">
                            "Everything you need to understand and grow your product."
                        </p>
                    </div>
                </div>
            </section>

            // Feature Sections
            <section class="py-20 bg-white">
                <div class="container mx-auto px-4">
                    // Funnels
                    <div class="max-w-5xl mx-auto mb-20">
                        <div class="grid md:grid-cols-2 gap-12 items-center">
                            <div>
                                <h2 class="text-3xl font-bold text-gray-900 mb-4">"Funnels on Live Data"</h2>
                                <p class="text-lg text-gray-600 mb-6">
                                    "Every funnel runs against the event stream as it is right now. "
                                    "Change a step, add a breakdown, and the numbers update in seconds."
                                </p>
                                <ul class="space-y-3">
                                    <FeatureItem text="Unlimited steps with strict or loose ordering"/>
                                    <FeatureItem text="Breakdowns by any event or user property"/>
                                    <FeatureItem text="Time-to-convert distributions per step"/>
                                    <FeatureItem text="Saved funnels shared across the workspace"/>
                                </ul>
                            </div>
                            <div class="bg-gray-100 rounded-lg p-8">
                                <div class="font-mono text-sm space-y-2">
                                    <div class="text-gray-900 font-semibold">"Signup funnel · last 30 days"</div>
                                    <div class="text-gray-600">"landing_view      48,203  100%"</div>
                                    <div class="text-gray-600">"signup_started    12,441   26%"</div>
                                    <div class="text-gray-600">"signup_completed   8,050   17%"</div>
                                    <div class="text-emerald-600">"first_insight      6,912   14%"</div>
                                </div>
                            </div>
                        </div>
                    </div>

                    // Retention
                    <div class="max-w-5xl mx-auto mb-20">
                        <div class="grid md:grid-cols-2 gap-12 items-center">
                            <div class="order-2 md:order-1 bg-gray-900 rounded-lg p-8 text-white">
                                <div class="font-mono text-sm space-y-1">
                                    <div class="text-emerald-400">"Weekly retention · signup cohorts"</div>
                                    <div class="text-gray-400">"Week of Aug 03   100%  61%  44%  38%"</div>
                                    <div class="text-gray-400">"Week of Aug 10   100%  63%  47%  \u{2014}"</div>
                                    <div class="text-gray-400">"Week of Aug 17   100%  66%  \u{2014}   \u{2014}"</div>
                                    <div class="text-yellow-400">"↑ +5pt week-2 retention since onboarding revamp"</div>
                                </div>
                            </div>
                            <div class="order-1 md:order-2">
                                <h2 class="text-3xl font-bold text-gray-900 mb-4">"Retention That Explains Itself"</h2>
                                <p class="text-lg text-gray-600 mb-6">
                                    "Cohort curves by signup week, acquisition channel, or any segment "
                                    "you define. Compare before and after a release without exporting a thing."
                                </p>
                                <ul class="space-y-3">
                                    <FeatureItem text="Daily, weekly, and monthly cohort grids"/>
                                    <FeatureItem text="Retention on any repeat event, not just logins"/>
                                    <FeatureItem text="Side-by-side cohort comparison"/>
                                    <FeatureItem text="Unbounded history on Growth and Enterprise"/>
                                </ul>
                            </div>
                        </div>
                    </div>

                    // Schema Guard
                    <div class="max-w-5xl mx-auto mb-20">
                        <div class="grid md:grid-cols-2 gap-12 items-center">
                            <div>
                                <h2 class="text-3xl font-bold text-gray-900 mb-4">"A Tracking Plan With Teeth"</h2>
                                <p class="text-lg text-gray-600 mb-6">
                                    "Define your events and properties once. Clearmetrics validates every "
                                    "incoming event against the plan and quarantines anything that drifts, "
                                    "so one bad release can't poison a quarter of reporting."
                                </p>
                                <ul class="space-y-3">
                                    <FeatureItem text="Typed properties with required/optional rules"/>
                                    <FeatureItem text="Quarantine queue with one-click replay after fixes"/>
                                    <FeatureItem text="Schema diffs on every SDK release"/>
                                    <FeatureItem text="Slack notifications when validation failures spike"/>
                                </ul>
                            </div>
                            <div class="bg-gray-100 rounded-lg p-8">
                                <div class="font-mono text-sm space-y-2">
                                    <div class="text-red-600">"✗ checkout_done: unknown property \"amt\""</div>
                                    <div class="text-gray-600 pl-4">"expected: amount (number, required)"</div>
                                    <div class="text-gray-600 pl-4">"quarantined: 1,204 events (replayable)"</div>
                                    <div class="text-green-600">"✓ checkout_started: 14,882 events valid"</div>
                                </div>
                            </div>
                        </div>
                    </div>

                    // Alerts
                    <div class="max-w-5xl mx-auto">
                        <div class="grid md:grid-cols-2 gap-12 items-center">
                            <div class="order-2 md:order-1 bg-gray-900 rounded-lg p-8 text-white">
                                <div class="font-mono text-sm space-y-1">
                                    <div class="text-yellow-400">"[ALERT] signup_completed down 31%"</div>
                                    <div class="text-gray-400">"baseline: trailing 4 same-weekdays"</div>
                                    <div class="text-gray-400">"scope: web · region EU"</div>
                                    <div class="text-gray-400">"first seen: 09:14 UTC"</div>
                                    <div class="text-emerald-400">"→ posted to #product-alerts"</div>
                                </div>
                            </div>
                            <div class="order-1 md:order-2">
                                <h2 class="text-3xl font-bold text-gray-900 mb-4">"Alerts Without the Noise"</h2>
                                <p class="text-lg text-gray-600 mb-6">
                                    "Seasonal baselines instead of static thresholds. You hear about the "
                                    "regression that matters, not every quiet Sunday morning."
                                </p>
                                <ul class="space-y-3">
                                    <FeatureItem text="Anomaly detection tuned per metric"/>
                                    <FeatureItem text="Slack, email, and webhook destinations"/>
                                    <FeatureItem text="Scoped alerts by platform, region, or segment"/>
                                    <FeatureItem text="One-click mute with automatic expiry"/>
                                </ul>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            // CTA
            <section class="py-16 bg-gray-50">
                <div class="container mx-auto px-4 text-center">
                    <h2 class="text-3xl font-bold text-gray-900 mb-4">"See It on Your Own Data"</h2>
                    <p class="text-lg text-gray-600 mb-8">
                        "The trial runs on your real events, so the first funnel you build is one you'll keep."
                    </p>
                    <a href="/signup" class="inline-block px-8 py-4 bg-emerald-600 hover:bg-emerald-700 text-white font-semibold rounded-lg transition">
                        "Start Free Trial"
                    </a>
                </div>
            </section>
        </div>
    }
}

#[component]
fn FeatureItem(text: &'static str) -> impl IntoView {
    view! {
        <li class="flex items-start">
            <span class="text-emerald-500 font-bold mr-3">"✓"</span>
            <span class="text-gray-700">{text}</span>
        </li>
    }
}
