//! Home page

use leptos::*;
use leptos_meta::*;

use crate::components::*;
use crate::content;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            <Title text="Clearmetrics - Product Analytics That Answers"/>
            <Meta
                name="description"
                content="Funnels, retention, and alerts on live product data. Set up in an afternoon, trusted by 2,400+ teams."
            />

            // Hero Section
            <section class="bg-gradient-to-br from-emerald-900 via-teal-900 to-emerald-800 text-white">
                <div class="container mx-auto px-4 py-24">
                    <div class="max-w-4xl mx-auto text-center">
                        <h1 class="text-5xl md:text-6xl font-bold mb-6">
                            "See What Your Users "
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-emerald-300 to-cyan-300">
                                "Actually Do"
                            </span>
                        </h1>
                        <p class="text-xl md:text-2xl text-gray-300 mb-8">
                            "Clearmetrics turns raw product events into funnels, retention cohorts, "
                            "and alerts your whole team can act on. No SQL, no stale dashboards."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center">
                            <a href="/signup" class="px-8 py-4 bg-emerald-500 hover:bg-emerald-400 text-white font-semibold rounded-lg transition">
                                "Start Free Trial"
                            </a>
                            <a href="/features" class="px-8 py-4 bg-white/10 hover:bg-white/20 text-white font-semibold rounded-lg border border-white/30 transition">
                                "See Features"
                            </a>
                        </div>
                    </div>
                </div>
            </section>

            // Stats
            <section class="py-12 bg-white border-b border-gray-100">
                <div class="container mx-auto px-4">
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-8 max-w-4xl mx-auto">
                        {content::stats().into_iter().map(|stat| view! {
                            <StatCard stat=stat/>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </section>

            // Problem Statement
            <section class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">
                            "Your Data Has the Answers. Your Tools Hide Them."
                        </h2>
                        <p class="text-lg text-gray-600">
                            "Most teams drown in events they collected but can't question. "
                            "Dashboards go stale, tracking breaks silently, and every product "
                            "decision turns into an argument about whose numbers are right."
                        </p>
                    </div>
                    <div class="grid md:grid-cols-3 gap-8">
                        <ProblemCard
                            icon="🌫️"
                            title="Scattered Numbers"
                            description="Marketing, product, and data each keep their own spreadsheet of the truth, and none of them match."
                        />
                        <ProblemCard
                            icon="🐌"
                            title="Slow Answers"
                            description="Simple questions queue behind the data team for days. By the time the chart lands, the decision shipped."
                        />
                        <ProblemCard
                            icon="🕳️"
                            title="Silent Breakage"
                            description="A renamed event quietly zeroes a funnel, and nobody notices until the quarterly review."
                        />
                    </div>
                </div>
            </section>

            // How It Works
            <section class="py-20 bg-white">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">
                            "How It Works"
                        </h2>
                        <p class="text-lg text-gray-600">
                            "From zero to trustworthy product metrics in one afternoon."
                        </p>
                    </div>
                    <div class="grid md:grid-cols-4 gap-8">
                        <StepCard
                            number="1"
                            title="Connect"
                            description="Drop in a snippet or SDK. Web, mobile, and server events land in one stream."
                        />
                        <StepCard
                            number="2"
                            title="Define"
                            description="Name your events once in a shared schema. Clearmetrics rejects anything that drifts."
                        />
                        <StepCard
                            number="3"
                            title="Explore"
                            description="Build funnels, trends, and cohorts with clicks. Every query runs on live data."
                        />
                        <StepCard
                            number="4"
                            title="Act"
                            description="Alerts flag real regressions in the metrics you care about, not dashboard noise."
                        />
                    </div>
                </div>
            </section>

            // Feature Highlights
            <section class="py-20 bg-gray-900 text-white">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold mb-4">
                            "Built for the Whole Team"
                        </h2>
                        <p class="text-lg text-gray-400">
                            "PMs self-serve, engineers trust the pipeline, data stays in control."
                        </p>
                    </div>
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                        <HomeFeature icon="🔀" title="Funnels" body="Multi-step conversion with breakdowns by any property, computed on live events."/>
                        <HomeFeature icon="📅" title="Retention" body="Cohort curves that answer whether this month's users stick better than last month's."/>
                        <HomeFeature icon="📊" title="Dashboards" body="Shared boards that stay current because they query, not cache."/>
                        <HomeFeature icon="🔔" title="Alerts" body="Anomaly detection on your core metrics, delivered where your team already talks."/>
                        <HomeFeature icon="🧩" title="Segments" body="Reusable audience definitions for analysis, targeting, and exports."/>
                        <HomeFeature icon="🛡️" title="Schema Guard" body="Tracking plans enforced at ingestion, so broken events never poison reports."/>
                    </div>
                </div>
            </section>

            // Testimonials
            <section class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center mb-12">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">
                            "Teams That Switched"
                        </h2>
                        <p class="text-lg text-gray-600">
                            "What product teams say after their first quarter on Clearmetrics."
                        </p>
                    </div>
                    <TestimonialCarousel items=content::testimonials()/>
                </div>
            </section>

            // CTA Section
            <section class="py-20 bg-gradient-to-r from-emerald-600 to-teal-600 text-white">
                <div class="container mx-auto px-4 text-center">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">
                        "Ready for Answers Instead of Dashboards?"
                    </h2>
                    <p class="text-xl text-emerald-100 mb-8 max-w-2xl mx-auto">
                        "Start a 14-day trial on full features. No card, no sales call, your data stays yours."
                    </p>
                    <a href="/signup" class="inline-block px-8 py-4 bg-white text-emerald-700 font-semibold rounded-lg hover:bg-gray-100 transition">
                        "Start Free Trial"
                    </a>
                </div>
            </section>
        </div>
    }
}

#[component]
fn HomeFeature(
    icon: &'static str,
    title: &'static str,
    body: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-6">
            <div class="text-3xl mb-3">{icon}</div>
            <h3 class="text-xl font-semibold mb-3">{title}</h3>
            <p class="text-gray-400 text-sm">{body}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title_uses_plain_separator() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let head = Rc::new(RefCell::new(String::new()));
        let captured = head.clone();
        let _body = leptos::ssr::render_to_string(move || {
            provide_meta_context();
            let page = view! { <HomePage/> };
            *captured.borrow_mut() = use_head().dehydrate();
            page
        });

        let head = head.borrow();
        assert!(head.contains("Clearmetrics - Product Analytics That Answers"));
        assert!(!head.contains('\u{2014}'));
    }
}
