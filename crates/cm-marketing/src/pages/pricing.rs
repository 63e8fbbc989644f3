//! Pricing page

use leptos::*;
use leptos_meta::*;

use crate::components::{FaqAccordion, PlanCard};
use crate::content;

#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <div>
            <Title text="Pricing - Clearmetrics"/>
            <Meta
                name="description"
                content="Simple event-based pricing. Starter, Growth, and Enterprise plans, every one with a 14-day free trial."
            />

            // Hero
            <section class="bg-gradient-to-br from-gray-900 to-gray-800 text-white py-20">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center">
                        <h1 class="text-4xl md:text-5xl font-bold mb-6">"Simple, Event-Based Pricing"</h1>
                        <p class="text-xl text-gray-300">
                            "Pay for the events you track. Every plan starts with a 14-day free trial."
                        </p>
                    </div>
                </div>
            </section>

            // Pricing Cards
            <section class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="grid md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                        {content::pricing_plans().into_iter().map(|plan| view! {
                            <PlanCard plan=plan/>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </section>

            // FAQ
            <section class="py-20 bg-white">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto">
                        <h2 class="text-3xl font-bold text-gray-900 text-center mb-12">"Frequently Asked Questions"</h2>
                        <FaqAccordion entries=content::faq_entries()/>
                    </div>
                </div>
            </section>
        </div>
    }
}
