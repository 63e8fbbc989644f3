//! Card components for marketing pages

use leptos::*;

use crate::content::{PricingPlan, Stat};

#[component]
pub fn ProblemCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-lg p-6 text-center">
            <div class="text-4xl mb-4">{icon}</div>
            <h3 class="text-xl font-semibold text-gray-900 mb-2">{title}</h3>
            <p class="text-gray-600">{description}</p>
        </div>
    }
}

#[component]
pub fn StepCard(
    number: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="w-12 h-12 bg-emerald-600 text-white rounded-full flex items-center justify-center text-xl font-bold mx-auto mb-4">
                {number}
            </div>
            <h3 class="text-xl font-semibold text-gray-900 mb-2">{title}</h3>
            <p class="text-gray-600">{description}</p>
        </div>
    }
}

#[component]
pub fn FeatureHighlight(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-start">
            <div class="flex-shrink-0 w-12 h-12 bg-emerald-100 rounded-lg flex items-center justify-center">
                <span class="text-xl">{icon}</span>
            </div>
            <div class="ml-4">
                <h3 class="font-semibold text-gray-900">{title}</h3>
                <p class="text-gray-600 text-sm mt-1">{description}</p>
            </div>
        </div>
    }
}

#[component]
pub fn StatCard(stat: Stat) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="text-4xl font-bold text-emerald-600">{stat.value}</div>
            <div class="text-gray-600 mt-1">{stat.label}</div>
        </div>
    }
}

/// One pricing tier. The highlighted plan gets the inverted gradient
/// treatment and a "Most Popular" badge.
#[component]
pub fn PlanCard(plan: PricingPlan) -> impl IntoView {
    if plan.highlighted {
        view! {
            <div class="bg-gradient-to-b from-emerald-600 to-teal-700 rounded-xl shadow-xl p-8 text-white transform scale-105">
                <div class="text-center mb-8">
                    <span class="inline-block px-3 py-1 bg-white/20 rounded-full text-sm font-medium mb-4">"Most Popular"</span>
                    <h3 class="text-xl font-semibold mb-2">{plan.name}</h3>
                    <div class="text-4xl font-bold mb-1">
                        {plan.price}
                        <span class="text-lg font-normal text-emerald-200">{plan.period}</span>
                    </div>
                    <p class="text-emerald-200">{plan.blurb}</p>
                </div>
                <ul class="space-y-4 mb-8">
                    {plan.features.into_iter().map(|f| {
                        let (icon, style) = if f.included {
                            ("✓", "text-green-300")
                        } else {
                            ("−", "text-emerald-300")
                        };
                        let text_style = if f.included { "text-white" } else { "text-emerald-200" };
                        view! {
                            <li class="flex items-center">
                                <span class=format!("{} mr-3 font-bold", style)>{icon}</span>
                                <span class=text_style>{f.text}</span>
                            </li>
                        }
                    }).collect::<Vec<_>>()}
                </ul>
                <a href="/signup" class="block w-full py-3 text-center bg-white text-emerald-700 font-semibold rounded-lg hover:bg-gray-100 transition">
                    {plan.cta}
                </a>
            </div>
        }
        .into_view()
    } else {
        view! {
            <div class="bg-white rounded-xl shadow-lg p-8">
                <div class="text-center mb-8">
                    <h3 class="text-xl font-semibold text-gray-900 mb-2">{plan.name}</h3>
                    <div class="text-4xl font-bold text-gray-900 mb-1">
                        {plan.price}
                        <span class="text-lg font-normal text-gray-500">{plan.period}</span>
                    </div>
                    <p class="text-gray-600">{plan.blurb}</p>
                </div>
                <ul class="space-y-4 mb-8">
                    {plan.features.into_iter().map(|f| {
                        let (icon, style) = if f.included {
                            ("✓", "text-green-500")
                        } else {
                            ("−", "text-gray-300")
                        };
                        let text_style = if f.included { "text-gray-700" } else { "text-gray-400" };
                        view! {
                            <li class="flex items-center">
                                <span class=format!("{} mr-3 font-bold", style)>{icon}</span>
                                <span class=text_style>{f.text}</span>
                            </li>
                        }
                    }).collect::<Vec<_>>()}
                </ul>
                <a href="/signup" class="block w-full py-3 text-center bg-gray-900 hover:bg-gray-800 text-white font-semibold rounded-lg transition">
                    {plan.cta}
                </a>
            </div>
        }
        .into_view()
    }
}
