//! Site footer

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-gray-400">
            <div class="container mx-auto px-4 py-12">
                <div class="grid md:grid-cols-4 gap-8">
                    <div>
                        <div class="flex items-center mb-4">
                            <span class="text-2xl mr-2">"📈"</span>
                            <span class="text-xl font-bold text-white">"Clearmetrics"</span>
                        </div>
                        <p class="text-sm">
                            "Product analytics for teams who want answers, not dashboards to babysit."
                        </p>
                    </div>
                    <div>
                        <h3 class="text-white font-semibold mb-4">"Product"</h3>
                        <ul class="space-y-2 text-sm">
                            <li><a href="/features" class="hover:text-white transition">"Features"</a></li>
                            <li><a href="/pricing" class="hover:text-white transition">"Pricing"</a></li>
                            <li><a href="/signup" class="hover:text-white transition">"Free Trial"</a></li>
                        </ul>
                    </div>
                    <div>
                        <h3 class="text-white font-semibold mb-4">"Company"</h3>
                        <ul class="space-y-2 text-sm">
                            <li><a href="mailto:hello@clearmetrics.io" class="hover:text-white transition">"Contact"</a></li>
                            <li><a href="mailto:press@clearmetrics.io" class="hover:text-white transition">"Press"</a></li>
                        </ul>
                    </div>
                    <div>
                        <h3 class="text-white font-semibold mb-4">"Legal"</h3>
                        <ul class="space-y-2 text-sm">
                            <li><a href="/privacy" class="hover:text-white transition">"Privacy Policy"</a></li>
                            <li><a href="/terms" class="hover:text-white transition">"Terms of Service"</a></li>
                        </ul>
                    </div>
                </div>
                <div class="border-t border-gray-800 mt-12 pt-8 text-sm text-center">
                    "© 2026 Clearmetrics. All rights reserved."
                </div>
            </div>
        </footer>
    }
}
