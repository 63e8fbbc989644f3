//! Marketing navigation component

use cm_ui_state::MobileMenu;
use leptos::*;

use crate::content;

#[component]
pub fn MarketingNav() -> impl IntoView {
    let (menu, set_menu) = create_signal(MobileMenu::new());
    let links = content::nav_links();
    let mobile_links = links.clone();

    view! {
        <nav class="bg-white shadow-sm sticky top-0 z-50">
            <div class="container mx-auto px-4">
                <div class="flex justify-between h-16">
                    // Logo
                    <div class="flex items-center">
                        <a href="/" class="flex items-center">
                            <span class="text-2xl mr-2">"📈"</span>
                            <span class="text-xl font-bold text-gray-900">"Clearmetrics"</span>
                        </a>
                    </div>

                    // Desktop Nav
                    <div class="hidden md:flex items-center space-x-8">
                        {links.into_iter().map(|link| view! {
                            <a href=link.href class="text-gray-600 hover:text-gray-900 transition">
                                {link.label}
                            </a>
                        }).collect::<Vec<_>>()}
                        <div class="flex items-center space-x-4 ml-4">
                            <a href="/signup" class="text-gray-600 hover:text-gray-900 transition">"Sign In"</a>
                            <a href="/signup" class="px-4 py-2 bg-emerald-600 hover:bg-emerald-700 text-white font-medium rounded-lg transition">
                                "Start Free Trial"
                            </a>
                        </div>
                    </div>

                    // Mobile menu button
                    <div class="md:hidden flex items-center">
                        <button
                            class="p-2 rounded-md text-gray-600 hover:text-gray-900 hover:bg-gray-100"
                            on:click=move |_| set_menu.update(|m| m.toggle())
                        >
                            <Show
                                when=move || menu.get().is_open()
                                fallback=|| view! {
                                    <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                                    </svg>
                                }
                            >
                                <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                                </svg>
                            </Show>
                        </button>
                    </div>
                </div>
            </div>

            // Mobile menu: selecting any item closes it again
            <Show when=move || menu.get().is_open()>
                <div class="md:hidden border-t border-gray-200">
                    <div class="px-4 py-4 space-y-3">
                        {mobile_links.clone().into_iter().map(|link| view! {
                            <a
                                href=link.href
                                class="block text-gray-600 hover:text-gray-900"
                                on:click=move |_| set_menu.update(|m| m.close())
                            >
                                {link.label}
                            </a>
                        }).collect::<Vec<_>>()}
                        <div class="pt-4 border-t border-gray-200 space-y-3">
                            <a
                                href="/signup"
                                class="block w-full text-center px-4 py-2 bg-emerald-600 text-white font-medium rounded-lg"
                                on:click=move |_| set_menu.update(|m| m.close())
                            >
                                "Start Free Trial"
                            </a>
                        </div>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
