//! FAQ accordion
//!
//! At most one entry is expanded at a time; opening an entry collapses
//! whatever was open, and clicking the open entry collapses it.

use cm_ui_state::Accordion;
use leptos::*;

use crate::content::FaqEntry;

#[component]
pub fn FaqAccordion(entries: Vec<FaqEntry>) -> impl IntoView {
    let (accordion, set_accordion) = create_signal(Accordion::new(entries.len()));

    view! {
        <div class="space-y-4">
            {entries.into_iter().enumerate().map(|(i, entry)| view! {
                <div class="border border-gray-200 rounded-lg">
                    <button
                        class="w-full flex items-center justify-between px-6 py-4 text-left"
                        on:click=move |_| set_accordion.update(|a| {
                            // Entries are enumerated from the same list,
                            // so the index is always in range.
                            let _ = a.toggle(i);
                        })
                    >
                        <span class="text-lg font-semibold text-gray-900">{entry.question}</span>
                        <span class=move || if accordion.get().is_open(i) {
                            "text-gray-400 transition-transform rotate-180"
                        } else {
                            "text-gray-400 transition-transform"
                        }>
                            <svg class="h-5 w-5" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 9l-7 7-7-7"/>
                            </svg>
                        </span>
                    </button>
                    <Show when=move || accordion.get().is_open(i)>
                        <div class="px-6 pb-4">
                            <p class="text-gray-600">{entry.answer.clone()}</p>
                        </div>
                    </Show>
                </div>
            }).collect::<Vec<_>>()}
        </div>
    }
}
