//! Rotating testimonial carousel
//!
//! One testimonial visible at a time; prev/next arrows and dots for
//! manual navigation, plus an automatic advance every
//! [`cm_ui_state::ROTATION_PERIOD`]. The interval only exists while this
//! component is mounted: it is acquired in a client-side effect and the
//! cleanup hook clears the handle and stops the ticker gate, so a torn
//! down carousel never keeps rotating in the background. Manual
//! navigation deliberately leaves the timer running.

use cm_ui_state::{Carousel, Ticker, ROTATION_PERIOD};
use leptos::*;

use crate::content::Testimonial;

#[component]
pub fn TestimonialCarousel(items: Vec<Testimonial>) -> impl IntoView {
    let len = items.len();
    let initial = match Carousel::new(len) {
        Ok(carousel) => carousel,
        // An empty content list renders as an empty section, not a panic.
        Err(_) => return ().into_view(),
    };

    let (carousel, set_carousel) = create_signal(initial);
    let items = store_value(items);
    let ticker = store_value(Ticker::new());

    create_effect(move |_| {
        let tick = move || ticker.with_value(|t| set_carousel.update(|c| t.fire(c)));
        if let Ok(handle) = set_interval_with_handle(tick, ROTATION_PERIOD) {
            on_cleanup(move || {
                ticker.update_value(|t| t.stop());
                handle.clear();
            });
        }
    });

    view! {
        <div class="max-w-3xl mx-auto">
            <div class="relative bg-white rounded-xl shadow-lg p-8 md:p-12">
                {move || {
                    let index = carousel.get().current();
                    items.with_value(|records| {
                        let record = records[index].clone();
                        let filled = "★".repeat(record.rating as usize);
                        let hollow = "☆".repeat(5usize.saturating_sub(record.rating as usize));
                        view! {
                            <div class="text-center">
                                <div class="text-amber-400 text-xl mb-4">
                                    {filled}
                                    <span class="text-gray-300">{hollow}</span>
                                </div>
                                <p class="text-xl text-gray-700 italic mb-6">"\""{record.quote}"\""</p>
                                <p class="font-semibold text-gray-900">{record.author}</p>
                                <p class="text-sm text-gray-600">{record.role}</p>
                            </div>
                        }
                    })
                }}

                // Arrows
                <button
                    class="absolute left-3 top-1/2 -translate-y-1/2 p-2 rounded-full bg-gray-100 hover:bg-gray-200 text-gray-600"
                    on:click=move |_| set_carousel.update(|c| c.retreat())
                >
                    <svg class="h-5 w-5" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 19l-7-7 7-7"/>
                    </svg>
                </button>
                <button
                    class="absolute right-3 top-1/2 -translate-y-1/2 p-2 rounded-full bg-gray-100 hover:bg-gray-200 text-gray-600"
                    on:click=move |_| set_carousel.update(|c| c.advance())
                >
                    <svg class="h-5 w-5" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 5l7 7-7 7"/>
                    </svg>
                </button>
            </div>

            // Dots
            <div class="flex justify-center gap-2 mt-6">
                {(0..len).map(|i| view! {
                    <button
                        class=move || if carousel.get().current() == i {
                            "w-3 h-3 rounded-full bg-emerald-600"
                        } else {
                            "w-3 h-3 rounded-full bg-gray-300 hover:bg-gray-400"
                        }
                        on:click=move |_| set_carousel.update(|c| {
                            // Dots are enumerated from the same list, so
                            // the index is always in range.
                            let _ = c.jump_to(i);
                        })
                    >
                    </button>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
    .into_view()
}
