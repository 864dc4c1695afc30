//! Loading Component
//!
//! Spinners and skeleton states.

use leptos::*;

/// Full-width loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Skeleton grid shown while notes load
#[component]
pub fn CardSkeleton(
    #[prop(default = 6)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-3 gap-3 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-white rounded-2xl p-4 shadow-sm">
                    <div class="h-24 bg-gray-100 rounded-xl mb-3" />
                    <div class="h-4 bg-gray-100 rounded w-2/3 mb-2" />
                    <div class="h-3 bg-gray-100 rounded w-1/2" />
                </div>
            }).collect_view()}
        </div>
    }
}
