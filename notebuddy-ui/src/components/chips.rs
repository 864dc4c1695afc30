//! Category chips on the home page. Display only.

use leptos::*;

use notebuddy::views::{chip_rows, ChipRow};

#[component]
pub fn ChipRows() -> impl IntoView {
    view! {
        <div class="space-y-2">
            {chip_rows().into_iter().map(|row| view! { <Chips row=row /> }).collect_view()}
        </div>
    }
}

#[component]
fn Chips(row: ChipRow) -> impl IntoView {
    view! {
        <div class="flex gap-2 overflow-x-auto no-scrollbar">
            {row
                .labels
                .iter()
                .enumerate()
                .map(|(index, label)| {
                    let class = if row.is_active(index) {
                        "px-3 py-1 rounded-full text-sm bg-indigo-600 text-white"
                    } else {
                        "px-3 py-1 rounded-full text-sm bg-white text-gray-700 border border-gray-200"
                    };
                    view! { <span class=class>{*label}</span> }
                })
                .collect_view()}
        </div>
    }
}
