//! Contributors Carousel
//!
//! Horizontal strip of leaderboard entries; the leader wears the crown.

use leptos::*;

use notebuddy::i18n::Key;
use notebuddy::models::Contributor;
use notebuddy::views::ranked;

use crate::state::global::use_global;

#[component]
pub fn ContributorsCarousel(
    #[prop(into)]
    contributors: Signal<Vec<Contributor>>,
) -> impl IntoView {
    let state = use_global();

    view! {
        <div class="flex gap-3 overflow-x-auto no-scrollbar pb-2">
            {move || {
                let board = contributors.get();
                ranked(&board)
                    .map(|entry| {
                        let initial = entry
                            .contributor
                            .display_name()
                            .chars()
                            .next()
                            .unwrap_or('?');
                        view! {
                            <div class="shrink-0 w-28 bg-white rounded-2xl p-3 text-center shadow-sm">
                                <div class="relative mx-auto w-12 h-12 rounded-full bg-indigo-100 grid place-items-center font-bold text-indigo-700">
                                    {initial.to_string()}
                                    {entry.is_leader().then(|| view! {
                                        <span class="absolute -top-3 left-1/2 -translate-x-1/2">"👑"</span>
                                    })}
                                </div>
                                <p class="mt-2 text-sm font-medium truncate">
                                    {entry.contributor.display_name().to_string()}
                                </p>
                                <p class="text-xs text-gray-500">
                                    {format!("{} {}", entry.contributor.points, state.t(Key::PointsShort))}
                                </p>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
