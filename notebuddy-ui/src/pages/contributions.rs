//! Contributions Page
//!
//! Leaderboard as a carousel and a ranked list, in server order.

use leptos::*;

use notebuddy::api::NotesApi;
use notebuddy::i18n::Key;
use notebuddy::models::Contributor;
use notebuddy::views::ranked;

use crate::components::{ContributorsCarousel, Loading};
use crate::state::global::{log_error, use_global};

#[component]
pub fn Contributions() -> impl IntoView {
    let state = use_global();
    let board = create_rw_signal(Vec::<Contributor>::new());
    let (loading, set_loading) = create_signal(true);

    spawn_local(async move {
        match state.api().leaderboard().await {
            Ok(items) => board.set(items),
            Err(e) => {
                log_error(&format!("Failed to load leaderboard: {}", e));
                state.show_error(&e.user_message());
            }
        }
        set_loading.set(false);
    });

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{move || state.t(Key::Leaderboard)}</h1>

            <ContributorsCarousel contributors=board />

            {move || {
                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }
                let entries = board.get();
                view! {
                    <ol class="bg-white rounded-2xl shadow-sm divide-y divide-gray-100">
                        {ranked(&entries)
                            .map(|entry| view! {
                                <li class="flex items-center gap-3 px-4 py-3">
                                    <span class="w-8 text-center font-semibold text-gray-500">
                                        {if entry.is_leader() { "👑".to_string() } else { entry.rank.to_string() }}
                                    </span>
                                    <span class="flex-1 font-medium">
                                        {entry.contributor.display_name().to_string()}
                                    </span>
                                    <span class="text-sm text-indigo-700 font-semibold">
                                        {format!("{} {}", entry.contributor.points, state.t(Key::PointsShort))}
                                    </span>
                                </li>
                            })
                            .collect_view()}
                    </ol>
                }
                .into_view()
            }}
        </div>
    }
}
