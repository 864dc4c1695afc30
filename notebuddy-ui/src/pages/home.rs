//! Home Page
//!
//! Hero, category chips, featured contributors and the latest uploads.

use leptos::*;
use leptos_router::*;

use notebuddy::i18n::Key;
use notebuddy::models::{Contributor, Note};
use notebuddy::route::SEARCH_PATH;
use notebuddy::views::{load_home, HOME_NOTE_LIMIT};

use crate::components::{CardSkeleton, ChipRows, ContributorsCarousel, NoteCard};
use crate::state::global::{log_error, use_global};

#[component]
pub fn Home() -> impl IntoView {
    let state = use_global();

    let notes = create_rw_signal(Vec::<Note>::new());
    let contributors = create_rw_signal(Vec::<Contributor>::new());
    let (loading, set_loading) = create_signal(true);
    let (board_failed, set_board_failed) = create_signal(false);

    spawn_local(async move {
        let feed = load_home(&state.api(), HOME_NOTE_LIMIT).await;

        // Each half lands on its own; a failure leaves the other intact
        match feed.notes {
            Ok(items) => notes.set(items),
            Err(e) => {
                log_error(&format!("Failed to load notes: {}", e));
                state.show_error(&e.user_message());
            }
        }
        match feed.contributors {
            Ok(items) => contributors.set(items),
            Err(e) => {
                log_error(&format!("Failed to load leaderboard: {}", e));
                set_board_failed.set(true);
                // Keep the notes error in the toast if both failed
                if state.error.get_untracked().is_none() {
                    state.show_error(state.t_untracked(Key::LeaderboardUnavailable));
                }
            }
        }
        set_loading.set(false);
    });

    view! {
        <div class="space-y-8">
            <Hero />

            <ChipRows />

            <section>
                <h2 class="text-lg font-semibold mb-3">{move || state.t(Key::FeaturedContributors)}</h2>
                <ContributorsCarousel contributors=contributors />
                <Show when=move || board_failed.get()>
                    <p class="text-sm text-rose-600">{move || state.t(Key::LeaderboardUnavailable)}</p>
                </Show>
            </section>

            <section>
                <h2 class="text-lg font-semibold mb-3">{move || state.t(Key::LatestUploads)}</h2>
                {move || {
                    if loading.get() {
                        view! { <CardSkeleton /> }.into_view()
                    } else if notes.with(|n| n.is_empty()) {
                        view! {
                            <p class="text-gray-500 text-center py-8">{move || state.t(Key::NoResults)}</p>
                        }.into_view()
                    } else {
                        view! {
                            <div class="grid grid-cols-2 md:grid-cols-3 gap-3">
                                <For
                                    each=move || notes.get()
                                    key=|note| note.id.clone()
                                    children=|note| view! { <NoteCard note=note /> }
                                />
                            </div>
                        }.into_view()
                    }
                }}
            </section>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let state = use_global();

    view! {
        <section class="rounded-3xl bg-gradient-to-br from-indigo-600 to-sky-500 text-white p-6">
            <h1 class="text-2xl font-bold">{move || state.t(Key::Tagline)}</h1>
            <p class="mt-2 text-white/80">{move || state.t(Key::HeroBlurb)}</p>

            <A
                href=SEARCH_PATH
                class="mt-4 flex items-center bg-white/95 text-gray-500 rounded-xl px-4 py-3"
            >
                {move || format!("🔍 {}", state.t(Key::SearchPlaceholder))}
            </A>

            <div class="mt-4 flex gap-3">
                <A href=SEARCH_PATH class="px-4 py-2 rounded-xl bg-white/20 font-medium">
                    {move || state.t(Key::RequestNotes)}
                </A>
                <button
                    on:click=move |_| state.upload.update(|flow| flow.open())
                    class="px-4 py-2 rounded-xl bg-white text-indigo-700 font-semibold"
                >
                    {move || state.t(Key::ContributeNotes)}
                </button>
            </div>
        </section>
    }
}
