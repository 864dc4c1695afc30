//! Search Page
//!
//! Free-text search with "load more". Ordering of responses is handled by
//! [`SearchState`]: stale ones are dropped.

use leptos::*;

use notebuddy::api::NotesApi;
use notebuddy::i18n::Key;
use notebuddy::views::SearchState;

use crate::components::{Loading, NoteCard};
use crate::state::global::{log_error, use_global};

#[component]
pub fn Search() -> impl IntoView {
    let state = use_global();
    let search = create_rw_signal(SearchState::default());

    let run = move |reset: bool| {
        let Some(request) = search.try_update(|s| s.begin(reset)).flatten() else {
            return;
        };

        spawn_local(async move {
            match state.api().list_notes(&request.query).await {
                Ok(items) => {
                    search.try_update(|s| s.complete(&request, items));
                }
                Err(e) => {
                    log_error(&format!("Search failed: {}", e));
                    search.try_update(|s| s.fail(&request));
                    state.show_error(&e.user_message());
                }
            }
        });
    };

    // Initial listing
    run(true);

    let results = move || search.with(|s| s.results().to_vec());
    let loading = move || search.with(|s| s.is_loading());

    view! {
        <div class="space-y-6">
            <form
                class="flex gap-2"
                on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    run(true);
                }
            >
                <input
                    type="search"
                    placeholder=move || state.t(Key::SearchPlaceholder)
                    prop:value=move || search.with(|s| s.query().to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        search.update(|s| s.set_query(value));
                    }
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            run(true);
                        }
                    }
                    class="flex-1 rounded-xl border border-gray-200 px-4 py-3
                           focus:border-indigo-500 focus:outline-none"
                />
                <button type="submit" class="px-5 rounded-xl bg-indigo-600 text-white font-semibold">
                    {move || state.t(Key::Search)}
                </button>
            </form>

            {move || {
                if results().is_empty() && !loading() {
                    view! {
                        <p class="text-gray-500 text-center py-8">{move || state.t(Key::NoResults)}</p>
                    }.into_view()
                } else {
                    view! {
                        <div class="grid grid-cols-2 md:grid-cols-3 gap-3">
                            <For
                                each=results
                                key=|note| note.id.clone()
                                children=|note| view! { <NoteCard note=note /> }
                            />
                        </div>
                    }.into_view()
                }
            }}

            <Show when=loading>
                <Loading />
            </Show>

            <Show when=move || search.with(|s| s.has_more() && !s.is_loading())>
                <button
                    on:click=move |_| run(false)
                    class="w-full py-3 rounded-xl border border-gray-200 font-medium hover:bg-gray-50"
                >
                    {move || state.t(Key::LoadMore)}
                </button>
            </Show>
        </div>
    }
}
