//! Note Detail Page
//!
//! Metadata plus an embedded preview with zoom and page controls. When the
//! embed fails or does not load in time, a fallback with a direct link is
//! shown instead.

use leptos::*;

use notebuddy::api::NotesApi;
use notebuddy::i18n::Key;
use notebuddy::models::Note;
use notebuddy::views::viewer::PREVIEW_TIMEOUT_MS;
use notebuddy::views::{document_link, download_url, DocumentViewer, PreviewStatus};

use crate::components::Loading;
use crate::state::global::{log_error, use_global};

#[component]
pub fn NoteDetail(#[prop(into)] id: String) -> impl IntoView {
    let state = use_global();

    let note = create_rw_signal(None::<Note>);
    let (failed, set_failed) = create_signal(false);

    spawn_local(async move {
        match state.api().get_note(&id).await {
            Ok(found) => note.set(Some(found)),
            Err(e) => {
                log_error(&format!("Failed to load note {}: {}", id, e));
                state.show_error(&e.user_message());
                set_failed.set(true);
            }
        }
    });

    view! {
        {move || match note.get() {
            Some(note) => view! { <NoteView note=note /> }.into_view(),
            None if failed.get() => view! {
                <p class="text-center text-gray-500 py-12">{move || state.t(Key::NoResults)}</p>
            }.into_view(),
            None => view! { <Loading /> }.into_view(),
        }}
    }
}

#[component]
fn NoteView(note: Note) -> impl IntoView {
    let state = use_global();
    let viewer = create_rw_signal(DocumentViewer::for_link(note.pages, &note.drive_link));
    // Only a status change may rebuild the frame; zoom and paging must not
    let status = create_memo(move |_| viewer.with(|v| v.status()));

    // Fall back if the embed never reports back
    gloo_timers::callback::Timeout::new(PREVIEW_TIMEOUT_MS, move || {
        viewer.try_update(|v| v.timed_out());
    })
    .forget();

    let link = document_link(&note.drive_link).map(str::to_string);
    let preview_src = {
        let link = note.drive_link.clone();
        move || viewer.with(|v| v.preview_url(&link)).unwrap_or_default()
    };
    let download = download_url(&note.drive_link);
    let summary = note.summary_line();

    view! {
        <article class="space-y-4">
            <header>
                <h1 class="text-2xl font-bold">{note.title.clone()}</h1>
                <p class="text-sm text-gray-500">{summary}</p>
                {note.contributor_name.clone().map(|name| view! {
                    <p class="text-sm text-gray-500">
                        {move || format!("{}: {}", state.t(Key::UploadedBy), name)}
                    </p>
                })}
                <div class="flex flex-wrap gap-1 mt-2">
                    {note.tags.iter().map(|tag| view! {
                        <span class="px-2 py-0.5 rounded-full bg-gray-100 text-xs">{format!("#{}", tag)}</span>
                    }).collect_view()}
                </div>
            </header>

            <Controls viewer=viewer />

            <div class="rounded-2xl bg-gray-100 overflow-auto h-[70vh]">
                {move || match status.get() {
                    PreviewStatus::Failed => {
                        let link = link.clone();
                        view! {
                            <div class="h-full grid place-items-center text-center p-6">
                                <div>
                                    <p class="text-gray-600">{move || state.t(Key::PreviewUnavailable)}</p>
                                    {link.map(|href| view! {
                                        <a
                                            href=href
                                            target="_blank"
                                            rel="noopener"
                                            class="inline-block mt-3 px-4 py-2 rounded-xl bg-indigo-600 text-white"
                                        >
                                            {move || state.t(Key::OpenDocument)}
                                        </a>
                                    })}
                                </div>
                            </div>
                        }.into_view()
                    }
                    _ => {
                        let preview_src = preview_src.clone();
                        view! {
                            <iframe
                                src=preview_src
                                title="Document preview"
                                on:load=move |_| viewer.update(|v| v.mark_loaded())
                                on:error=move |_| viewer.update(|v| v.mark_failed())
                                style=move || format!(
                                    "transform: scale({}); transform-origin: top left; width: {}%; height: {}%;",
                                    viewer.with(|v| v.scale()),
                                    100.0 / viewer.with(|v| v.scale()),
                                    100.0 / viewer.with(|v| v.scale()),
                                )
                                class="border-0"
                            />
                        }.into_view()
                    }
                }}
            </div>

            {download.map(|href| view! {
                <a
                    href=href
                    target="_blank"
                    rel="noopener"
                    class="block text-center py-3 rounded-xl bg-indigo-600 text-white font-semibold"
                >
                    {move || state.t(Key::OpenDocument)}
                </a>
            })}
        </article>
    }
}

#[component]
fn Controls(viewer: RwSignal<DocumentViewer>) -> impl IntoView {
    let state = use_global();
    let button = "px-3 py-2 rounded-xl border border-gray-200 text-sm disabled:opacity-40";
    // Drive's own viewer handles paging
    let paged = viewer.with_untracked(|v| v.is_paged());

    view! {
        <div class="flex flex-wrap items-center gap-2">
            <button
                class=button
                title=move || state.t(Key::ZoomOut)
                disabled=move || !viewer.with(|v| v.can_zoom_out())
                on:click=move |_| viewer.update(|v| v.zoom_out())
            >
                "−"
            </button>
            <span class="text-sm w-12 text-center">
                {move || format!("{}%", viewer.with(|v| v.zoom_percent()))}
            </span>
            <button
                class=button
                title=move || state.t(Key::ZoomIn)
                disabled=move || !viewer.with(|v| v.can_zoom_in())
                on:click=move |_| viewer.update(|v| v.zoom_in())
            >
                "+"
            </button>
            <button class=button on:click=move |_| viewer.update(|v| v.reset())>
                {move || state.t(Key::ResetView)}
            </button>

            {paged.then(|| view! {
                <div class="ml-auto flex items-center gap-2">
                    <button
                        class=button
                        disabled=move || !viewer.with(|v| v.has_prev())
                        on:click=move |_| viewer.update(|v| v.prev_page())
                    >
                        {move || state.t(Key::PreviousPage)}
                    </button>
                    <span class="text-sm">
                        {move || viewer.with(|v| {
                            format!("{} {} / {}", state.t(Key::Page), v.page(), v.total_pages())
                        })}
                    </span>
                    <button
                        class=button
                        disabled=move || !viewer.with(|v| v.has_next())
                        on:click=move |_| viewer.update(|v| v.next_page())
                    >
                        {move || state.t(Key::NextPage)}
                    </button>
                </div>
            })}
        </div>
    }
}
