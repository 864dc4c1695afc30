//! Note Card Component

use leptos::*;
use leptos_router::*;

use notebuddy::models::Note;
use notebuddy::route::AppRoute;

/// Grid card linking to a note's detail page
#[component]
pub fn NoteCard(note: Note) -> impl IntoView {
    let href = AppRoute::Note(note.id.clone()).path();
    let summary = note.summary_line();
    let pages = note.pages.map(|p| format!("{} pages", p));

    view! {
        <A
            href=href
            class="block bg-white rounded-2xl p-4 shadow-sm hover:shadow-md transition-shadow"
        >
            <div class="h-24 rounded-xl bg-gradient-to-br from-indigo-50 to-sky-100 grid place-items-center mb-3">
                <span class="text-3xl">"📄"</span>
            </div>
            <h3 class="font-semibold text-gray-900 line-clamp-2">{note.title}</h3>
            <p class="text-xs text-gray-500 mt-1">{summary}</p>
            {pages.map(|p| view! { <p class="text-xs text-gray-400 mt-1">{p}</p> })}
        </A>
    }
}
