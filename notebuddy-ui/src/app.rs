//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use notebuddy::i18n::Key;
use notebuddy::route::{AppRoute, HOME_PATH};

use crate::components::{BottomNav, Header, LanguagePicker, Toast, UploadDialog};
use crate::pages::{About, Admin, Contributions, Home, NoteDetail, Search};
use crate::state::global::{provide_global_state, use_global};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-slate-50 text-gray-900 flex flex-col">
                <Header />

                <main class="flex-1 container mx-auto px-4 py-6 pb-24">
                    <Routes>
                        // Every path resolves through AppRoute::parse
                        <Route path="/*any" view=Page />
                    </Routes>
                </main>

                <BottomNav />

                <UploadDialog />
                <LanguagePicker />
                <Toast />
            </div>
        </Router>
    }
}

/// Renders the page for the current location
#[component]
fn Page() -> impl IntoView {
    let location = use_location();
    let route = create_memo(move |_| AppRoute::parse(&location.pathname.get()));

    move || match route.get() {
        AppRoute::Home => view! { <Home /> }.into_view(),
        AppRoute::Search => view! { <Search /> }.into_view(),
        AppRoute::Note(id) => view! { <NoteDetail id=id /> }.into_view(),
        AppRoute::Contributions => view! { <Contributions /> }.into_view(),
        AppRoute::About => view! { <About /> }.into_view(),
        AppRoute::Admin => view! { <Admin /> }.into_view(),
        AppRoute::NotFound => view! { <NotFound /> }.into_view(),
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    let state = use_global();

    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-6">{move || state.t(Key::NotFoundTitle)}</h1>
            <A
                href=HOME_PATH
                class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 text-white rounded-xl font-medium transition-colors"
            >
                {move || state.t(Key::GoHome)}
            </A>
        </div>
    }
}
