//! Navigation Components
//!
//! Top bar with the logo and language switch, and the bottom tab bar.

use leptos::*;
use leptos_router::*;

use notebuddy::i18n::Key;
use notebuddy::route::{AppRoute, ABOUT_PATH, CONTRIBUTIONS_PATH, HOME_PATH, SEARCH_PATH};

use crate::state::global::use_global;

/// Header bar
#[component]
pub fn Header() -> impl IntoView {
    let state = use_global();

    view! {
        <header class="sticky top-0 z-30 bg-white/90 backdrop-blur border-b border-gray-100">
            <div class="container mx-auto px-4 h-14 flex items-center justify-between">
                <A href=HOME_PATH class="flex items-center space-x-2">
                    <span class="w-8 h-8 rounded-xl bg-indigo-600 text-white grid place-items-center font-bold">
                        "N"
                    </span>
                    <span class="text-lg font-bold text-gray-900">"NoteBuddy"</span>
                </A>

                <button
                    on:click=move |_| state.language_picker_open.set(true)
                    class="px-3 py-1.5 rounded-full border border-gray-200 text-sm text-gray-700 hover:bg-gray-50"
                >
                    {move || format!("🌐 {}", state.language.get().native_name())}
                </button>
            </div>
        </header>
    }
}

/// Bottom tab bar. The admin route is never listed here.
#[component]
pub fn BottomNav() -> impl IntoView {
    let state = use_global();
    let location = use_location();
    let current = create_memo(move |_| AppRoute::parse(&location.pathname.get()));

    view! {
        <nav class="fixed bottom-0 left-0 right-0 z-30 bg-white border-t border-gray-200">
            <div class="container mx-auto grid grid-cols-5 h-16 text-xs">
                <NavItem href=HOME_PATH icon="🏠" label=Key::NavHome route=AppRoute::Home current=current />
                <NavItem href=SEARCH_PATH icon="🔍" label=Key::NavSearch route=AppRoute::Search current=current />
                <button
                    on:click=move |_| state.upload.update(|flow| flow.open())
                    class="flex flex-col items-center justify-center text-indigo-600 font-medium"
                >
                    <span class="text-xl">"⬆"</span>
                    <span>{move || state.t(Key::NavUpload)}</span>
                </button>
                <NavItem
                    href=CONTRIBUTIONS_PATH
                    icon="🏆"
                    label=Key::NavPoints
                    route=AppRoute::Contributions
                    current=current
                />
                <NavItem href=ABOUT_PATH icon="ℹ" label=Key::NavAbout route=AppRoute::About current=current />
            </div>
        </nav>
    }
}

#[component]
fn NavItem(
    href: &'static str,
    icon: &'static str,
    label: Key,
    route: AppRoute,
    current: Memo<AppRoute>,
) -> impl IntoView {
    let state = use_global();

    view! {
        <A
            href=href
            class=move || {
                let base = "flex flex-col items-center justify-center transition-colors";
                if current.get() == route {
                    format!("{} text-indigo-600 font-semibold", base)
                } else {
                    format!("{} text-gray-500 hover:text-gray-800", base)
                }
            }
        >
            <span class="text-xl">{icon}</span>
            <span>{move || state.t(label)}</span>
        </A>
    }
}
