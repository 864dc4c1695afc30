//! Toasts above the bottom nav for upload, review and load results.
//! Tapping one dismisses it before its timer runs out.

use leptos::*;

use crate::state::global::use_global;

#[component]
pub fn Toast() -> impl IntoView {
    let state = use_global();

    view! {
        <div class="fixed bottom-20 inset-x-4 sm:left-auto sm:right-4 sm:w-80 z-50 space-y-2">
            <Notice message=state.success role="status" icon="✓" tone="bg-emerald-600" />
            <Notice message=state.error role="alert" icon="!" tone="bg-rose-600" />
        </div>
    }
}

/// Renders nothing while `message` is empty
#[component]
fn Notice(
    message: RwSignal<Option<String>>,
    role: &'static str,
    icon: &'static str,
    tone: &'static str,
) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <button
                    type="button"
                    role=role
                    on:click=move |_| message.set(None)
                    class=format!("w-full flex items-start gap-3 text-left text-white px-4 py-3 rounded-xl shadow-lg {}", tone)
                >
                    <span class="shrink-0 w-5 h-5 grid place-items-center rounded-full bg-white/25 text-xs font-bold">
                        {icon}
                    </span>
                    <span class="text-sm">{text}</span>
                </button>
            }
        })
    }
}
