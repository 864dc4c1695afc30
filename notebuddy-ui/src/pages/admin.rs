//! Admin Page
//!
//! Unlisted review panel. Shows the login form while logged out and the
//! pending-upload list once a session token is held.

use leptos::*;

use notebuddy::api::NotesApi;
use notebuddy::i18n::Key;
use notebuddy::models::{Credentials, PendingUpload, SessionToken};
use notebuddy::views::admin::review;
use notebuddy::views::{ReviewAction, ReviewPrompt};

use crate::state::global::{log_error, use_global, GlobalState};

/// Fetch the pending list for the current session
fn refresh(state: GlobalState, token: SessionToken) {
    spawn_local(async move {
        match state.api().pending_uploads(&token).await {
            Ok(items) => state.admin.update(|admin| admin.set_pending(items)),
            Err(e) => {
                log_error(&format!("Failed to load pending uploads: {}", e));
                state.admin.update(|admin| admin.failed(&e));
            }
        }
    });
}

#[component]
pub fn Admin() -> impl IntoView {
    let state = use_global();
    let logged_in = create_memo(move |_| state.admin.with(|admin| admin.is_logged_in()));

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{move || state.t(Key::AdminTitle)}</h1>
            {move || {
                if logged_in.get() {
                    view! { <ReviewPanel /> }.into_view()
                } else {
                    view! { <LoginForm /> }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let state = use_global();
    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (busy, set_busy) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);

        let credentials = Credentials::new(username.get_untracked(), password.get_untracked());
        spawn_local(async move {
            match state.api().admin_login(&credentials).await {
                Ok(token) => {
                    state.admin.update(|admin| admin.signed_in(token.clone()));
                    refresh(state, token);
                }
                Err(e) => {
                    log_error(&format!("Admin login failed: {}", e));
                    state.admin.update(|admin| admin.login_failed(&e));
                }
            }
            set_busy.try_set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="bg-white rounded-2xl p-5 shadow-sm space-y-3 max-w-sm">
            <input
                type="text"
                placeholder=move || state.t(Key::Username)
                autocomplete="username"
                prop:value=move || username.get()
                on:input=move |ev| set_username.set(event_target_value(&ev))
                class="w-full rounded-xl border border-gray-200 px-3 py-2"
            />
            <input
                type="password"
                placeholder=move || state.t(Key::Password)
                autocomplete="current-password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
                class="w-full rounded-xl border border-gray-200 px-3 py-2"
            />
            {move || state.admin.with(|admin| admin.error().map(|message| view! {
                <p class="text-sm text-rose-600">{message.to_string()}</p>
            }))}
            <button
                type="submit"
                disabled=move || busy.get()
                class="w-full py-3 rounded-xl bg-indigo-600 text-white font-semibold disabled:bg-gray-300"
            >
                {move || state.t(if busy.get() { Key::SigningIn } else { Key::SignIn })}
            </button>
        </form>
    }
}

#[component]
fn ReviewPanel() -> impl IntoView {
    let state = use_global();
    let prompt = create_rw_signal(None::<ReviewPrompt>);
    let pending = move || state.admin.with(|admin| admin.pending().to_vec());

    let reload = move |_| {
        if let Some(token) = state.admin.with_untracked(|admin| admin.token().cloned()) {
            refresh(state, token);
        }
    };

    view! {
        <div class="space-y-4">
            <div class="flex items-center gap-2">
                <span class="flex-1 text-gray-600">
                    {move || format!(
                        "{} {}",
                        state.admin.with(|admin| admin.pending().len()),
                        state.t(Key::PendingCount)
                    )}
                </span>
                <button on:click=reload class="px-3 py-2 rounded-xl border border-gray-200 text-sm">
                    {move || state.t(Key::Refresh)}
                </button>
                <button
                    on:click=move |_| {
                        prompt.set(None);
                        state.admin.update(|admin| admin.sign_out());
                    }
                    class="px-3 py-2 rounded-xl border border-gray-200 text-sm"
                >
                    {move || state.t(Key::LogOut)}
                </button>
            </div>

            {move || state.admin.with(|admin| admin.error().map(|message| view! {
                <p class="text-sm text-rose-600">{message.to_string()}</p>
            }))}

            <For
                each=pending
                key=|item| item.id.clone()
                children=move |item| view! { <PendingItem item=item prompt=prompt /> }
            />

            <Show when=move || pending().is_empty()>
                <p class="text-center text-gray-500 py-8">{move || state.t(Key::NoPending)}</p>
            </Show>

            <ReviewDialog prompt=prompt />
        </div>
    }
}

#[component]
fn PendingItem(item: PendingUpload, prompt: RwSignal<Option<ReviewPrompt>>) -> impl IntoView {
    let state = use_global();
    let id = item.id.clone();
    let reject_id = item.id.clone();
    let details = [&item.subject, &item.class_level, &item.college]
        .iter()
        .filter(|part| !part.trim().is_empty())
        .map(|part| part.as_str())
        .collect::<Vec<_>>()
        .join(" · ");

    view! {
        <div class="bg-white rounded-2xl p-4 shadow-sm space-y-2">
            <h3 class="font-semibold">{item.title.clone()}</h3>
            <p class="text-sm text-gray-500">{details}</p>
            {item.contributor_name.clone().map(|name| view! {
                <p class="text-sm text-gray-500">{move || format!("{}: {}", state.t(Key::UploadedBy), name)}</p>
            })}
            {item.drive_link.clone().map(|link| view! {
                <a href=link target="_blank" rel="noopener" class="text-sm text-indigo-600 underline">
                    {move || state.t(Key::OpenDocument)}
                </a>
            })}
            <div class="flex gap-2 pt-1">
                <button
                    on:click=move |_| prompt.set(Some(ReviewPrompt::accept(id.clone())))
                    class="flex-1 py-2 rounded-xl bg-emerald-600 text-white text-sm font-semibold"
                >
                    {move || state.t(Key::Accept)}
                </button>
                <button
                    on:click=move |_| prompt.set(Some(ReviewPrompt::reject(reject_id.clone())))
                    class="flex-1 py-2 rounded-xl bg-rose-600 text-white text-sm font-semibold"
                >
                    {move || state.t(Key::Reject)}
                </button>
            </div>
        </div>
    }
}

/// Collects points or a reason without blocking the page
#[component]
fn ReviewDialog(prompt: RwSignal<Option<ReviewPrompt>>) -> impl IntoView {
    let state = use_global();
    let (sending, set_sending) = create_signal(false);
    // Re-render on open/close only, so typing keeps focus
    let open = create_memo(move |_| {
        prompt.with(|p| p.as_ref().map(|p| (p.upload_id.clone(), p.action)))
    });

    let confirm = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = prompt.get_untracked() else {
            return;
        };
        let Some(token) = state.admin.with_untracked(|admin| admin.token().cloned()) else {
            return;
        };

        let decision = match current.confirm() {
            Ok(decision) => decision,
            Err(e) => {
                state.show_error(&e.to_string());
                return;
            }
        };

        set_sending.set(true);
        spawn_local(async move {
            let id = current.upload_id;
            match review(&state.api(), &token, &id, &decision).await {
                Ok(()) => {
                    state.admin.update(|admin| admin.reviewed(&id));
                    prompt.try_set(None);
                    state.show_success(state.t_untracked(match current.action {
                        ReviewAction::Accept => Key::UploadAccepted,
                        ReviewAction::Reject => Key::UploadRejected,
                    }));
                }
                Err(e) => {
                    log_error(&format!("Review of {} failed: {}", id, e));
                    state.admin.update(|admin| admin.failed(&e));
                    state.show_error(&e.user_message());
                }
            }
            set_sending.try_set(false);
        });
    };

    view! {
        {move || open.get().map(|(_, action)| {
            let (title, label, input_type) = match action {
                ReviewAction::Accept => (Key::AcceptUpload, Key::PointsToAward, "number"),
                ReviewAction::Reject => (Key::RejectUpload, Key::RejectReason, "text"),
            };
            view! {
                <div class="fixed inset-0 z-40 bg-black/40 grid place-items-center">
                    <form on:submit=confirm class="bg-white rounded-2xl p-5 w-80 space-y-3 shadow-xl">
                        <h2 class="text-lg font-semibold">{move || state.t(title)}</h2>
                        <label class="block">
                            <span class="text-sm text-gray-600">{move || state.t(label)}</span>
                            <input
                                type=input_type
                                min="0"
                                prop:value=move || {
                                    prompt.with(|p| p.as_ref().map(|p| p.input.clone()).unwrap_or_default())
                                }
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    prompt.update(|p| {
                                        if let Some(p) = p {
                                            p.input = value;
                                        }
                                    });
                                }
                                class="mt-1 w-full rounded-xl border border-gray-200 px-3 py-2"
                            />
                        </label>
                        <div class="flex gap-2">
                            <button
                                type="button"
                                on:click=move |_| prompt.set(None)
                                class="flex-1 py-2 rounded-xl border border-gray-200"
                            >
                                {move || state.t(Key::Cancel)}
                            </button>
                            <button
                                type="submit"
                                disabled=move || sending.get()
                                class="flex-1 py-2 rounded-xl bg-indigo-600 text-white font-semibold disabled:bg-gray-300"
                            >
                                {move || state.t(Key::Confirm)}
                            </button>
                        </div>
                    </form>
                </div>
            }
        })}
    }
}
