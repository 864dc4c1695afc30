//! Upload Dialog
//!
//! Form for contributing a note. The PDF itself lives in Google Drive; only
//! its link and metadata are submitted for review.

use leptos::*;

use notebuddy::api::NotesApi;
use notebuddy::i18n::Key;
use notebuddy::views::{UploadForm, UploadOutcome};

use crate::state::global::{log_error, use_global};

#[component]
pub fn UploadDialog() -> impl IntoView {
    let state = use_global();
    let submitting = create_memo(move |_| state.upload.with(|flow| flow.is_submitting()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let submission = match state.upload.try_update(|flow| flow.start()) {
            Some(Ok(Some(submission))) => submission,
            Some(Err(e)) => {
                state.show_error(&e.to_string());
                return;
            }
            // Already submitting
            _ => return,
        };

        spawn_local(async move {
            let result = state.api().submit_upload(&submission).await;
            if let Err(e) = &result {
                log_error(&format!("Upload failed: {}", e));
            }

            match state.upload.try_update(|flow| flow.finish(&result)) {
                Some(UploadOutcome::Sent) => {
                    state.show_success(state.t_untracked(Key::UploadSuccess))
                }
                Some(UploadOutcome::Rejected(message)) | Some(UploadOutcome::NetworkFailed(message)) => {
                    state.show_error(&message)
                }
                None => {}
            }
        });
    };

    view! {
        <Show when=move || state.upload.with(|flow| flow.is_open())>
            <div class="fixed inset-0 z-40 bg-black/40 flex items-end sm:items-center justify-center">
                <form
                    on:submit=on_submit
                    class="bg-white w-full sm:max-w-lg rounded-t-3xl sm:rounded-3xl p-5 space-y-3 max-h-[90vh] overflow-y-auto"
                >
                    <h2 class="text-lg font-semibold">{move || state.t(Key::ContributeNotes)}</h2>
                    <p class="text-sm text-gray-500">{move || state.t(Key::UploadHint)}</p>

                    <FormField
                        label=Key::FieldTitle
                        get=|form| form.title.clone()
                        set=|form, value| form.title = value
                        required=true
                    />
                    <div class="grid grid-cols-2 gap-3">
                        <FormField
                            label=Key::FieldClass
                            get=|form| form.class_level.clone()
                            set=|form, value| form.class_level = value
                        />
                        <FormField
                            label=Key::FieldCollege
                            get=|form| form.college.clone()
                            set=|form, value| form.college = value
                        />
                    </div>
                    <FormField
                        label=Key::FieldSubject
                        get=|form| form.subject.clone()
                        set=|form, value| form.subject = value
                    />
                    <FormField
                        label=Key::FieldTags
                        get=|form| form.tags.clone()
                        set=|form, value| form.tags = value
                    />
                    <FormField
                        label=Key::FieldPages
                        get=|form| form.pages.clone()
                        set=|form, value| form.pages = value
                        input_type="number"
                    />
                    <FormField
                        label=Key::FieldDriveLink
                        get=|form| form.drive_link.clone()
                        set=|form, value| form.drive_link = value
                        input_type="url"
                        required=true
                    />
                    <FormField
                        label=Key::FieldName
                        get=|form| form.contributor_name.clone()
                        set=|form, value| form.contributor_name = value
                    />

                    <div class="flex gap-3 pt-2">
                        <button
                            type="button"
                            on:click=move |_| state.upload.update(|flow| flow.close())
                            disabled=move || submitting.get()
                            class="flex-1 py-3 rounded-xl border border-gray-200 font-medium"
                        >
                            {move || state.t(Key::Cancel)}
                        </button>
                        <button
                            type="submit"
                            disabled=move || submitting.get()
                            class="flex-1 py-3 rounded-xl bg-indigo-600 text-white font-semibold
                                   disabled:bg-gray-300 disabled:cursor-not-allowed"
                        >
                            {move || if submitting.get() {
                                state.t(Key::Submitting)
                            } else {
                                state.t(Key::Submit)
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}

#[component]
fn FormField(
    label: Key,
    get: fn(&UploadForm) -> String,
    set: fn(&mut UploadForm, String),
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = false)]
    required: bool,
) -> impl IntoView {
    let state = use_global();

    view! {
        <label class="block">
            <span class="text-sm text-gray-600">{move || state.t(label)}</span>
            <input
                type=input_type
                required=required
                min=(input_type == "number").then_some("0")
                prop:value=move || state.upload.with(|flow| get(&flow.form))
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.upload.update(|flow| set(&mut flow.form, value));
                }
                class="mt-1 w-full rounded-xl border border-gray-200 px-3 py-2
                       focus:border-indigo-500 focus:outline-none"
            />
        </label>
    }
}
