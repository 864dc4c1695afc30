//! Language Picker
//!
//! Modal listing the supported languages. Picking one switches the whole UI
//! in place.

use leptos::*;

use notebuddy::i18n::{Key, Language};

use crate::state::global::use_global;

#[component]
pub fn LanguagePicker() -> impl IntoView {
    let state = use_global();
    let close = move || state.language_picker_open.set(false);

    view! {
        <Show when=move || state.language_picker_open.get()>
            <div class="fixed inset-0 z-40 bg-black/40 grid place-items-center" on:click=move |_| close()>
                <div
                    class="bg-white rounded-2xl p-5 w-72 shadow-xl"
                    on:click=|ev| ev.stop_propagation()
                >
                    <h2 class="text-lg font-semibold mb-3">{move || state.t(Key::Language)}</h2>
                    <div class="space-y-2">
                        {Language::ALL
                            .into_iter()
                            .map(|language| view! {
                                <button
                                    on:click=move |_| {
                                        state.set_language(language);
                                        close();
                                    }
                                    class=move || {
                                        let base = "w-full text-left px-4 py-2 rounded-xl border";
                                        if state.language.get() == language {
                                            format!("{} border-indigo-600 bg-indigo-50 font-semibold", base)
                                        } else {
                                            format!("{} border-gray-200 hover:bg-gray-50", base)
                                        }
                                    }
                                >
                                    {language.native_name()}
                                </button>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </Show>
    }
}
