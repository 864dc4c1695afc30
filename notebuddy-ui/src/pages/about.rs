//! About Page

use leptos::*;

use notebuddy::i18n::Key;

use crate::state::global::use_global;

const FAQ: [(Key, Key); 3] = [
    (Key::FaqUploadQ, Key::FaqUploadA),
    (Key::FaqPointsQ, Key::FaqPointsA),
    (Key::FaqReviewQ, Key::FaqReviewA),
];

#[component]
pub fn About() -> impl IntoView {
    let state = use_global();

    view! {
        <div class="space-y-6">
            <section>
                <h1 class="text-2xl font-bold">{move || state.t(Key::AboutTitle)}</h1>
                <p class="mt-2 text-gray-600">{move || state.t(Key::AboutBody)}</p>
            </section>

            <section>
                <h2 class="text-lg font-semibold mb-3">{move || state.t(Key::FaqHeading)}</h2>
                <div class="space-y-2">
                    {FAQ
                        .into_iter()
                        .map(|(question, answer)| view! {
                            <details class="bg-white rounded-2xl p-4 shadow-sm">
                                <summary class="font-medium cursor-pointer">
                                    {move || state.t(question)}
                                </summary>
                                <p class="mt-2 text-sm text-gray-600">{move || state.t(answer)}</p>
                            </details>
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
