//! Submission Modal Component
//!
//! Dialog for submitting a quest solution: free text plus an optional
//! file attachment, sent as multipart form data by the caller.

use leptos::*;

use crate::state::global::{GlobalState, QuestEvent};

/// Modal for submitting a solution to one quest
#[component]
pub fn SubmissionModal(
    event: QuestEvent,
    on_close: impl Fn() + 'static + Clone,
    on_submit: impl Fn(String, Option<web_sys::File>) + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (text, set_text) = create_signal(String::new());
    let (file, set_file) = create_signal(None::<web_sys::File>);

    let on_close_for_x = on_close.clone();
    let on_close_for_cancel = on_close;

    let on_file_change = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        set_file.set(input.files().and_then(|list| list.get(0)));
    };

    let submit = move |_| {
        let t = text.get();
        let f = file.get();
        if t.trim().is_empty() && f.is_none() {
            state.show_error("Provide a text answer or attach a file");
            return;
        }
        on_submit(t, f);
    };

    view! {
        <div class="fixed inset-0 bg-gray-900/40 backdrop-blur-md flex items-center justify-center z-50 p-4">
            <div class="bg-white border border-primary/20 rounded-2xl p-6 w-full max-w-md max-h-[90vh] overflow-y-auto shadow-2xl">
                <div class="flex items-center justify-between mb-4">
                    <h3 class="text-xl font-bold text-text">"Submit Your Solution"</h3>
                    <button
                        on:click=move |_| on_close_for_x()
                        class="text-accent hover:text-accent/70 text-2xl font-bold"
                    >
                        "×"
                    </button>
                </div>

                <p class="text-gray-500 text-sm mb-4">{event.title.clone()}</p>

                <div class="space-y-4">
                    <textarea
                        placeholder="Describe your approach, solution, or answer..."
                        prop:value=move || text.get()
                        on:input=move |ev| set_text.set(event_target_value(&ev))
                        rows="4"
                        class="w-full px-3 py-3 bg-white border border-primary/30 rounded-xl text-text
                               placeholder-gray-400 focus:border-primary focus:outline-none transition-colors"
                    />

                    <div>
                        <label class="block text-sm font-medium mb-2 text-gray-600">
                            "Attachment (Optional)"
                        </label>
                        <input
                            type="file"
                            on:change=on_file_change
                            class="w-full text-sm text-gray-500 file:mr-4 file:py-2 file:px-4
                                   file:rounded-full file:border-0 file:text-sm file:font-semibold
                                   file:bg-primary/10 file:text-primary hover:file:bg-primary/20
                                   cursor-pointer border border-primary/30 rounded-xl transition-colors"
                        />
                    </div>
                </div>

                <div class="flex gap-3 mt-6">
                    <button
                        on:click=submit
                        disabled=move || text.with(|t| t.trim().is_empty()) && file.with(|f| f.is_none())
                        class="flex-1 bg-primary hover:bg-primary/90 disabled:bg-gray-300
                               disabled:cursor-not-allowed text-white py-2 px-4 rounded-xl
                               font-medium transition-colors flex items-center justify-center gap-2"
                    >
                        "Submit Solution"
                    </button>
                    <button
                        on:click=move |_| on_close_for_cancel()
                        class="bg-gray-200 text-text px-4 py-2 rounded-xl transition-colors hover:bg-gray-300"
                    >
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}
