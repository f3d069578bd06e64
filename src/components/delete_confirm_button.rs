//! Delete Confirm Button
//!
//! Two-step delete: a × button that turns into a prompt with ✓/✗.

use leptos::prelude::*;

/// Nothing is deleted until ✓ is pressed. Clicks never reach the parent row.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    /// Question shown while confirming, e.g. the category reassignment warning
    #[prop(into)]
    prompt: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);
    let arm = move |ev: web_sys::MouseEvent, value: bool| {
        ev.stop_propagation();
        armed.set(value);
    };
    let hint = prompt.clone();

    view! {
        <Show
            when=move || armed.get()
            fallback=move || view! {
                <button class=button_class.clone() title=hint.clone() on:click=move |ev| arm(ev, true)>
                    "×"
                </button>
            }
        >
            <span class="delete-confirm" on:click=|ev| ev.stop_propagation()>
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        arm(ev, false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button class="cancel-btn" on:click=move |ev| arm(ev, false)>"✗"</button>
            </span>
        </Show>
    }
}
