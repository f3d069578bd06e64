//! New Goal Form Component
//!
//! Form for creating goals with a recurrence selector.

use leptos::prelude::*;
use leptos::task::spawn_local;

use goalboard_core::models::Frequency;

use crate::context::use_dashboard;
use crate::store::DashboardStateStoreFields;

#[component]
pub fn NewGoalForm() -> impl IntoView {
    let ctx = use_dashboard();
    let store = ctx.store;

    let (is_submitting, set_is_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    // Picking a calendar day prefills the deadline
    let prefill = Memo::new(move |_| store.list().read().new_goal_deadline().map(str::to_string));
    Effect::new(move |_| {
        let deadline = prefill.get().unwrap_or_default();
        if store.draft().read_untracked().deadline != deadline {
            store.draft().write().deadline = deadline;
        }
    });

    let create_goal = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        let draft = store.draft().get_untracked();
        let request = match draft.to_request() {
            Ok(request) => request,
            Err(e) => {
                set_error.set(Some(e.user_message()));
                return;
            }
        };

        set_is_submitting.set(true);
        set_error.set(None);
        let api = ctx.api();
        spawn_local(async move {
            match api.create_goal(&request).await {
                Ok(()) => {
                    store.draft().write().clear_text();
                    ctx.refresh_goals_and_calendar();
                }
                Err(e) => {
                    log::error!("[NewGoal] Error adding goal: {}", e);
                    set_error.set(Some(e.user_message()));
                }
            }
            set_is_submitting.set(false);
        });
    };

    let frequency = move || store.draft().read().frequency;
    let category = move || store.draft().read().category_id;

    view! {
        <form class="new-goal-form" on:submit=create_goal>
            <h3>"New goal"</h3>
            <input
                type="text"
                placeholder="What do you want to get done?"
                prop:value=move || store.draft().read().title.clone()
                on:input=move |ev| store.draft().write().title = event_target_value(&ev)
            />
            <input
                type="datetime-local"
                prop:value=move || store.draft().read().deadline.clone()
                on:input=move |ev| store.draft().write().deadline = event_target_value(&ev)
            />
            <textarea
                placeholder="Details (optional)"
                prop:value=move || store.draft().read().description.clone()
                on:input=move |ev| store.draft().write().description = event_target_value(&ev)
            ></textarea>

            <select on:change=move |ev| {
                store.draft().write().category_id = event_target_value(&ev).parse::<u32>().ok();
            }>
                <option value="" selected=move || category().is_none()>"Uncategorized"</option>
                <For
                    each=move || store.categories().get()
                    key=|c| c.id
                    children=move |c| {
                        let id = c.id;
                        view! {
                            <option value=id.to_string() selected=move || category() == Some(id)>
                                {c.name}
                            </option>
                        }
                    }
                />
            </select>

            <div class="type-selector-row">
                {Frequency::ALL.into_iter().map(|value| view! {
                    <button
                        type="button"
                        class=move || if frequency() == value { "type-btn small active" } else { "type-btn small" }
                        on:click=move |_| store.draft().write().frequency = value
                    >
                        {value.label()}
                    </button>
                }).collect_view()}
            </div>

            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}

            <button type="submit" disabled=move || is_submitting.get()>
                {move || if is_submitting.get() { "Adding..." } else { "Add goal" }}
            </button>
        </form>
    }
}
