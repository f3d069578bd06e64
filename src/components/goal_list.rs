//! Goal List Component
//!
//! Filtered goal cards with status actions. Clicking a card opens the detail modal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use goalboard_core::filters::ViewMode;
use goalboard_core::models::Goal;
use goalboard_core::palette::status_label_color;

use crate::components::DeleteConfirmButton;
use crate::context::use_dashboard;
use crate::store::DashboardStateStoreFields;

#[component]
pub fn GoalList() -> impl IntoView {
    let ctx = use_dashboard();
    let store = ctx.store;

    let title = move || store.list().read().list_title().to_string();
    let is_empty = move || store.goals().read().is_empty();
    let mode_hint = move || match store.list().read().view_mode() {
        ViewMode::Calendar => None,
        ViewMode::ListByDate => Some("Filtered by day"),
        ViewMode::ListBySearch => Some("Search results"),
    };

    view! {
        <section class="goal-list">
            <div class="goal-list-header">
                <h2>{title}</h2>
                {move || mode_hint().map(|hint| view! { <span class="mode-hint">{hint}</span> })}
                <span class="goal-count">{move || format!("{} goals", store.goals().read().len())}</span>
            </div>

            <Show when=move || store.is_loading().get() && is_empty()>
                <p class="muted">"Loading..."</p>
            </Show>
            <Show when=move || !store.is_loading().get() && is_empty()>
                <p class="muted">"No goals match these filters."</p>
            </Show>

            <For
                each=move || store.goals().get()
                key=|goal| goal.clone()
                children=move |goal| view! { <GoalCard goal=goal /> }
            />
        </section>
    }
}

#[component]
fn GoalCard(goal: Goal) -> impl IntoView {
    let ctx = use_dashboard();
    let id = goal.id;
    let status = goal.status;
    let status_color = status_label_color(status.label());

    let advance = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let api = ctx.api();
        spawn_local(async move {
            match api.advance_goal(id).await {
                Ok(()) => ctx.refresh_goals_and_calendar(),
                Err(e) => log::error!("[GoalList] Could not advance goal {}: {}", id, e),
            }
        });
    };

    let delete = Callback::new(move |_: ()| {
        let api = ctx.api();
        spawn_local(async move {
            if let Err(e) = api.delete_goal(id).await {
                log::error!("[GoalList] Could not delete goal {}: {}", id, e);
            }
            ctx.refresh_goals_and_calendar();
        });
    });

    let deadline = goal
        .deadline_pretty
        .clone()
        .unwrap_or_else(|| "No Deadline".to_string());
    let category = goal.category.clone();
    let is_recurring = goal.is_recurring;
    let title = goal.title.clone();

    view! {
        <article
            class="goal-card"
            style=format!("border-left-color: {};", status_color)
            on:click=move |_| ctx.open_goal(goal.clone())
        >
            <div class="goal-card-main">
                <h3 class="goal-title">{title}</h3>
                <div class="goal-meta">
                    <span class="status-badge" style=format!("background-color: {};", status_color)>
                        {status.label()}
                    </span>
                    <span class="goal-deadline">{deadline}</span>
                    {category.map(|name| view! { <span class="goal-category">{name}</span> })}
                    {is_recurring.then(|| view! { <span class="goal-recurring" title="Recurring">"↻"</span> })}
                </div>
            </div>
            <div class="goal-actions">
                {status.advance_label().map(|label| view! {
                    <button class="advance-btn" on:click=advance>{label}</button>
                })}
                <DeleteConfirmButton
                    button_class="delete-btn"
                    prompt="Delete this goal permanently?"
                    on_confirm=delete
                />
            </div>
        </article>
    }
}
