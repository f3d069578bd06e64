//! Goal Detail Modal
//!
//! Details and chat tabs for the selected goal.

use leptos::prelude::*;

use goalboard_core::models::Goal;
use goalboard_core::palette::status_label_color;

use crate::components::ChatPanel;
use crate::context::use_dashboard;
use crate::markdown::parse_markdown;
use crate::store::DashboardStateStoreFields;

#[derive(Clone, Copy, PartialEq)]
enum ModalTab {
    Details,
    Chat,
}

#[component]
pub fn GoalModal() -> impl IntoView {
    let ctx = use_dashboard();
    let store = ctx.store;
    // Memo so chat updates elsewhere in the store don't rebuild the modal
    let selected = Memo::new(move |_| store.selected_goal().get());

    move || selected.get().map(|goal| view! { <GoalModalContent goal=goal /> })
}

#[component]
fn GoalModalContent(goal: Goal) -> impl IntoView {
    let ctx = use_dashboard();
    let (tab, set_tab) = signal(ModalTab::Details);

    let tab_class = move |which: ModalTab| {
        move || if tab.get() == which { "modal-tab active" } else { "modal-tab" }
    };

    let status_color = status_label_color(goal.status.label());
    let description_html = parse_markdown(goal.description.as_deref().unwrap_or_default());
    let has_description = !description_html.is_empty();
    let deadline = goal.deadline_pretty.clone().unwrap_or_else(|| "No Deadline".to_string());
    let category = goal.category.clone().unwrap_or_else(|| "Uncategorized".to_string());

    view! {
        <div class="modal-backdrop" on:click=move |_| ctx.close_goal()>
            <div class="modal-dialog" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{goal.title.clone()}</h2>
                    <button class="close-btn" on:click=move |_| ctx.close_goal()>"×"</button>
                </div>

                <div class="modal-tabs">
                    <button class=tab_class(ModalTab::Details) on:click=move |_| set_tab.set(ModalTab::Details)>
                        "Details"
                    </button>
                    <button class=tab_class(ModalTab::Chat) on:click=move |_| set_tab.set(ModalTab::Chat)>
                        "AI Coach"
                    </button>
                </div>

                <div class="modal-body" style:display=move || if tab.get() == ModalTab::Details { "block" } else { "none" }>
                    <dl class="goal-details">
                        <dt>"Status"</dt>
                        <dd>
                            <span class="status-badge" style=format!("background-color: {};", status_color)>
                                {goal.status.label()}
                            </span>
                        </dd>
                        <dt>"Deadline"</dt>
                        <dd>{deadline}</dd>
                        <dt>"Category"</dt>
                        <dd>{category}</dd>
                        <dt>"Repeats"</dt>
                        <dd>{if goal.is_recurring { "Yes" } else { "No" }}</dd>
                    </dl>
                    {if has_description {
                        view! { <div class="goal-description markdown-body" inner_html=description_html></div> }.into_any()
                    } else {
                        view! { <p class="muted">"No description."</p> }.into_any()
                    }}
                </div>

                // Kept mounted so the conversation survives tab switches
                <div class="modal-body" style:display=move || if tab.get() == ModalTab::Chat { "block" } else { "none" }>
                    <ChatPanel />
                </div>
            </div>
        </div>
    }
}
