//! Goal Filter Bar Component
//!
//! Search box, category selector, sort order and reset. Every change refetches
//! immediately.

use leptos::prelude::*;

use goalboard_core::filters::{GoalListState, SortOrder};

use crate::context::use_dashboard;
use crate::store::DashboardStateStoreFields;

#[component]
pub fn GoalFilterBar() -> impl IntoView {
    let ctx = use_dashboard();
    let store = ctx.store;

    let search = move || store.list().read().filters().search.clone();
    let category = move || store.list().read().filters().category_id;
    let sort = move || store.list().read().filters().sort;

    view! {
        <div class="goal-filters">
            <input
                type="search"
                class="filter-search"
                placeholder="Search goals..."
                prop:value=search
                on:input=move |ev| {
                    let query = event_target_value(&ev);
                    ctx.update_filters(move |list| list.set_search(query));
                }
            />

            <select
                class="filter-category"
                on:change=move |ev| {
                    let category_id = event_target_value(&ev).parse::<u32>().ok();
                    ctx.update_filters(move |list| list.set_category(category_id));
                }
            >
                <option value="" selected=move || category().is_none()>"All categories"</option>
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

            <select
                class="filter-sort"
                on:change=move |ev| {
                    if let Some(order) = SortOrder::from_param(&event_target_value(&ev)) {
                        ctx.update_filters(move |list| list.set_sort(order));
                    }
                }
            >
                {SortOrder::ALL.into_iter().map(|order| view! {
                    <option value=order.as_param() selected=move || sort() == order>
                        {order.label()}
                    </option>
                }).collect_view()}
            </select>

            <button class="filter-reset" on:click=move |_| ctx.update_filters(GoalListState::reset_filters)>
                "Show all"
            </button>
        </div>
    }
}
