//! Category Manager Component
//!
//! Collapsible panel to add and delete categories.

use leptos::prelude::*;
use leptos::task::spawn_local;

use goalboard_core::categories::delete_prompt;
use goalboard_core::models::Category;

use crate::components::DeleteConfirmButton;
use crate::context::use_dashboard;
use crate::store::DashboardStateStoreFields;

#[component]
pub fn CategoryManager() -> impl IntoView {
    let ctx = use_dashboard();
    let store = ctx.store;

    let (is_open, set_is_open) = signal(false);
    let (new_name, set_new_name) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let create_category = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get_untracked();
        if name.trim().is_empty() {
            return;
        }
        let api = ctx.api();
        spawn_local(async move {
            match api.create_category(name.trim()).await {
                Ok(()) => {
                    set_new_name.set(String::new());
                    set_error.set(None);
                    ctx.refetch_categories();
                }
                Err(e) => {
                    log::error!("[Categories] Create failed: {}", e);
                    set_error.set(Some(e.user_message()));
                }
            }
        });
    };

    view! {
        <div class="category-manager">
            <button class="category-toggle" on:click=move |_| set_is_open.update(|v| *v = !*v)>
                {move || if is_open.get() { "Hide categories" } else { "Manage categories" }}
            </button>

            <Show when=move || is_open.get()>
                <div class="category-panel">
                    <form class="category-add-form" on:submit=create_category>
                        <input
                            type="text"
                            placeholder="New category..."
                            prop:value=move || new_name.get()
                            on:input=move |ev| set_new_name.set(event_target_value(&ev))
                        />
                        <button type="submit">"+"</button>
                    </form>
                    {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}

                    <ul class="category-list">
                        <For
                            each=move || store.categories().get()
                            key=|c| (c.id, c.count)
                            children=move |category| view! { <CategoryRow category=category /> }
                        />
                    </ul>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn CategoryRow(category: Category) -> impl IntoView {
    let ctx = use_dashboard();
    let id = category.id;

    // Server moves the category's goals to "Uncategorized"
    let delete = Callback::new(move |_: ()| {
        let api = ctx.api();
        spawn_local(async move {
            if let Err(e) = api.delete_category(id).await {
                log::error!("[Categories] Delete {} failed: {}", id, e);
            }
            ctx.refetch_categories();
            ctx.refetch_goals();
        });
    });

    view! {
        <li class="category-row">
            <span class="category-name">{category.name}</span>
            <span class="category-count">{category.count}</span>
            <DeleteConfirmButton
                button_class="category-delete-btn"
                prompt=delete_prompt(category.count)
                on_confirm=delete
            />
        </li>
    }
}
