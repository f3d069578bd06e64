//! Dashboard View
//!
//! Calendar, goal creation, filters, goal list and the detail modal. Owns the
//! dashboard store and provides it to children through [`DashboardContext`].

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{CalendarHeatmap, CategoryManager, GoalFilterBar, GoalList, GoalModal, NewGoalForm};
use crate::context::{set_body_scroll_locked, DashboardContext};
use crate::store::DashboardState;

#[component]
pub fn DashboardView() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let store = Store::new(DashboardState::new());
    let ctx = DashboardContext::new(store, api);
    provide_context(ctx);

    // Initial load
    Effect::new(move |_| {
        ctx.refetch_goals();
        ctx.refresh_heatmap();
        ctx.refetch_categories();
    });

    on_cleanup(|| set_body_scroll_locked(false));

    view! {
        <div class="dashboard">
            <aside class="dashboard-side">
                <CalendarHeatmap />
                <NewGoalForm />
                <CategoryManager />
            </aside>
            <section class="dashboard-main">
                <GoalFilterBar />
                <GoalList />
            </section>
            <GoalModal />
        </div>
    }
}
