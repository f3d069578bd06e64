//! Dashboard Context
//!
//! Store plus REST client, provided via the Leptos Context API. All fetches
//! that write into the store go through here so their epochs are checked.

use leptos::prelude::*;
use leptos::task::spawn_local;

use goalboard_core::categories::reconcile_selection;
use goalboard_core::filters::{FetchTicket, GoalListState};
use goalboard_core::models::Goal;
use goalboard_core::Settled;

use crate::api::ApiClient;
use crate::store::{DashboardStateStoreFields, DashboardStore};

#[derive(Clone, Copy)]
pub struct DashboardContext {
    pub store: DashboardStore,
    api: StoredValue<ApiClient>,
}

impl DashboardContext {
    pub fn new(store: DashboardStore, api: ApiClient) -> Self {
        Self {
            store,
            api: StoredValue::new(api),
        }
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    /// Apply a filter mutation and fetch its ticket.
    pub fn update_filters(&self, mutate: impl FnOnce(&mut GoalListState) -> FetchTicket) {
        let ticket = {
            let list_field = self.store.list();
            let mut list = list_field.write();
            mutate(&mut *list)
        };
        self.fetch_goals(ticket);
    }

    pub fn refetch_goals(&self) {
        self.update_filters(GoalListState::refetch);
    }

    fn fetch_goals(&self, ticket: FetchTicket) {
        let store = self.store;
        let api = self.api();
        store.is_loading().set(true);
        spawn_local(async move {
            let result = api.list_goals(&ticket.query).await;
            let settled = store.list().read_untracked().settle(ticket.epoch, result);
            match settled {
                Settled::Stale => return,
                Settled::Fresh(goals) => {
                    log::debug!("[Dashboard] Loaded {} goals", goals.len());
                    store.goals().set(goals);
                }
                Settled::Failed(e) => log::error!("[Dashboard] Error fetching goals: {}", e),
            }
            store.is_loading().set(false);
        });
    }

    /// Rebuild calendar markers; on failure the previous markers stay.
    pub fn refresh_heatmap(&self) {
        let store = self.store;
        let api = self.api();
        let epoch = store.heatmap_epoch().write().issue();
        spawn_local(async move {
            let result = api.load_heatmap().await;
            let settled = store.heatmap_epoch().read_untracked().settle(epoch, result);
            match settled {
                Settled::Fresh(markers) => store.heatmap().set(markers),
                Settled::Failed(e) => log::error!("[Calendar] Could not load heatmap: {}", e),
                Settled::Stale => {}
            }
        });
    }

    pub fn refetch_categories(&self) {
        let store = self.store;
        let api = self.api();
        let epoch = store.categories_epoch().write().issue();
        spawn_local(async move {
            let result = api.list_categories().await;
            let settled = store.categories_epoch().read_untracked().settle(epoch, result);
            match settled {
                Settled::Fresh(categories) => {
                    let selected = store.draft().read_untracked().category_id;
                    let reconciled = reconcile_selection(selected, &categories);
                    if reconciled != selected {
                        store.draft().write().category_id = reconciled;
                    }
                    store.categories().set(categories);
                }
                Settled::Failed(e) => log::error!("[Categories] Error loading categories: {}", e),
                Settled::Stale => {}
            }
        });
    }

    /// Goals changed server-side: refresh both the list and the calendar.
    pub fn refresh_goals_and_calendar(&self) {
        self.refetch_goals();
        self.refresh_heatmap();
    }

    pub fn open_goal(&self, goal: Goal) {
        self.store.chat().write().open(goal.id);
        self.store.selected_goal().set(Some(goal));
        set_body_scroll_locked(true);
    }

    pub fn close_goal(&self) {
        self.store.chat().write().close();
        self.store.selected_goal().set(None);
        set_body_scroll_locked(false);
    }
}

pub fn use_dashboard() -> DashboardContext {
    expect_context::<DashboardContext>()
}

pub fn set_body_scroll_locked(locked: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let value = if locked { "hidden" } else { "auto" };
        let _ = body.style().set_property("overflow", value);
    }
}
