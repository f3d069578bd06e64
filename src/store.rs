//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use reactive_stores::Store;

use goalboard_core::chat::ChatSession;
use goalboard_core::filters::GoalListState;
use goalboard_core::goal_form::NewGoalDraft;
use goalboard_core::heatmap::DayMarker;
use goalboard_core::models::{Category, Goal};
use goalboard_core::RequestEpoch;

/// Dashboard view-model with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Goals matching the current filters (replaced on every fetch)
    pub goals: Vec<Goal>,
    pub is_loading: bool,
    /// Filter/sort/view state machine
    pub list: GoalListState,
    pub categories: Vec<Category>,
    pub categories_epoch: RequestEpoch,
    /// Calendar dots over the unfiltered goal set
    pub heatmap: Vec<DayMarker>,
    pub heatmap_epoch: RequestEpoch,
    /// Goal creation form
    pub draft: NewGoalDraft,
    /// Goal shown in the detail modal
    pub selected_goal: Option<Goal>,
    pub chat: ChatSession,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            is_loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;
