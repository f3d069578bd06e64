//! UI Components
//!
//! Leptos components of the dashboard and analytics views.

mod calendar_heatmap;
mod category_manager;
mod chat_panel;
mod dashboard_view;
mod delete_confirm_button;
mod goal_filters;
mod goal_list;
mod goal_modal;
mod new_goal_form;
mod stats_view;

pub use calendar_heatmap::CalendarHeatmap;
pub use category_manager::CategoryManager;
pub use chat_panel::ChatPanel;
pub use dashboard_view::DashboardView;
pub use delete_confirm_button::DeleteConfirmButton;
pub use goal_filters::GoalFilterBar;
pub use goal_list::GoalList;
pub use goal_modal::GoalModal;
pub use new_goal_form::NewGoalForm;
pub use stats_view::StatsView;
