//! Goal List Filters
//!
//! Filter/sort/view state of the goal list. Every mutation returns a
//! [`FetchTicket`]; responses are applied only if their epoch is still current
//! (see [`GoalListState::settle`]).

use chrono::{NaiveDate, NaiveTime};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::epoch::{RequestEpoch, Settled};
use crate::error::ApiError;
use crate::models::Goal;

pub const DEFAULT_LIST_TITLE: &str = "All Tasks";

const QUERY_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`');

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    DateAsc,
    DateDesc,
    CreatedDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::DateAsc, SortOrder::DateDesc, SortOrder::CreatedDesc];

    pub fn as_param(self) -> &'static str {
        match self {
            SortOrder::DateAsc => "date_asc",
            SortOrder::DateDesc => "date_desc",
            SortOrder::CreatedDesc => "created_desc",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_param() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::DateAsc => "Deadline (soonest)",
            SortOrder::DateDesc => "Deadline (latest)",
            SortOrder::CreatedDesc => "Newest first",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Calendar,
    ListByDate,
    ListBySearch,
}

/// The four orthogonal filter axes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalFilters {
    pub search: String,
    pub sort: SortOrder,
    pub category_id: Option<u32>,
    pub date: Option<NaiveDate>,
}

/// Query for `GET /api/goals`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalQuery {
    pub q: String,
    pub sort_by: SortOrder,
    pub category_id: Option<u32>,
    pub date: Option<NaiveDate>,
}

impl GoalQuery {
    /// Unfiltered, default-sorted query
    pub fn all() -> Self {
        Self::default()
    }

    pub fn to_query_string(&self) -> String {
        let category = self.category_id.map(|id| id.to_string()).unwrap_or_default();
        let mut query = format!(
            "q={}&sort_by={}&category_id={}",
            utf8_percent_encode(&self.q, QUERY_ENCODE_SET),
            self.sort_by.as_param(),
            category,
        );
        if let Some(date) = self.date {
            query.push_str(&format!("&date={}", date.format("%Y-%m-%d")));
        }
        query
    }
}

impl From<&GoalFilters> for GoalQuery {
    fn from(filters: &GoalFilters) -> Self {
        Self {
            q: filters.search.clone(),
            sort_by: filters.sort,
            category_id: filters.category_id,
            date: filters.date,
        }
    }
}

/// A goal-list request the caller must issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub epoch: u64,
    pub query: GoalQuery,
}

/// Filter, sort and view state of the goal list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalListState {
    filters: GoalFilters,
    list_title: String,
    view_mode: ViewMode,
    /// Deadline prefill for the creation form (`YYYY-MM-DDTHH:MM`).
    new_goal_deadline: Option<String>,
    epoch: RequestEpoch,
}

impl Default for GoalListState {
    fn default() -> Self {
        Self {
            filters: GoalFilters::default(),
            list_title: DEFAULT_LIST_TITLE.to_string(),
            view_mode: ViewMode::Calendar,
            new_goal_deadline: None,
            epoch: RequestEpoch::new(),
        }
    }
}

impl GoalListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &GoalFilters {
        &self.filters
    }

    pub fn list_title(&self) -> &str {
        &self.list_title
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn new_goal_deadline(&self) -> Option<&str> {
        self.new_goal_deadline.as_deref()
    }

    /// Ticket for the current filters
    pub fn refetch(&mut self) -> FetchTicket {
        self.view_mode = self.derive_view_mode();
        FetchTicket {
            epoch: self.epoch.issue(),
            query: GoalQuery::from(&self.filters),
        }
    }

    pub fn select_date(&mut self, date: NaiveDate, now: NaiveTime) -> FetchTicket {
        self.filters.date = Some(date);
        self.list_title = format!("Tasks for {}", date.format("%Y-%m-%d"));
        self.new_goal_deadline = Some(format!(
            "{}T{}",
            date.format("%Y-%m-%d"),
            now.format("%H:%M")
        ));
        self.refetch()
    }

    /// Back to the unfiltered, default-sorted list.
    pub fn reset_filters(&mut self) -> FetchTicket {
        self.filters = GoalFilters::default();
        self.list_title = DEFAULT_LIST_TITLE.to_string();
        self.new_goal_deadline = None;
        self.refetch()
    }

    pub fn set_search(&mut self, search: impl Into<String>) -> FetchTicket {
        self.filters.search = search.into();
        self.refetch()
    }

    pub fn set_category(&mut self, category_id: Option<u32>) -> FetchTicket {
        self.filters.category_id = category_id;
        self.refetch()
    }

    pub fn set_sort(&mut self, sort: SortOrder) -> FetchTicket {
        self.filters.sort = sort;
        self.refetch()
    }

    /// Check a goal-list response against the latest ticket.
    pub fn settle(&self, epoch: u64, result: Result<Vec<Goal>, ApiError>) -> Settled<Vec<Goal>> {
        let settled = self.epoch.settle(epoch, result);
        if !settled.is_current() {
            log::debug!("[GoalList] Dropping stale response epoch={} latest={}", epoch, self.epoch.latest());
        }
        settled
    }

    fn derive_view_mode(&self) -> ViewMode {
        if self.filters.date.is_some() {
            ViewMode::ListByDate
        } else if !self.filters.search.trim().is_empty() {
            ViewMode::ListBySearch
        } else {
            ViewMode::Calendar
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn nine_thirty() -> NaiveTime {
        NaiveTime::from_hms_opt(9, 30, 0).unwrap()
    }

    #[test]
    fn test_initial_query_is_unfiltered() {
        let mut state = GoalListState::new();
        let ticket = state.refetch();
        assert_eq!(ticket.query, GoalQuery::all());
        assert_eq!(ticket.query.to_query_string(), "q=&sort_by=date_asc&category_id=");
        assert_eq!(state.view_mode(), ViewMode::Calendar);
    }

    #[test]
    fn test_select_date() {
        let mut state = GoalListState::new();
        state.set_search("gym");
        let ticket = state.select_date(day(2024, 1, 5), nine_thirty());

        assert_eq!(state.list_title(), "Tasks for 2024-01-05");
        assert_eq!(state.view_mode(), ViewMode::ListByDate);
        assert_eq!(state.new_goal_deadline(), Some("2024-01-05T09:30"));
        // search is left alone
        assert_eq!(ticket.query.q, "gym");
        assert_eq!(
            ticket.query.to_query_string(),
            "q=gym&sort_by=date_asc&category_id=&date=2024-01-05"
        );
    }

    #[test]
    fn test_reset_then_fetch_is_unfiltered() {
        let mut state = GoalListState::new();
        state.set_search("report");
        state.set_category(Some(3));
        state.set_sort(SortOrder::DateDesc);
        state.select_date(day(2024, 1, 5), nine_thirty());

        let ticket = state.reset_filters();
        assert_eq!(state.filters(), &GoalFilters::default());
        assert_eq!(ticket.query, GoalQuery::all());
        assert_eq!(state.refetch().query, GoalQuery::all());
        assert_eq!(state.list_title(), DEFAULT_LIST_TITLE);
        assert_eq!(state.view_mode(), ViewMode::Calendar);
        assert_eq!(state.new_goal_deadline(), None);
    }

    #[test]
    fn test_axes_are_independent() {
        let mut state = GoalListState::new();
        state.set_category(Some(4));
        state.set_sort(SortOrder::CreatedDesc);
        let ticket = state.set_search("a b&c");

        assert_eq!(ticket.query.category_id, Some(4));
        assert_eq!(ticket.query.sort_by, SortOrder::CreatedDesc);
        assert_eq!(state.view_mode(), ViewMode::ListBySearch);
        assert_eq!(
            ticket.query.to_query_string(),
            "q=a%20b%26c&sort_by=created_desc&category_id=4"
        );
    }

    #[test]
    fn test_blank_search_stays_in_calendar_mode() {
        let mut state = GoalListState::new();
        state.set_search("   ");
        assert_eq!(state.view_mode(), ViewMode::Calendar);
    }

    #[test]
    fn test_stale_responses_rejected() {
        let mut state = GoalListState::new();
        let first = state.set_search("a");
        let second = state.set_search("ab");
        assert_eq!(state.settle(first.epoch, Ok(Vec::new())), Settled::Stale);
        assert_eq!(state.settle(second.epoch, Ok(Vec::new())), Settled::Fresh(Vec::new()));
    }

    fn goal(id: u32) -> Goal {
        serde_json::from_value(serde_json::json!({
            "id": id, "title": format!("goal {}", id), "status": "pending"
        }))
        .unwrap()
    }

    #[test]
    fn test_out_of_order_responses() {
        let mut state = GoalListState::new();
        let old = state.set_search("a");
        let new = state.set_search("ab");

        // the newer request answers first, then the older one arrives
        let applied = state.settle(new.epoch, Ok(vec![goal(2)]));
        assert!(matches!(&applied, Settled::Fresh(goals) if goals[0].id == 2));
        assert_eq!(state.settle(old.epoch, Ok(vec![goal(1)])), Settled::Stale);
    }

    #[test]
    fn test_failed_latest_keeps_list() {
        let mut state = GoalListState::new();
        let ticket = state.refetch();
        let settled = state.settle(ticket.epoch, Err(ApiError::Transport("offline".into())));
        // current, so the loading flag clears, but there is nothing to replace
        assert!(settled.is_current());
        assert!(matches!(settled, Settled::Failed(ApiError::Transport(_))));
    }

    #[test]
    fn test_sort_param_roundtrip() {
        for sort in SortOrder::ALL {
            assert_eq!(SortOrder::from_param(sort.as_param()), Some(sort));
        }
        assert_eq!(SortOrder::from_param("title_asc"), None);
    }
}
