//! Wire Models
//!
//! Data structures matching the `/api/*` payloads.

use serde::{Deserialize, Serialize};

/// Goal status as computed by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    Pending,
    InProgress,
    Completed,
    Overdue,
    Archived,
}

impl GoalStatus {
    pub fn is_completed(self) -> bool {
        self == GoalStatus::Completed
    }

    pub fn label(self) -> &'static str {
        match self {
            GoalStatus::Pending => "Pending",
            GoalStatus::InProgress => "In Progress",
            GoalStatus::Completed => "Completed",
            GoalStatus::Overdue => "Overdue",
            GoalStatus::Archived => "Archived",
        }
    }

    /// Caption of the button that advances the goal one step.
    pub fn advance_label(self) -> Option<&'static str> {
        match self {
            GoalStatus::Pending | GoalStatus::Overdue => Some("Start"),
            GoalStatus::InProgress => Some("Finish"),
            GoalStatus::Completed | GoalStatus::Archived => None,
        }
    }
}

/// Goal as served by `GET /api/goals`
///
/// Hashes over every field so list rows can be keyed on the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Goal {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: GoalStatus,
    /// Deadline as an ISO date-time; drives calendar placement.
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub deadline_pretty: Option<String>,
    /// Category name, `None` when uncategorized.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub color: Option<String>,
}

/// Recurrence chosen when creating a goal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    pub const ALL: [Frequency; 4] = [
        Frequency::None,
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::Monthly,
    ];

    pub fn as_param(self) -> &'static str {
        match self {
            Frequency::None => "none",
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_param() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Frequency::None => "Once",
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
        }
    }
}

/// Category as served by `GET /api/categories`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    /// Goals currently assigned to this category.
    #[serde(default)]
    pub count: u32,
}

/// One labelled data series of the stats payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub total: u32,
    pub completed: u32,
    pub win_rate: f64,
}

/// `GET /api/stats`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub kpi: Option<Kpi>,
    pub pie_category: Series,
    pub pie_status: Series,
    pub bar: Series,
}

// ========================
// Request Bodies
// ========================

/// `POST /api/goals/create`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateGoalRequest {
    pub title: String,
    /// `YYYY-MM-DDTHH:MM`, empty when no deadline.
    pub deadline: String,
    pub description: String,
    pub category_id: Option<u32>,
    pub frequency: Frequency,
}

/// `POST /api/categories/create`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

/// `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub goal_id: u32,
    pub message: String,
}

// ========================
// Response Bodies
// ========================

/// Generic `{success, error?}` body of mutating endpoints
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MutationResponse {
    /// Absent on endpoints that answer with an empty object
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `POST /api/chat` answers with either `reply` or `error`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
