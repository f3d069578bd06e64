//! Display Colors
//!
//! Heatmap marker colors and chart palettes.

/// Calendar marker color for one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeatColor {
    /// Only completed goals on that day.
    Completed,
    /// 1-2 active goals.
    Normal,
    /// 3-5 active goals.
    Warning,
    /// 6 or more active goals.
    Overloaded,
}

impl HeatColor {
    pub fn hex(self) -> &'static str {
        match self {
            HeatColor::Completed => "#198754",
            HeatColor::Normal => "#3788d8",
            HeatColor::Warning => "#fd7e14",
            HeatColor::Overloaded => "#dc3545",
        }
    }
}

pub const STATUS_COMPLETED: &str = "#198754";
pub const STATUS_OVERDUE: &str = "#dc3545";
pub const STATUS_PROGRESS: &str = "#ffc107";
pub const STATUS_DEFAULT: &str = "#6c757d";

/// Doughnut slices, cycled when there are more categories than colors
pub const CATEGORY_PALETTE: [&str; 6] = [
    "#0d6efd", "#6610f2", "#6f42c1", "#d63384", "#fd7e14", "#20c997",
];

pub const BAR_COLOR: &str = "#0d6efd";

/// Color for a free-text status label. Rule order matters: the first matching substring wins.
pub fn status_label_color(label: &str) -> &'static str {
    let label = label.to_lowercase();
    if label.contains("completed") {
        STATUS_COMPLETED
    } else if label.contains("overdue") {
        STATUS_OVERDUE
    } else if label.contains("progress") {
        STATUS_PROGRESS
    } else {
        STATUS_DEFAULT
    }
}

pub fn status_label_colors<S: AsRef<str>>(labels: &[S]) -> Vec<&'static str> {
    labels.iter().map(|l| status_label_color(l.as_ref())).collect()
}

pub fn category_colors(count: usize) -> Vec<&'static str> {
    CATEGORY_PALETTE.iter().copied().cycle().take(count).collect()
}
