//! Calendar Heatmap
//!
//! Per-day aggregation of goals into colored calendar markers.

use std::collections::HashMap;

use crate::models::Goal;
use crate::palette::HeatColor;

/// Per-date summary of active vs. completed goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAggregate {
    /// `YYYY-MM-DD`
    pub date: String,
    pub active_count: u32,
    pub has_completed: bool,
}

/// One calendar dot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayMarker {
    pub date: String,
    pub color: HeatColor,
}

/// Date portion of an ISO date-time (`2024-01-05T09:00` -> `2024-01-05`)
pub fn date_key(start: &str) -> &str {
    start.split('T').next().unwrap_or(start)
}

/// Aggregate goals by start date, in order of first observation.
pub fn aggregate_days(goals: &[Goal]) -> Vec<DayAggregate> {
    let mut days: Vec<DayAggregate> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for goal in goals {
        let Some(start) = goal.start.as_deref() else {
            continue;
        };
        let key = date_key(start);
        let slot = *index.entry(key).or_insert_with(|| {
            days.push(DayAggregate {
                date: key.to_string(),
                active_count: 0,
                has_completed: false,
            });
            days.len() - 1
        });

        let day = &mut days[slot];
        if goal.status.is_completed() {
            day.has_completed = true;
        } else {
            day.active_count += 1;
        }
    }

    days
}

/// Marker color for a day; `None` hides the day.
pub fn heat_color(active_count: u32, has_completed: bool) -> Option<HeatColor> {
    match active_count {
        0 if has_completed => Some(HeatColor::Completed),
        0 => None,
        n if n >= 6 => Some(HeatColor::Overloaded),
        n if n >= 3 => Some(HeatColor::Warning),
        _ => Some(HeatColor::Normal),
    }
}

pub fn heatmap_markers(goals: &[Goal]) -> Vec<DayMarker> {
    aggregate_days(goals)
        .into_iter()
        .filter_map(|day| {
            heat_color(day.active_count, day.has_completed).map(|color| DayMarker {
                date: day.date,
                color,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GoalStatus;

    fn make_goal(id: u32, start: Option<&str>, status: GoalStatus) -> Goal {
        Goal {
            id,
            title: format!("Goal {}", id),
            description: None,
            status,
            start: start.map(str::to_string),
            deadline_pretty: None,
            category: None,
            is_recurring: false,
            color: None,
        }
    }

    #[test]
    fn test_active_takes_precedence_over_completed() {
        let goals = vec![
            make_goal(1, Some("2024-01-05"), GoalStatus::Pending),
            make_goal(2, Some("2024-01-05"), GoalStatus::Pending),
            make_goal(3, Some("2024-01-05"), GoalStatus::Completed),
        ];

        let days = aggregate_days(&goals);
        assert_eq!(days, vec![DayAggregate {
            date: "2024-01-05".to_string(),
            active_count: 2,
            has_completed: true,
        }]);

        let markers = heatmap_markers(&goals);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].color, HeatColor::Normal);
    }

    #[test]
    fn test_heat_color_table() {
        assert_eq!(heat_color(0, true), Some(HeatColor::Completed));
        assert_eq!(heat_color(0, false), None);
        assert_eq!(heat_color(1, false), Some(HeatColor::Normal));
        assert_eq!(heat_color(2, true), Some(HeatColor::Normal));
        assert_eq!(heat_color(3, false), Some(HeatColor::Warning));
        assert_eq!(heat_color(5, true), Some(HeatColor::Warning));
        assert_eq!(heat_color(6, false), Some(HeatColor::Overloaded));
        assert_eq!(heat_color(40, true), Some(HeatColor::Overloaded));
    }

    #[test]
    fn test_every_dated_goal_counted_once() {
        let goals = vec![
            make_goal(1, Some("2024-01-05T09:00:00+00:00"), GoalStatus::Pending),
            make_goal(2, Some("2024-01-05T18:30:00+00:00"), GoalStatus::Overdue),
            make_goal(3, Some("2024-01-06T08:00:00"), GoalStatus::Completed),
            make_goal(4, None, GoalStatus::Pending),
            make_goal(5, Some("2024-01-07"), GoalStatus::InProgress),
        ];

        let days = aggregate_days(&goals);
        let counted: u32 = days
            .iter()
            .map(|d| d.active_count)
            .sum::<u32>()
            + goals
                .iter()
                .filter(|g| g.start.is_some() && g.status.is_completed())
                .count() as u32;
        assert_eq!(counted, 4);

        let dates: Vec<&str> = days.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-05", "2024-01-06", "2024-01-07"]);
    }

    #[test]
    fn test_completed_only_day_is_green() {
        let goals = vec![
            make_goal(1, Some("2024-02-01"), GoalStatus::Completed),
            make_goal(2, Some("2024-02-01"), GoalStatus::Completed),
        ];
        let markers = heatmap_markers(&goals);
        assert_eq!(markers, vec![DayMarker {
            date: "2024-02-01".to_string(),
            color: HeatColor::Completed,
        }]);
    }

    #[test]
    fn test_undated_goals_produce_nothing() {
        let goals = vec![make_goal(1, None, GoalStatus::Pending)];
        assert!(aggregate_days(&goals).is_empty());
        assert!(heatmap_markers(&[]).is_empty());
    }

    #[test]
    fn test_overloaded_day() {
        let goals: Vec<Goal> = (0..6)
            .map(|i| make_goal(i, Some("2024-03-10T10:00"), GoalStatus::Pending))
            .collect();
        assert_eq!(heatmap_markers(&goals)[0].color, HeatColor::Overloaded);
    }

    #[test]
    fn test_order_independent_counts() {
        let mut goals = vec![
            make_goal(1, Some("2024-01-01"), GoalStatus::Pending),
            make_goal(2, Some("2024-01-02"), GoalStatus::Completed),
            make_goal(3, Some("2024-01-01"), GoalStatus::Pending),
            make_goal(4, Some("2024-01-01"), GoalStatus::InProgress),
        ];
        let forward = heatmap_markers(&goals);
        goals.reverse();
        let mut backward = heatmap_markers(&goals);
        backward.sort_by(|a, b| a.date.cmp(&b.date));
        assert_eq!(forward, backward);
    }
}
