//! Month Grid
//!
//! Layout of a month view: weeks of seven day cells, Sunday first.

use chrono::{Datelike, Duration, NaiveDate};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// The month currently shown by the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    /// 1-based
    pub month: u32,
}

impl MonthCursor {
    pub fn containing(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    /// e.g. `Jan 2024`
    pub fn title(&self) -> String {
        let name = MONTH_NAMES
            .get(self.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or("?");
        format!("{} {}", name, self.year)
    }

    fn days_in_month(&self) -> u32 {
        match (self.first_day(), self.next().first_day()) {
            (Some(first), Some(next)) => (next - first).num_days() as u32,
            _ => 0,
        }
    }

    /// Rows of 7 cells; `None` pads days outside this month.
    pub fn weeks(&self) -> Vec<[Option<NaiveDate>; 7]> {
        let Some(first) = self.first_day() else {
            return Vec::new();
        };
        let lead = first.weekday().num_days_from_sunday() as usize;
        let days = self.days_in_month() as usize;

        let mut cells: Vec<Option<NaiveDate>> = vec![None; lead];
        cells.extend((0..days).map(|offset| Some(first + Duration::days(offset as i64))));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }

        cells
            .chunks(7)
            .map(|chunk| {
                let mut week = [None; 7];
                week.copy_from_slice(chunk);
                week
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_january_2024_layout() {
        // 2024-01-01 is a Monday
        let cursor = MonthCursor { year: 2024, month: 1 };
        let weeks = cursor.weeks();
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0][0], None);
        assert_eq!(weeks[0][1], NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(weeks[4][3], NaiveDate::from_ymd_opt(2024, 1, 31));
        assert_eq!(weeks[4][4], None);
        assert_eq!(cursor.title(), "Jan 2024");
    }

    #[test]
    fn test_leap_february() {
        let cursor = MonthCursor { year: 2024, month: 2 };
        let count = cursor.weeks().iter().flatten().filter(|d| d.is_some()).count();
        assert_eq!(count, 29);
    }

    #[test]
    fn test_navigation_wraps_years() {
        let dec = MonthCursor { year: 2023, month: 12 };
        assert_eq!(dec.next(), MonthCursor { year: 2024, month: 1 });
        assert_eq!(dec.next().prev(), dec);
        let date = NaiveDate::from_ymd_opt(2025, 7, 19).unwrap();
        assert_eq!(MonthCursor::containing(date), MonthCursor { year: 2025, month: 7 });
    }
}
