//! Calendar date helpers shared by the journal views.
//!
//! The month grid uses a Monday-first week (a 1st falling on Sunday yields
//! six leading placeholders). Long-form labels keep the natural weekday
//! naming; the two derivations are independent on purpose.

use chrono::{Datelike, NaiveDate};

/// Number of days in the month containing `year`/`month`, leap years
/// included.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("valid next month")
        .pred_opt()
        .expect("previous day exists")
        .day()
}

/// Count of placeholder cells before day 1 in a Monday-first grid.
pub fn leading_placeholders(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid first of month");
    first.weekday().num_days_from_monday()
}

/// `"Thursday, February 26, 2026"` — full weekday and month names, unpadded
/// day.
pub fn format_long(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthCell {
    /// Blank cell before the 1st of the month.
    Placeholder,
    /// A day of the month, 1-based.
    Day(u32),
}

/// Lazy iterator over a month's grid cells: leading placeholders followed by
/// one cell per day. No trailing padding; callers pad visually as needed.
/// `Clone` restarts the walk from the beginning.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    leading: u32,
    days: u32,
    next: u32,
}

impl MonthGrid {
    /// Grid for the month containing `date`.
    pub fn for_month(date: NaiveDate) -> Self {
        Self {
            leading: leading_placeholders(date.year(), date.month()),
            days: days_in_month(date.year(), date.month()),
            next: 0,
        }
    }

    /// Total cell count: placeholders plus days.
    pub fn cell_count(&self) -> u32 {
        self.leading + self.days
    }

    /// Number of days in the underlying month.
    pub fn days_in_month(&self) -> u32 {
        self.days
    }
}

impl Iterator for MonthGrid {
    type Item = MonthCell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.leading + self.days {
            return None;
        }
        let cell = if self.next < self.leading {
            MonthCell::Placeholder
        } else {
            MonthCell::Day(self.next - self.leading + 1)
        };
        self.next += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.leading + self.days - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MonthGrid {}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_case(2026, 1, 31 ; "january")]
    #[test_case(2026, 2, 28 ; "february common year")]
    #[test_case(2024, 2, 29 ; "february leap year")]
    #[test_case(2000, 2, 29 ; "century divisible by 400")]
    #[test_case(1900, 2, 28 ; "century not divisible by 400")]
    #[test_case(2026, 4, 30 ; "april")]
    #[test_case(2026, 12, 31 ; "december")]
    fn test_days_in_month(year: i32, month: u32, expected: u32) {
        assert_eq!(days_in_month(year, month), expected);
    }

    #[test]
    fn test_leading_placeholders_sunday_first() {
        // February 1, 2026 is a Sunday - six placeholders in a Monday-first grid
        assert_eq!(leading_placeholders(2026, 2), 6);
    }

    #[test]
    fn test_leading_placeholders_monday_first() {
        // June 1, 2026 is a Monday
        assert_eq!(leading_placeholders(2026, 6), 0);
    }

    #[test]
    fn test_month_grid_february_2026() {
        let grid = MonthGrid::for_month(date(2026, 2, 1));
        assert_eq!(grid.cell_count(), 34);

        let cells: Vec<MonthCell> = grid.collect();
        assert_eq!(cells.len(), 34);
        assert_eq!(&cells[..6], &[MonthCell::Placeholder; 6]);
        assert_eq!(cells[6], MonthCell::Day(1));
        assert_eq!(cells[33], MonthCell::Day(28));
    }

    #[test]
    fn test_month_grid_restartable() {
        let grid = MonthGrid::for_month(date(2026, 2, 14));
        let first: Vec<MonthCell> = grid.clone().collect();
        let second: Vec<MonthCell> = grid.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_month_grid_no_trailing_placeholders() {
        // August 2026: Saturday the 1st (5 leading) + 31 days = 36 cells
        let cells: Vec<MonthCell> = MonthGrid::for_month(date(2026, 8, 15)).collect();
        assert_eq!(cells.len(), 36);
        assert_eq!(*cells.last().unwrap(), MonthCell::Day(31));
    }

    #[test]
    fn test_format_long() {
        assert_eq!(format_long(date(2026, 2, 26)), "Thursday, February 26, 2026");
        assert_eq!(format_long(date(2026, 8, 3)), "Monday, August 3, 2026");
    }

    #[test]
    fn test_grid_indexing_and_label_weekday_are_independent() {
        // March 1, 2026 is a Sunday: index 6 in the Monday-first grid, yet
        // the label still names Sunday.
        assert_eq!(leading_placeholders(2026, 3), 6);
        assert_eq!(format_long(date(2026, 3, 1)), "Sunday, March 1, 2026");
    }
}
