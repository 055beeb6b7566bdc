//! Journal date navigation.
//!
//! `DateCursor` tracks the day currently shown in the daily-wins view. The
//! reference "today" is injected rather than read from the wall clock so
//! navigation behavior is deterministic under test.

use anyhow::{bail, Result};
use chrono::{Datelike, Duration, NaiveDate};

use crate::utils::date::{days_in_month, format_long, MonthGrid};

pub struct DateCursor {
    selected: NaiveDate,
    today: NaiveDate,
}

impl DateCursor {
    /// Cursor positioned on `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            selected: today,
            today,
        }
    }

    /// Cursor positioned on an arbitrary starting day.
    pub fn starting_at(selected: NaiveDate, today: NaiveDate) -> Self {
        Self { selected, today }
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn is_on_today(&self) -> bool {
        self.selected == self.today
    }

    /// Whether `next_day` would move. Views use this to disable the
    /// forward affordance.
    pub fn can_advance(&self) -> bool {
        self.selected < self.today
    }

    /// Move back one calendar day. No lower bound.
    pub fn previous_day(&mut self) {
        self.selected = self.selected - Duration::days(1);
    }

    /// Move forward one calendar day. A no-op on today: the journal never
    /// shows a future date.
    pub fn next_day(&mut self) {
        if self.can_advance() {
            self.selected = self.selected + Duration::days(1);
        }
    }

    /// Select `day` within the currently displayed month and year. The day
    /// must come from the displayed month grid; anything out of range is
    /// rejected.
    pub fn jump_to_day(&mut self, day: u32) -> Result<()> {
        let last = days_in_month(self.selected.year(), self.selected.month());
        if day < 1 || day > last {
            bail!(
                "day {} is out of range for {}-{:02} (1..={})",
                day,
                self.selected.year(),
                self.selected.month(),
                last
            );
        }
        self.selected = NaiveDate::from_ymd_opt(self.selected.year(), self.selected.month(), day)
            .expect("valid calendar date");
        Ok(())
    }

    pub fn go_to_today(&mut self) {
        self.selected = self.today;
    }

    /// Grid cells for the month being displayed.
    pub fn month_grid(&self) -> MonthGrid {
        MonthGrid::for_month(self.selected)
    }

    /// Long-form label for the selected day.
    pub fn label(&self) -> String {
        format_long(self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::MonthCell;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_starts_on_today() {
        let cursor = DateCursor::new(date(2026, 2, 26));
        assert_eq!(cursor.selected(), date(2026, 2, 26));
        assert!(cursor.is_on_today());
        assert!(!cursor.can_advance());
    }

    #[test]
    fn test_next_day_is_noop_on_today() {
        let mut cursor = DateCursor::new(date(2026, 2, 26));
        cursor.next_day();
        assert_eq!(cursor.selected(), date(2026, 2, 26));
    }

    #[test]
    fn test_previous_then_next_returns() {
        let mut cursor = DateCursor::new(date(2026, 2, 26));
        cursor.previous_day();
        assert_eq!(cursor.selected(), date(2026, 2, 25));
        assert!(cursor.can_advance());
        cursor.next_day();
        assert_eq!(cursor.selected(), date(2026, 2, 26));
    }

    #[test]
    fn test_previous_day_rolls_over_month() {
        let mut cursor = DateCursor::starting_at(date(2026, 3, 1), date(2026, 3, 15));
        cursor.previous_day();
        assert_eq!(cursor.selected(), date(2026, 2, 28));
    }

    #[test]
    fn test_previous_day_rolls_over_leap_february() {
        let mut cursor = DateCursor::starting_at(date(2024, 3, 1), date(2026, 3, 15));
        cursor.previous_day();
        assert_eq!(cursor.selected(), date(2024, 2, 29));
    }

    #[test]
    fn test_previous_day_rolls_over_year() {
        let mut cursor = DateCursor::starting_at(date(2026, 1, 1), date(2026, 2, 1));
        cursor.previous_day();
        assert_eq!(cursor.selected(), date(2025, 12, 31));
    }

    #[test]
    fn test_next_day_rolls_over_month() {
        let mut cursor = DateCursor::starting_at(date(2026, 4, 30), date(2026, 6, 1));
        cursor.next_day();
        assert_eq!(cursor.selected(), date(2026, 5, 1));
    }

    #[test]
    fn test_jump_to_day_within_month() {
        let mut cursor = DateCursor::starting_at(date(2026, 2, 26), date(2026, 2, 26));
        cursor.jump_to_day(3).unwrap();
        assert_eq!(cursor.selected(), date(2026, 2, 3));
    }

    #[test]
    fn test_jump_to_day_rejects_out_of_range() {
        let mut cursor = DateCursor::starting_at(date(2026, 2, 10), date(2026, 2, 26));
        assert!(cursor.jump_to_day(0).is_err());
        assert!(cursor.jump_to_day(29).is_err());
        assert_eq!(cursor.selected(), date(2026, 2, 10));
    }

    #[test]
    fn test_jump_to_day_accepts_leap_day() {
        let mut cursor = DateCursor::starting_at(date(2024, 2, 10), date(2026, 2, 26));
        cursor.jump_to_day(29).unwrap();
        assert_eq!(cursor.selected(), date(2024, 2, 29));
    }

    #[test]
    fn test_go_to_today_from_anywhere() {
        let mut cursor = DateCursor::starting_at(date(2019, 7, 4), date(2026, 2, 26));
        cursor.go_to_today();
        assert!(cursor.is_on_today());
    }

    #[test]
    fn test_month_grid_follows_selected_month() {
        let cursor = DateCursor::starting_at(date(2026, 2, 14), date(2026, 2, 26));
        let cells: Vec<MonthCell> = cursor.month_grid().collect();
        assert_eq!(cells.len(), 34);
    }

    #[test]
    fn test_label_matches_selected_day() {
        let cursor = DateCursor::starting_at(date(2026, 2, 26), date(2026, 2, 26));
        assert_eq!(cursor.label(), "Thursday, February 26, 2026");
    }

    proptest! {
        /// previous_day(next_day(d)) == d whenever next_day was permitted.
        #[test]
        fn prop_next_then_previous_round_trips(days_back in 1i64..20_000) {
            let today = date(2026, 2, 26);
            let start = today - Duration::days(days_back);
            let mut cursor = DateCursor::starting_at(start, today);

            cursor.next_day();
            cursor.previous_day();
            prop_assert_eq!(cursor.selected(), start);
        }

        /// Stepping back and forward the same number of days always returns
        /// to the start, across arbitrary month and year boundaries.
        #[test]
        fn prop_navigation_is_symmetric(steps in 1u32..400) {
            let today = date(2026, 2, 26);
            let mut cursor = DateCursor::new(today);

            for _ in 0..steps {
                cursor.previous_day();
            }
            for _ in 0..steps {
                cursor.next_day();
            }
            prop_assert_eq!(cursor.selected(), today);
        }

        /// The forward guard holds under any interleaving: the cursor never
        /// passes the injected today.
        #[test]
        fn prop_never_advances_past_today(ops in proptest::collection::vec(0u8..3, 0..60)) {
            let today = date(2026, 2, 26);
            let mut cursor = DateCursor::new(today);

            for op in ops {
                match op {
                    0 => cursor.previous_day(),
                    1 => cursor.next_day(),
                    _ => cursor.go_to_today(),
                }
                prop_assert!(cursor.selected() <= today);
            }
        }
    }
}
