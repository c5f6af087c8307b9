//! Grid layout engine.
//!
//! Turns `(reference date, view mode)` into the ordered set of day cells to
//! render. Month grids always span whole weeks (leading/trailing days from
//! the neighbouring months included); the week views expand each day into an
//! hour grid handled by [`time_grid`].

use chrono::{Datelike, NaiveDateTime};

use crate::models::selection::Selection;
use crate::models::view_mode::ViewMode;
use crate::utils::date;

pub mod time_grid;

/// One date cell, recomputed per render; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayCell {
    pub date: NaiveDateTime,
    /// False for the leading/trailing days a month grid borrows from its
    /// neighbours. Always true outside Month view.
    pub in_current_month: bool,
}

impl DayCell {
    pub fn is_today(&self, now: NaiveDateTime) -> bool {
        date::is_same_day(self.date, now)
    }

    pub fn is_weekend(&self) -> bool {
        date::is_weekend(self.date)
    }

    /// Weekday as a column index, 0 = Sunday .. 6 = Saturday.
    pub fn column(&self) -> u8 {
        self.date.weekday().num_days_from_sunday() as u8
    }

    pub fn is_selected(&self, selection: &Selection) -> bool {
        selection.is_day_selected(self.date) || selection.is_column_selected(self.date)
    }
}

/// Cells for the month containing `reference`: `start_of_week(start_of_month)`
/// through `end_of_week(end_of_month)` inclusive. Always a multiple of 7,
/// starting on a Sunday.
pub fn month_cells(reference: NaiveDateTime) -> Vec<DayCell> {
    let month_start = date::start_of_month(reference);
    let first = date::start_of_week(month_start);
    let last = date::end_of_week(date::end_of_month(reference));

    let mut cells = Vec::new();
    let mut day = first;
    while day <= last {
        cells.push(DayCell {
            date: day,
            in_current_month: date::is_same_month(day, month_start),
        });
        day = date::add_days(day, 1);
    }
    cells
}

/// Month cells organized into rows of 7 for rendering.
pub fn month_rows(reference: NaiveDateTime) -> Vec<Vec<DayCell>> {
    month_cells(reference)
        .chunks(7)
        .map(|row| row.to_vec())
        .collect()
}

/// The 7 days of the Sunday-start week containing `reference`.
pub fn week_cells(reference: NaiveDateTime) -> Vec<DayCell> {
    let start = date::start_of_week(reference);
    (0..7)
        .map(|i| DayCell {
            date: date::add_days(start, i),
            in_current_month: true,
        })
        .collect()
}

/// Monday..Friday of the week containing `reference`.
pub fn work_week_cells(reference: NaiveDateTime) -> Vec<DayCell> {
    let monday = date::add_days(date::start_of_week(reference), 1);
    (0..5)
        .map(|i| DayCell {
            date: date::add_days(monday, i),
            in_current_month: true,
        })
        .collect()
}

/// The cells a view renders, in display order.
pub fn visible_cells(reference: NaiveDateTime, mode: ViewMode) -> Vec<DayCell> {
    match mode {
        ViewMode::Month => month_cells(reference),
        ViewMode::Week => week_cells(reference),
        ViewMode::WorkWeek => work_week_cells(reference),
        ViewMode::Day => vec![DayCell {
            date: reference,
            in_current_month: true,
        }],
    }
}

/// Step the reference date backwards for the mode.
pub fn step_prev(reference: NaiveDateTime, mode: ViewMode) -> NaiveDateTime {
    match mode {
        ViewMode::Day => date::add_days(reference, -1),
        ViewMode::Week | ViewMode::WorkWeek => date::add_days(reference, -7),
        ViewMode::Month => date::sub_months(reference, 1),
    }
}

/// Step the reference date forwards for the mode.
pub fn step_next(reference: NaiveDateTime, mode: ViewMode) -> NaiveDateTime {
    match mode {
        ViewMode::Day => date::add_days(reference, 1),
        ViewMode::Week | ViewMode::WorkWeek => date::add_days(reference, 7),
        ViewMode::Month => date::add_months(reference, 1),
    }
}

/// Header title for the current view.
pub fn view_title(reference: NaiveDateTime, selection: &Selection, mode: ViewMode) -> String {
    match mode {
        ViewMode::Day => date::day_range_label(selection.selected_day().unwrap_or(reference)),
        ViewMode::Week => date::week_range_label(reference, false),
        ViewMode::WorkWeek => date::week_range_label(reference, true),
        ViewMode::Month => date::format_date(reference, "MMMM yyyy"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Weekday};
    use pretty_assertions::assert_eq;

    fn dt(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_month_cells_cover_whole_weeks() {
        // March 2024: Fri Mar 1 .. Sun Mar 31, padded Feb 25 .. Apr 6.
        let cells = month_cells(dt(2024, 3, 15));
        assert_eq!(cells.len(), 42);
        assert_eq!(cells[0].date.date(), NaiveDate::from_ymd_opt(2024, 2, 25).unwrap());
        assert_eq!(
            cells.last().unwrap().date.date(),
            NaiveDate::from_ymd_opt(2024, 4, 6).unwrap()
        );
        assert_eq!(cells[0].date.weekday(), Weekday::Sun);
    }

    #[test]
    fn test_month_cells_flag_out_of_month_days() {
        let cells = month_cells(dt(2024, 3, 15));
        assert!(!cells[0].in_current_month); // Feb 25
        assert!(cells[5].in_current_month); // Mar 1
        assert!(!cells.last().unwrap().in_current_month); // Apr 6
    }

    #[test]
    fn test_month_with_exact_weeks_has_no_padding() {
        // June 2025 runs Sun Jun 1 .. Mon Jun 30; padded to Sat Jul 5 = 35 cells.
        let cells = month_cells(dt(2025, 6, 10));
        assert_eq!(cells.len() % 7, 0);
        // February 2026 starts on a Sunday and has exactly 4 weeks.
        let feb = month_cells(dt(2026, 2, 10));
        assert_eq!(feb.len(), 28);
        assert!(feb.iter().all(|c| c.in_current_month));
    }

    #[test]
    fn test_month_rows_are_weeks() {
        let rows = month_rows(dt(2024, 3, 15));
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|r| r.len() == 7));
        assert!(rows
            .iter()
            .all(|r| r[0].date.weekday() == Weekday::Sun && r[6].date.weekday() == Weekday::Sat));
    }

    #[test]
    fn test_week_cells_sunday_through_saturday() {
        let cells = week_cells(dt(2024, 3, 6)); // Wednesday
        assert_eq!(cells.len(), 7);
        assert_eq!(cells[0].date.date(), NaiveDate::from_ymd_opt(2024, 3, 3).unwrap());
        assert_eq!(cells[6].date.date(), NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
    }

    #[test]
    fn test_work_week_cells_monday_through_friday() {
        let cells = work_week_cells(dt(2024, 3, 6));
        assert_eq!(cells.len(), 5);
        assert_eq!(cells[0].date.weekday(), Weekday::Mon);
        assert_eq!(cells[4].date.weekday(), Weekday::Fri);
        assert_eq!(cells[0].date.date(), NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
    }

    #[test]
    fn test_day_view_single_cell() {
        let cells = visible_cells(dt(2024, 3, 6), ViewMode::Day);
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].date, dt(2024, 3, 6));
    }

    #[test]
    fn test_step_semantics_per_mode() {
        let base = dt(2024, 3, 6);
        assert_eq!(step_next(base, ViewMode::Day).date(), NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
        assert_eq!(step_prev(base, ViewMode::Week).date(), NaiveDate::from_ymd_opt(2024, 2, 28).unwrap());
        assert_eq!(step_next(base, ViewMode::WorkWeek).date(), NaiveDate::from_ymd_opt(2024, 3, 13).unwrap());
        assert_eq!(step_next(base, ViewMode::Month).date(), NaiveDate::from_ymd_opt(2024, 4, 6).unwrap());
    }

    #[test]
    fn test_month_step_clamps_day() {
        let jan31 = dt(2024, 1, 31);
        assert_eq!(
            step_next(jan31, ViewMode::Month).date(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_weekend_and_column_derivation() {
        let sat = DayCell { date: dt(2024, 3, 9), in_current_month: true };
        assert!(sat.is_weekend());
        assert_eq!(sat.column(), 6);
        let wed = DayCell { date: dt(2024, 3, 6), in_current_month: true };
        assert!(!wed.is_weekend());
        assert_eq!(wed.column(), 3);
    }

    #[test]
    fn test_view_title_day_prefers_selected_day() {
        let mut sel = Selection::None;
        sel.select_day(dt(2024, 3, 1));
        assert_eq!(
            view_title(dt(2024, 3, 6), &sel, ViewMode::Day),
            "Friday, March 1, 2024"
        );
        assert_eq!(
            view_title(dt(2024, 3, 6), &Selection::None, ViewMode::Month),
            "March 2024"
        );
    }
}
