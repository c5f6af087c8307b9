// Navigation
// Prev/next/today stepping and the view-mode transition rules.

use crate::models::selection::Selection;
use crate::models::view_mode::ViewMode;
use crate::services::grid;
use crate::utils::date;

use super::CalendarController;

impl CalendarController {
    /// Jump straight to a date (the header's date picker). Selection is
    /// left alone; the holiday overlay follows the possibly new year.
    pub fn set_reference_date(&mut self, date: chrono::NaiveDateTime) {
        self.reference_date = date;
        self.sync_holidays();
    }

    /// Step backwards: -1 day, -7 days, or -1 month depending on the view.
    pub fn navigate_prev(&mut self) {
        self.reference_date = grid::step_prev(self.reference_date, self.view_mode);
        self.sync_holidays();
    }

    /// Step forwards: +1 day, +7 days, or +1 month depending on the view.
    pub fn navigate_next(&mut self) {
        self.reference_date = grid::step_next(self.reference_date, self.view_mode);
        self.sync_holidays();
    }

    /// Jump back to now and select today.
    pub fn go_today(&mut self) {
        let now = date::now_local();
        self.reference_date = now;
        self.selection = Selection::Day(now);
        self.sync_holidays();
    }

    /// Switch views. A selected day carries over as the new reference where
    /// that makes sense (Day jumps to it, the week views jump to its week),
    /// and selection kinds that are meaningless in the target view are
    /// cleared.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if mode == self.view_mode {
            return;
        }

        if let Some(selected) = self.selection.selected_day() {
            match mode {
                ViewMode::Day => self.reference_date = selected,
                ViewMode::Week | ViewMode::WorkWeek => {
                    self.reference_date = date::start_of_week(selected)
                }
                ViewMode::Month => {}
            }
        }

        self.selection.apply_view_switch(mode);
        self.view_mode = mode;
        self.sync_holidays();
    }
}
