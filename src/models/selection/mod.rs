// Selection state
// A single tagged value: picking one kind structurally clears the others.
// (The original UI tracked four independent nullable fields; the sum type
// makes the mutual-exclusivity invariant impossible to violate.)

use chrono::{Datelike, NaiveDateTime};

use crate::models::view_mode::ViewMode;

/// The current selection, exactly one kind at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    /// A single day cell.
    Day(NaiveDateTime),
    /// A weekday column, 0 = Sunday .. 6 = Saturday.
    Column(u8),
    /// An hour row in Day view, 0..=23.
    Hour(u32),
    /// A (day, hour) cell in the week views.
    DayHour(NaiveDateTime, u32),
}

impl Selection {
    pub fn select_day(&mut self, date: NaiveDateTime) {
        *self = Selection::Day(date);
    }

    /// Column header click toggles: clicking the selected weekday clears it.
    pub fn toggle_column(&mut self, weekday: u8) {
        *self = match *self {
            Selection::Column(current) if current == weekday => Selection::None,
            _ => Selection::Column(weekday),
        };
    }

    pub fn select_hour(&mut self, hour: u32) {
        *self = Selection::Hour(hour);
    }

    pub fn select_day_hour(&mut self, date: NaiveDateTime, hour: u32) {
        *self = Selection::DayHour(date, hour);
    }

    pub fn clear(&mut self) {
        *self = Selection::None;
    }

    /// The selected day, if the selection carries one.
    pub fn selected_day(&self) -> Option<NaiveDateTime> {
        match *self {
            Selection::Day(date) | Selection::DayHour(date, _) => Some(date),
            _ => None,
        }
    }

    /// Drop selection kinds that are meaningless in the target view:
    /// Month keeps no hour-based selection, Day keeps no `DayHour`, and the
    /// week views keep no bare `Hour`.
    pub fn apply_view_switch(&mut self, target: ViewMode) {
        let clear = match (*self, target) {
            (Selection::Hour(_), ViewMode::Month | ViewMode::Week | ViewMode::WorkWeek) => true,
            (Selection::DayHour(_, _), ViewMode::Month | ViewMode::Day) => true,
            _ => false,
        };
        if clear {
            *self = Selection::None;
        }
    }

    /// Whether `date`'s cell should render as selected.
    pub fn is_day_selected(&self, date: NaiveDateTime) -> bool {
        matches!(*self, Selection::Day(d) if d.date() == date.date())
    }

    /// Whether `date`'s weekday column should render as selected.
    pub fn is_column_selected(&self, date: NaiveDateTime) -> bool {
        matches!(*self, Selection::Column(w) if w as u32 == date.weekday().num_days_from_sunday())
    }

    /// Whether the hour row at `(date, hour)` should render as selected.
    /// `Hour` highlights the row across the whole day; `DayHour` only the
    /// one cell.
    pub fn is_hour_selected(&self, date: NaiveDateTime, hour: u32) -> bool {
        match *self {
            Selection::Hour(h) => h == hour,
            Selection::DayHour(d, h) => h == hour && d.date() == date.date(),
            _ => false,
        }
    }
}
