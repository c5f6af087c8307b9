// View modes
// Governs cell shape and the prev/next navigation step.

/// Calendar view modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Day,
    WorkWeek,
    Week,
    Month,
}

impl ViewMode {
    /// Whether this mode renders an hour grid under each day cell.
    pub fn has_time_grid(self) -> bool {
        !matches!(self, ViewMode::Month)
    }

    /// Header label for the mode switcher.
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Day => "Day",
            ViewMode::WorkWeek => "Work week",
            ViewMode::Week => "Week",
            ViewMode::Month => "Month",
        }
    }
}
