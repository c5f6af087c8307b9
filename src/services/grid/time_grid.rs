//! Hour grid for the Day/Week/Work-week views.
//!
//! Each day cell expands into 24 hour rows; the current-time indicator is a
//! horizontal line whose offset is derived from wall-clock time and the row
//! height.

use chrono::{NaiveTime, Timelike};

pub use crate::utils::date::format_hour;

/// Hour rows rendered per day, 0..=23.
pub const HOURS_PER_DAY: u32 = 24;

/// Default row height in pixels, matching the reference layout.
pub const DEFAULT_HOUR_HEIGHT: f32 = 72.0;

/// Hour indices in display order.
pub fn hour_rows() -> impl Iterator<Item = u32> {
    0..HOURS_PER_DAY
}

/// Vertical offset of the "now" line from the top of the hour grid:
/// `hour * cell_height + (minute / 60) * cell_height`.
pub fn now_indicator_offset(now: NaiveTime, cell_height: f32) -> f32 {
    now.hour() as f32 * cell_height + (now.minute() as f32 / 60.0) * cell_height
}

/// Scroll target that centers the "now" line in a viewport, clamped at 0.
pub fn scroll_to_now_offset(now: NaiveTime, cell_height: f32, viewport_height: f32) -> f32 {
    (now_indicator_offset(now, cell_height) - viewport_height / 2.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_hour_rows_cover_full_day() {
        let rows: Vec<u32> = hour_rows().collect();
        assert_eq!(rows.len(), 24);
        assert_eq!(rows[0], 0);
        assert_eq!(rows[23], 23);
    }

    #[test_case(0, 0, 0.0 ; "midnight")]
    #[test_case(1, 0, 72.0 ; "one am")]
    #[test_case(9, 30, 684.0 ; "half past nine")]
    #[test_case(23, 59, 1726.8 ; "end of day")]
    fn test_now_indicator_offset(hour: u32, minute: u32, expected: f32) {
        let offset = now_indicator_offset(time(hour, minute), DEFAULT_HOUR_HEIGHT);
        assert!((offset - expected).abs() < 0.01, "got {}", offset);
    }

    #[test]
    fn test_now_indicator_scales_with_cell_height() {
        assert_eq!(now_indicator_offset(time(2, 30), 100.0), 250.0);
    }

    #[test_case(0, "12 AM" ; "midnight is twelve am")]
    #[test_case(12, "12 PM" ; "noon is twelve pm")]
    #[test_case(9, "9 AM")]
    #[test_case(15, "3 PM")]
    fn test_hour_display_convention(hour: u32, expected: &str) {
        assert_eq!(format_hour(hour), expected);
    }

    #[test]
    fn test_scroll_offset_centers_and_clamps() {
        // 09:00 at 72px rows = 648; centered in an 800px viewport = 248.
        assert_eq!(scroll_to_now_offset(time(9, 0), 72.0, 800.0), 248.0);
        // Early morning clamps to the top instead of going negative.
        assert_eq!(scroll_to_now_offset(time(0, 10), 72.0, 800.0), 0.0);
    }
}
