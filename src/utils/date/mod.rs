// Date utility functions
// Pure calendar arithmetic; event placement ignores time-of-day throughout.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, Weekday};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Add `n` days (negative allowed). Returns a new value, input untouched.
pub fn add_days(date: NaiveDateTime, n: i64) -> NaiveDateTime {
    date + Duration::days(n)
}

/// Add `n` months. Day-of-month is clamped by chrono's month rules
/// (e.g. Jan 31 + 1 month = Feb 28/29).
pub fn add_months(date: NaiveDateTime, n: u32) -> NaiveDateTime {
    date.checked_add_months(Months::new(n)).unwrap_or(date)
}

/// Subtract `n` months, same clamping as `add_months`.
pub fn sub_months(date: NaiveDateTime, n: u32) -> NaiveDateTime {
    date.checked_sub_months(Months::new(n)).unwrap_or(date)
}

/// First day of the month, time zeroed.
pub fn start_of_month(date: NaiveDateTime) -> NaiveDateTime {
    let first = date.date().with_day(1).unwrap_or_else(|| date.date());
    first.and_hms_opt(0, 0, 0).unwrap_or(date)
}

/// Last day of the month, end-of-day time.
pub fn end_of_month(date: NaiveDateTime) -> NaiveDateTime {
    let last = date
        .date()
        .with_day(days_in_month(date))
        .unwrap_or_else(|| date.date());
    last.and_hms_opt(23, 59, 59).unwrap_or(date)
}

/// The preceding (or same) Sunday, time zeroed.
pub fn start_of_week(date: NaiveDateTime) -> NaiveDateTime {
    let back = date.weekday().num_days_from_sunday() as i64;
    let sunday = date.date() - Duration::days(back);
    sunday.and_hms_opt(0, 0, 0).unwrap_or(date)
}

/// The following (or same) Saturday, end-of-day time.
pub fn end_of_week(date: NaiveDateTime) -> NaiveDateTime {
    let forward = 6 - date.weekday().num_days_from_sunday() as i64;
    let saturday = date.date() + Duration::days(forward);
    saturday.and_hms_opt(23, 59, 59).unwrap_or(date)
}

/// Day-equality: same year, month, and day; time-of-day ignored.
pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

/// Same year and month; day and time ignored.
pub fn is_same_month(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Number of calendar days in the month containing `date`.
pub fn days_in_month(date: NaiveDateTime) -> u32 {
    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    let first_of_next =
        NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap_or_else(|| date.date());
    (first_of_next - Duration::days(1)).day()
}

/// Whether the date falls on Saturday or Sunday.
pub fn is_weekend(date: NaiveDateTime) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// English month name (January..December).
pub fn month_name(date: NaiveDateTime) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

/// English weekday name (Sunday..Saturday).
pub fn weekday_name(date: NaiveDateTime) -> &'static str {
    DAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

/// Format a date with the small pattern set the views use.
///
/// Supported patterns: `"d"`, `"MMMM"`, `"yyyy"`, `"MMMM yyyy"`, `"EEEE"`.
/// Anything else falls back to a full-date string (`"Fri Mar 01 2024"`).
pub fn format_date(date: NaiveDateTime, pattern: &str) -> String {
    match pattern {
        "d" => date.day().to_string(),
        "MMMM" => month_name(date).to_string(),
        "yyyy" => date.year().to_string(),
        "MMMM yyyy" => format!("{} {}", month_name(date), date.year()),
        "EEEE" => weekday_name(date).to_string(),
        _ => format!(
            "{} {} {:02} {}",
            &weekday_name(date)[..3],
            &month_name(date)[..3],
            date.day(),
            date.year()
        ),
    }
}

/// Display label for a week span.
///
/// Work weeks span Monday..Friday, full weeks the Sunday-start 7-day span.
/// Same-month: `"March 1 – 7, 2026"`; cross-month:
/// `"March 29 – April 4, 2026"`. The year always comes from the end date.
pub fn week_range_label(date: NaiveDateTime, is_work_week: bool) -> String {
    let start = if is_work_week {
        add_days(start_of_week(date), 1)
    } else {
        start_of_week(date)
    };
    let end = if is_work_week {
        add_days(start, 4)
    } else {
        add_days(start, 6)
    };

    if is_same_month(start, end) {
        format!(
            "{} {} – {}, {}",
            month_name(start),
            start.day(),
            end.day(),
            end.year()
        )
    } else {
        format!(
            "{} {} – {} {}, {}",
            month_name(start),
            start.day(),
            month_name(end),
            end.day(),
            end.year()
        )
    }
}

/// Hour row label in the 12-hour convention: `"12 AM"`, `"9 AM"`, `"12 PM"`,
/// `"3 PM"`.
pub fn format_hour(hour: u32) -> String {
    match hour {
        0 => "12 AM".to_string(),
        12 => "12 PM".to_string(),
        h if h < 12 => format!("{} AM", h),
        h => format!("{} PM", h - 12),
    }
}

/// Display label for a single day: `"Friday, March 1, 2024"`.
pub fn day_range_label(date: NaiveDateTime) -> String {
    format!(
        "{}, {} {}, {}",
        weekday_name(date),
        month_name(date),
        date.day(),
        date.year()
    )
}

/// Local "now" as a naive wall-clock timestamp.
pub fn now_local() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}
