// Shared test fixtures

use anyhow::Result;
use chrono::{Datelike, NaiveDate, NaiveDateTime};

use gridcal::controller::CalendarController;
use gridcal::models::event::{EventDraft, Priority};
use gridcal::models::holiday::PublicHoliday;
use gridcal::services::holiday::HolidaySource;
use gridcal::theme::ThemeContext;

/// Holiday source serving a fixed list, with no network involved.
pub struct StubHolidaySource {
    pub holidays: Vec<PublicHoliday>,
}

impl StubHolidaySource {
    pub fn empty() -> Self {
        Self { holidays: Vec::new() }
    }

    pub fn with(holidays: Vec<PublicHoliday>) -> Self {
        Self { holidays }
    }
}

impl HolidaySource for StubHolidaySource {
    fn fetch_year(&self, year: i32, country: &str) -> Result<Vec<PublicHoliday>> {
        Ok(self
            .holidays
            .iter()
            .filter(|h| h.date.year() == year && h.country_code == country)
            .cloned()
            .collect())
    }
}

pub fn dt(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub fn holiday(y: i32, m: u32, d: u32, name: &str, country: &str) -> PublicHoliday {
    PublicHoliday {
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        local_name: name.to_string(),
        name: name.to_string(),
        country_code: country.to_string(),
    }
}

pub fn draft(title: &str, date: NaiveDateTime) -> EventDraft {
    EventDraft::new(title, "#36C5F0", Some(Priority::Medium), date)
}

pub fn controller_with_source(source: StubHolidaySource, countries: &[&str]) -> CalendarController {
    CalendarController::new(
        ThemeContext::default(),
        Box::new(source),
        countries.iter().map(|c| c.to_string()).collect(),
    )
}

pub fn plain_controller() -> CalendarController {
    controller_with_source(StubHolidaySource::empty(), &["US"])
}
