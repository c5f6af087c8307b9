//! Holiday overlay service.
//!
//! Owns the fetched holiday subset of the calendar. The set is replaced
//! wholesale per `(year, highlight color)` key, never merged incrementally,
//! so changing the year or the country list can't leave stale entries
//! behind. Fetch failures keep the previous set; the degraded mode is
//! "no or stale holidays", never a crash.

use anyhow::Result;

#[cfg(test)]
use mockall::automock;

use crate::models::event::Event;
use crate::models::holiday::PublicHoliday;

pub mod fetcher;

pub use fetcher::HolidayFetcher;

/// Provider of the raw holiday feed, one (year, country) at a time.
#[cfg_attr(test, automock)]
pub trait HolidaySource {
    fn fetch_year(&self, year: i32, country: &str) -> Result<Vec<PublicHoliday>>;
}

/// Cache key for one sync cycle. The highlight color participates because it
/// is baked into the generated holiday events' styling.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SyncKey {
    year: i32,
    highlight_hex: String,
}

pub struct HolidayService {
    source: Box<dyn HolidaySource>,
    countries: Vec<String>,
    holidays: Vec<Event>,
    current_key: Option<SyncKey>,
    /// Bumped on every new sync request; completions carrying an older
    /// generation are discarded so a late response for an abandoned year
    /// cannot overwrite current results.
    generation: u64,
}

impl HolidayService {
    pub fn new(source: Box<dyn HolidaySource>, countries: Vec<String>) -> Self {
        Self {
            source,
            countries,
            holidays: Vec::new(),
            current_key: None,
            generation: 0,
        }
    }

    /// The current holiday overlay, holidays only.
    pub fn holidays(&self) -> &[Event] {
        &self.holidays
    }

    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    /// Ensure the overlay matches `(year, highlight_hex)`. No-op when the key
    /// is unchanged; otherwise fetches every configured country and replaces
    /// the whole set. Any country failing aborts the replace and keeps the
    /// previous set (all-or-nothing, logged at warn).
    pub fn sync(&mut self, year: i32, highlight_hex: &str) {
        let key = SyncKey {
            year,
            highlight_hex: highlight_hex.to_string(),
        };
        if self.current_key.as_ref() == Some(&key) {
            return;
        }

        let generation = self.begin_sync();
        let result = self.fetch_all(year, highlight_hex);
        self.complete_sync(generation, key, result);
    }

    /// Start a sync cycle and get its generation token. Split from
    /// `complete_sync` so a host running the fetch off-thread can hand the
    /// result back later and still have staleness detected.
    pub fn begin_sync(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Apply a finished fetch. Stale generations (a newer sync began in the
    /// meantime) and failed fetches leave the current set untouched.
    fn complete_sync(&mut self, generation: u64, key: SyncKey, result: Result<Vec<Event>>) {
        if generation != self.generation {
            log::debug!(
                "discarding stale holiday sync for {} (generation {} < {})",
                key.year,
                generation,
                self.generation
            );
            return;
        }
        match result {
            Ok(holidays) => {
                log::info!("holiday overlay replaced: {} entries for {}", holidays.len(), key.year);
                self.holidays = holidays;
                self.current_key = Some(key);
            }
            Err(err) => {
                log::warn!("holiday sync for {} failed, keeping previous set: {:#}", key.year, err);
            }
        }
    }

    /// Apply an externally produced result (host-driven async variant of
    /// `sync`). Exposed so late completions can be funneled through the
    /// generation guard.
    pub fn apply_sync_result(
        &mut self,
        generation: u64,
        year: i32,
        highlight_hex: &str,
        result: Result<Vec<Event>>,
    ) {
        let key = SyncKey {
            year,
            highlight_hex: highlight_hex.to_string(),
        };
        self.complete_sync(generation, key, result);
    }

    fn fetch_all(&self, year: i32, highlight_hex: &str) -> Result<Vec<Event>> {
        let mut events = Vec::new();
        for country in &self.countries {
            let holidays = self.source.fetch_year(year, country)?;
            events.extend(
                holidays
                    .into_iter()
                    .map(|h| holiday_to_event(h, highlight_hex)),
            );
        }
        Ok(events)
    }
}

/// Map one feed entry to a calendar event styled with the highlight color.
fn holiday_to_event(holiday: PublicHoliday, highlight_hex: &str) -> Event {
    Event::holiday(
        &holiday.country_code,
        holiday.date,
        holiday.local_name,
        highlight_hex,
    )
}
