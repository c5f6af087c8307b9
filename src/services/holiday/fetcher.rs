// Public holiday feed client
// Blocking HTTP client for the Nager.Date v3 API with timeout and bounded
// retries. Runs outside the gesture path; the host decides the thread.

use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::thread;
use std::time::Duration;

use super::HolidaySource;
use crate::models::holiday::PublicHoliday;

const API_BASE: &str = "https://date.nager.at/api/v3/PublicHolidays";

pub struct HolidayFetcher {
    client: Client,
    base_url: String,
    max_retries: usize,
    retry_delay_ms: u64,
}

impl HolidayFetcher {
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE)
    }

    /// Point the fetcher at a different endpoint (tests use a local server).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .context("Failed to build holiday feed HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            max_retries: 2,
            retry_delay_ms: 400,
        })
    }

    fn fetch_once(&self, year: i32, country: &str) -> Result<Vec<PublicHoliday>> {
        let url = format!("{}/{}/{}", self.base_url, year, country);
        let response = self
            .client
            .get(&url)
            .send()
            .context("Network error during holiday fetch")?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            // The feed answers 204 for countries without published data.
            return Ok(Vec::new());
        }
        if status != StatusCode::OK {
            return Err(anyhow!("Holiday fetch failed with HTTP status {}", status));
        }

        response
            .json::<Vec<PublicHoliday>>()
            .context("Holiday response is not a valid holiday list")
    }
}

impl HolidaySource for HolidayFetcher {
    fn fetch_year(&self, year: i32, country: &str) -> Result<Vec<PublicHoliday>> {
        let mut last_error: Option<anyhow::Error> = None;

        for attempt in 0..=self.max_retries {
            match self.fetch_once(year, country) {
                Ok(holidays) => {
                    log::debug!(
                        "fetched {} holidays for {} {}",
                        holidays.len(),
                        country,
                        year
                    );
                    return Ok(holidays);
                }
                Err(err) => {
                    if attempt == self.max_retries {
                        last_error = Some(err.context(format!(
                            "Failed to fetch holidays for {} {} after {} attempts",
                            country,
                            year,
                            attempt + 1
                        )));
                    } else {
                        log::warn!(
                            "holiday fetch attempt {} failed for {} {}: {}",
                            attempt + 1,
                            country,
                            year,
                            err
                        );
                        thread::sleep(Duration::from_millis(self.retry_delay_ms));
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow!("Unknown holiday fetch error")))
    }
}
