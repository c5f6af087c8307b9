// Event module
// Calendar entry model shared by the grid, index, and drag engines.

use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;
use thiserror::Error;

/// Opaque, caller-unique event identifier.
///
/// User events get serially minted ids; holiday events carry a synthesized
/// `holiday-<countryCode>-<isoDate>` id so a refetch replaces them cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventId(String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id for a user event minted from a serial counter.
    pub fn from_serial(serial: u64) -> Self {
        Self(format!("event-{}", serial))
    }

    /// Synthesized id for a fetched public holiday.
    pub fn for_holiday(country_code: &str, date: NaiveDate) -> Self {
        Self(format!("holiday-{}-{}", country_code, date.format("%Y-%m-%d")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Event priority tier. Drafts carry `Option<Priority>` so "not chosen yet"
/// is absence rather than an in-band sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// A calendar entry. Placement is day-granular: the time component of `date`
/// is ignored everywhere except display.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub date: NaiveDateTime,
    /// Color token (hex string) chosen in the form, or the highlight color
    /// for holidays.
    pub color: String,
    pub priority: Priority,
    /// Holiday events are never dragged, reordered, edited, or deleted
    /// through the controller.
    pub is_holiday: bool,
}

impl Event {
    /// Build a holiday event from feed data, styled with the current
    /// highlight color.
    pub fn holiday(
        country_code: &str,
        date: NaiveDate,
        title: impl Into<String>,
        highlight_hex: impl Into<String>,
    ) -> Self {
        Self {
            id: EventId::for_holiday(country_code, date),
            title: title.into(),
            date: date.and_hms_opt(0, 0, 0).unwrap_or_default(),
            color: highlight_hex.into(),
            priority: Priority::Low,
            is_holiday: true,
        }
    }
}

/// Validation failures for an event draft. The controller rejects the save
/// without mutating any state; the form stays open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EventDraftError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event color must be selected")]
    MissingColor,
    #[error("Event priority must be selected")]
    MissingPriority,
}

/// What the (external) event form hands over on submit.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub color: String,
    pub priority: Option<Priority>,
    pub date: NaiveDateTime,
}

impl EventDraft {
    pub fn new(
        title: impl Into<String>,
        color: impl Into<String>,
        priority: Option<Priority>,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            title: title.into(),
            color: color.into(),
            priority,
            date,
        }
    }

    /// Check the draft against the save requirements: non-empty title, a
    /// color, and a chosen priority.
    pub fn validate(&self) -> Result<(), EventDraftError> {
        if self.title.trim().is_empty() {
            return Err(EventDraftError::EmptyTitle);
        }
        if self.color.trim().is_empty() {
            return Err(EventDraftError::MissingColor);
        }
        if self.priority.is_none() {
            return Err(EventDraftError::MissingPriority);
        }
        Ok(())
    }

    /// Turn a validated draft into an event with the given id.
    pub fn into_event(self, id: EventId) -> Result<Event, EventDraftError> {
        self.validate()?;
        let priority = self.priority.ok_or(EventDraftError::MissingPriority)?;
        Ok(Event {
            id,
            title: self.title.trim().to_string(),
            date: self.date,
            color: self.color,
            priority,
            is_holiday: false,
        })
    }
}
