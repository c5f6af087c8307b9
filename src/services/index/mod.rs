//! Event index.
//!
//! Maps the flat event collection to per-cell buckets by day-equality and
//! applies the display-order policy: holidays first, everything else in its
//! existing relative order (drag-induced order included). Also hosts the
//! title search filter.

use chrono::NaiveDateTime;

use crate::models::event::Event;
use crate::utils::date;

/// Events placed on `day`, preserving input order (stable).
pub fn bucket_by_day<'a>(events: &'a [Event], day: NaiveDateTime) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| date::is_same_day(event.date, day))
        .collect()
}

/// Merge the holiday overlay with the user events: all holidays first, then
/// every non-holiday user event. Holidays are never deduplicated against
/// user events; only their own fetch cycle replaces them.
pub fn merge(holidays: &[Event], user_events: &[Event]) -> Vec<Event> {
    let mut merged = Vec::with_capacity(holidays.len() + user_events.len());
    merged.extend(holidays.iter().cloned());
    merged.extend(user_events.iter().filter(|e| !e.is_holiday).cloned());
    merged
}

/// Display order within one day: holidays before user events, otherwise
/// stable. Drag-induced order among user events survives this sort.
pub fn sort_within_day(events: &mut [Event]) {
    events.sort_by_key(|event| !event.is_holiday);
}

/// Case- and diacritic-insensitive substring filter on the event title.
///
/// Holidays are exempt and always pass. A blank or whitespace-only query
/// keeps everything.
pub fn filter_by_query(events: Vec<Event>, query: &str) -> Vec<Event> {
    let needle = fold_search_text(query.trim());
    if needle.is_empty() {
        return events;
    }
    events
        .into_iter()
        .filter(|event| event.is_holiday || fold_search_text(&event.title).contains(&needle))
        .collect()
}

/// Lowercase and strip the Latin diacritics that show up in event titles and
/// localized holiday names, so "café" matches "Cafe Meeting".
pub fn fold_search_text(text: &str) -> String {
    text.chars()
        .flat_map(|c| c.to_lowercase())
        .map(fold_char)
        .collect()
}

fn fold_char(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' => 'i',
        'ł' => 'l',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ř' => 'r',
        'ś' | 'š' => 's',
        'ť' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

/// Full per-day pipeline: merge, bucket, holiday-first sort, search filter.
pub fn day_events(
    holidays: &[Event],
    user_events: &[Event],
    day: NaiveDateTime,
    query: &str,
) -> Vec<Event> {
    let merged = merge(holidays, user_events);
    let mut bucket: Vec<Event> = bucket_by_day(&merged, day).into_iter().cloned().collect();
    sort_within_day(&mut bucket);
    filter_by_query(bucket, query)
}
