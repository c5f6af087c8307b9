// Public holiday wire model
// Shape of one entry in the Nager.Date v3 PublicHolidays payload.

use chrono::NaiveDate;
use serde::Deserialize;

/// One public holiday as returned by the feed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicHoliday {
    pub date: NaiveDate,
    /// Name in the holiday's own locale; this is what the calendar displays.
    pub local_name: String,
    /// English name, unused for display but kept for logging.
    pub name: String,
    pub country_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_feed_entry() {
        let json = r#"{
            "date": "2024-07-14",
            "localName": "Fête nationale",
            "name": "Bastille Day",
            "countryCode": "FR",
            "fixed": true,
            "global": true,
            "types": ["Public"]
        }"#;
        let holiday: PublicHoliday = serde_json::from_str(json).unwrap();
        assert_eq!(holiday.date, NaiveDate::from_ymd_opt(2024, 7, 14).unwrap());
        assert_eq!(holiday.local_name, "Fête nationale");
        assert_eq!(holiday.country_code, "FR");
    }
}
