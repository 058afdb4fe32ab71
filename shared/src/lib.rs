use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the week for recurring opening hours.
///
/// Kept as a project enum rather than a chrono type so the wire
/// representation stays stable regardless of date-library choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays in display order (Monday first).
    pub fn all() -> [Weekday; 7] {
        [
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
            Weekday::Sunday,
        ]
    }

    /// Human-readable day name for display purposes.
    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One concrete occurrence of an offer as submitted to offer creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPayload {
    /// Start instant, local wall-clock time
    pub starts_at: NaiveDateTime,
    /// End instant, same conventions as `starts_at`
    pub ends_at: NaiveDateTime,
}

/// One row of the recurring weekly schedule table: a single weekday
/// with its opening window. An opening-hours entry covering several
/// weekdays is flattened into one row per weekday before submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningHoursPayload {
    pub weekday: Weekday,
    pub opens_at: NaiveTime,
    pub closes_at: NaiveTime,
}

/// Calendar portion of the offer-creation payload.
///
/// The variant mirrors the scheduling mode the user picked in the
/// calendar step: explicit occurrence dates, a bounded recurring
/// period, or an open-ended permanent schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calendar_type")]
pub enum CalendarPayload {
    /// One or more explicit occurrences (single and multiple modes)
    Days { days: Vec<DayPayload> },
    /// Recurring weekly schedule bounded by a date range
    DateRange {
        start: NaiveDate,
        end: NaiveDate,
        opening_hours: Vec<OpeningHoursPayload>,
    },
    /// Open-ended schedule (no end date), e.g. a museum or venue
    Permanent { opening_hours: Vec<OpeningHoursPayload> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_all_is_monday_first() {
        let all = Weekday::all();
        assert_eq!(all.len(), 7);
        assert_eq!(all[0], Weekday::Monday);
        assert_eq!(all[6], Weekday::Sunday);
    }

    #[test]
    fn test_weekday_label() {
        assert_eq!(Weekday::Monday.label(), "Monday");
        assert_eq!(Weekday::Sunday.to_string(), "Sunday");
    }

    #[test]
    fn test_calendar_payload_is_tagged_by_calendar_type() {
        let payload = CalendarPayload::Permanent {
            opening_hours: vec![],
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["calendar_type"], "Permanent");
        assert!(json["opening_hours"].as_array().unwrap().is_empty());
    }
}
