//! Domain model for one scheduled occurrence of an offer.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One concrete start/end occurrence of an offer.
///
/// Day ID format: "day::<uuid>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    pub id: String,
    /// Start instant, local wall-clock time
    pub start: NaiveDateTime,
    /// End instant, same conventions as `start`
    pub end: NaiveDateTime,
}

impl Day {
    /// Generate a fresh caller-opaque day ID.
    pub fn generate_id() -> String {
        format!("day::{}", Uuid::new_v4())
    }

    /// A day spanning the whole current calendar day (00:00–23:59).
    /// This is the default occurrence a new calendar starts with.
    pub fn today() -> Self {
        Self::spanning(Local::now().date_naive())
    }

    /// A day spanning the whole given calendar day.
    pub fn spanning(date: NaiveDate) -> Self {
        // Constant components, always valid
        let start_of_day = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        let end_of_day = NaiveTime::from_hms_opt(23, 59, 0).unwrap();
        Self {
            id: Self::generate_id(),
            start: date.and_time(start_of_day),
            end: date.and_time(end_of_day),
        }
    }

    /// Same instants, fresh identity. Adding a day to the schedule
    /// appends a duplicate of the last row for the user to edit.
    pub fn duplicate(&self) -> Self {
        Self {
            id: Self::generate_id(),
            start: self.start,
            end: self.end,
        }
    }

    /// Replace the calendar date of the start, keeping its time of day.
    pub fn with_start_date(&self, date: NaiveDate) -> Self {
        Self {
            start: date.and_time(self.start.time()),
            ..self.clone()
        }
    }

    /// Replace the calendar date of the end, keeping its time of day.
    pub fn with_end_date(&self, date: NaiveDate) -> Self {
        Self {
            end: date.and_time(self.end.time()),
            ..self.clone()
        }
    }

    /// Replace hour and minute of the start, keeping its date.
    /// Seconds reset to zero. Out-of-range input leaves the day untouched.
    pub fn with_start_time(&self, hour: u32, minute: u32) -> Self {
        match NaiveTime::from_hms_opt(hour, minute, 0) {
            Some(time) => Self {
                start: self.start.date().and_time(time),
                ..self.clone()
            },
            None => self.clone(),
        }
    }

    /// Replace hour and minute of the end, keeping its date.
    /// Seconds reset to zero. Out-of-range input leaves the day untouched.
    pub fn with_end_time(&self, hour: u32, minute: u32) -> Self {
        match NaiveTime::from_hms_opt(hour, minute, 0) {
            Some(time) => Self {
                end: self.end.date().and_time(time),
                ..self.clone()
            },
            None => self.clone(),
        }
    }

    /// Whether the end instant is at or after the start instant.
    /// The surrounding form checks this before allowing submission;
    /// the machine itself lets the user pass through invalid
    /// intermediate input while editing.
    pub fn is_ordered(&self) -> bool {
        self.end >= self.start
    }
}
