//! Aggregate calendar state owned by the machine.

use super::day::Day;
use super::opening_hours::OpeningHoursEntry;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Start/end bounds of a periodic schedule. Either side may still be
/// unset while the user is filling the form; the payload converter
/// treats an incomplete range as not yet submittable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// Extended state of the calendar machine.
///
/// Mutated exclusively through machine transitions; the wizard and
/// the payload converter only read committed snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarContext {
    /// Display-ordered occurrences; authoritative in single/multiple modes
    pub days: Vec<Day>,
    /// Used only in periodic mode
    pub date_range: DateRange,
    /// Non-empty only in the with-hours sub-states
    pub opening_hours: Vec<OpeningHoursEntry>,
}

impl Default for CalendarContext {
    /// A fresh calendar starts with one day spanning today.
    fn default() -> Self {
        Self {
            days: vec![Day::today()],
            date_range: DateRange::default(),
            opening_hours: Vec::new(),
        }
    }
}

impl CalendarContext {
    /// Look up a day by its ID.
    pub fn day(&self, day_id: &str) -> Option<&Day> {
        self.days.iter().find(|d| d.id == day_id)
    }

    pub fn last_day(&self) -> Option<&Day> {
        self.days.last()
    }
}
