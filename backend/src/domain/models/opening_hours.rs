//! Domain model for a recurring weekly opening window.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use shared::Weekday;
use uuid::Uuid;

/// A recurring weekly time window tied to specific weekdays.
///
/// Only meaningful in the periodic and permanent scheduling modes.
/// Entry ID format: "hours::<uuid>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningHoursEntry {
    pub id: String,
    pub opens_at: NaiveTime,
    pub closes_at: NaiveTime,
    /// Weekdays this window applies to; never empty while the entry exists
    pub days_of_week: Vec<Weekday>,
}

impl OpeningHoursEntry {
    /// Generate a fresh caller-opaque entry ID.
    pub fn generate_id() -> String {
        format!("hours::{}", Uuid::new_v4())
    }

    pub fn new(opens_at: NaiveTime, closes_at: NaiveTime, days_of_week: Vec<Weekday>) -> Self {
        Self {
            id: Self::generate_id(),
            opens_at,
            closes_at,
            days_of_week,
        }
    }

    /// Seed entry shown when the user first enables opening hours:
    /// 09:00–19:00 across the whole week, trimmed from there.
    pub fn default_window() -> Self {
        // Constant components, always valid
        let opens_at = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let closes_at = NaiveTime::from_hms_opt(19, 0, 0).unwrap();
        Self::new(opens_at, closes_at, Weekday::all().to_vec())
    }

    /// Whether the window closes after it opens within the day.
    pub fn is_ordered(&self) -> bool {
        self.closes_at > self.opens_at
    }
}
