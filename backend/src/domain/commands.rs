//! Domain-level command types for the calendar wizard step.
//!
//! These structs are used by the handler API inside the domain layer
//! and are **not** exposed over the public API. The wizard layer is
//! responsible for mapping its form events to these internal types.

pub mod calendar {
    use crate::domain::models::OpeningHoursEntry;
    use chrono::NaiveDate;

    /// Input for removing one scheduled day.
    #[derive(Debug, Clone)]
    pub struct DeleteDayCommand {
        pub day_id: String,
    }

    /// Input for re-dating one bound of a scheduled day. The time of
    /// day of that bound is preserved.
    #[derive(Debug, Clone)]
    pub struct ChangeDayDateCommand {
        pub day_id: String,
        pub date: NaiveDate,
    }

    /// Input for re-timing one bound of a scheduled day. The calendar
    /// date of that bound is preserved.
    #[derive(Debug, Clone)]
    pub struct ChangeDayTimeCommand {
        pub day_id: String,
        pub hour: u32,
        pub minute: u32,
    }

    /// Input for replacing the whole opening-hours list. An empty
    /// list turns opening hours off.
    #[derive(Debug, Clone)]
    pub struct ReplaceOpeningHoursCommand {
        pub entries: Vec<OpeningHoursEntry>,
    }
}
