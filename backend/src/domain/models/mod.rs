//! Value types owned by the calendar machine.

pub mod context;
pub mod day;
pub mod opening_hours;

pub use context::{CalendarContext, DateRange};
pub use day::Day;
pub use opening_hours::OpeningHoursEntry;
