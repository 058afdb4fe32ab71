//! Conversion of committed calendar state into the offer-creation
//! payload. This is the boundary with the surrounding form: it only
//! reads snapshots, never the machine itself.

use super::machine::{CalendarMode, CommittedState};
use super::models::OpeningHoursEntry;
use shared::{CalendarPayload, DayPayload, OpeningHoursPayload};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CalendarPayloadError {
    /// The form blocks submission until both range bounds are picked.
    #[error("periodic schedule is missing its start or end date")]
    IncompleteDateRange,
}

/// Shape the committed calendar state into the calendar portion of
/// the offer-creation payload.
///
/// Pure and total over reachable states, except a periodic schedule
/// whose date range is still incomplete — that one is not yet
/// submittable and comes back as an error for the form to surface.
pub fn to_calendar_payload(
    committed: &CommittedState,
) -> Result<CalendarPayload, CalendarPayloadError> {
    match committed.mode {
        CalendarMode::Single | CalendarMode::Multiple => Ok(CalendarPayload::Days {
            days: committed
                .context
                .days
                .iter()
                .map(|day| DayPayload {
                    starts_at: day.start,
                    ends_at: day.end,
                })
                .collect(),
        }),
        CalendarMode::Periodic => {
            let range = &committed.context.date_range;
            match (range.start, range.end) {
                (Some(start), Some(end)) => Ok(CalendarPayload::DateRange {
                    start,
                    end,
                    opening_hours: flatten_opening_hours(&committed.context.opening_hours),
                }),
                _ => Err(CalendarPayloadError::IncompleteDateRange),
            }
        }
        CalendarMode::Permanent => Ok(CalendarPayload::Permanent {
            opening_hours: flatten_opening_hours(&committed.context.opening_hours),
        }),
    }
}

/// One payload row per (entry, weekday) pair — the schedule-table
/// shape offer creation stores.
fn flatten_opening_hours(entries: &[OpeningHoursEntry]) -> Vec<OpeningHoursPayload> {
    entries
        .iter()
        .flat_map(|entry| {
            entry.days_of_week.iter().map(move |weekday| OpeningHoursPayload {
                weekday: *weekday,
                opens_at: entry.opens_at,
                closes_at: entry.closes_at,
            })
        })
        .collect()
}
