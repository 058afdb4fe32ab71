//! Calendar configuration state machine.
//!
//! Owns the single source of truth for "when does this offer happen"
//! and enforces which operations are legal in which scheduling mode.
//! The wizard step dispatches events through the handlers and
//! re-renders from the committed state returned after each one; it
//! never mutates the context directly.

use super::models::{CalendarContext, DateRange, Day, OpeningHoursEntry};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether a periodic/permanent schedule currently carries
/// opening-hours entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoursSubstate {
    NoHours,
    WithHours,
}

/// Top-level scheduling mode, as exposed in committed snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarMode {
    /// Exactly one occurrence
    Single,
    /// Two or more explicit occurrences
    Multiple,
    /// Recurring weekly schedule bounded by a date range
    Periodic,
    /// Open-ended schedule with no end date
    Permanent,
}

/// Machine state: the mode crossed with the hours sub-state where the
/// mode carries one. Keeping the sub-state as a payload avoids a flat
/// state per combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarState {
    Single,
    Multiple,
    Periodic(HoursSubstate),
    Permanent(HoursSubstate),
}

impl CalendarState {
    pub fn mode(&self) -> CalendarMode {
        match self {
            CalendarState::Single => CalendarMode::Single,
            CalendarState::Multiple => CalendarMode::Multiple,
            CalendarState::Periodic(_) => CalendarMode::Periodic,
            CalendarState::Permanent(_) => CalendarMode::Permanent,
        }
    }

    /// Hours sub-state, when the mode carries one.
    pub fn hours(&self) -> Option<HoursSubstate> {
        match self {
            CalendarState::Single | CalendarState::Multiple => None,
            CalendarState::Periodic(sub) | CalendarState::Permanent(sub) => Some(*sub),
        }
    }
}

/// User-intent events accepted by the machine.
#[derive(Debug, Clone, PartialEq)]
pub enum CalendarEvent {
    AddDay,
    RemoveDay {
        day_id: String,
    },
    ChangeStartDateOfDay {
        day_id: String,
        date: NaiveDate,
    },
    ChangeEndDateOfDay {
        day_id: String,
        date: NaiveDate,
    },
    ChangeStartHourOfDay {
        day_id: String,
        hour: u32,
        minute: u32,
    },
    ChangeEndHourOfDay {
        day_id: String,
        hour: u32,
        minute: u32,
    },
    /// Move the start bound of the periodic date range
    ChangeRangeStartDate {
        date: NaiveDate,
    },
    /// Move the end bound of the periodic date range
    ChangeRangeEndDate {
        date: NaiveDate,
    },
    ChooseOneOrMoreDays,
    ChooseFixedDays,
    ChooseWithStartAndEndDate,
    ChoosePermanent,
    AddHours,
    /// Replace the whole opening-hours list; an empty replacement
    /// drops the schedule back to the no-hours sub-state
    ChangeHours {
        entries: Vec<OpeningHoursEntry>,
    },
}

impl CalendarEvent {
    /// Stable event name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            CalendarEvent::AddDay => "ADD_DAY",
            CalendarEvent::RemoveDay { .. } => "REMOVE_DAY",
            CalendarEvent::ChangeStartDateOfDay { .. } => "CHANGE_START_DATE",
            CalendarEvent::ChangeEndDateOfDay { .. } => "CHANGE_END_DATE",
            CalendarEvent::ChangeStartHourOfDay { .. } => "CHANGE_START_HOUR",
            CalendarEvent::ChangeEndHourOfDay { .. } => "CHANGE_END_HOUR",
            CalendarEvent::ChangeRangeStartDate { .. } => "CHANGE_RANGE_START_DATE",
            CalendarEvent::ChangeRangeEndDate { .. } => "CHANGE_RANGE_END_DATE",
            CalendarEvent::ChooseOneOrMoreDays => "CHOOSE_ONE_OR_MORE_DAYS",
            CalendarEvent::ChooseFixedDays => "CHOOSE_FIXED_DAYS",
            CalendarEvent::ChooseWithStartAndEndDate => "CHOOSE_WITH_START_AND_END_DATE",
            CalendarEvent::ChoosePermanent => "CHOOSE_PERMANENT",
            CalendarEvent::AddHours => "ADD_HOURS",
            CalendarEvent::ChangeHours { .. } => "CHANGE_HOURS",
        }
    }
}

/// The (mode, sub-state, context) triple returned after every send.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommittedState {
    pub mode: CalendarMode,
    pub hours: Option<HoursSubstate>,
    pub context: CalendarContext,
}

/// Apply one event to a (state, context) pair.
///
/// Pure: the incoming context is never mutated. Returns `None` when
/// no transition is defined for the pair, which the caller treats as
/// a no-op — that covers events undefined in the current state,
/// unknown day IDs, and failed guards alike.
///
/// Guarded pairs (REMOVE_DAY on the day count, CHANGE_HOURS on the
/// replacement list) are declared in order; the first guard that
/// holds wins.
pub fn transition(
    state: CalendarState,
    context: &CalendarContext,
    event: &CalendarEvent,
) -> Option<(CalendarState, CalendarContext)> {
    use CalendarEvent as E;
    use CalendarState as S;
    use HoursSubstate::{NoHours, WithHours};

    match (state, event) {
        // Day-list growth: the new row starts as a copy of the last
        // one, so the user edits instead of retyping.
        (S::Single, E::AddDay) => Some((S::Multiple, push_copy_of_last_day(context))),
        (S::Multiple, E::AddDay) => Some((S::Multiple, push_copy_of_last_day(context))),

        // Removing the penultimate day demotes to single; the
        // schedule never drops below one day.
        (S::Multiple, E::RemoveDay { day_id }) if context.days.len() == 2 => {
            without_day(context, day_id).map(|next| (S::Single, next))
        }
        (S::Multiple, E::RemoveDay { day_id }) if context.days.len() > 2 => {
            without_day(context, day_id).map(|next| (S::Multiple, next))
        }

        (st @ (S::Single | S::Multiple), E::ChangeStartDateOfDay { day_id, date }) => {
            map_day(context, day_id, |d| d.with_start_date(*date)).map(|next| (st, next))
        }
        (st @ (S::Single | S::Multiple), E::ChangeEndDateOfDay { day_id, date }) => {
            map_day(context, day_id, |d| d.with_end_date(*date)).map(|next| (st, next))
        }
        (
            st @ (S::Single | S::Multiple),
            E::ChangeStartHourOfDay {
                day_id,
                hour,
                minute,
            },
        ) => map_day(context, day_id, |d| d.with_start_time(*hour, *minute))
            .map(|next| (st, next)),
        (
            st @ (S::Single | S::Multiple),
            E::ChangeEndHourOfDay {
                day_id,
                hour,
                minute,
            },
        ) => map_day(context, day_id, |d| d.with_end_time(*hour, *minute)).map(|next| (st, next)),

        // Mode choices. Explicit days survive a detour through the
        // periodic modes; they just stop being authoritative there.
        (S::Single | S::Multiple, E::ChooseFixedDays) => {
            Some((S::Periodic(NoHours), context.clone()))
        }
        (S::Periodic(sub), E::ChoosePermanent) => Some((S::Permanent(sub), context.clone())),
        (S::Permanent(sub), E::ChooseWithStartAndEndDate) => {
            Some((S::Periodic(sub), context.clone()))
        }
        (S::Periodic(_) | S::Permanent(_), E::ChooseOneOrMoreDays) => {
            Some((S::Single, demoted_to_single(context)))
        }

        (S::Periodic(sub), E::ChangeRangeStartDate { date }) => {
            let mut next = context.clone();
            next.date_range.start = Some(*date);
            Some((S::Periodic(sub), next))
        }
        (S::Periodic(sub), E::ChangeRangeEndDate { date }) => {
            let mut next = context.clone();
            next.date_range.end = Some(*date);
            Some((S::Periodic(sub), next))
        }

        // Enabling hours seeds one default entry so the with-hours
        // sub-state always has editor content behind it.
        (S::Periodic(NoHours), E::AddHours) => {
            Some((S::Periodic(WithHours), seeded_with_default_hours(context)))
        }
        (S::Permanent(NoHours), E::AddHours) => {
            Some((S::Permanent(WithHours), seeded_with_default_hours(context)))
        }

        // Ordered guard pair: a non-empty replacement keeps the
        // sub-state, an empty one clears it.
        (S::Periodic(WithHours), E::ChangeHours { entries }) if !entries.is_empty() => Some((
            S::Periodic(WithHours),
            with_opening_hours(context, entries.clone()),
        )),
        (S::Periodic(WithHours), E::ChangeHours { .. }) => {
            Some((S::Periodic(NoHours), with_opening_hours(context, Vec::new())))
        }
        (S::Permanent(WithHours), E::ChangeHours { entries }) if !entries.is_empty() => Some((
            S::Permanent(WithHours),
            with_opening_hours(context, entries.clone()),
        )),
        (S::Permanent(WithHours), E::ChangeHours { .. }) => {
            Some((S::Permanent(NoHours), with_opening_hours(context, Vec::new())))
        }

        _ => None,
    }
}

fn push_copy_of_last_day(context: &CalendarContext) -> CalendarContext {
    let copy = context
        .last_day()
        .map(Day::duplicate)
        .unwrap_or_else(Day::today);
    let mut next = context.clone();
    next.days.push(copy);
    next
}

fn without_day(context: &CalendarContext, day_id: &str) -> Option<CalendarContext> {
    let idx = context.days.iter().position(|d| d.id == day_id)?;
    let mut next = context.clone();
    next.days.remove(idx);
    Some(next)
}

/// Rewrite the addressed day through `f`, leaving every other day
/// untouched. `None` when the ID matches nothing.
fn map_day<F>(context: &CalendarContext, day_id: &str, f: F) -> Option<CalendarContext>
where
    F: FnOnce(&Day) -> Day,
{
    let idx = context.days.iter().position(|d| d.id == day_id)?;
    let mut next = context.clone();
    next.days[idx] = f(&context.days[idx]);
    Some(next)
}

/// Leaving the periodic modes keeps only the first explicit day (a
/// fresh default one if there was none) and clears everything that is
/// meaningless in single mode.
fn demoted_to_single(context: &CalendarContext) -> CalendarContext {
    let mut days = context.days.clone();
    days.truncate(1);
    if days.is_empty() {
        days.push(Day::today());
    }
    CalendarContext {
        days,
        date_range: DateRange::default(),
        opening_hours: Vec::new(),
    }
}

fn seeded_with_default_hours(context: &CalendarContext) -> CalendarContext {
    let mut next = context.clone();
    next.opening_hours = vec![OpeningHoursEntry::default_window()];
    next
}

fn with_opening_hours(
    context: &CalendarContext,
    entries: Vec<OpeningHoursEntry>,
) -> CalendarContext {
    let mut next = context.clone();
    next.opening_hours = entries;
    next
}

/// Owner of the calendar context. All transitions go through `send`;
/// they are synchronous and run to completion, so a caller exposing
/// the machine to several threads wraps it in a single lock.
#[derive(Debug, Clone)]
pub struct CalendarMachine {
    state: CalendarState,
    context: CalendarContext,
}

impl CalendarMachine {
    /// Machine for a brand-new offer: single mode, one day spanning
    /// the current calendar day.
    pub fn new() -> Self {
        Self {
            state: CalendarState::Single,
            context: CalendarContext::default(),
        }
    }

    /// Seed the machine from previously saved calendar data, used
    /// when editing an existing offer. Rejects contexts that break
    /// the mode invariants.
    pub fn initialized(state: CalendarState, context: CalendarContext) -> anyhow::Result<Self> {
        match state {
            CalendarState::Single if context.days.len() != 1 => {
                anyhow::bail!(
                    "single mode requires exactly one day, got {}",
                    context.days.len()
                )
            }
            CalendarState::Multiple if context.days.len() < 2 => {
                anyhow::bail!(
                    "multiple mode requires at least two days, got {}",
                    context.days.len()
                )
            }
            CalendarState::Periodic(HoursSubstate::NoHours)
            | CalendarState::Permanent(HoursSubstate::NoHours)
                if !context.opening_hours.is_empty() =>
            {
                anyhow::bail!("no-hours sub-state cannot carry opening-hours entries")
            }
            _ => Ok(Self { state, context }),
        }
    }

    pub fn state(&self) -> CalendarState {
        self.state
    }

    /// Apply one event and return the new committed state. Events
    /// with no transition defined for the current state are no-ops.
    pub fn send(&mut self, event: CalendarEvent) -> CommittedState {
        match transition(self.state, &self.context, &event) {
            Some((state, context)) => {
                self.state = state;
                self.context = context;
            }
            None => {
                log::debug!(
                    "📅 CALENDAR: ignoring {} in {:?}",
                    event.name(),
                    self.state
                );
            }
        }
        self.snapshot()
    }

    /// Read the committed state without mutating anything.
    pub fn snapshot(&self) -> CommittedState {
        CommittedState {
            mode: self.state.mode(),
            hours: self.state.hours(),
            context: self.context.clone(),
        }
    }
}

impl Default for CalendarMachine {
    fn default() -> Self {
        Self::new()
    }
}
