//! Command API wiring wizard intents onto the calendar machine.
//!
//! Each handler sends exactly one event, hands the resulting
//! committed state to the registered state-change callback, and
//! returns the same state to the caller. Handlers never cache
//! calendar state of their own, so the machine stays the only
//! stateful component and a handler is testable purely by the events
//! it emits.

use super::commands::calendar::{
    ChangeDayDateCommand, ChangeDayTimeCommand, DeleteDayCommand, ReplaceOpeningHoursCommand,
};
use super::machine::{CalendarEvent, CalendarMachine, CommittedState};
use chrono::NaiveDate;
use std::sync::{Arc, Mutex};

/// Invoked with the committed state after every dispatched intent;
/// the wizard step re-renders from it.
pub type StateChangeCallback = Arc<dyn Fn(&CommittedState) + Send + Sync>;

/// Stable-identity dispatchers for the calendar wizard step.
#[derive(Clone)]
pub struct CalendarHandlers {
    machine: Arc<Mutex<CalendarMachine>>,
    on_change: StateChangeCallback,
}

impl CalendarHandlers {
    pub fn new(machine: Arc<Mutex<CalendarMachine>>, on_change: StateChangeCallback) -> Self {
        Self { machine, on_change }
    }

    /// One event in, one committed state out. The lock scope keeps
    /// transitions run-to-completion even with several callers.
    fn dispatch(&self, event: CalendarEvent) -> CommittedState {
        log::info!("📅 CALENDAR: dispatching {}", event.name());
        let committed = {
            let mut machine = self.machine.lock().unwrap();
            machine.send(event)
        };
        (self.on_change)(&committed);
        committed
    }

    /// Current committed state, without mutation.
    pub fn snapshot(&self) -> CommittedState {
        self.machine.lock().unwrap().snapshot()
    }

    pub fn add_day(&self) -> CommittedState {
        self.dispatch(CalendarEvent::AddDay)
    }

    pub fn delete_day(&self, cmd: DeleteDayCommand) -> CommittedState {
        self.dispatch(CalendarEvent::RemoveDay {
            day_id: cmd.day_id,
        })
    }

    /// Move the start bound of the periodic date range.
    pub fn change_start_date(&self, date: NaiveDate) -> CommittedState {
        self.dispatch(CalendarEvent::ChangeRangeStartDate { date })
    }

    /// Move the end bound of the periodic date range.
    pub fn change_end_date(&self, date: NaiveDate) -> CommittedState {
        self.dispatch(CalendarEvent::ChangeRangeEndDate { date })
    }

    pub fn change_start_date_of_day(&self, cmd: ChangeDayDateCommand) -> CommittedState {
        self.dispatch(CalendarEvent::ChangeStartDateOfDay {
            day_id: cmd.day_id,
            date: cmd.date,
        })
    }

    pub fn change_end_date_of_day(&self, cmd: ChangeDayDateCommand) -> CommittedState {
        self.dispatch(CalendarEvent::ChangeEndDateOfDay {
            day_id: cmd.day_id,
            date: cmd.date,
        })
    }

    pub fn change_start_time(&self, cmd: ChangeDayTimeCommand) -> CommittedState {
        self.dispatch(CalendarEvent::ChangeStartHourOfDay {
            day_id: cmd.day_id,
            hour: cmd.hour,
            minute: cmd.minute,
        })
    }

    pub fn change_end_time(&self, cmd: ChangeDayTimeCommand) -> CommittedState {
        self.dispatch(CalendarEvent::ChangeEndHourOfDay {
            day_id: cmd.day_id,
            hour: cmd.hour,
            minute: cmd.minute,
        })
    }

    pub fn choose_one_or_more_days(&self) -> CommittedState {
        self.dispatch(CalendarEvent::ChooseOneOrMoreDays)
    }

    pub fn choose_fixed_days(&self) -> CommittedState {
        self.dispatch(CalendarEvent::ChooseFixedDays)
    }

    pub fn choose_with_start_and_end_date(&self) -> CommittedState {
        self.dispatch(CalendarEvent::ChooseWithStartAndEndDate)
    }

    pub fn choose_permanent(&self) -> CommittedState {
        self.dispatch(CalendarEvent::ChoosePermanent)
    }

    pub fn change_opening_hours(&self, cmd: ReplaceOpeningHoursCommand) -> CommittedState {
        self.dispatch(CalendarEvent::ChangeHours {
            entries: cmd.entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::machine::{CalendarMode, HoursSubstate};

    fn create_test_handlers() -> (CalendarHandlers, Arc<Mutex<Vec<CommittedState>>>) {
        let machine = Arc::new(Mutex::new(CalendarMachine::new()));
        let seen: Arc<Mutex<Vec<CommittedState>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let on_change: StateChangeCallback =
            Arc::new(move |committed| sink.lock().unwrap().push(committed.clone()));
        (CalendarHandlers::new(machine, on_change), seen)
    }

    #[test]
    fn test_callback_observes_every_dispatch() {
        let (handlers, seen) = create_test_handlers();

        let returned = handlers.add_day();
        handlers.choose_fixed_days();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], returned);
        assert_eq!(seen[0].mode, CalendarMode::Multiple);
        assert_eq!(seen[1].mode, CalendarMode::Periodic);
    }

    #[test]
    fn test_noop_dispatches_still_notify() {
        let (handlers, seen) = create_test_handlers();

        // ChangeHours is undefined in single mode
        let returned = handlers.change_opening_hours(ReplaceOpeningHoursCommand {
            entries: vec![],
        });

        assert_eq!(returned.mode, CalendarMode::Single);
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_day_commands_route_to_the_addressed_day() {
        let (handlers, _) = create_test_handlers();
        handlers.add_day();
        let ids: Vec<String> = handlers
            .snapshot()
            .context
            .days
            .iter()
            .map(|d| d.id.clone())
            .collect();

        let committed = handlers.change_start_time(ChangeDayTimeCommand {
            day_id: ids[1].clone(),
            hour: 14,
            minute: 0,
        });
        assert_eq!(
            committed.context.days[1].start.time().to_string(),
            "14:00:00"
        );

        let committed = handlers.delete_day(DeleteDayCommand {
            day_id: ids[0].clone(),
        });
        assert_eq!(committed.mode, CalendarMode::Single);
        assert_eq!(committed.context.days[0].id, ids[1]);
    }

    #[test]
    fn test_handlers_share_the_machine_and_hold_no_state() {
        let (handlers, _) = create_test_handlers();
        let twin = handlers.clone();

        handlers.choose_fixed_days();
        let committed = twin.snapshot();

        assert_eq!(committed.mode, CalendarMode::Periodic);
        assert_eq!(committed.hours, Some(HoursSubstate::NoHours));
    }

    #[test]
    fn test_range_handlers_drive_the_periodic_range() {
        let (handlers, _) = create_test_handlers();
        handlers.choose_fixed_days();

        handlers.change_start_date(chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        let committed =
            handlers.change_end_date(chrono::NaiveDate::from_ymd_opt(2025, 8, 31).unwrap());

        assert!(committed.context.date_range.is_complete());
    }
}
