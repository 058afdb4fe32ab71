//! # Domain Module
//!
//! Business logic for the offer calendar: the state machine that
//! tracks *when* an offer (event or place) takes place while the user
//! walks through the creation wizard.
//!
//! ## Module Organization
//!
//! - **models**: Day, opening-hours, and calendar-context value types
//! - **machine**: the calendar state machine (modes, events, transitions)
//! - **commands**: command payload types accepted by the handler API
//! - **handlers**: dispatchers mapping wizard intents onto machine events
//! - **form_data**: conversion of committed state into the offer-creation payload
//!
//! ## Core Concepts
//!
//! - **Mode**: top-level scheduling category — a single occurrence,
//!   several explicit days, a recurring period with a date range, or a
//!   permanent open-ended schedule
//! - **Hours sub-state**: whether a periodic/permanent schedule
//!   currently carries opening-hours entries
//! - **Committed state**: the (mode, sub-state, context) triple the
//!   wizard re-renders from after every dispatch
//!
//! ## Design Principles
//!
//! - The machine exclusively owns and mutates the calendar context;
//!   everything else reads committed snapshots
//! - Transitions are synchronous and run to completion; no I/O
//! - Events with no transition defined for the current state are
//!   silent no-ops, since wizard affordances are already gated by mode

pub mod commands;
pub mod form_data;
pub mod handlers;
pub mod machine;
pub mod models;

pub use form_data::{to_calendar_payload, CalendarPayloadError};
pub use handlers::{CalendarHandlers, StateChangeCallback};
pub use machine::{
    transition, CalendarEvent, CalendarMachine, CalendarMode, CalendarState, CommittedState,
    HoursSubstate,
};
pub use models::{CalendarContext, DateRange, Day, OpeningHoursEntry};
