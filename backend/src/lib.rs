//! Backend domain logic for the offer console.
//!
//! The console's REST layer, wizard screens, and persistence live in
//! separate crates; this crate owns the business rules they share.

pub mod domain;
