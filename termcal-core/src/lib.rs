//! Core logic for termcal.
//!
//! This crate turns a term's course schedule (a JSON document) into an
//! iCalendar document plus a weekly view model:
//! - `schedule` loads and validates the input document
//! - `occurrence` finds the first in-term date for a set of weekdays
//! - `week_view` groups events by weekday for display
//! - `ics` builds the VCALENDAR text

pub mod error;
pub mod event;
pub mod ics;
pub mod occurrence;
pub mod schedule;
pub mod week_view;

pub use error::{TermcalError, TermcalResult};
