//! ICS calendar generation.
//!
//! Builds a VCALENDAR document with one weekly-recurring VEVENT per course
//! event, per RFC 5545 conventions (CRLF line endings, escaped text values,
//! floating local times).

mod escape;
mod generate;

pub use escape::{escape_value, unescape_value};
pub use generate::{event_uid, generate_ics};
