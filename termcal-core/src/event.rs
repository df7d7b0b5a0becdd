//! Course event types and record validation.
//!
//! The input document is deserialized into loosely-typed `RawEvent` records
//! first, so that a missing field surfaces as a validation error naming the
//! offending event's position rather than as a JSON parse failure.

use chrono::NaiveTime;
use serde::Deserialize;

use crate::error::{TermcalError, TermcalResult};

/// A weekday, identified by its two-letter iCalendar code.
///
/// Declaration order matches the ISO convention (Monday = 0 … Sunday = 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Day {
    Mo,
    Tu,
    We,
    Th,
    Fr,
    Sa,
    Su,
}

impl Day {
    /// All seven days in Monday-first order.
    pub const ALL: [Day; 7] = [
        Day::Mo,
        Day::Tu,
        Day::We,
        Day::Th,
        Day::Fr,
        Day::Sa,
        Day::Su,
    ];

    pub fn from_code(code: &str) -> Option<Day> {
        match code {
            "MO" => Some(Day::Mo),
            "TU" => Some(Day::Tu),
            "WE" => Some(Day::We),
            "TH" => Some(Day::Th),
            "FR" => Some(Day::Fr),
            "SA" => Some(Day::Sa),
            "SU" => Some(Day::Su),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Day::Mo => "MO",
            Day::Tu => "TU",
            Day::We => "WE",
            Day::Th => "TH",
            Day::Fr => "FR",
            Day::Sa => "SA",
            Day::Su => "SU",
        }
    }

    /// ISO weekday index: Monday = 0 … Sunday = 6.
    /// Matches `chrono::Weekday::num_days_from_monday`.
    pub fn iso_index(self) -> u32 {
        self as u32
    }
}

/// A validated course meeting that recurs weekly on `days`.
#[derive(Debug, Clone)]
pub struct CourseEvent {
    pub title: String,
    /// Weekday codes in the order they were given (preserved for BYDAY).
    pub days: Vec<Day>,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub location: String,
    pub notes: String,
}

/// An event record as it appears in the input document, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    pub title: Option<String>,
    pub days: Option<Vec<String>>,
    pub start: Option<String>,
    pub end: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl RawEvent {
    /// Validate this record into a `CourseEvent`.
    ///
    /// `index` is the 1-based position in the document, used in error
    /// messages. Checks field presence, day codes and time syntax only;
    /// start < end and duplicate/overlap checks are deliberately not done.
    pub fn validate(&self, index: usize) -> TermcalResult<CourseEvent> {
        let (Some(title), Some(days), Some(start), Some(end)) =
            (&self.title, &self.days, &self.start, &self.end)
        else {
            return Err(TermcalError::MissingField { index });
        };

        let days = days
            .iter()
            .map(|code| {
                Day::from_code(code).ok_or_else(|| TermcalError::InvalidDay {
                    index,
                    day: code.clone(),
                })
            })
            .collect::<TermcalResult<Vec<Day>>>()?;

        let start_time = parse_hhmm(start).ok_or_else(|| TermcalError::InvalidTime {
            index,
            value: start.clone(),
        })?;
        let end_time = parse_hhmm(end).ok_or_else(|| TermcalError::InvalidTime {
            index,
            value: end.clone(),
        })?;

        Ok(CourseEvent {
            title: title.clone(),
            days,
            start: start_time,
            end: end_time,
            location: self.location.clone().unwrap_or_default(),
            notes: self.notes.clone().unwrap_or_default(),
        })
    }
}

/// Validate raw records in document order, failing on the first violation.
pub fn validate_events(raw: &[RawEvent]) -> TermcalResult<Vec<CourseEvent>> {
    raw.iter()
        .enumerate()
        .map(|(i, record)| record.validate(i + 1))
        .collect()
}

/// Parse a `HH:MM` time of day (24-hour, zero padding optional).
pub fn parse_hhmm(value: &str) -> Option<NaiveTime> {
    let (hh, mm) = value.split_once(':')?;
    let digits = |s: &str| !s.is_empty() && s.len() <= 2 && s.bytes().all(|b| b.is_ascii_digit());
    if !digits(hh) || !digits(mm) {
        return None;
    }
    NaiveTime::from_hms_opt(hh.parse().ok()?, mm.parse().ok()?, 0)
}
