//! First-occurrence search within a term window.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use crate::event::Day;

/// Find the earliest date in the inclusive range `[start, end]` whose
/// weekday is in `days`, scanning forward one day at a time.
///
/// Returns `None` when the range contains no matching weekday, which
/// happens for windows shorter than a week that skip the requested days,
/// for an empty `days` list, and for inverted ranges (end before start).
pub fn first_occurrence(start: NaiveDate, end: NaiveDate, days: &[Day]) -> Option<NaiveDate> {
    let wanted: HashSet<u32> = days.iter().map(|d| d.iso_index()).collect();

    let mut date = start;
    while date <= end {
        if wanted.contains(&date.weekday().num_days_from_monday()) {
            return Some(date);
        }
        date = date.succ_opt()?;
    }

    None
}
