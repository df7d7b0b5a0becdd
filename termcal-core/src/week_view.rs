//! Weekly view model: events grouped by weekday.
//!
//! Display-only; the grouping has no effect on the generated calendar.

use crate::event::{CourseEvent, Day};

/// One weekday's worth of the weekly view.
#[derive(Debug)]
pub struct DaySlot<'a> {
    pub day: Day,
    /// Events meeting on this day, sorted by start time (stable for ties).
    pub events: Vec<&'a CourseEvent>,
}

/// Group events by weekday in Monday-first order.
///
/// An event appears under every day in its day set.
pub fn week_view(events: &[CourseEvent]) -> Vec<DaySlot<'_>> {
    Day::ALL
        .iter()
        .map(|&day| {
            let mut selected: Vec<&CourseEvent> =
                events.iter().filter(|e| e.days.contains(&day)).collect();
            selected.sort_by_key(|e| e.start);
            DaySlot { day, events: selected }
        })
        .collect()
}
