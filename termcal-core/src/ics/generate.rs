//! VCALENDAR document generation.

use sha2::{Digest, Sha256};

use super::escape::escape_value;
use crate::event::{CourseEvent, Day};
use crate::occurrence::first_occurrence;
use crate::schedule::{Schedule, Term};

const PRODID: &str = "-//School Calendar Generator//EN";
const UID_DOMAIN: &str = "school-calendar";

/// Build the complete ICS document for a schedule.
///
/// Each event becomes one VEVENT anchored at its first in-term occurrence,
/// with a weekly recurrence rule bounded by the term end. Events whose day
/// set never falls inside the term window are skipped. Every line,
/// including the last, ends in CRLF.
pub fn generate_ics(schedule: &Schedule) -> String {
    let term = &schedule.term;

    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{PRODID}"),
        "CALSCALE:GREGORIAN".to_string(),
        format!("X-WR-CALNAME:{}", escape_value(&term.name)),
    ];

    // Recurrence bound: end of the term's last day, floating local time
    let until = term
        .end
        .and_hms_opt(23, 59, 59)
        .unwrap()
        .format("%Y%m%dT%H%M%S");

    for event in &schedule.events {
        let Some(first) = first_occurrence(term.start, term.end, &event.days) else {
            continue;
        };

        let dtstart = first.and_time(event.start).format("%Y%m%dT%H%M%S");
        let dtend = first.and_time(event.end).format("%Y%m%dT%H%M%S");
        let byday = day_codes(&event.days);

        lines.extend([
            "BEGIN:VEVENT".to_string(),
            format!("UID:{}", event_uid(event, term)),
            format!("SUMMARY:{}", escape_value(&event.title)),
            format!("DTSTART:{dtstart}"),
            format!("DTEND:{dtend}"),
            format!("RRULE:FREQ=WEEKLY;BYDAY={byday};UNTIL={until}"),
            format!("LOCATION:{}", escape_value(&event.location)),
            format!("DESCRIPTION:{}", escape_value(&event.notes)),
            "END:VEVENT".to_string(),
        ]);
    }

    lines.push("END:VCALENDAR".to_string());

    let mut output = lines.join("\r\n");
    output.push_str("\r\n");
    output
}

/// Deterministic UID for an event within a term.
///
/// SHA-256 over a field-separated encoding of everything that identifies
/// the event (title, day codes in given order, times, term bounds), so
/// repeated runs on the same input produce the same UID and any field
/// change produces a different one. Collision avoidance only, not
/// cryptographic uniqueness.
pub fn event_uid(event: &CourseEvent, term: &Term) -> String {
    let canonical = format!(
        "{}\u{1f}{}\u{1f}{}\u{1f}{}\u{1f}{}\u{1f}{}",
        event.title,
        day_codes(&event.days),
        event.start.format("%H:%M"),
        event.end.format("%H:%M"),
        term.start,
        term.end,
    );

    let digest = Sha256::digest(canonical.as_bytes());
    format!("{}@{}", &hex::encode(digest)[..16], UID_DOMAIN)
}

/// Join day codes with commas, preserving the given order.
fn day_codes(days: &[Day]) -> String {
    days.iter().map(|d| d.code()).collect::<Vec<_>>().join(",")
}
