//! Loading and validating the schedule document.

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{TermcalError, TermcalResult};
use crate::event::{CourseEvent, RawEvent, validate_events};

/// A term with its inclusive date window.
#[derive(Debug, Clone)]
pub struct Term {
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// A validated schedule: the term plus its course events.
#[derive(Debug, Clone)]
pub struct Schedule {
    pub term: Term,
    pub events: Vec<CourseEvent>,
}

/// The schedule document as it appears on disk.
#[derive(Debug, Deserialize)]
struct RawSchedule {
    term: String,
    term_start: NaiveDate,
    term_end: NaiveDate,
    events: Vec<RawEvent>,
}

impl Schedule {
    /// Load and validate a schedule from a JSON file.
    ///
    /// A missing file is reported as `MissingInput`; any JSON shape or
    /// date-format problem propagates as the raw parse error; event records
    /// are then validated in document order.
    pub fn load(path: &Path) -> TermcalResult<Self> {
        if !path.exists() {
            return Err(TermcalError::MissingInput(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let raw: RawSchedule = serde_json::from_str(&content)?;

        let events = validate_events(&raw.events)?;

        Ok(Schedule {
            term: Term {
                name: raw.term,
                start: raw.term_start,
                end: raw.term_end,
            },
            events,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Day;
    use std::io::Write;

    const GOOD_DOC: &str = r#"{
        "term": "Fall 2024",
        "term_start": "2024-09-02",
        "term_end": "2024-12-13",
        "events": [
            {
                "title": "Algorithms",
                "days": ["MO", "WE"],
                "start": "10:00",
                "end": "11:15",
                "location": "Room 204"
            }
        ]
    }"#;

    fn write_doc(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("courses.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_valid_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_doc(&dir, GOOD_DOC);

        let schedule = Schedule::load(&path).unwrap();

        assert_eq!(schedule.term.name, "Fall 2024");
        assert_eq!(schedule.term.start, NaiveDate::from_ymd_opt(2024, 9, 2).unwrap());
        assert_eq!(schedule.term.end, NaiveDate::from_ymd_opt(2024, 12, 13).unwrap());
        assert_eq!(schedule.events.len(), 1);

        let event = &schedule.events[0];
        assert_eq!(event.title, "Algorithms");
        assert_eq!(event.days, vec![Day::Mo, Day::We]);
        assert_eq!(event.location, "Room 204");
        assert_eq!(event.notes, "");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("courses.json");

        let err = Schedule::load(&path).unwrap_err();
        assert!(matches!(err, TermcalError::MissingInput(_)));
        assert!(err.to_string().contains("courses.json"));
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_doc(&dir, "{ not json");

        let err = Schedule::load(&path).unwrap_err();
        assert!(matches!(err, TermcalError::Json(_)));
    }

    #[test]
    fn test_load_malformed_term_date() {
        let dir = tempfile::tempdir().unwrap();
        let doc = GOOD_DOC.replace("2024-09-02", "02/09/2024");
        let path = write_doc(&dir, &doc);

        let err = Schedule::load(&path).unwrap_err();
        assert!(matches!(err, TermcalError::Json(_)));
    }

    #[test]
    fn test_load_surfaces_validation_errors() {
        let dir = tempfile::tempdir().unwrap();
        let doc = GOOD_DOC.replace("\"WE\"", "\"WED\"");
        let path = write_doc(&dir, &doc);

        let err = Schedule::load(&path).unwrap_err();
        assert!(matches!(err, TermcalError::InvalidDay { index: 1, .. }));
    }
}
