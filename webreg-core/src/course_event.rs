//! Decoded schedule rows.

use serde::Serialize;

/// Value used for a building or room that wasn't in the row.
pub const NOT_AVAILABLE: &str = "N/A";

/// One row of the schedule table (a lecture, lab, final, ...), as read from text.
///
/// Nothing here is validated; `event_builder` decides which records become
/// calendar events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    pub course_type: Option<String>,
    pub days: Option<String>,
    pub time: Option<String>,
    /// Exam date (`MM/DD/YYYY`); only set on exam rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub building: String,
    pub room: String,
    pub course_code: String,
    pub course_name: String,
    pub professor: String,
    pub grade_option: String,
    pub units: String,
}

impl Default for CourseEvent {
    fn default() -> Self {
        CourseEvent {
            section: None,
            course_type: None,
            days: None,
            time: None,
            date: None,
            building: NOT_AVAILABLE.to_string(),
            room: NOT_AVAILABLE.to_string(),
            course_code: String::new(),
            course_name: String::new(),
            professor: String::new(),
            grade_option: String::new(),
            units: String::new(),
        }
    }
}

impl CourseEvent {
    /// Finals (`FI`) and midterms (`MI`) happen once, on a fixed date.
    pub fn is_exam(&self) -> bool {
        matches!(self.course_type.as_deref(), Some("FI" | "MI"))
    }
}

/// Details printed only on a course's main row, carried over to its other rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseDefaults {
    pub professor: String,
    pub grade_option: String,
    pub units: String,
}
