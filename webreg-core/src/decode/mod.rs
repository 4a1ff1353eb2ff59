//! Positional decoding of course headers and schedule rows.
//!
//! Row layout, left to right:
//! - exam rows: `Final Exam | Midterm`, type, day, date, time, building, room
//! - main rows: section, type, instructor..., grade option, units, days, time, building, room
//! - other rows: section, type, days, time, building, room

mod cursor;

pub use cursor::TokenCursor;

use crate::course_event::{CourseDefaults, CourseEvent, NOT_AVAILABLE};
use crate::vocabulary::Vocabulary;

/// Put back the space after commas and periods that text extraction dropped
/// ("Politz,Joseph" becomes "Politz, Joseph").
pub fn respace_punctuation(text: &str) -> String {
    text.replace(',', ", ")
        .replace('.', ". ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Numeric in the loose sense used for units ("2.00", "4").
fn is_numeric(token: &str) -> bool {
    token.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Read `(course_code, course_name)` from a course header like
/// `CSE 15L Software Tools & Techniques Lab`.
pub fn decode_header(header: &str) -> (String, String) {
    let mut cursor = TokenCursor::new(header);
    let code = [cursor.next_token(), cursor.next_token()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
    let name = respace_punctuation(&cursor.remaining().join(" "));

    (code, name)
}

/// Decode one row of a course.
///
/// A main row overwrites `defaults`; every row (exams included) receives a
/// copy of the defaults in effect after it was read.
pub fn decode_row(
    row: &str,
    course_code: &str,
    course_name: &str,
    vocabulary: &Vocabulary,
    defaults: &mut CourseDefaults,
) -> CourseEvent {
    let mut cursor = TokenCursor::new(row);
    let mut event = CourseEvent::default();

    if row.starts_with("Final Exam") || row.starts_with("Midterm") {
        cursor.skip(if row.starts_with("Final Exam") { 2 } else { 1 });

        event.course_type = cursor.next_owned();
        event.days = cursor.next_owned();
        event.date = cursor.next_owned();
    } else {
        event.section = cursor.next_owned();
        event.course_type = cursor.next_owned();

        if cursor.peek().is_some_and(|t| !vocabulary.is_weekday_code(t)) {
            *defaults = decode_main_details(&mut cursor, vocabulary);
        }

        event.days = cursor.next_owned();
    }

    event.time = cursor.next_owned();
    event.building = cursor
        .next_owned()
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    event.room = cursor
        .next_owned()
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    event.course_code = course_code.to_string();
    event.course_name = course_name.to_string();
    event.professor = defaults.professor.clone();
    event.grade_option = defaults.grade_option.clone();
    event.units = defaults.units.clone();

    event
}

/// Instructor, grade option and units from a main row.
///
/// The instructor runs until a grade option or a number. When OCR dropped the
/// grade option the number is the units, and the grade option is taken to be
/// the letter grade `L`.
fn decode_main_details(cursor: &mut TokenCursor<'_>, vocabulary: &Vocabulary) -> CourseDefaults {
    let professor = cursor.take_while(|t| !vocabulary.is_grade_option(t) && !is_numeric(t));

    let grade_option = match cursor.peek() {
        Some(token) if is_numeric(token) => "L".to_string(),
        _ => cursor.next_owned().unwrap_or_default(),
    };
    let units = cursor.next_owned().unwrap_or_default();

    CourseDefaults {
        professor: respace_punctuation(&professor.join(" ")),
        grade_option,
        units,
    }
}

/// Decode a course's header and rows, threading the main-row details through
/// the rows in order.
pub fn decode_course(header: &str, rows: &[&str], vocabulary: &Vocabulary) -> Vec<CourseEvent> {
    let (course_code, course_name) = decode_header(header);
    let mut defaults = CourseDefaults::default();

    rows.iter()
        .map(|row| decode_row(row, &course_code, &course_name, vocabulary, &mut defaults))
        .collect()
}
