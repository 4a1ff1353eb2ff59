//! Core library for webreg-ics.
//!
//! Turns the text of a course-registration schedule into calendar events:
//! - `split` finds course and row boundaries in whitespace-joined text
//! - `decode` reads each row's tokens into a `CourseEvent`
//! - `event_builder` validates records and derives start, duration and recurrence
//! - `ics` writes the resulting events as an iCalendar file

pub mod course_event;
pub mod decode;
pub mod departments;
pub mod descriptor;
pub mod error;
pub mod event_builder;
pub mod ics;
pub mod parser;
pub mod preprocess;
pub mod quarter;
pub mod recurrence;
pub mod split;
pub mod time;
pub mod vocabulary;
pub mod weekday;

pub use course_event::CourseEvent;
pub use descriptor::{CalendarEventDescriptor, EventDuration};
pub use error::{ScheduleError, ScheduleResult};
pub use parser::{ParseOptions, ScheduleParser};
pub use quarter::{Quarter, QuarterCatalog};
pub use recurrence::RecurrenceRule;
pub use vocabulary::{Correction, Vocabulary};
