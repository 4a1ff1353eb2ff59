//! Error types for schedule parsing.

use thiserror::Error;

/// Errors that can occur while turning schedule text into calendar events.
///
/// Rows that fail validation are not errors; they are dropped and the parse
/// carries on. Only problems that make every date wrong (or make the parser
/// unusable) surface here.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Unknown quarter: {0}")]
    UnknownQuarter(String),

    #[error("Invalid quarter '{key}': {reason}")]
    InvalidQuarter { key: String, reason: String },

    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid timezone: {0}")]
    Timezone(String),

    #[error("Recurrence error: {0}")]
    Recurrence(String),

    #[error("ICS generation error: {0}")]
    IcsGenerate(String),
}

/// Result type alias for schedule operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
