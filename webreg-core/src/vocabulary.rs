//! Domain vocabulary the parser relies on.
//!
//! Everything here is data rather than logic, so it is kept in a plain value
//! that can be swapped out (tests build small synthetic vocabularies).

use serde::{Deserialize, Serialize};

use crate::departments::DEPARTMENTS;

/// Weekday-letter-codes that can appear in the Days column.
const WEEKDAY_CODES: &[&str] = &[
    "F", "Th", "ThF", "W", "WF", "WTh", "WThF", "Tu", "TuF", "TuTh", "TuThF", "TuW", "TuWF",
    "TuWTh", "TuWThF", "M", "MF", "MTh", "MThF", "MW", "MWF", "MWTh", "MWThF", "MTu", "MTuF",
    "MTuTh", "MTuThF", "MTuW", "MTuWF", "MTuWTh", "MTuWThF", "Sa", "Su",
];

/// Grade options printed between the instructor and the units.
const GRADE_OPTIONS: &[&str] = &["L", "P/NP"];

/// Known OCR misreads of section codes.
const CORRECTIONS: &[(&str, &str)] = &[
    (" ВОО ", " B00 "),
    (" DOO ", " D00 "),
    (" BOO ", " B00 "),
];

/// A literal find/replace pair applied to the raw text before parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    pub from: String,
    pub to: String,
}

impl Correction {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Correction {
            from: from.into(),
            to: to.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    /// Department codes; each one marks the start of a course when followed by a number.
    pub departments: Vec<String>,
    /// Closed set of valid weekday-letter-codes.
    pub weekdays: Vec<String>,
    /// Closed set of grade-option tokens.
    pub grade_options: Vec<String>,
    pub corrections: Vec<Correction>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Vocabulary {
            departments: DEPARTMENTS.iter().map(|(code, _)| code.to_string()).collect(),
            weekdays: WEEKDAY_CODES.iter().map(|s| s.to_string()).collect(),
            grade_options: GRADE_OPTIONS.iter().map(|s| s.to_string()).collect(),
            corrections: CORRECTIONS
                .iter()
                .map(|(from, to)| Correction::new(*from, *to))
                .collect(),
        }
    }
}

impl Vocabulary {
    pub fn is_weekday_code(&self, token: &str) -> bool {
        self.weekdays.iter().any(|w| w == token)
    }

    pub fn is_grade_option(&self, token: &str) -> bool {
        self.grade_options.iter().any(|g| g == token)
    }

    /// Add extra corrections after the built-in ones.
    pub fn with_corrections(mut self, extra: impl IntoIterator<Item = Correction>) -> Self {
        self.corrections.extend(extra);
        self
    }
}

/// Look up the description of a department code in the built-in table.
pub fn department_name(code: &str) -> Option<&'static str> {
    DEPARTMENTS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary_tables() {
        let vocab = Vocabulary::default();

        assert_eq!(vocab.departments.len(), DEPARTMENTS.len());
        assert!(vocab.departments.iter().any(|d| d == "CSE"));
        assert!(vocab.is_weekday_code("MWF"));
        assert!(vocab.is_weekday_code("TuTh"));
        assert!(vocab.is_weekday_code("Sa"));
        assert!(!vocab.is_weekday_code("TBA"));
        assert!(!vocab.is_weekday_code("mwf"));
        assert!(vocab.is_grade_option("P/NP"));
        assert!(!vocab.is_grade_option("2.00"));
    }

    #[test]
    fn test_department_name_lookup() {
        assert_eq!(department_name("MMW"), Some("Making of the Modern World"));
        assert_eq!(department_name("NOPE"), None);
    }

    #[test]
    fn test_with_corrections_appends() {
        let vocab =
            Vocabulary::default().with_corrections([Correction::new(" AOO ", " A00 ")]);

        assert_eq!(vocab.corrections.len(), CORRECTIONS.len() + 1);
        assert_eq!(vocab.corrections.last().unwrap().to, " A00 ");
    }
}
