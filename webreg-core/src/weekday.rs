//! Weekday-letter-codes ("MWF", "TuTh", "Sa").

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Read the weekdays named by a code, in the order they appear.
///
/// Tuesday, Thursday, Saturday and Sunday use two letters; the others one.
/// Unrecognised letters are skipped.
pub fn parse_days(code: &str) -> Vec<Weekday> {
    let mut days = Vec::new();
    let mut rest = code;

    while let Some(first) = rest.chars().next() {
        let (day, len) = match first {
            'M' => (Some(Weekday::Mon), 1),
            'W' => (Some(Weekday::Wed), 1),
            'F' => (Some(Weekday::Fri), 1),
            'T' if rest.starts_with("Tu") => (Some(Weekday::Tue), 2),
            'T' if rest.starts_with("Th") => (Some(Weekday::Thu), 2),
            'S' if rest.starts_with("Sa") => (Some(Weekday::Sat), 2),
            'S' if rest.starts_with("Su") => (Some(Weekday::Sun), 2),
            other => (None, other.len_utf8()),
        };
        if let Some(day) = day {
            days.push(day);
        }
        rest = &rest[len..];
    }

    days
}

/// The first weekday named by a code.
pub fn first_day(code: &str) -> Option<Weekday> {
    parse_days(code).into_iter().next()
}

/// Two-letter iCalendar name (`MO`, `TU`, ...).
pub fn ics_day(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "MO",
        Weekday::Tue => "TU",
        Weekday::Wed => "WE",
        Weekday::Thu => "TH",
        Weekday::Fri => "FR",
        Weekday::Sat => "SA",
        Weekday::Sun => "SU",
    }
}

/// First date on or after `from` that falls on `day`.
pub fn first_on_or_after(from: NaiveDate, day: Weekday) -> NaiveDate {
    let offset = (7 + day.num_days_from_monday() - from.weekday().num_days_from_monday()) % 7;
    from + Days::new(u64::from(offset))
}
