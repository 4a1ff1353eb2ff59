//! Calendar events produced by the parser, ready for serialization.

use chrono::{Datelike, NaiveDateTime, Timelike};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};

use crate::error::ScheduleResult;
use crate::recurrence::{RecurrenceRule, expand_occurrences};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventDuration {
    pub hours: i64,
    pub minutes: i64,
}

impl EventDuration {
    /// Split a minute count so that `hours * 60 + minutes == total` always holds.
    pub fn from_minutes(total: i64) -> Self {
        EventDuration {
            hours: total.div_euclid(60),
            minutes: total.rem_euclid(60),
        }
    }

    pub fn total_minutes(&self) -> i64 {
        self.hours * 60 + self.minutes
    }

    /// ISO 8601 duration as used by the iCalendar DURATION property. A
    /// negative duration carries its sign in front, as in `-PT0H50M`.
    pub fn to_ics_string(&self) -> String {
        let total = self.total_minutes();
        let sign = if total < 0 { "-" } else { "" };
        let magnitude = total.abs();
        format!("{sign}PT{}H{}M", magnitude / 60, magnitude % 60)
    }
}

/// One calendar event: a recurring class meeting or a one-off exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventDescriptor {
    pub title: String,
    pub description: String,
    /// First occurrence, in the quarter's local time.
    #[serde(serialize_with = "serialize_start")]
    pub start: NaiveDateTime,
    pub duration: EventDuration,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub recurrence_rule: RecurrenceRule,
}

impl CalendarEventDescriptor {
    /// `[year, month, day, hour, minute]`
    pub fn start_array(&self) -> [i32; 5] {
        start_parts(&self.start)
    }

    pub fn end(&self) -> NaiveDateTime {
        self.start + chrono::Duration::minutes(self.duration.total_minutes())
    }

    /// Every meeting of this event, up to `limit`, with `start` read as
    /// wall-clock time in `tz`.
    pub fn occurrences(&self, tz: Tz, limit: u16) -> ScheduleResult<Vec<NaiveDateTime>> {
        expand_occurrences(self.start, &self.recurrence_rule, tz, limit)
    }
}

fn start_parts(s: &NaiveDateTime) -> [i32; 5] {
    [
        s.year(),
        s.month() as i32,
        s.day() as i32,
        s.hour() as i32,
        s.minute() as i32,
    ]
}

fn serialize_start<S: Serializer>(start: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(start_parts(start))
}
