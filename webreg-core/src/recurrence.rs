//! Weekly recurrence rules for class meetings.
//!
//! Classes repeat weekly on their meeting days until the quarter ends, minus
//! holidays. Exams happen once.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc, Weekday};
use chrono_tz::Tz;
use rrule::RRuleSet;
use serde::{Serialize, Serializer};

use crate::error::{ScheduleError, ScheduleResult};
use crate::weekday::ics_day;

/// Rule for events that happen exactly once.
pub const SINGLE_OCCURRENCE: &str = "FREQ=WEEKLY;INTERVAL=1;COUNT=1";

const ICS_DATETIME: &str = "%Y%m%dT%H%M%S";

/// An RRULE value together with its EXDATE exclusions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceRule {
    rrule: String,
    exdates: Vec<NaiveDateTime>,
}

impl RecurrenceRule {
    pub fn single() -> Self {
        RecurrenceRule {
            rrule: SINGLE_OCCURRENCE.to_string(),
            exdates: Vec::new(),
        }
    }

    /// Weekly on `days` (listed Monday first) until `until`, skipping each
    /// excluded date at `start_time`.
    pub fn weekly(
        days: &[Weekday],
        until: DateTime<Utc>,
        excluded: &[NaiveDate],
        start_time: NaiveTime,
    ) -> Self {
        let mut days = days.to_vec();
        days.sort_by_key(|d| d.num_days_from_monday());
        days.dedup();

        let byday = days.iter().map(|d| ics_day(*d)).collect::<Vec<_>>().join(",");

        RecurrenceRule {
            rrule: format!(
                "FREQ=WEEKLY;BYDAY={byday};INTERVAL=1;UNTIL={}",
                until.format("%Y%m%dT%H%M%SZ")
            ),
            exdates: excluded.iter().map(|d| d.and_time(start_time)).collect(),
        }
    }

    pub fn rrule(&self) -> &str {
        &self.rrule
    }

    pub fn exdates(&self) -> &[NaiveDateTime] {
        &self.exdates
    }

    /// EXDATE values formatted as floating `YYYYMMDDTHHMMSS`.
    pub fn exdate_values(&self) -> impl Iterator<Item = String> + '_ {
        self.exdates
            .iter()
            .map(|dt| dt.format(ICS_DATETIME).to_string())
    }

    pub fn is_single(&self) -> bool {
        self.rrule.contains("COUNT=1")
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rrule)?;
        for value in self.exdate_values() {
            write!(f, "\nEXDATE:{value}")?;
        }
        Ok(())
    }
}

impl Serialize for RecurrenceRule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Expand a rule starting at `start` into concrete date-times, honouring
/// exclusions. At most `limit` occurrences are returned.
///
/// `start` and the exclusions are wall-clock times in `tz`, matched against
/// the rule's UTC `UNTIL` the way calendar apps do. Results are wall-clock
/// times in `tz`.
pub fn expand_occurrences(
    start: NaiveDateTime,
    rule: &RecurrenceRule,
    tz: Tz,
    limit: u16,
) -> ScheduleResult<Vec<NaiveDateTime>> {
    let tzid = tz.name();
    let mut lines = vec![
        format!("DTSTART;TZID={tzid}:{}", start.format(ICS_DATETIME)),
        format!("RRULE:{}", rule.rrule),
    ];
    lines.extend(rule.exdate_values().map(|v| format!("EXDATE;TZID={tzid}:{v}")));

    let rrule_set: RRuleSet = lines
        .join("\n")
        .parse()
        .map_err(|e| ScheduleError::Recurrence(format!("Failed to parse '{}': {}", rule.rrule, e)))?;

    let result = rrule_set.all(limit);

    Ok(result.dates.iter().map(|dt| dt.naive_local()).collect())
}
