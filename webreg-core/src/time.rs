//! Meeting time ranges such as `10:00a-10:50a`.

use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;

use crate::descriptor::EventDuration;

static TIME_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,2}:[0-9]{2}[ap]-[0-9]{1,2}:[0-9]{2}[ap]$").expect("static pattern is valid")
});

/// True when `time` is exactly a `H:MMa-H:MMp` range (so "TBA" is rejected).
pub fn is_time_range(time: &str) -> bool {
    TIME_RANGE.is_match(time)
}

/// A 24-hour wall-clock time read from a 12-hour token like `4:00p`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    /// Parse `H:MM[ap]`. PM adds 12 hours except at 12; 12 AM is midnight.
    pub fn parse(token: &str) -> Option<Self> {
        let (hour, rest) = token.split_once(':')?;
        let hour: u32 = hour.parse().ok()?;
        let pm = rest.contains('p');
        let minute: u32 = rest.trim_end_matches(['a', 'p']).parse().ok()?;

        if hour > 12 || minute > 59 {
            return None;
        }

        let hour = match (pm, hour) {
            (true, 12) => 12,
            (true, h) => h + 12,
            (false, 12) => 0,
            (false, h) => h,
        };

        Some(ClockTime { hour, minute })
    }

    pub fn minutes_since_midnight(&self) -> i64 {
        i64::from(self.hour) * 60 + i64::from(self.minute)
    }

    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0)
    }
}

/// Start and end of a meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl TimeRange {
    /// Parse a strict `H:MMa-H:MMp` range; anything else (including "TBA") is `None`.
    pub fn parse(time: &str) -> Option<Self> {
        if !is_time_range(time) {
            return None;
        }
        let (start, end) = time.split_once('-')?;
        Some(TimeRange {
            start: ClockTime::parse(start)?,
            end: ClockTime::parse(end)?,
        })
    }

    pub fn duration(&self) -> EventDuration {
        EventDuration::from_minutes(
            self.end.minutes_since_midnight() - self.start.minutes_since_midnight(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_time_range_is_strict() {
        assert!(is_time_range("10:00a-10:50a"));
        assert!(is_time_range("3:00p-5:59p"));
        assert!(!is_time_range("TBA"));
        assert!(!is_time_range("10:00a-10:50a PETER"));
        assert!(!is_time_range("x10:00a-10:50a"));
        assert!(!is_time_range("10:00-10:50"));
    }

    #[test]
    fn test_clock_time_meridiem_conversion() {
        assert_eq!(ClockTime::parse("10:00a"), Some(ClockTime { hour: 10, minute: 0 }));
        assert_eq!(ClockTime::parse("4:30p"), Some(ClockTime { hour: 16, minute: 30 }));
        assert_eq!(ClockTime::parse("12:00p"), Some(ClockTime { hour: 12, minute: 0 }));
        assert_eq!(ClockTime::parse("12:15a"), Some(ClockTime { hour: 0, minute: 15 }));
        assert_eq!(ClockTime::parse("13:00p"), None);
        assert_eq!(ClockTime::parse("9:75a"), None);
    }

    #[test]
    fn test_duration_matches_minute_difference() {
        for time in ["10:00a-10:50a", "8:00a-9:20a", "11:00a-12:20p", "3:00p-5:59p", "7:00p-9:50p"] {
            let range = TimeRange::parse(time).unwrap();
            let duration = range.duration();
            let expected =
                range.end.minutes_since_midnight() - range.start.minutes_since_midnight();

            assert_eq!(duration.hours * 60 + duration.minutes, expected, "for {time}");
            assert!(expected >= 0, "well-formed range {time} must be non-negative");
        }
    }

    #[test]
    fn test_duration_values() {
        let lab = TimeRange::parse("4:00p-5:50p").unwrap().duration();
        assert_eq!(lab, EventDuration { hours: 1, minutes: 50 });

        let exam = TimeRange::parse("3:00p-5:59p").unwrap().duration();
        assert_eq!(exam, EventDuration { hours: 2, minutes: 59 });
    }

    #[test]
    fn test_reversed_range_keeps_identity() {
        let duration = TimeRange::parse("10:50a-10:00a").unwrap().duration();
        assert_eq!(duration.hours * 60 + duration.minutes, -50);
    }
}
