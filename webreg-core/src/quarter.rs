//! Academic quarters: term boundaries and excluded (holiday) dates.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};

pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Los_Angeles;

/// Parse an IANA timezone name such as `America/Los_Angeles`.
pub fn parse_timezone(name: &str) -> ScheduleResult<Tz> {
    name.parse::<Tz>()
        .map_err(|_| ScheduleError::Timezone(name.to_string()))
}

/// Dates of one quarter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quarter {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Days without class. Written as `YYYYMMDD` or `YYYY-MM-DD`.
    #[serde(default, with = "excluded_dates")]
    pub excluded_dates: Vec<NaiveDate>,
}

impl Quarter {
    pub fn new(start: NaiveDate, end: NaiveDate, excluded_dates: Vec<NaiveDate>) -> Self {
        Quarter {
            start,
            end,
            excluded_dates,
        }
    }

    /// Check the dates make sense before anything is scheduled against them.
    pub fn validate(&self, key: &str) -> ScheduleResult<()> {
        let invalid = |reason: String| ScheduleError::InvalidQuarter {
            key: key.to_string(),
            reason,
        };

        if self.end < self.start {
            return Err(invalid(format!(
                "ends ({}) before it starts ({})",
                self.end, self.start
            )));
        }

        if let Some(date) = self
            .excluded_dates
            .iter()
            .find(|d| **d < self.start || **d > self.end)
        {
            return Err(invalid(format!(
                "excluded date {date} is outside {}..{}",
                self.start, self.end
            )));
        }

        Ok(())
    }

    /// The recurrence cut-off: local midnight at the start of the end date, in UTC.
    pub fn until_utc(&self, key: &str, tz: Tz) -> ScheduleResult<DateTime<Utc>> {
        tz.from_local_datetime(&self.end.and_time(NaiveTime::MIN))
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| ScheduleError::InvalidQuarter {
                key: key.to_string(),
                reason: format!("end date {} has no local midnight in {tz}", self.end),
            })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

mod excluded_dates {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn parse(value: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(value, "%Y%m%d")
            .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
            .ok()
    }

    pub fn serialize<S: Serializer>(dates: &[NaiveDate], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(dates.iter().map(|d| d.format("%Y%m%d").to_string()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<NaiveDate>, D::Error> {
        let raw = Vec::<String>::deserialize(deserializer)?;
        raw.iter()
            .map(|value| {
                parse(value).ok_or_else(|| {
                    serde::de::Error::custom(format!(
                        "invalid excluded date '{value}', expected YYYYMMDD"
                    ))
                })
            })
            .collect()
    }
}

/// Known quarters, keyed by names like `winter2023`.
///
/// Keys are matched case-insensitively.
#[derive(Debug, Clone)]
pub struct QuarterCatalog {
    timezone: Tz,
    quarters: BTreeMap<String, Quarter>,
}

impl Default for QuarterCatalog {
    fn default() -> Self {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();

        let mut catalog = QuarterCatalog::empty(DEFAULT_TIMEZONE);
        catalog.insert(
            "winter2023",
            Quarter::new(
                date(2023, 1, 9),
                date(2023, 3, 18),
                vec![date(2023, 1, 16), date(2023, 2, 20)],
            ),
        );
        catalog.insert(
            "spring2023",
            Quarter::new(date(2023, 4, 3), date(2023, 6, 10), vec![date(2023, 5, 29)]),
        );
        catalog
    }
}

impl QuarterCatalog {
    pub fn empty(timezone: Tz) -> Self {
        QuarterCatalog {
            timezone,
            quarters: BTreeMap::new(),
        }
    }

    /// Built-in quarters overlaid with `extra` (entries in `extra` win).
    pub fn with_quarters(timezone: Tz, extra: impl IntoIterator<Item = (String, Quarter)>) -> Self {
        let mut catalog = QuarterCatalog {
            timezone,
            ..QuarterCatalog::default()
        };
        for (key, quarter) in extra {
            catalog.insert(&key, quarter);
        }
        catalog
    }

    pub fn insert(&mut self, key: &str, quarter: Quarter) {
        self.quarters.insert(key.to_lowercase(), quarter);
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn get(&self, key: &str) -> ScheduleResult<&Quarter> {
        self.quarters
            .get(&key.to_lowercase())
            .ok_or_else(|| ScheduleError::UnknownQuarter(key.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.quarters.is_empty()
    }

    /// Quarters ordered by start date.
    pub fn sorted(&self) -> Vec<(&str, &Quarter)> {
        let mut quarters: Vec<_> = self
            .quarters
            .iter()
            .map(|(key, quarter)| (key.as_str(), quarter))
            .collect();
        quarters.sort_by_key(|(_, q)| q.start);
        quarters
    }

    /// The quarter in session on `today`, else the next one to start, else the latest.
    pub fn default_key(&self, today: NaiveDate) -> Option<&str> {
        let sorted = self.sorted();

        sorted
            .iter()
            .find(|(_, q)| q.contains(today))
            .or_else(|| sorted.iter().find(|(_, q)| today < q.start))
            .or_else(|| sorted.last())
            .map(|(key, _)| *key)
    }
}

/// Human-readable name for a quarter key: `fall2025` becomes "Fall 2025".
///
/// Keys that don't follow the `<term><year>` shape are returned unchanged.
pub fn label(key: &str) -> String {
    const TERMS: &[(&str, &str)] = &[
        ("summersession1", "Summer Session I"),
        ("summersession2", "Summer Session II"),
        ("specialsession", "Special Session"),
        ("fall", "Fall"),
        ("winter", "Winter"),
        ("spring", "Spring"),
    ];

    let lower = key.to_lowercase();
    for (prefix, name) in TERMS {
        let Some(year) = lower.strip_prefix(*prefix) else {
            continue;
        };
        if year.len() == 4 && year.chars().all(|c| c.is_ascii_digit()) {
            return format!("{name} {year}");
        }
    }

    key.to_string()
}
