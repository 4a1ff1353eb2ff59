use std::path::Path;

use anyhow::Result;
use chrono::NaiveDateTime;
use owo_colors::OwoColorize;
use webreg_core::{CalendarEventDescriptor, QuarterCatalog};

use super::{build_parser, read_input, resolve_quarter};
use crate::config::AppConfig;

/// More than any quarter has meetings
const MAX_OCCURRENCES: u16 = 200;

pub async fn run(cfg: &AppConfig, input: &Path, quarter: Option<&str>, crop: bool) -> Result<()> {
    let catalog = cfg.catalog()?;
    let key = resolve_quarter(&catalog, quarter)?;
    let text = read_input(input, crop).await?;

    let parser = build_parser(cfg, false)?;
    let events = parser.parse_for(&text, &catalog, &key)?;

    if events.is_empty() {
        eprintln!("{}", "No events found".yellow());
        return Ok(());
    }

    let expanded = expand_events(&events, &catalog);
    for (i, (event, dates)) in expanded.iter().enumerate() {
        println!("{} ({} meetings)", event.title.bold(), dates.len());
        for date in dates {
            println!("   {}", date.format("%a %Y-%m-%d %H:%M"));
        }

        if i < expanded.len() - 1 {
            println!();
        }
    }

    Ok(())
}

/// Meetings of each event in the catalog's timezone. Events whose rule can't
/// be expanded are logged and left out.
fn expand_events<'a>(
    events: &'a [CalendarEventDescriptor],
    catalog: &QuarterCatalog,
) -> Vec<(&'a CalendarEventDescriptor, Vec<NaiveDateTime>)> {
    events
        .iter()
        .filter_map(|event| match event.occurrences(catalog.timezone(), MAX_OCCURRENCES) {
            Ok(dates) => Some((event, dates)),
            Err(e) => {
                tracing::warn!(event = %event.title, error = %e, "Skipping event");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc, Weekday};
    use webreg_core::{EventDuration, RecurrenceRule};

    fn weekly_event(title: &str, month: u32, day: u32) -> CalendarEventDescriptor {
        let start = NaiveDate::from_ymd_opt(2023, month, day)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let until = Utc.with_ymd_and_hms(2023, 3, 18, 7, 0, 0).unwrap();

        CalendarEventDescriptor {
            title: title.to_string(),
            description: String::new(),
            start,
            duration: EventDuration::from_minutes(50),
            location: None,
            recurrence_rule: RecurrenceRule::weekly(&[Weekday::Mon], until, &[], start.time()),
        }
    }

    #[test]
    fn test_unexpandable_event_is_skipped() {
        let events = vec![
            weekly_event("CSE 15L LE", 1, 9),
            // First meeting after the quarter's UNTIL
            weekly_event("CSE 15L LA", 3, 20),
            weekly_event("CSE 15L DI", 1, 16),
        ];

        let expanded = expand_events(&events, &QuarterCatalog::default());
        let titles: Vec<_> = expanded.iter().map(|(e, _)| e.title.as_str()).collect();

        assert_eq!(
            titles,
            vec!["CSE 15L LE", "CSE 15L DI"],
            "The failing event is dropped and the rest are still listed"
        );
        assert_eq!(expanded[0].1.len(), 10, "Got: {:?}", expanded[0].1);
    }
}
