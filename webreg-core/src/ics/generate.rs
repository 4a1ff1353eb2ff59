//! ICS file generation.

use icalendar::{Calendar, Component, EventLike, Property};

use crate::descriptor::CalendarEventDescriptor;
use crate::error::{ScheduleError, ScheduleResult};

const ICS_DATETIME: &str = "%Y%m%dT%H%M%S";

/// Generate one .ics calendar holding every event
pub fn generate_ics(events: &[CalendarEventDescriptor], calendar_name: &str) -> ScheduleResult<String> {
    let mut cal = Calendar::new();

    if !calendar_name.is_empty() {
        cal.append_property(Property::new("X-WR-CALNAME", calendar_name));
    }

    // DTSTAMP is the same for the whole export
    let dtstamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ").to_string();

    for event in events {
        cal.push(build_vevent(event, &dtstamp));
    }

    let output = strip_ics_bloat(&cal.done().to_string());

    if !output.contains("BEGIN:VCALENDAR") {
        return Err(ScheduleError::IcsGenerate(
            "icalendar produced no VCALENDAR".to_string(),
        ));
    }

    Ok(output)
}

fn build_vevent(event: &CalendarEventDescriptor, dtstamp: &str) -> icalendar::Event {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&format!("{}@webreg-ics", uuid::Uuid::new_v4()));
    ics_event.summary(&event.title);
    ics_event.add_property("DTSTAMP", dtstamp);

    // Floating datetime (no Z, no TZID)
    ics_event.add_property("DTSTART", event.start.format(ICS_DATETIME).to_string());
    ics_event.add_property("DURATION", event.duration.to_ics_string());

    ics_event.description(&event.description);

    if let Some(ref loc) = event.location {
        ics_event.location(loc);
    }

    let recurrence = &event.recurrence_rule;
    ics_event.add_property("RRULE", recurrence.rrule());
    for exdate in recurrence.exdate_values() {
        ics_event.append_multi_property(Property::new("EXDATE", exdate));
    }

    ics_event.done()
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with WEBREG-ICS
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:WEBREG-ICS\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::EventDuration;
    use crate::recurrence::RecurrenceRule;
    use chrono::{NaiveDate, NaiveTime, TimeZone, Utc, Weekday};

    fn make_test_event() -> CalendarEventDescriptor {
        let start = NaiveDate::from_ymd_opt(2023, 1, 12)
            .unwrap()
            .and_hms_opt(16, 0, 0)
            .unwrap();

        CalendarEventDescriptor {
            title: "CSE 15L LA".to_string(),
            description: "CSE 15L, Lab\nSection B07".to_string(),
            start,
            duration: EventDuration::from_minutes(110),
            location: Some("EBU3B B270".to_string()),
            recurrence_rule: RecurrenceRule::weekly(
                &[Weekday::Thu],
                Utc.with_ymd_and_hms(2023, 3, 18, 7, 0, 0).unwrap(),
                &[
                    NaiveDate::from_ymd_opt(2023, 1, 16).unwrap(),
                    NaiveDate::from_ymd_opt(2023, 2, 20).unwrap(),
                ],
                NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
            ),
        }
    }

    #[test]
    fn test_generate_ics_event_properties() {
        let ics = generate_ics(&[make_test_event()], "Winter 2023").unwrap();

        assert!(ics.contains("SUMMARY:CSE 15L LA"), "ICS:\n{}", ics);
        assert!(ics.contains("DTSTART:20230112T160000\r\n"), "DTSTART should be floating. ICS:\n{}", ics);
        assert!(ics.contains("DURATION:PT1H50M"), "ICS:\n{}", ics);
        assert!(ics.contains("LOCATION:EBU3B B270"), "ICS:\n{}", ics);
        assert!(
            ics.contains("RRULE:FREQ=WEEKLY;BYDAY=TH;INTERVAL=1;UNTIL=20230318T070000Z"),
            "ICS:\n{}",
            ics
        );
        assert!(ics.contains("X-WR-CALNAME:Winter 2023"), "ICS:\n{}", ics);
    }

    #[test]
    fn test_generate_ics_multiple_exdates() {
        let ics = generate_ics(&[make_test_event()], "").unwrap();

        let exdates: Vec<_> = ics.lines().filter(|l| l.starts_with("EXDATE")).collect();
        assert_eq!(
            exdates,
            vec!["EXDATE:20230116T160000", "EXDATE:20230220T160000"],
            "ICS:\n{}",
            ics
        );
        assert!(!ics.contains("X-WR-CALNAME"), "Empty name is omitted");
    }

    #[test]
    fn test_generate_ics_one_vevent_per_event() {
        let mut exam = make_test_event();
        exam.title = "CSE 15L FI".to_string();
        exam.recurrence_rule = RecurrenceRule::single();
        exam.location = None;

        let ics = generate_ics(&[make_test_event(), exam], "Schedule").unwrap();

        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 2);
        assert_eq!(ics.matches("LOCATION:").count(), 1, "Missing location is omitted");
        assert!(ics.contains("RRULE:FREQ=WEEKLY;INTERVAL=1;COUNT=1"));

        let uids: Vec<_> = ics.lines().filter(|l| l.starts_with("UID:")).collect();
        assert_eq!(uids.len(), 2);
        assert_ne!(uids[0], uids[1], "Each event gets its own UID");
    }

    #[test]
    fn test_generate_ics_strips_bloat() {
        let ics = generate_ics(&[], "Empty").unwrap();

        assert!(ics.contains("PRODID:WEBREG-ICS\r\n"), "ICS:\n{}", ics);
        assert!(!ics.contains("CALSCALE"), "ICS:\n{}", ics);
        assert!(!ics.contains("BEGIN:VEVENT"));
    }
}
