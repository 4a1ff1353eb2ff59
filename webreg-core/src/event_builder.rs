//! Validation of decoded rows and their mapping to calendar events.

use chrono::{DateTime, NaiveDate, Utc};

use crate::course_event::{CourseEvent, NOT_AVAILABLE};
use crate::descriptor::CalendarEventDescriptor;
use crate::quarter::Quarter;
use crate::recurrence::RecurrenceRule;
use crate::time::TimeRange;
use crate::vocabulary::Vocabulary;
use crate::weekday::{first_day, first_on_or_after, parse_days};

/// Default campus map link; `{building}` is replaced with the building code.
pub const DEFAULT_MAP_URL: &str = "https://map.concept3d.com/?id=1005#!s/{building}_Main?ct/18312";

const EXAM_DATE: &str = "%m/%d/%Y";

/// Everything about the quarter and output style that events are built against.
#[derive(Debug, Clone)]
pub struct EventContext<'a> {
    pub quarter: &'a Quarter,
    /// Recurrence cut-off, already converted to UTC.
    pub until: DateTime<Utc>,
    pub location_links: bool,
    pub map_url: &'a str,
}

/// Why a record was not turned into an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    MissingDays,
    UnknownDays,
    MissingTime,
    BadTime,
    EndBeforeStart,
    BadExamDate,
}

/// Check a record can be placed on a calendar.
pub fn validate(record: &CourseEvent, vocabulary: &Vocabulary) -> Result<(), Rejection> {
    let days = record.days.as_deref().ok_or(Rejection::MissingDays)?;
    if !vocabulary.is_weekday_code(days) {
        return Err(Rejection::UnknownDays);
    }

    let time = record.time.as_deref().ok_or(Rejection::MissingTime)?;
    let range = TimeRange::parse(time).ok_or(Rejection::BadTime)?;
    if range.end.minutes_since_midnight() < range.start.minutes_since_midnight() {
        return Err(Rejection::EndBeforeStart);
    }

    if record.is_exam() && exam_date(record).is_none() {
        return Err(Rejection::BadExamDate);
    }

    Ok(())
}

fn exam_date(record: &CourseEvent) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(record.date.as_deref()?, EXAM_DATE).ok()
}

/// Build the calendar event for a record, or `None` if it fails validation.
pub fn build_event(
    record: &CourseEvent,
    vocabulary: &Vocabulary,
    ctx: &EventContext<'_>,
) -> Option<CalendarEventDescriptor> {
    if let Err(rejection) = validate(record, vocabulary) {
        tracing::debug!(
            course = %record.course_code,
            course_type = ?record.course_type,
            days = ?record.days,
            time = ?record.time,
            ?rejection,
            "Dropping schedule row"
        );
        return None;
    }

    let days = record.days.as_deref()?;
    let range = TimeRange::parse(record.time.as_deref()?)?;
    let start_time = range.start.to_naive_time()?;

    let (date, recurrence_rule) = if record.is_exam() {
        (exam_date(record)?, RecurrenceRule::single())
    } else {
        let date = first_on_or_after(ctx.quarter.start, first_day(days)?);
        let rule = RecurrenceRule::weekly(
            &parse_days(days),
            ctx.until,
            &ctx.quarter.excluded_dates,
            start_time,
        );
        (date, rule)
    };

    let course_type = record.course_type.as_deref().unwrap_or_default();

    Some(CalendarEventDescriptor {
        title: format!("{} {}", record.course_code, course_type),
        description: description(record, ctx),
        start: date.and_time(start_time),
        duration: range.duration(),
        location: location(record),
        recurrence_rule,
    })
}

/// `"<building> <room>"` unless the building is unknown.
fn location(record: &CourseEvent) -> Option<String> {
    (record.building != NOT_AVAILABLE).then(|| format!("{} {}", record.building, record.room))
}

fn has_map_entry(building: &str) -> bool {
    building != NOT_AVAILABLE && building != "TBA"
}

fn description(record: &CourseEvent, ctx: &EventContext<'_>) -> String {
    let place = format!("{} {}", record.building, record.room);
    let location = if ctx.location_links && has_map_entry(&record.building) {
        format!(
            "<a href={}>{place}</a>",
            ctx.map_url.replace("{building}", &record.building)
        )
    } else {
        place
    };

    format!(
        "{}, {}\nProfessor: {}\nLocation: {}\nClass Type: {}\nSection {}\nGrade Option: {}, Units: {}",
        record.course_code,
        record.course_name,
        record.professor,
        location,
        record.course_type.as_deref().unwrap_or_default(),
        record.section.as_deref().unwrap_or(NOT_AVAILABLE),
        record.grade_option,
        record.units,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quarter::{DEFAULT_TIMEZONE, QuarterCatalog};

    fn winter() -> Quarter {
        QuarterCatalog::default().get("winter2023").unwrap().clone()
    }

    fn make_record(course_type: &str, days: &str, time: &str) -> CourseEvent {
        CourseEvent {
            section: Some("B07".to_string()),
            course_type: Some(course_type.to_string()),
            days: Some(days.to_string()),
            time: Some(time.to_string()),
            building: "PETER".to_string(),
            room: "108".to_string(),
            course_code: "CSE 15L".to_string(),
            course_name: "Software Tools & Techniques Lab".to_string(),
            professor: "Politz, Joseph Gibbs".to_string(),
            grade_option: "L".to_string(),
            units: "2.00".to_string(),
            ..CourseEvent::default()
        }
    }

    fn build(record: &CourseEvent, links: bool) -> Option<CalendarEventDescriptor> {
        let quarter = winter();
        let ctx = EventContext {
            quarter: &quarter,
            until: quarter.until_utc("winter2023", DEFAULT_TIMEZONE).unwrap(),
            location_links: links,
            map_url: DEFAULT_MAP_URL,
        };
        build_event(record, &Vocabulary::default(), &ctx)
    }

    #[test]
    fn test_lecture_event() {
        let event = build(&make_record("LE", "MW", "10:00a-10:50a"), false).unwrap();

        assert_eq!(event.title, "CSE 15L LE");
        assert_eq!(event.start_array(), [2023, 1, 9, 10, 0]);
        assert_eq!(event.duration.total_minutes(), 50);
        assert_eq!(event.location.as_deref(), Some("PETER 108"));
        assert!(
            event
                .recurrence_rule
                .rrule()
                .starts_with("FREQ=WEEKLY;BYDAY=MO,WE;INTERVAL=1;UNTIL="),
            "Got: {}",
            event.recurrence_rule
        );
    }

    #[test]
    fn test_start_is_first_matching_weekday() {
        // Winter 2023 starts on a Monday
        let event = build(&make_record("DI", "TuTh", "8:00a-9:20a"), false).unwrap();
        assert_eq!(event.start_array(), [2023, 1, 10, 8, 0]);

        let event = build(&make_record("LA", "F", "12:00p-12:50p"), false).unwrap();
        assert_eq!(event.start_array(), [2023, 1, 13, 12, 0]);
    }

    #[test]
    fn test_exdates_use_row_start_time() {
        let event = build(&make_record("LA", "M", "4:00p-5:50p"), false).unwrap();

        let exdates: Vec<_> = event.recurrence_rule.exdate_values().collect();
        assert_eq!(exdates, vec!["20230116T160000", "20230220T160000"]);
    }

    #[test]
    fn test_final_exam_is_single_occurrence() {
        let mut record = make_record("FI", "Sa", "3:00p-5:59p");
        record.section = None;
        record.date = Some("03/18/2023".to_string());

        let event = build(&record, false).unwrap();

        assert_eq!(event.start_array(), [2023, 3, 18, 15, 0]);
        assert_eq!(event.duration.total_minutes(), 179);
        assert_eq!(event.recurrence_rule.to_string(), "FREQ=WEEKLY;INTERVAL=1;COUNT=1");
        assert!(event.description.contains("\nSection N/A\n"), "{}", event.description);
    }

    #[test]
    fn test_rejected_records() {
        let vocab = Vocabulary::default();

        let tba = make_record("IN", "TBA", "TBA");
        assert_eq!(validate(&tba, &vocab), Err(Rejection::UnknownDays));

        let bad_time = make_record("LE", "MW", "10:00-10:50");
        assert_eq!(validate(&bad_time, &vocab), Err(Rejection::BadTime));

        let reversed = make_record("LE", "MW", "10:50a-10:00a");
        assert_eq!(
            validate(&reversed, &vocab),
            Err(Rejection::EndBeforeStart),
            "A range ending before it starts has no valid DURATION"
        );
        assert!(build(&reversed, false).is_none());

        let instant = make_record("LE", "MW", "10:00a-10:00a");
        assert_eq!(validate(&instant, &vocab), Ok(()), "Zero-length meetings are kept");

        let mut truncated = make_record("DI", "F", "");
        truncated.time = None;
        assert_eq!(validate(&truncated, &vocab), Err(Rejection::MissingTime));

        let mut no_date = make_record("MI", "F", "7:00p-8:50p");
        no_date.date = Some("TBA".to_string());
        assert_eq!(validate(&no_date, &vocab), Err(Rejection::BadExamDate));
        assert!(build(&no_date, false).is_none());
    }

    #[test]
    fn test_description_layout() {
        let event = build(&make_record("LE", "MW", "10:00a-10:50a"), false).unwrap();

        assert_eq!(
            event.description,
            "CSE 15L, Software Tools & Techniques Lab\n\
             Professor: Politz, Joseph Gibbs\n\
             Location: PETER 108\n\
             Class Type: LE\n\
             Section B07\n\
             Grade Option: L, Units: 2.00"
        );
    }

    #[test]
    fn test_description_map_link() {
        let event = build(&make_record("LE", "MW", "10:00a-10:50a"), true).unwrap();
        assert!(
            event.description.contains(
                "Location: <a href=https://map.concept3d.com/?id=1005#!s/PETER_Main?ct/18312>PETER 108</a>"
            ),
            "{}",
            event.description
        );

        let mut tba = make_record("LE", "MW", "10:00a-10:50a");
        tba.building = "TBA".to_string();
        tba.room = "TBA".to_string();
        let event = build(&tba, true).unwrap();
        assert!(event.description.contains("Location: TBA TBA\n"), "No link for TBA");
    }

    #[test]
    fn test_missing_building_has_no_location() {
        let mut record = make_record("LE", "MW", "10:00a-10:50a");
        record.building = NOT_AVAILABLE.to_string();
        record.room = NOT_AVAILABLE.to_string();

        assert_eq!(build(&record, false).unwrap().location, None);
    }
}
