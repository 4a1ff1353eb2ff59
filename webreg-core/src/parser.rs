//! End-to-end schedule parsing: text in, calendar events out.

use chrono_tz::Tz;

use crate::course_event::CourseEvent;
use crate::decode::decode_course;
use crate::descriptor::CalendarEventDescriptor;
use crate::error::ScheduleResult;
use crate::event_builder::{DEFAULT_MAP_URL, EventContext, build_event};
use crate::preprocess::{apply_corrections, normalize_whitespace};
use crate::quarter::{DEFAULT_TIMEZONE, Quarter, QuarterCatalog};
use crate::split::{SplitPattern, split_by_patterns};
use crate::vocabulary::Vocabulary;

/// Section code followed by a meeting type, e.g. `B00 LE` or `100 IN`.
const ROW_START_PATTERN: &str = r" [A-Z0-9][0-9]{2} [A-Z]{2} ";
const EXAM_ROW_STARTS: &[&str] = &[" Midterm ", " Final Exam "];
/// Action buttons printed at the end of a main row.
const ROW_END_MARKERS: &[&str] = &["Enrolled Drop Change", "Planned Remove Enroll"];

/// Output settings that don't depend on the input text.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub timezone: Tz,
    /// Render event locations as campus map links in the description.
    pub location_links: bool,
    pub map_url: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            timezone: DEFAULT_TIMEZONE,
            location_links: true,
            map_url: DEFAULT_MAP_URL.to_string(),
        }
    }
}

/// Parser for one vocabulary. Immutable once built, so it can be shared
/// between threads.
#[derive(Debug, Clone)]
pub struct ScheduleParser {
    vocabulary: Vocabulary,
    department_patterns: Vec<SplitPattern>,
    row_starts: Vec<SplitPattern>,
    row_ends: Vec<SplitPattern>,
    options: ParseOptions,
}

impl ScheduleParser {
    pub fn new(vocabulary: Vocabulary, options: ParseOptions) -> ScheduleResult<Self> {
        let department_patterns = vocabulary
            .departments
            .iter()
            .map(|code| SplitPattern::department(code))
            .collect::<ScheduleResult<Vec<_>>>()?;

        let mut row_starts: Vec<SplitPattern> = EXAM_ROW_STARTS
            .iter()
            .map(|s| SplitPattern::literal(*s))
            .collect();
        row_starts.push(SplitPattern::regex(ROW_START_PATTERN)?);

        let row_ends = ROW_END_MARKERS
            .iter()
            .map(|s| SplitPattern::literal(*s))
            .collect();

        Ok(ScheduleParser {
            vocabulary,
            department_patterns,
            row_starts,
            row_ends,
            options,
        })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Whitespace normalisation followed by the OCR corrections.
    pub fn prepare(&self, text: &str) -> String {
        apply_corrections(&normalize_whitespace(text), &self.vocabulary.corrections)
    }

    /// One slice per course; a leading slice holds any text before the first course.
    pub fn split_courses<'a>(&self, text: &'a str) -> Vec<&'a str> {
        split_by_patterns(text, &self.department_patterns, &[])
    }

    /// Header slice followed by the row slices of one course.
    pub fn split_rows<'a>(&self, course: &'a str) -> Vec<&'a str> {
        split_by_patterns(course, &self.row_starts, &self.row_ends)
    }

    /// Decode every row of every course, valid or not.
    pub fn course_events(&self, text: &str) -> Vec<CourseEvent> {
        let text = self.prepare(text);

        self.split_courses(&text)
            .into_iter()
            .flat_map(|course| {
                let slices = self.split_rows(course);
                tracing::trace!(?slices, "Course slices");

                match slices.split_first() {
                    Some((header, rows)) => decode_course(header, rows, &self.vocabulary),
                    None => Vec::new(),
                }
            })
            .collect()
    }

    /// Turn decoded records into events for `quarter`, dropping invalid ones.
    pub fn events_from_records(
        &self,
        records: &[CourseEvent],
        key: &str,
        quarter: &Quarter,
    ) -> ScheduleResult<Vec<CalendarEventDescriptor>> {
        quarter.validate(key)?;

        let ctx = EventContext {
            quarter,
            until: quarter.until_utc(key, self.options.timezone)?,
            location_links: self.options.location_links,
            map_url: &self.options.map_url,
        };

        Ok(records
            .iter()
            .filter_map(|record| build_event(record, &self.vocabulary, &ctx))
            .collect())
    }

    /// Parse schedule text into calendar events for `quarter`.
    ///
    /// Text with nothing recognisable yields an empty list. Only bad quarter
    /// data is an error.
    pub fn parse(
        &self,
        text: &str,
        key: &str,
        quarter: &Quarter,
    ) -> ScheduleResult<Vec<CalendarEventDescriptor>> {
        let records = self.course_events(text);
        let events = self.events_from_records(&records, key, quarter)?;

        tracing::debug!(
            quarter = key,
            records = records.len(),
            events = events.len(),
            "Parsed schedule"
        );
        Ok(events)
    }

    /// Look `key` up in `catalog` and parse against that quarter.
    pub fn parse_for(
        &self,
        text: &str,
        catalog: &QuarterCatalog,
        key: &str,
    ) -> ScheduleResult<Vec<CalendarEventDescriptor>> {
        self.parse(text, key, catalog.get(key)?)
    }
}
