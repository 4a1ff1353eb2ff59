//! Text clean-up applied before the schedule is split.

use std::sync::LazyLock;

use regex::Regex;

use crate::vocabulary::Correction;

/// Header row ending of the schedule table ("Status/( Position ) Action").
static TABLE_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r" Status[/() ]+Position[/() ]+Action ").expect("static pattern is valid")
});

/// Page text that follows the schedule table.
const TABLE_END_MARKERS: &[&str] = &[" My Events ", " UC San Diego 9500 ", " *"];

/// Collapse every run of whitespace (newlines included) into a single space.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Apply each correction, in order, to the whole text.
pub fn apply_corrections(text: &str, corrections: &[Correction]) -> String {
    corrections
        .iter()
        .filter(|c| !c.from.is_empty())
        .fold(text.to_string(), |acc, c| acc.replace(&c.from, &c.to))
}

/// Crop page text down to the schedule table.
///
/// The table starts after the last "Status / Position / Action" header and ends
/// at the first end marker. A missing marker leaves that side uncropped.
pub fn crop_schedule(text: &str) -> &str {
    let start = TABLE_START
        .find_iter(text)
        .last()
        .map(|m| m.end())
        .unwrap_or(0);

    let end = TABLE_END_MARKERS
        .iter()
        .filter_map(|marker| text[start..].find(marker).map(|i| start + i))
        .min()
        .unwrap_or(text.len());

    &text[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(
            normalize_whitespace("  CSE 15L\n\tSoftware   Tools\r\n"),
            "CSE 15L Software Tools"
        );
    }

    #[test]
    fn test_apply_corrections_fixes_misread_sections() {
        let corrections = vec![
            Correction::new(" ВОО ", " B00 "),
            Correction::new(" BOO ", " B00 "),
        ];

        let fixed = apply_corrections("Lab ВОО LE Politz x BOO DI", &corrections);

        assert_eq!(fixed, "Lab B00 LE Politz x B00 DI");
    }

    #[test]
    fn test_apply_corrections_ignores_empty_pattern() {
        let corrections = vec![Correction::new("", "X")];
        assert_eq!(apply_corrections("abc", &corrections), "abc");
    }

    #[test]
    fn test_crop_schedule_between_markers() {
        let page = "Search Subject Course Status/( Position ) Action CSE 20 Discrete A00 LE \
                    My Events Name Location Start";

        assert_eq!(crop_schedule(page), "CSE 20 Discrete A00 LE");
    }

    #[test]
    fn test_crop_schedule_uses_last_header_and_first_end() {
        let page = "a Status/ Position / Action b Status/( Position ) Action body * x My Events y";

        assert_eq!(crop_schedule(page), "body");
    }

    #[test]
    fn test_crop_schedule_without_markers_is_identity() {
        assert_eq!(crop_schedule("CSE 20 Discrete"), "CSE 20 Discrete");
    }
}
