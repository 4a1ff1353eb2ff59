//! Boundary splitting of whitespace-joined schedule text.
//!
//! The rendered schedule table loses its row structure once it is flattened to
//! text. Boundaries are recovered by matching anchor patterns: *before*
//! patterns start a new slice where they match, *after* patterns start a new
//! slice right after their match ends.

use std::ops::Range;

use regex::Regex;

use crate::error::{ScheduleError, ScheduleResult};

/// An anchor used to find slice boundaries.
#[derive(Debug, Clone)]
pub enum SplitPattern {
    /// Literal text, matched only where a word boundary precedes it.
    Literal(String),
    Pattern(Regex),
}

impl SplitPattern {
    pub fn literal(text: impl Into<String>) -> Self {
        SplitPattern::Literal(text.into())
    }

    pub fn regex(pattern: &str) -> ScheduleResult<Self> {
        let regex = Regex::new(pattern).map_err(|source| ScheduleError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(SplitPattern::Pattern(regex))
    }

    /// Pattern marking the start of a course: the department code, whitespace,
    /// then the first digit of the course number.
    pub fn department(code: &str) -> ScheduleResult<Self> {
        Self::regex(&format!(r"\s{}\s[0-9]", regex::escape(code)))
    }

    /// Byte ranges of every non-overlapping match in `text`.
    pub fn find_all(&self, text: &str) -> Vec<Range<usize>> {
        match self {
            SplitPattern::Literal(literal) => {
                if literal.is_empty() {
                    return Vec::new();
                }
                text.match_indices(literal.as_str())
                    .filter(|(start, _)| word_boundary_at(text, *start))
                    .map(|(start, m)| start..start + m.len())
                    .collect()
            }
            SplitPattern::Pattern(regex) => regex.find_iter(text).map(|m| m.range()).collect(),
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Same rule as a regex `\b`: the characters on either side of `index`
/// differ in word-ness (text edges count as non-word).
fn word_boundary_at(text: &str, index: usize) -> bool {
    let before = text[..index].chars().next_back().is_some_and(is_word_char);
    let after = text[index..].chars().next().is_some_and(is_word_char);
    before != after
}

/// Untrimmed byte ranges of every slice, in order. The ranges are contiguous
/// and together cover the whole text.
pub fn split_ranges(text: &str, before: &[SplitPattern], after: &[SplitPattern]) -> Vec<Range<usize>> {
    let mut indices: Vec<usize> = before
        .iter()
        .flat_map(|pattern| pattern.find_all(text).into_iter().map(|m| m.start))
        .chain(
            after
                .iter()
                .flat_map(|pattern| pattern.find_all(text).into_iter().map(|m| m.end)),
        )
        .collect();

    indices.push(0);
    indices.sort_unstable();
    indices.dedup();

    indices
        .iter()
        .enumerate()
        .map(|(i, &start)| start..indices.get(i + 1).copied().unwrap_or(text.len()))
        .filter(|range| !range.is_empty())
        .collect()
}

/// Split `text` at every boundary, returning trimmed, non-empty slices.
///
/// Text before the first boundary becomes its own slice. Without any boundary
/// the whole trimmed text comes back as a single slice.
pub fn split_by_patterns<'a>(
    text: &'a str,
    before: &[SplitPattern],
    after: &[SplitPattern],
) -> Vec<&'a str> {
    split_ranges(text, before, after)
        .into_iter()
        .map(|range| text[range].trim())
        .filter(|slice| !slice.is_empty())
        .collect()
}
