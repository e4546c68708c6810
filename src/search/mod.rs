//! Line matching.
//!
//! Stateless, literal, case-sensitive substring search over a slice of
//! lines:
//! - Forward and backward search that never considers the current line
//! - Wrapped lookups that restart once from the opposite boundary
//! - Occurrence spans for highlighting

use std::ops::Range;

fn contains<S: AsRef<str>>(line: &S, pattern: &str) -> bool {
    line.as_ref().contains(pattern)
}

/// Smallest index after `current` whose line contains `pattern`.
///
/// Returns `None` when `current` is the last line (or beyond) or nothing
/// matches.
pub fn find_next_matching_line<S: AsRef<str>>(
    lines: &[S],
    current: usize,
    pattern: &str,
) -> Option<usize> {
    let start = current.checked_add(1)?;
    lines
        .get(start..)?
        .iter()
        .position(|line| contains(line, pattern))
        .map(|offset| start + offset)
}

/// Largest index before `current` whose line contains `pattern`.
///
/// `current` may be `lines.len()`, in which case the last line is eligible.
pub fn find_previous_matching_line<S: AsRef<str>>(
    lines: &[S],
    current: usize,
    pattern: &str,
) -> Option<usize> {
    let end = current.min(lines.len());
    lines[..end].iter().rposition(|line| contains(line, pattern))
}

/// Smallest index whose line contains `pattern`, including line 0.
pub fn first_matching_line<S: AsRef<str>>(lines: &[S], pattern: &str) -> Option<usize> {
    lines.iter().position(|line| contains(line, pattern))
}

/// Next matching line after `current`, wrapping to the top once.
///
/// An empty pattern, or a document with no match, leaves `current` as is.
pub fn locate_next_match<S: AsRef<str>>(lines: &[S], current: usize, pattern: &str) -> usize {
    if pattern.is_empty() {
        return current;
    }
    find_next_matching_line(lines, current, pattern)
        .or_else(|| first_matching_line(lines, pattern))
        .unwrap_or(current)
}

/// Previous matching line before `current`, wrapping to the bottom once.
pub fn locate_previous_match<S: AsRef<str>>(lines: &[S], current: usize, pattern: &str) -> usize {
    if pattern.is_empty() {
        return current;
    }
    find_previous_matching_line(lines, current, pattern)
        .or_else(|| find_previous_matching_line(lines, lines.len(), pattern))
        .unwrap_or(current)
}

/// Byte ranges of every non-overlapping occurrence of `pattern` in `line`.
pub fn match_spans(line: &str, pattern: &str) -> Vec<Range<usize>> {
    if pattern.is_empty() {
        return Vec::new();
    }
    line.match_indices(pattern)
        .map(|(start, m)| start..start + m.len())
        .collect()
}
