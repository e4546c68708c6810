//! Paging while filtering.
//!
//! A filtered page moves the top line by a fixed number of *matching*
//! lines rather than raw lines. When fewer matches exist in the chosen
//! direction, the outcome is decided by a [`ShortPage`] policy.

use crate::document::Document;

/// What to do when a filtered page jump runs out of matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortPage {
    /// Leave the top line where it was.
    Stay,
    /// Move to the first line of the document.
    SnapToStart,
}

/// Policy applied when paging down finds too few matches ahead.
pub const SHORT_FORWARD_PAGE: ShortPage = ShortPage::Stay;

/// Policy applied when paging up finds too few matches behind.
pub const SHORT_BACKWARD_PAGE: ShortPage = ShortPage::SnapToStart;

/// Top line after paging forward by `quota` matching lines from `top`.
pub fn next_filtered_page(doc: &Document, top: usize, pattern: &str, quota: usize) -> usize {
    let mut line = top;
    for _ in 0..quota {
        match doc.find_next_matching_line(line, pattern) {
            Some(hit) => line = hit,
            None => return resolve_short_page(SHORT_FORWARD_PAGE, top),
        }
    }
    line
}

/// Top line after paging backward by `quota` matching lines from `top`.
pub fn previous_filtered_page(doc: &Document, top: usize, pattern: &str, quota: usize) -> usize {
    let mut line = top;
    for _ in 0..quota {
        match doc.find_previous_matching_line(line, pattern) {
            Some(hit) => line = hit,
            None => return resolve_short_page(SHORT_BACKWARD_PAGE, top),
        }
    }
    line
}

const fn resolve_short_page(policy: ShortPage, top: usize) -> usize {
    match policy {
        ShortPage::Stay => top,
        ShortPage::SnapToStart => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_matches_every(step: usize, len: usize) -> Document {
        (0..len)
            .map(|i| {
                if i % step == 0 {
                    format!("{i} hit")
                } else {
                    format!("{i} miss")
                }
            })
            .collect()
    }

    #[test]
    fn test_next_page_lands_on_quota_th_match() {
        // Matches at 0, 3, 6, 9, ...
        let doc = doc_with_matches_every(3, 30);
        assert_eq!(next_filtered_page(&doc, 0, "hit", 4), 12);
    }

    #[test]
    fn test_next_page_from_non_matching_line() {
        let doc = doc_with_matches_every(3, 30);
        assert_eq!(next_filtered_page(&doc, 1, "hit", 2), 6);
    }

    #[test]
    fn test_next_page_without_enough_matches_stays() {
        let doc = doc_with_matches_every(3, 30);
        // Matches after 21: 24, 27 only.
        assert_eq!(next_filtered_page(&doc, 21, "hit", 3), 21);
    }

    #[test]
    fn test_next_page_exact_quota_reaches_last_match() {
        let doc = doc_with_matches_every(3, 30);
        assert_eq!(next_filtered_page(&doc, 21, "hit", 2), 27);
        assert_eq!(next_filtered_page(&doc, 27, "hit", 1), 27);
    }

    #[test]
    fn test_previous_page_lands_on_quota_th_match() {
        let doc = doc_with_matches_every(3, 30);
        assert_eq!(previous_filtered_page(&doc, 27, "hit", 3), 18);
    }

    #[test]
    fn test_previous_page_without_enough_matches_snaps_to_start() {
        let doc = doc_with_matches_every(3, 30);
        // Matches before 10: 9, 6, 3, 0 -- only four.
        assert_eq!(previous_filtered_page(&doc, 10, "hit", 5), 0);
    }

    #[test]
    fn test_no_matches_anywhere() {
        let doc = doc_with_matches_every(3, 30);
        assert_eq!(next_filtered_page(&doc, 7, "x", 5), 7);
        assert_eq!(previous_filtered_page(&doc, 0, "x", 5), 0);
        assert_eq!(previous_filtered_page(&doc, 7, "x", 5), 0);
    }

    #[test]
    fn test_zero_quota_keeps_position() {
        let doc = doc_with_matches_every(3, 30);
        assert_eq!(next_filtered_page(&doc, 5, "hit", 0), 5);
        assert_eq!(previous_filtered_page(&doc, 5, "hit", 0), 5);
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::empty();
        assert_eq!(next_filtered_page(&doc, 0, "hit", 5), 0);
        assert_eq!(previous_filtered_page(&doc, 0, "hit", 5), 0);
    }

    #[test]
    fn test_policies() {
        assert_eq!(SHORT_FORWARD_PAGE, ShortPage::Stay);
        assert_eq!(SHORT_BACKWARD_PAGE, ShortPage::SnapToStart);
    }
}
