//! Highlight extraction for underlining matched phrases
//!
//! Unlike the scorer, which counts each category once, this reports every
//! occurrence of every pattern with byte offsets into the original text so a
//! UI can underline them. Offsets refer to the message as given (untrimmed).

use crate::core::{HEAT_CATEGORIES, REPAIR_CATEGORIES};
use crate::types::{Highlight, PhraseKind};

/// Find every heat and repair phrase occurrence in a message
pub fn find_highlights(message: &str) -> Vec<Highlight> {
    let mut highlights = Vec::new();

    for category in HEAT_CATEGORIES.iter() {
        collect(message, category, PhraseKind::Heat, &mut highlights);
    }
    for category in REPAIR_CATEGORIES.iter() {
        collect(message, category, PhraseKind::Repair, &mut highlights);
    }

    highlights.sort_by_key(|h| (h.start, h.end));
    highlights
}

fn collect(
    message: &str,
    category: &crate::core::PhraseCategory,
    kind: PhraseKind,
    out: &mut Vec<Highlight>,
) {
    for regex in &category.patterns {
        for m in regex.find_iter(message) {
            out.push(Highlight {
                text: m.as_str().to_string(),
                kind,
                category: category.id.to_string(),
                start: m.start(),
                end: m.end(),
            });
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_no_highlights() {
        assert!(find_highlights("").is_empty());
    }

    #[test]
    fn test_single_heat_highlight_offsets() {
        let message = "Well, you always leave early.";
        let highlights = find_highlights(message);
        assert_eq!(highlights.len(), 1);
        let h = &highlights[0];
        assert_eq!(h.kind, PhraseKind::Heat);
        assert_eq!(h.category, "blame");
        assert_eq!(&message[h.start..h.end], "you always");
    }

    #[test]
    fn test_original_casing_preserved() {
        let highlights = find_highlights("You Always do this");
        assert_eq!(highlights[0].text, "You Always");
    }

    #[test]
    fn test_repeated_phrase_reported_each_time() {
        // Scorer counts blame once; highlights report both occurrences
        let highlights = find_highlights("you always this, you always that");
        assert_eq!(highlights.len(), 2);
        assert!(highlights[0].start < highlights[1].start);
    }

    #[test]
    fn test_mixed_kinds_sorted_by_offset() {
        let message = "I'm sorry. You never said that.";
        let highlights = find_highlights(message);
        assert_eq!(highlights.len(), 2);
        assert_eq!(highlights[0].kind, PhraseKind::Repair);
        assert_eq!(highlights[0].category, "ownership");
        assert_eq!(highlights[1].kind, PhraseKind::Heat);
        assert_eq!(highlights[1].category, "blame");
    }
}
