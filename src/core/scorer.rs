//! Message scorer: runs the phrase catalog against one message
//!
//! Policy: repair is earned, not assumed. Both scores start at 0 and only
//! matched categories add; the combo bonus lands on repair before clamping.

use std::collections::HashSet;

use crate::core::combo::detect_combo;
use crate::core::xp::calculate_xp_delta;
use crate::core::{HEAT_CATEGORIES, REPAIR_CATEGORIES};
use crate::types::ScoreResult;

/// Stateless scorer over the static catalog
#[derive(Debug, Default)]
pub struct MessageScorer;

impl MessageScorer {
    /// Create new scorer
    pub fn new() -> Self {
        Self
    }

    /// Score a message
    ///
    /// Never fails: empty or matchless input yields an all-zero result.
    pub fn score(&self, message: &str) -> ScoreResult {
        let text = message.trim();

        // Handle empty input
        if text.is_empty() {
            return ScoreResult::empty();
        }

        let mut heat: u32 = 0;
        let mut repair: u32 = 0;
        let mut heat_triggers: Vec<String> = Vec::new();
        let mut repair_triggers: Vec<String> = Vec::new();
        let mut flags: Vec<String> = Vec::new();
        let mut repair_set: HashSet<String> = HashSet::new();

        // Each category contributes at most once, however many patterns fire
        for category in HEAT_CATEGORIES.iter() {
            if category.matches(text) {
                heat += category.weight;
                heat_triggers.push(category.label.to_string());
                flags.push(category.id.to_string());
            }
        }

        for category in REPAIR_CATEGORIES.iter() {
            if category.matches(text) {
                repair += category.weight;
                repair_triggers.push(category.label.to_string());
                flags.push(category.id.to_string());
                repair_set.insert(category.id.to_string());
            }
        }

        let combo = detect_combo(&repair_set);
        if let Some(combo) = combo {
            repair += combo.bonus();
        }

        // Clamp after all accumulation, not per category
        let heat = heat.min(100);
        let repair = repair.min(100);

        let xp = calculate_xp_delta(heat, repair);

        ScoreResult {
            heat,
            repair,
            heat_triggers: dedup_labels(heat_triggers),
            repair_triggers: dedup_labels(repair_triggers),
            flags,
            combo,
            xp,
        }
    }
}

/// Collapse duplicate display labels, keeping first-seen order
///
/// Category ids are unique, but two categories could share a display label.
fn dedup_labels(labels: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    labels
        .into_iter()
        .filter(|label| seen.insert(label.clone()))
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ComboType;

    #[test]
    fn test_empty_input() {
        let scorer = MessageScorer::new();
        let result = scorer.score("");
        assert_eq!(result, ScoreResult::empty());
    }

    #[test]
    fn test_whitespace_only_input() {
        let scorer = MessageScorer::new();
        let result = scorer.score("   \n\t  ");
        assert_eq!(result, ScoreResult::empty());
    }

    #[test]
    fn test_no_matches_scores_zero() {
        let scorer = MessageScorer::new();
        let result = scorer.score("The meeting moved to Tuesday.");
        assert_eq!(result.heat, 0);
        assert_eq!(result.repair, 0);
        assert!(result.heat_triggers.is_empty());
        assert!(result.repair_triggers.is_empty());
        assert!(result.combo.is_none());
    }

    #[test]
    fn test_heat_category_counted_once() {
        let scorer = MessageScorer::new();
        // "you always" twice plus "you never" - all blame, one contribution
        let result = scorer.score("You always interrupt. You always leave. You never ask.");
        assert_eq!(result.heat, 25);
        assert_eq!(result.heat_triggers, vec!["Blame language"]);
    }

    #[test]
    fn test_multiple_heat_categories_sum() {
        let scorer = MessageScorer::new();
        let result = scorer.score("You always ignore me. I'm done.");
        // blame (25) + threats (40)
        assert_eq!(result.heat, 65);
        assert_eq!(result.repair, 0);
        assert!(result.heat_triggers.contains(&"Blame language".to_string()));
        assert!(result.heat_triggers.contains(&"Threats/ultimatums".to_string()));
        assert!(result.combo.is_none());
    }

    #[test]
    fn test_heat_clamped_at_100() {
        let scorer = MessageScorer::new();
        // All five heat categories: 25+20+30+15+40 = 130
        let result = scorer.score(
            "You always do this, every time, and you don't care. Whatever. If you don't stop, I'm done.",
        );
        assert_eq!(result.heat, 100);
    }

    #[test]
    fn test_repair_is_additive_from_zero() {
        let scorer = MessageScorer::new();
        let result = scorer.score("I understand why that hurt.");
        assert_eq!(result.repair, 25);
        assert_eq!(result.repair_triggers, vec!["Validation"]);
    }

    #[test]
    fn test_full_repair_clamps_at_100() {
        let scorer = MessageScorer::new();
        let result = scorer.score(
            "I understand. I'm sorry, I should have told you sooner. \
             Can we talk about how to handle this going forward?",
        );
        // validation + ownership + curiosity + boundaries = 95, +25 combo = 120
        assert_eq!(result.combo, Some(ComboType::FullRepair));
        assert_eq!(result.repair, 100);
        assert_eq!(result.heat, 0);
        assert!(result.xp > 0);
        for label in ["Validation", "Ownership", "Curiosity", "Healthy boundary"] {
            assert!(
                result.repair_triggers.contains(&label.to_string()),
                "missing trigger {}",
                label
            );
        }
    }

    #[test]
    fn test_combo_bonus_applied_to_repair_only_once() {
        let scorer = MessageScorer::new();
        // validation (25) + ownership (30) + 15 combo = 70
        let result = scorer.score("I hear you, and I'm sorry.");
        assert_eq!(result.combo, Some(ComboType::ValidationOwnership));
        assert_eq!(result.repair, 70);
        // xp sees the combo only through the boosted repair
        assert_eq!(result.xp, 35 + 10);
    }

    #[test]
    fn test_mixed_message_scores_both_sides() {
        let scorer = MessageScorer::new();
        let result = scorer.score("You never listen, but I'm sorry I yelled.");
        assert_eq!(result.heat, 25);
        assert_eq!(result.repair, 30);
        assert_eq!(result.flags.len(), 2);
    }

    #[test]
    fn test_idempotence() {
        let scorer = MessageScorer::new();
        let text = "I get it, and I need some space going forward.";
        assert_eq!(scorer.score(text), scorer.score(text));
    }

    #[test]
    fn test_flags_carry_category_ids() {
        let scorer = MessageScorer::new();
        let result = scorer.score("Every time! I need a pause.");
        assert!(result.flags.contains(&"absolutes".to_string()));
        assert!(result.flags.contains(&"boundaries".to_string()));
    }
}
