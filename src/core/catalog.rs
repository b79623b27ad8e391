//! Phrase catalog: the static heat and repair category tables
//!
//! Read-only reference data. The scorer iterates these tables generically,
//! so adding a category or phrase touches only this file.

use lazy_static::lazy_static;
use regex::Regex;

/// A named phrase-pattern group with a fixed weight
///
/// A category is "triggered" if any of its patterns matches; it contributes
/// its weight at most once per message regardless of how many patterns fire.
#[derive(Debug)]
pub struct PhraseCategory {
    /// Stable identifier (e.g. "blame", "validation")
    pub id: &'static str,
    /// Human-readable label shown in trigger lists
    pub label: &'static str,
    /// Score contribution when triggered
    pub weight: u32,
    /// Case-insensitive word-bounded matchers
    pub patterns: Vec<Regex>,
}

impl PhraseCategory {
    fn new(id: &'static str, label: &'static str, weight: u32, patterns: &[&str]) -> Self {
        Self {
            id,
            label,
            weight,
            patterns: patterns
                .iter()
                .map(|p| Regex::new(p).expect("catalog pattern must compile"))
                .collect(),
        }
    }

    /// Does any pattern in this category match the text?
    pub fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(text))
    }
}

lazy_static! {
    // =========================================================================
    // HEAT CATALOG - escalating language, ordered by catalog position
    // =========================================================================
    pub static ref HEAT_CATEGORIES: Vec<PhraseCategory> = vec![
        // Blame (weight: 25)
        PhraseCategory::new("blame", "Blame language", 25, &[
            r"(?i)\byou always\b",
            r"(?i)\byou never\b",
            r"(?i)\byou're so\b",
            r"(?i)\byour fault\b",
            r"(?i)\bbecause of you\b",
        ]),
        // Absolutes (weight: 20)
        PhraseCategory::new("absolutes", "Absolute statements", 20, &[
            r"(?i)\bevery time\b",
            r"(?i)\ball the time\b",
            r"(?i)\bnever once\b",
        ]),
        // Accusations (weight: 30)
        PhraseCategory::new("accusations", "Accusations", 30, &[
            r"(?i)\byou don't care\b",
            r"(?i)\byou're lying\b",
            r"(?i)\byou ignored\b",
            r"(?i)\byou're being\b",
        ]),
        // Aggressive tone (weight: 15)
        PhraseCategory::new("aggressive", "Aggressive tone", 15, &[
            r"(?i)\bwhatever\b",
            r"(?i)\bfine\b$",       // "Fine" as a standalone closer
            r"(?i)\bseriously\?",
            r"(?i)\bunbelievable\b",
        ]),
        // Threats / ultimatums (weight: 40 - HIGHEST)
        PhraseCategory::new("threats", "Threats/ultimatums", 40, &[
            r"(?i)\bif you don't\b",
            r"(?i)\bor else\b",
            r"(?i)\bi'm done\b",
            r"(?i)\bthis is over\b",
        ]),
    ];

    // =========================================================================
    // REPAIR CATALOG - de-escalating language
    // =========================================================================
    pub static ref REPAIR_CATEGORIES: Vec<PhraseCategory> = vec![
        // Validation (weight: 25)
        PhraseCategory::new("validation", "Validation", 25, &[
            r"(?i)\bi understand\b",
            r"(?i)\bi hear you\b",
            r"(?i)\bi get (it|that)\b",
            r"(?i)\bthat makes sense\b",
            r"(?i)\bi can see (why|how)\b",
            r"(?i)\byou're right\b",
        ]),
        // Ownership (weight: 30)
        PhraseCategory::new("ownership", "Ownership", 30, &[
            r"(?i)\bi (should have|could have)\b",
            r"(?i)\bi didn't mean to\b",
            r"(?i)\bi apologize\b",
            r"(?i)\bi'm sorry\b",
            r"(?i)\bmy (bad|mistake)\b",
            r"(?i)\bi was wrong\b",
            r"(?i)\bi messed up\b",
        ]),
        // Curiosity (weight: 20)
        PhraseCategory::new("curiosity", "Curiosity", 20, &[
            r"(?i)\bcan you help me understand\b",
            r"(?i)\bwhat did you mean\b",
            r"(?i)\bcan we talk about\b",
            r"(?i)\bhow can we\b",
            r"(?i)\bwhat would work for you\b",
        ]),
        // Healthy boundaries (weight: 20)
        PhraseCategory::new("boundaries", "Healthy boundary", 20, &[
            r"(?i)\bi need\b",
            r"(?i)\bcan we (agree|try)\b",
            r"(?i)\bi'd like (to|us to)\b",
            r"(?i)\bgoing forward\b",
            r"(?i)\bmoving forward\b",
        ]),
        // Concrete next steps (weight: 15)
        PhraseCategory::new("next_steps", "Concrete next step", 15, &[
            r"(?i)\blet's\b",
            r"(?i)\bcan we schedule\b",
            r"(?i)\bhow about we\b",
            r"(?i)\bwould you be open to\b",
        ]),
    ];
}

// =============================================================================
// TESTS
// =============================================================================
