//! Buddy mood definitions

use serde::{Deserialize, Serialize};

/// Discrete display state of the companion, derived from current heat/repair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuddyMood {
    /// Neutral baseline
    Calm,
    /// Repair language present, things are mending
    Recovering,
    /// Strong repair score
    Proud,
    /// Heat is climbing
    Concerned,
    /// Heat past the danger line
    Overheated,
}

impl BuddyMood {
    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            BuddyMood::Calm => "\x1b[90m",       // Gray
            BuddyMood::Recovering => "\x1b[36m", // Cyan
            BuddyMood::Proud => "\x1b[32m",      // Green
            BuddyMood::Concerned => "\x1b[33m",  // Yellow
            BuddyMood::Overheated => "\x1b[31m", // Red
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }

    /// Get emoji for mood
    pub fn emoji(&self) -> &'static str {
        match self {
            BuddyMood::Calm => "😌",
            BuddyMood::Recovering => "🌱",
            BuddyMood::Proud => "🌟",
            BuddyMood::Concerned => "😟",
            BuddyMood::Overheated => "🔥",
        }
    }
}

impl std::fmt::Display for BuddyMood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BuddyMood::Calm => "CALM",
            BuddyMood::Recovering => "RECOVERING",
            BuddyMood::Proud => "PROUD",
            BuddyMood::Concerned => "CONCERNED",
            BuddyMood::Overheated => "OVERHEATED",
        };
        write!(f, "{}", name)
    }
}
