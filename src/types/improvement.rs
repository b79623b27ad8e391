//! Attempt-over-attempt improvement types

use serde::{Deserialize, Serialize};

/// How much better the new attempt was
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImprovementLevel {
    None,
    Slight,
    Good,
    Great,
}

impl ImprovementLevel {
    /// Coaching message shown after a rewrite
    pub fn message(&self) -> &'static str {
        match self {
            ImprovementLevel::Great => "Amazing improvement!",
            ImprovementLevel::Good => "Nice work! You're getting better at this.",
            ImprovementLevel::Slight => "You're on the right track. Keep working.",
            ImprovementLevel::None => "Try a different approach.",
        }
    }
}

/// Comparison of two scoring attempts at the same message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprovementResult {
    pub heat_improved: bool,
    pub repair_improved: bool,
    /// New heat minus old heat; negative is improvement
    pub heat_delta: i32,
    /// New repair minus old repair; positive is improvement
    pub repair_delta: i32,
    /// Extra XP earned for improving
    pub bonus_xp: u32,
    pub level: ImprovementLevel,
}
