//! Score result produced per message

use serde::{Deserialize, Serialize};

use crate::types::ComboType;

/// Result of scoring one message
///
/// Immutable value; identical input text always produces an identical result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Escalation score: 0-100, lower is better
    pub heat: u32,
    /// De-escalation score: 0-100, higher is better
    pub repair: u32,
    /// Display labels of heat categories that fired (each at most once)
    pub heat_triggers: Vec<String>,
    /// Display labels of repair categories that fired (each at most once)
    pub repair_triggers: Vec<String>,
    /// Ids of every category that fired, heat and repair
    pub flags: Vec<String>,
    /// Detected repair combo, if any
    pub combo: Option<ComboType>,
    /// XP earned by this message
    pub xp: u32,
}

impl ScoreResult {
    /// Zero score for empty or matchless input
    pub fn empty() -> Self {
        Self {
            heat: 0,
            repair: 0,
            heat_triggers: Vec::new(),
            repair_triggers: Vec::new(),
            flags: Vec::new(),
            combo: None,
            xp: 0,
        }
    }
}
