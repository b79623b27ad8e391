//! Level progression info

use serde::{Deserialize, Serialize};

/// Level derived from cumulative XP
///
/// Recomputed from total XP on every change; total XP is the source of truth
/// and lives with the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelInfo {
    /// Current level, always >= 1
    pub level: u32,
    /// XP accumulated within the current level
    pub xp_into_level: i64,
    /// XP required to clear the current level
    pub xp_for_next_level: i64,
    /// Progress through the current level: 0-100
    pub progress_percent: u32,
}
