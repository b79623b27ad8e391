//! Achievement definitions and the stats snapshot they are evaluated against

use serde::Serialize;

/// A named unlockable badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Point-in-time stats an achievement predicate is evaluated against
///
/// Built by the caller from cumulative session state plus the latest score.
/// The engine never remembers prior unlocks; merging newly-true achievements
/// into a persisted unlocked set is the caller's job.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatsSnapshot {
    /// Cumulative XP for the session
    pub total_xp: i64,
    /// Category ids triggered by the latest message, heat and repair
    pub flags: Vec<String>,
    /// Has any combo fired this session?
    pub combo_triggered: bool,
    /// Heat score of the latest message
    pub heat_score: u32,
    /// Did the session recover from an escalation spike?
    pub rupture_recovered: bool,
}
