//! Coach session: the caller-owned state around the pure engines
//!
//! The engines themselves are stateless; everything cumulative lives here.
//! One session per conversation; serialize it with serde if it needs to
//! survive a restart. Concurrent callers for the same session must serialize
//! access themselves.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::achievements::evaluate_achievements;
use crate::core::mood::buddy_mood;
use crate::core::xp::calculate_level;
use crate::types::{Achievement, BuddyMood, ComboType, LevelInfo, ScoreResult, StatsSnapshot};
use crate::{RUPTURE_HEAT_THRESHOLD, RUPTURE_REPAIR_THRESHOLD};

/// One scored message in the session history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEntry {
    pub at: DateTime<Utc>,
    pub heat: u32,
    pub repair: u32,
    pub xp: u32,
    pub combo: Option<ComboType>,
}

/// What one applied score changed
#[derive(Debug, Clone, Serialize)]
pub struct SessionOutcome {
    pub xp_gained: u32,
    pub level: LevelInfo,
    pub leveled_up: bool,
    pub mood: BuddyMood,
    /// Achievements that became unlocked by this message (already deduped
    /// against the session's persisted unlocked set)
    pub newly_unlocked: Vec<&'static Achievement>,
}

/// Cumulative state for one coaching session
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CoachSession {
    total_xp: i64,
    entries: Vec<SessionEntry>,
    unlocked: HashSet<String>,
    combo_seen: bool,
    rupture_open: bool,
    rupture_recovered: bool,
}

impl CoachSession {
    /// Create a fresh session
    pub fn new() -> Self {
        Self::default()
    }

    /// Cumulative XP, the source of truth for level
    pub fn total_xp(&self) -> i64 {
        self.total_xp
    }

    /// Current level, recomputed from total XP
    pub fn level(&self) -> LevelInfo {
        calculate_level(self.total_xp)
    }

    /// Scored message history, oldest first
    pub fn entries(&self) -> &[SessionEntry] {
        &self.entries
    }

    /// Ids of achievements unlocked so far
    pub fn unlocked_ids(&self) -> &HashSet<String> {
        &self.unlocked
    }

    /// Has the session recovered from an escalation spike?
    pub fn rupture_recovered(&self) -> bool {
        self.rupture_recovered
    }

    /// Fold one score into the session
    ///
    /// Adds XP, advances rupture tracking, records history, and merges any
    /// newly-satisfied achievements into the unlocked set exactly once.
    pub fn apply(&mut self, score: &ScoreResult) -> SessionOutcome {
        let level_before = calculate_level(self.total_xp).level;

        self.total_xp += score.xp as i64;

        // A heat spike opens a rupture; strong repair or any combo closes it
        if score.heat >= RUPTURE_HEAT_THRESHOLD {
            self.rupture_open = true;
        } else if self.rupture_open
            && (score.repair >= RUPTURE_REPAIR_THRESHOLD || score.combo.is_some())
        {
            self.rupture_open = false;
            self.rupture_recovered = true;
        }

        if score.combo.is_some() {
            self.combo_seen = true;
        }

        self.entries.push(SessionEntry {
            at: Utc::now(),
            heat: score.heat,
            repair: score.repair,
            xp: score.xp,
            combo: score.combo,
        });

        let snapshot = StatsSnapshot {
            total_xp: self.total_xp,
            flags: score.flags.clone(),
            combo_triggered: self.combo_seen,
            heat_score: score.heat,
            rupture_recovered: self.rupture_recovered,
        };

        let mut newly_unlocked = Vec::new();
        for achievement in evaluate_achievements(&snapshot) {
            if self.unlocked.insert(achievement.id.to_string()) {
                newly_unlocked.push(achievement);
            }
        }

        let level = calculate_level(self.total_xp);

        SessionOutcome {
            xp_gained: score.xp,
            leveled_up: level.level > level_before,
            mood: buddy_mood(score.heat, score.repair),
            level,
            newly_unlocked,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
