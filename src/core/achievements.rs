//! Achievement engine: evaluates unlock predicates against a stats snapshot
//!
//! Stateless by contract. Returns every achievement whose predicate holds
//! right now; the caller merges against its persisted unlocked set and must
//! not re-grant rewards for already-unlocked badges.

use crate::types::{Achievement, StatsSnapshot};

/// The fixed badge catalog
pub const ACHIEVEMENTS: [Achievement; 5] = [
    Achievement {
        id: "first_repair",
        title: "First Repair",
        description: "Completed your first repair.",
    },
    Achievement {
        id: "no_absolutes",
        title: "No Absolutes",
        description: "Avoided absolute words.",
    },
    Achievement {
        id: "boundary_builder",
        title: "Boundary Builder",
        description: "Set a respectful boundary.",
    },
    Achievement {
        id: "repair_combo",
        title: "Repair Combo",
        description: "Landed a repair combo.",
    },
    Achievement {
        id: "rupture_recovery",
        title: "Rupture Recovery",
        description: "Recovered after escalation.",
    },
];

/// Look up an achievement by id
pub fn achievement_by_id(id: &str) -> Option<&'static Achievement> {
    ACHIEVEMENTS.iter().find(|a| a.id == id)
}

/// Evaluate which achievements these stats satisfy right now
pub fn evaluate_achievements(stats: &StatsSnapshot) -> Vec<&'static Achievement> {
    let mut unlocked = Vec::new();

    if stats.total_xp > 0 {
        unlocked.push(&ACHIEVEMENTS[0]);
    }

    if !stats.flags.iter().any(|f| f == "absolutes") {
        unlocked.push(&ACHIEVEMENTS[1]);
    }

    if stats.flags.iter().any(|f| f == "boundaries") {
        unlocked.push(&ACHIEVEMENTS[2]);
    }

    if stats.combo_triggered {
        unlocked.push(&ACHIEVEMENTS[3]);
    }

    if stats.rupture_recovered {
        unlocked.push(&ACHIEVEMENTS[4]);
    }

    unlocked
}

// =============================================================================
// TESTS
// =============================================================================
