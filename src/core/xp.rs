//! XP and level progression
//!
//! Two independent contracts: per-message XP from a clamped score, and
//! level-from-cumulative-XP over a geometric threshold curve (base 100,
//! growth 1.4). Cumulative XP is owned by the caller.

use crate::types::LevelInfo;
use crate::{
    LEVEL_BASE_XP, LEVEL_GROWTH_RATE, XP_LOW_HEAT_BONUS, XP_LOW_HEAT_THRESHOLD, XP_REPAIR_FACTOR,
};

/// XP earned by one message from its post-clamp heat/repair scores
///
/// Rewards low heat rather than penalizing high heat; never negative.
pub fn calculate_xp_delta(heat: u32, repair: u32) -> u32 {
    let repair_xp = (repair.min(100) as f64 * XP_REPAIR_FACTOR).round() as u32;
    let heat_bonus = if heat < XP_LOW_HEAT_THRESHOLD {
        XP_LOW_HEAT_BONUS
    } else {
        0
    };
    repair_xp + heat_bonus
}

/// Level reached at a cumulative XP total
///
/// Thresholds grow geometrically, so the loop terminates for any finite
/// total. Negative input is clamped to 0 rather than rejected.
pub fn calculate_level(total_xp: i64) -> LevelInfo {
    let mut remaining = total_xp.max(0);
    let mut level: u32 = 1;
    let mut threshold = LEVEL_BASE_XP;

    while remaining >= threshold {
        remaining -= threshold;
        level += 1;
        threshold = (LEVEL_BASE_XP as f64 * LEVEL_GROWTH_RATE.powi(level as i32 - 1)).round() as i64;
    }

    let progress_percent = ((remaining as f64 / threshold as f64) * 100.0).round() as u32;

    LevelInfo {
        level,
        xp_into_level: remaining,
        xp_for_next_level: threshold,
        progress_percent,
    }
}

// =============================================================================
// TESTS
// =============================================================================
