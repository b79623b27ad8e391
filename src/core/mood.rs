//! Mood engine: maps instantaneous heat/repair to a buddy mood
//!
//! Ordered cascade, most extreme band first. Heat checks take priority over
//! repair checks: an overheated-but-repairing message still reads OVERHEATED.
//! Stateless recompute; any smoothing/hysteresis belongs to the caller.

use crate::types::BuddyMood;
use crate::{
    MOOD_HEAT_CONCERNED, MOOD_HEAT_OVERHEATED, MOOD_REPAIR_PROUD, MOOD_REPAIR_RECOVERING,
};

/// Derive the buddy mood from the current scores
pub fn buddy_mood(heat: u32, repair: u32) -> BuddyMood {
    if heat > MOOD_HEAT_OVERHEATED {
        return BuddyMood::Overheated;
    }
    if heat > MOOD_HEAT_CONCERNED {
        return BuddyMood::Concerned;
    }
    if repair > MOOD_REPAIR_PROUD {
        return BuddyMood::Proud;
    }
    if repair > MOOD_REPAIR_RECOVERING {
        return BuddyMood::Recovering;
    }
    BuddyMood::Calm
}

// =============================================================================
// TESTS
// =============================================================================
