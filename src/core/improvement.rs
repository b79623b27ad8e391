//! Improvement scoring between two attempts at the same message

use crate::types::{ImprovementLevel, ImprovementResult, ScoreResult};

/// Compare a rewrite against the previous attempt
///
/// Heat going down and repair going up both earn bonus XP, weighted toward
/// repair gains.
pub fn calculate_improvement(previous: &ScoreResult, latest: &ScoreResult) -> ImprovementResult {
    let heat_delta = latest.heat as i32 - previous.heat as i32;
    let repair_delta = latest.repair as i32 - previous.repair as i32;

    let heat_improved = heat_delta < 0;
    let repair_improved = repair_delta > 0;

    let mut bonus = 0.0;
    if heat_improved {
        bonus += heat_delta.unsigned_abs() as f64 * 0.3;
    }
    if repair_improved {
        bonus += repair_delta as f64 * 0.5;
    }
    let bonus_xp = bonus.round() as u32;

    let level = improvement_level(heat_improved, repair_improved, heat_delta, repair_delta);

    ImprovementResult {
        heat_improved,
        repair_improved,
        heat_delta,
        repair_delta,
        bonus_xp,
        level,
    }
}

fn improvement_level(
    heat_improved: bool,
    repair_improved: bool,
    heat_delta: i32,
    repair_delta: i32,
) -> ImprovementLevel {
    if !heat_improved && !repair_improved {
        return ImprovementLevel::None;
    }

    if heat_improved && repair_improved && heat_delta.abs() > 20 && repair_delta > 20 {
        return ImprovementLevel::Great;
    }

    if heat_improved && repair_improved {
        return ImprovementLevel::Good;
    }

    if heat_delta.abs() > 30 || repair_delta > 30 {
        return ImprovementLevel::Good;
    }

    ImprovementLevel::Slight
}

// =============================================================================
// TESTS
// =============================================================================
