//! MendCore: scoring and progression engine for repair coaching
//!
//! Pipeline: message text → MessageScorer → {heat, repair, triggers}
//! → combo detection → XP/level → buddy mood → achievements

pub mod core;
pub mod types;

// =============================================================================
// COMBO BONUSES - Added to repair pre-clamp, exactly once
// =============================================================================

/// Bonus for two-category combos (validation+ownership etc.)
pub const COMBO_BONUS_SIMPLE: u32 = 15;

/// Bonus for full repair (validation + ownership + boundary/curiosity)
/// Must stay strictly greater than COMBO_BONUS_SIMPLE
pub const COMBO_BONUS_FULL: u32 = 25;

// =============================================================================
// XP RULES
// =============================================================================

/// Fraction of the repair score converted to XP
pub const XP_REPAIR_FACTOR: f64 = 0.5;

/// Flat XP bonus for keeping heat low
pub const XP_LOW_HEAT_BONUS: u32 = 10;

/// Heat below this earns the low-heat bonus
pub const XP_LOW_HEAT_THRESHOLD: u32 = 30;

// =============================================================================
// LEVEL CURVE - Geometric thresholds
// =============================================================================

/// XP required to clear level 1
pub const LEVEL_BASE_XP: i64 = 100;

/// Per-level threshold growth (threshold(n) = base * rate^(n-1))
pub const LEVEL_GROWTH_RATE: f64 = 1.4;

// =============================================================================
// MOOD THRESHOLDS - Checked in cascade order, heat before repair
// =============================================================================

/// Heat above this → OVERHEATED
pub const MOOD_HEAT_OVERHEATED: u32 = 70;

/// Heat above this → CONCERNED
pub const MOOD_HEAT_CONCERNED: u32 = 50;

/// Repair above this → PROUD
pub const MOOD_REPAIR_PROUD: u32 = 60;

/// Repair above this → RECOVERING
pub const MOOD_REPAIR_RECOVERING: u32 = 30;

// =============================================================================
// RUPTURE TRACKING - Session-level recovery detection
// =============================================================================

/// Heat at or above this opens a rupture in the session
pub const RUPTURE_HEAT_THRESHOLD: u32 = 70;

/// Repair at or above this (or any combo) closes an open rupture
pub const RUPTURE_REPAIR_THRESHOLD: u32 = 60;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
