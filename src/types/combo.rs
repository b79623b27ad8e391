//! Repair combo classification

use serde::{Deserialize, Serialize};

use crate::{COMBO_BONUS_FULL, COMBO_BONUS_SIMPLE};

/// Bonus-granting co-occurrence of repair categories within one message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComboType {
    /// Validation + ownership
    ValidationOwnership,
    /// Validation + healthy boundary
    ValidationBoundary,
    /// Ownership + curiosity
    OwnershipCuriosity,
    /// Validation + ownership + (boundary or curiosity)
    FullRepair,
}

impl ComboType {
    /// Repair bonus granted by this combo, applied pre-clamp
    pub fn bonus(&self) -> u32 {
        match self {
            ComboType::ValidationOwnership => COMBO_BONUS_SIMPLE,
            ComboType::ValidationBoundary => COMBO_BONUS_SIMPLE,
            ComboType::OwnershipCuriosity => COMBO_BONUS_SIMPLE,
            ComboType::FullRepair => COMBO_BONUS_FULL,
        }
    }

    /// Celebration label for display
    pub fn label(&self) -> &'static str {
        match self {
            ComboType::ValidationOwnership => "Heard + Owned!",
            ComboType::ValidationBoundary => "Heard + Boundaried!",
            ComboType::OwnershipCuriosity => "Owned + Curious!",
            ComboType::FullRepair => "Full Repair!",
        }
    }
}

impl std::fmt::Display for ComboType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ComboType::ValidationOwnership => "validation_ownership",
            ComboType::ValidationBoundary => "validation_boundary",
            ComboType::OwnershipCuriosity => "ownership_curiosity",
            ComboType::FullRepair => "full_repair",
        };
        write!(f, "{}", name)
    }
}
