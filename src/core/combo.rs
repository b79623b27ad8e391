//! Combo detector: classifies co-occurring repair categories
//!
//! Pure function of the *set* of repair category ids triggered in one
//! scoring pass. Order of matching within the message is irrelevant.

use std::collections::HashSet;

use crate::types::ComboType;

/// Classify the repair combo for one scoring pass
///
/// Precedence is fixed; the first matching tier wins so that a full repair is
/// never reported as one of its two-category subsets.
pub fn detect_combo(categories: &HashSet<String>) -> Option<ComboType> {
    let has_validation = categories.contains("validation");
    let has_ownership = categories.contains("ownership");
    let has_boundary = categories.contains("boundaries");
    let has_curiosity = categories.contains("curiosity");

    if has_validation && has_ownership && (has_boundary || has_curiosity) {
        return Some(ComboType::FullRepair);
    }

    if has_validation && has_ownership {
        return Some(ComboType::ValidationOwnership);
    }

    if has_validation && has_boundary {
        return Some(ComboType::ValidationBoundary);
    }

    if has_ownership && has_curiosity {
        return Some(ComboType::OwnershipCuriosity);
    }

    None
}

// =============================================================================
// TESTS
// =============================================================================
