//! Core engines for MendCore

pub mod achievements;
pub mod catalog;
pub mod combo;
pub mod highlights;
pub mod improvement;
pub mod mood;
pub mod scorer;
pub mod session;
pub mod xp;

pub use achievements::{achievement_by_id, evaluate_achievements, ACHIEVEMENTS};
pub use catalog::{PhraseCategory, HEAT_CATEGORIES, REPAIR_CATEGORIES};
pub use combo::detect_combo;
pub use highlights::find_highlights;
pub use improvement::calculate_improvement;
pub use mood::buddy_mood;
pub use scorer::MessageScorer;
pub use session::{CoachSession, SessionEntry, SessionOutcome};
pub use xp::{calculate_level, calculate_xp_delta};
