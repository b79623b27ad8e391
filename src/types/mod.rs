//! Core types for MendCore

mod achievement;
mod api;
mod combo;
mod highlight;
mod improvement;
mod level;
mod mood;
mod score;

pub use achievement::{Achievement, StatsSnapshot};
pub use api::{
    DraftLabel, DraftOption, DraftOptions, RoleplayReply, Scenario, ScenarioRealm,
    MAX_DRAFT_OPTIONS,
};
pub use combo::ComboType;
pub use highlight::{Highlight, PhraseKind};
pub use improvement::{ImprovementLevel, ImprovementResult};
pub use level::LevelInfo;
pub use mood::BuddyMood;
pub use score::ScoreResult;
