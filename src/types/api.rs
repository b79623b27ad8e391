//! Data shapes for the external LLM collaborators
//!
//! The scenario generator, draft-options generator, and roleplay responder
//! are asynchronous fallible services that live outside this crate. The core
//! only needs the shape of what they return; scoring never calls them, and a
//! static fallback value must satisfy every one of these types.

use serde::{Deserialize, Serialize};

/// At most this many draft options are offered per prompt
pub const MAX_DRAFT_OPTIONS: usize = 3;

/// Relationship realm a practice scenario is set in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioRealm {
    Friend,
    Family,
    Partner,
    #[serde(rename = "Work/School")]
    WorkSchool,
    Roommate,
}

/// A generated practice scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub realm: ScenarioRealm,
    /// Difficulty 1-5
    pub difficulty: u8,
    pub emotion: String,
    pub description: String,
}

/// Tone label for a suggested draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftLabel {
    #[serde(rename = "Soft Repair")]
    SoftRepair,
    #[serde(rename = "Boundary + Respect")]
    BoundaryRespect,
    #[serde(rename = "Direct & Clear")]
    DirectClear,
}

/// One suggested message draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftOption {
    pub label: DraftLabel,
    pub text: String,
    pub why_it_works: String,
}

/// Draft suggestions for one prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftOptions {
    pub options: Vec<DraftOption>,
}

impl DraftOptions {
    /// Keep at most MAX_DRAFT_OPTIONS, dropping extras from the end
    pub fn capped(mut options: Vec<DraftOption>) -> Self {
        options.truncate(MAX_DRAFT_OPTIONS);
        Self { options }
    }
}

/// One roleplay partner reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleplayReply {
    pub reply: String,
    /// Partner stability: 0-100
    pub stability: u32,
}

impl RoleplayReply {
    /// Build a reply with stability clamped to 0-100
    pub fn new(reply: impl Into<String>, stability: u32) -> Self {
        Self {
            reply: reply.into(),
            stability: stability.min(100),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_options_capped() {
        let opt = DraftOption {
            label: DraftLabel::SoftRepair,
            text: "I hear you.".to_string(),
            why_it_works: "Opens with validation.".to_string(),
        };
        let capped = DraftOptions::capped(vec![opt.clone(), opt.clone(), opt.clone(), opt]);
        assert_eq!(capped.options.len(), MAX_DRAFT_OPTIONS);
    }

    #[test]
    fn test_roleplay_stability_clamped() {
        let reply = RoleplayReply::new("Okay.", 250);
        assert_eq!(reply.stability, 100);
    }

    #[test]
    fn test_realm_serde_rename() {
        let json = serde_json::to_string(&ScenarioRealm::WorkSchool).unwrap();
        assert_eq!(json, "\"Work/School\"");
    }
}
