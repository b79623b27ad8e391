//! Highlight spans for underlining matched phrases in the original text

use serde::{Deserialize, Serialize};

/// Which catalog a highlight came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhraseKind {
    Heat,
    Repair,
}

/// One matched phrase occurrence with byte offsets into the original message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    /// The matched text as it appears in the message
    pub text: String,
    pub kind: PhraseKind,
    /// Category id (e.g. "blame", "validation")
    pub category: String,
    /// Byte offset of match start
    pub start: usize,
    /// Byte offset one past match end
    pub end: usize,
}
