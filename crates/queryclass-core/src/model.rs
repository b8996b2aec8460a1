//! Classification models offered to the user.
//!
//! The set is fixed. Identifiers are case-sensitive on the wire and match the
//! `type` field the classification service dispatches on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A classification strategy the user can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModelId {
    /// Runs Ensemble and Roberta, falling back to Chatgpt when they disagree.
    #[default]
    #[serde(rename = "default")]
    Default,
    Ensemble,
    Roberta,
    Chatgpt,
}

impl ModelId {
    /// Every model, in display order.
    pub const ALL: [ModelId; 4] = [
        ModelId::Default,
        ModelId::Ensemble,
        ModelId::Roberta,
        ModelId::Chatgpt,
    ];

    /// Wire identifier, as sent in the `type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Ensemble => "Ensemble",
            Self::Roberta => "Roberta",
            Self::Chatgpt => "Chatgpt",
        }
    }

    /// Human-readable description shown when the model's info is expanded.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Default => {
                "A model that passes the query from Ensemble and Roberta and if the answer \
                 is different then verifies the correct answer from chatgpt model"
            }
            Self::Ensemble => "Combines multiple models for improved accuracy.",
            Self::Roberta => "A transformer-based model fine-tuned for NLP tasks.",
            Self::Chatgpt => "Uses ChatGPT's API for semantic understanding.",
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| CoreError::UnknownModel(s.to_string()))
    }
}
