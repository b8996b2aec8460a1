//! Wire types exchanged with the classification service.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::ModelId;

/// Request body for `POST /classify`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub text: String,
    #[serde(rename = "type")]
    pub model: ModelId,
}

impl Query {
    pub fn new(text: impl Into<String>, model: ModelId) -> Self {
        Self {
            text: text.into(),
            model,
        }
    }
}

/// Response body from `POST /classify`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub prediction: Label,
}

/// A predicted class.
///
/// Most models answer with a single label. `Ensemble` answers with every
/// label whose probability is within a margin of the best one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    One(String),
    Many(Vec<String>),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(label) => f.write_str(label),
            Self::Many(labels) => f.write_str(&labels.join(", ")),
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.prediction, f)
    }
}

impl From<&str> for Prediction {
    fn from(label: &str) -> Self {
        Self {
            prediction: Label::One(label.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_serializes_model_as_type() {
        let q = Query::new("how many orders last week?", ModelId::Ensemble);
        assert_eq!(
            serde_json::to_value(&q).unwrap(),
            json!({ "text": "how many orders last week?", "type": "Ensemble" })
        );
    }

    #[test]
    fn query_allows_empty_text() {
        let q = Query::new("", ModelId::Default);
        assert_eq!(
            serde_json::to_value(&q).unwrap(),
            json!({ "text": "", "type": "default" })
        );
    }

    #[test]
    fn single_label_prediction() {
        let p: Prediction = serde_json::from_str(r#"{"prediction": "Factual"}"#).unwrap();
        assert_eq!(p.prediction, Label::One("Factual".into()));
        assert_eq!(p.to_string(), "Factual");
    }

    #[test]
    fn ensemble_prediction_lists_tied_labels() {
        let p: Prediction = serde_json::from_str(
            r#"{"prediction": ["Multi-Part", "Reasoning/Inference"]}"#,
        )
        .unwrap();
        assert_eq!(p.to_string(), "Multi-Part, Reasoning/Inference");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let p: Prediction =
            serde_json::from_str(r#"{"prediction": "Factual", "latency_ms": 12}"#).unwrap();
        assert_eq!(p, Prediction::from("Factual"));
    }

    #[test]
    fn missing_prediction_is_an_error() {
        let err = serde_json::from_str::<Prediction>(r#"{"error": "boom"}"#);
        assert!(err.is_err());
    }
}
