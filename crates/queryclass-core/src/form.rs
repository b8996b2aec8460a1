//! Local state behind the query form.
//!
//! Exactly one model is selected at all times and at most one model
//! description is expanded. Nothing here is persisted.

use crate::model::ModelId;
use crate::query::{Prediction, Query};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    text: String,
    model: ModelId,
    prediction: Option<Prediction>,
    open_description: Option<ModelId>,
}

impl FormState {
    /// Create an empty form with `model` selected.
    pub fn new(model: ModelId) -> Self {
        Self {
            model,
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn selected_model(&self) -> ModelId {
        self.model
    }

    pub fn select_model(&mut self, model: ModelId) {
        self.model = model;
    }

    pub fn is_selected(&self, model: ModelId) -> bool {
        self.model == model
    }

    /// Open `model`'s description, or close it if it is already open.
    ///
    /// Opening one description closes any other.
    pub fn toggle_description(&mut self, model: ModelId) {
        self.open_description = match self.open_description {
            Some(open) if open == model => None,
            _ => Some(model),
        };
    }

    pub fn open_description(&self) -> Option<ModelId> {
        self.open_description
    }

    /// Description text of the expanded model, if any.
    pub fn visible_description(&self) -> Option<&'static str> {
        self.open_description.map(|m| m.description())
    }

    /// Last prediction received, if any.
    pub fn prediction(&self) -> Option<&Prediction> {
        self.prediction.as_ref()
    }

    /// Replace the displayed prediction with a newly received one.
    pub fn set_prediction(&mut self, prediction: Prediction) {
        self.prediction = Some(prediction);
    }

    /// The request body for the current text and selection.
    pub fn query(&self) -> Query {
        Query::new(self.text.clone(), self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_form_selects_given_model() {
        let form = FormState::new(ModelId::Roberta);
        assert_eq!(form.selected_model(), ModelId::Roberta);
        assert_eq!(form.text(), "");
        assert!(form.prediction().is_none());
        assert!(form.open_description().is_none());
    }

    #[test]
    fn default_form_selects_default_model() {
        assert_eq!(FormState::default().selected_model(), ModelId::Default);
    }

    #[test]
    fn selecting_makes_exactly_one_model_active() {
        let mut form = FormState::default();
        for model in ModelId::ALL {
            form.select_model(model);
            let active: Vec<_> = ModelId::ALL
                .into_iter()
                .filter(|m| form.is_selected(*m))
                .collect();
            assert_eq!(active, vec![model]);
        }
    }

    #[test]
    fn toggle_open_description_closes_it() {
        let mut form = FormState::default();
        form.toggle_description(ModelId::Ensemble);
        assert_eq!(form.open_description(), Some(ModelId::Ensemble));
        form.toggle_description(ModelId::Ensemble);
        assert_eq!(form.open_description(), None);
    }

    #[test]
    fn toggle_another_description_replaces_open_one() {
        let mut form = FormState::default();
        form.toggle_description(ModelId::Ensemble);
        form.toggle_description(ModelId::Chatgpt);
        assert_eq!(form.open_description(), Some(ModelId::Chatgpt));
        assert_eq!(
            form.visible_description(),
            Some(ModelId::Chatgpt.description())
        );
    }

    #[test]
    fn toggling_description_does_not_change_selection() {
        let mut form = FormState::new(ModelId::Roberta);
        form.toggle_description(ModelId::Chatgpt);
        assert_eq!(form.selected_model(), ModelId::Roberta);
    }

    #[test]
    fn query_reflects_text_and_selection() {
        let mut form = FormState::default();
        form.set_text("what changed since Monday?");
        form.select_model(ModelId::Chatgpt);
        let q = form.query();
        assert_eq!(q.text, "what changed since Monday?");
        assert_eq!(q.model, ModelId::Chatgpt);
    }

    #[test]
    fn new_prediction_overwrites_previous() {
        let mut form = FormState::default();
        form.set_prediction(Prediction::from("Factual"));
        form.set_prediction(Prediction::from("Multi-Part"));
        assert_eq!(form.prediction(), Some(&Prediction::from("Multi-Part")));
    }
}
