//! Plain-text rendering of the query form.
//!
//! Models are listed in display order with a selection marker. An expanded
//! description is printed directly under its model.

use std::fmt::Write;

use queryclass_core::{FormState, ModelId};

const LABEL_WIDTH: usize = 12;

// ── Public API ──

/// Render the whole form: models, query text, prediction, and last error.
pub fn render_form(form: &FormState, last_error: Option<&str>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Query Classification ===");
    let _ = writeln!(out);

    out.push_str(&render_models(form));
    let _ = writeln!(out);

    field(&mut out, "Query", form.text());
    match form.prediction() {
        Some(p) => field(&mut out, "Prediction", &p.to_string()),
        None => field(&mut out, "Prediction", "-"),
    }
    if let Some(err) = last_error {
        field(&mut out, "Error", err);
    }
    out
}

/// Render the model list with the selection marker and any open description.
pub fn render_models(form: &FormState) -> String {
    let mut out = String::from("Models\n");
    for model in ModelId::ALL {
        let mark = if form.is_selected(model) { 'x' } else { ' ' };
        let _ = writeln!(out, "  [{mark}] {model}");
        if form.open_description() == Some(model) {
            let _ = writeln!(out, "        {}", model.description());
        }
    }
    out
}

/// Every model with its description, the default one flagged.
pub fn render_catalog() -> String {
    let mut out = String::new();
    for model in ModelId::ALL {
        let flag = if model == ModelId::default() { " (default)" } else { "" };
        let _ = writeln!(out, "{model}{flag}");
        let _ = writeln!(out, "  {}", model.description());
    }
    out
}

pub fn help() -> &'static str {
    "Type a query and press Enter to classify it.\n\
     /model <id>   select a model\n\
     /info <id>    show or hide a model's description\n\
     /help         show this help\n\
     /quit         exit\n"
}

fn field(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "{label:<LABEL_WIDTH$} {value}");
}
