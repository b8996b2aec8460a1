pub mod error;
pub mod form;
pub mod model;
pub mod query;

pub use error::CoreError;
pub use form::FormState;
pub use model::ModelId;
pub use query::{Label, Prediction, Query};
