//! HTTP client for the classification endpoint, and the form submit flow.

use queryclass_core::{FormState, Prediction, Query};
use thiserror::Error;
use tracing::{error, info};

/// Endpoint the form talks to when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/classify";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Client for a `POST /classify` style endpoint (the service itself or the proxy).
pub struct ClassifyClient {
    client: reqwest::Client,
    endpoint: String,
}

impl Default for ClassifyClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT.to_string())
    }
}

impl ClassifyClient {
    /// `endpoint` is the full URL the query is posted to, e.g.
    /// `http://localhost:3000/api/proxy`.
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post `query` and decode the prediction.
    ///
    /// The body is decoded whatever the status code. A non-success response
    /// whose body is not a prediction is reported as [`ClientError::Server`].
    pub async fn classify(&self, query: &Query) -> Result<Prediction, ClientError> {
        info!(url = %self.endpoint, model = %query.model, "classifying query");
        let resp = self.client.post(&self.endpoint).json(query).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        match serde_json::from_str::<Prediction>(&body) {
            Ok(prediction) => {
                info!(prediction = %prediction, "classified");
                Ok(prediction)
            }
            Err(_) if !status.is_success() => Err(ClientError::Server {
                status: status.as_u16(),
                body,
            }),
            Err(e) => Err(e.into()),
        }
    }
}

/// Submit the form's current query.
///
/// On success the prediction is stored in `form` and returned. On failure the
/// error is logged and returned, and the previously displayed prediction is
/// left as it was.
pub async fn submit(
    client: &ClassifyClient,
    form: &mut FormState,
) -> Result<Prediction, ClientError> {
    match client.classify(&form.query()).await {
        Ok(prediction) => {
            form.set_prediction(prediction.clone());
            Ok(prediction)
        }
        Err(e) => {
            error!(error = %e, "prediction failed");
            Err(e)
        }
    }
}
