use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Body message returned to callers for every failed relay.
pub const PROXY_FAILURE: &str = "Something went wrong in the proxy";

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("upstream returned invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        error!(error = %self, "proxy error");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": PROXY_FAILURE })),
        )
            .into_response()
    }
}
