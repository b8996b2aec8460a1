use std::sync::Arc;

use axum::{Json, body::Bytes, extract::State};
use serde_json::Value;
use tracing::info;

use crate::{error::ProxyError, state::ProxyState};

pub const PROXY_PATH: &str = "/api/proxy";

/// Relay the request body to the upstream `/classify` and answer with its JSON.
///
/// The upstream status code is not relayed: any JSON answer becomes a 200.
pub async fn proxy_handler(
    State(state): State<Arc<ProxyState>>,
    body: Bytes,
) -> Result<Json<Value>, ProxyError> {
    let url = state.config.classify_url();
    let payload = forward_body(&body);

    info!(url = %url, "forwarding to upstream");
    let resp = state.client.post(&url).json(&payload).send().await?;
    let status = resp.status();
    let bytes = resp.bytes().await?;
    let data: Value = serde_json::from_slice(&bytes)?;

    info!(upstream_status = status.as_u16(), "relaying upstream response");
    Ok(Json(data))
}

/// JSON to send upstream for an incoming body.
///
/// A body that is not JSON is sent as a JSON string of its text.
pub fn forward_body(body: &[u8]) -> Value {
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_body_is_reserialized() {
        assert_eq!(
            forward_body(br#"{ "text": "q",  "type": "default" }"#),
            json!({ "text": "q", "type": "default" })
        );
    }

    #[test]
    fn plain_body_becomes_string() {
        assert_eq!(forward_body(b"hello"), json!("hello"));
    }

    #[test]
    fn empty_body_becomes_empty_string() {
        assert_eq!(forward_body(b""), json!(""));
    }
}
