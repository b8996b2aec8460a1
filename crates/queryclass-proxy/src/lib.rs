//! Classification proxy: one POST route that relays to the upstream service.

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::post,
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::ProxyConfig;
pub use error::{PROXY_FAILURE, ProxyError};
pub use routes::PROXY_PATH;
pub use state::ProxyState;

use routes::proxy_handler;

/// Build the proxy router over `state`.
pub fn router(state: Arc<ProxyState>) -> Router {
    let mut app = Router::new()
        .route(PROXY_PATH, post(proxy_handler))
        .layer(TraceLayer::new_for_http());

    if state.config.cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::POST, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE])
            .max_age(Duration::from_secs(60 * 60));
        app = app.layer(cors);
    }

    app.with_state(state)
}

/// Bind `config.address()` and serve until Ctrl+C or SIGTERM.
pub async fn serve(config: ProxyConfig) -> Result<(), ProxyError> {
    let address = config.address();
    info!(upstream = %config.classify_url(), "starting proxy");
    let app = router(ProxyState::new(config));

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| ProxyError::Bind {
            address: address.clone(),
            source,
        })?;
    info!("proxy listening on {address}{PROXY_PATH}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ProxyError::Serve)?;

    info!("proxy shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
