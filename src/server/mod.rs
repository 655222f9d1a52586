//! Web form server.
//!
//! ## Endpoints
//!
//! - `GET /`: the empty form
//! - `POST /`: form submission (`claim`), answered with the rendered page
//! - `POST /api/analyze`: JSON `{"claim": "..."}`, answered with the report
//! - `GET /health`: liveness probe

mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::info;

use crate::render::RenderOptions;
use crate::{ClaimCheckError, ClaimChecker, Result};

/// Shared state for axum handlers.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) checker: Arc<ClaimChecker>,
    pub(crate) render: Arc<RenderOptions>,
}

/// Build the application router.
pub fn router(checker: Arc<ClaimChecker>, render: RenderOptions) -> Router {
    let state = AppState {
        checker,
        render: Arc::new(render),
    };

    Router::new()
        .route("/", get(routes::form).post(routes::submit))
        .route("/api/analyze", post(routes::analyze_json))
        .route("/health", get(routes::health))
        .with_state(state)
}

/// Web form server running in a background tokio task.
pub struct FormServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl FormServer {
    /// Bind to `bind_addr` (use port `0` for auto-assign) and start serving.
    ///
    /// # Errors
    ///
    /// Returns [`ClaimCheckError::Configuration`] if the listener cannot bind.
    pub async fn start(
        checker: Arc<ClaimChecker>,
        render: RenderOptions,
        bind_addr: &str,
    ) -> Result<Self> {
        let app = router(checker, render);

        let listener = TcpListener::bind(bind_addr).await.map_err(|e| {
            ClaimCheckError::Configuration(format!("failed to bind {bind_addr}: {e}"))
        })?;
        let addr = listener.local_addr().map_err(|e| {
            ClaimCheckError::Configuration(format!("failed to get local addr: {e}"))
        })?;

        info!("claim checker listening on http://{addr}/");

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("server error: {e}");
            }
        });

        Ok(Self { addr, handle })
    }

    /// Returns the address the server is listening on.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Wait until the server task exits.
    pub async fn wait(&mut self) {
        if let Err(e) = (&mut self.handle).await
            && !e.is_cancelled()
        {
            tracing::error!("server task failed: {e}");
        }
    }
}

impl Drop for FormServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
