//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with a catch-all forwarding handler
//! - Wire up middleware (request tracing)
//! - Bind server to listener
//! - Drain in-flight requests on shutdown

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::ForwardConfig;
use crate::forward::{BuildError, Forwarder};

/// HTTP server for the forwarder.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ForwardConfig) -> Result<Self, BuildError> {
        let forwarder = Forwarder::from_config(&config)?;

        tracing::info!(
            upstream = %forwarder.upstream(),
            max_body_size = config.limits.max_body_size,
            "Forwarder ready"
        );

        let router = Self::build_router(forwarder);
        Ok(Self { router })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(forwarder: Forwarder) -> Router {
        Router::new()
            .route("/{*path}", any(forward_handler))
            .route("/", any(forward_handler))
            // `OPTIONS *` and authority-form targets match neither route.
            .fallback(forward_handler)
            .with_state(forwarder)
            .layer(TraceLayer::new_for_http())
    }

    /// The router serving requests, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn forward_handler(State(forwarder): State<Forwarder>, request: Request<Body>) -> Response {
    forwarder.forward(request).await
}
