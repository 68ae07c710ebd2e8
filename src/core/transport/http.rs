//! HTTP transport implementation.
//!
//! Binds the REST router from `domains::rest` to a TCP listener, with request
//! tracing and optional permissive CORS. Stops on Ctrl-C.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::domains::operations::Dispatcher;
use crate::domains::rest::{self, routes};

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Build the full application: REST routes plus transport layers.
    pub fn app(&self, dispatcher: Arc<Dispatcher>) -> Router {
        let mut app = rest::router(dispatcher)
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        app
    }

    /// Run the HTTP transport until Ctrl-C.
    pub async fn run(self, dispatcher: Arc<Dispatcher>) -> TransportResult<()> {
        let addr = self.address();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        self.serve(listener, dispatcher, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(
        self,
        listener: TcpListener,
        dispatcher: Arc<Dispatcher>,
        shutdown: F,
    ) -> TransportResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.app(dispatcher);
        let addr = listener
            .local_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| self.address());

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!(
            "Ready - listening on http://{} (REST, CORS {})",
            addr, cors_status
        );
        info!("  → Docs:     GET /");
        info!("  → Health:   GET /health");
        info!("  → Download: GET /api/download/{{*path}}");
        for (group, table) in routes::GROUPS {
            info!("  → {:<20} {} routes", group, table.len());
            for route in *table {
                debug!("    {} {} -> {}", route.verb, route.path, route.operation);
            }
        }

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        info!("HTTP transport finished");
        Ok(())
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until the process is killed.
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::upstream::fake::FakeUpstream;
    use tokio::sync::oneshot;

    fn transport(enable_cors: bool) -> HttpTransport {
        HttpTransport::new(HttpConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
            enable_cors,
        })
    }

    #[tokio::test]
    async fn test_serves_rest_over_tcp() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let dispatcher = Arc::new(Dispatcher::new(Arc::new(FakeUpstream::new())));
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(transport(true).serve(listener, dispatcher, async move {
            let _ = rx.await;
        }));

        let client = reqwest::Client::new();
        let response = client
            .get(format!("http://{addr}/health"))
            .header("origin", "http://example.com")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "*"
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["status"], "healthy");

        let response = client
            .get(format!("http://{addr}/api/carriers/se-1"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);

        tx.send(()).unwrap();
        handle.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_bind_failure_is_reported() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();
        let dispatcher = Arc::new(Dispatcher::new(Arc::new(FakeUpstream::new())));

        let mut transport = transport(false);
        transport.config.port = port;
        let err = transport.run(dispatcher).await.unwrap_err();

        assert!(matches!(err, TransportError::BindError { .. }));
    }
}
