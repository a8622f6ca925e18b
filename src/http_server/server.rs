//! Axum server wiring

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use uuid::Uuid;

use crate::config::ServiceConfig;
use crate::gateway::{Gateway, GatewayRequest, GatewayResponse, Method};

/// HTTP server for the user resource endpoint.
pub struct HttpServer {
    config: ServiceConfig,
    gateway: Arc<Gateway>,
}

impl HttpServer {
    /// Create a server over the given configuration and gateway.
    pub fn new(config: ServiceConfig, gateway: Arc<Gateway>) -> Self {
        Self { config, gateway }
    }

    /// Build the router; exposed separately so tests can drive it without
    /// binding a socket.
    pub fn router(gateway: Arc<Gateway>) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/users", any(users_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(gateway)
    }

    /// Bind and serve until the process is stopped.
    pub async fn serve(self) -> std::io::Result<()> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;
        info!(%addr, "listening");
        axum::serve(listener, Self::router(self.gateway)).await
    }
}

async fn health_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        r#"{"status":"ok"}"#,
    )
}

async fn users_handler(
    State(gateway): State<Arc<Gateway>>,
    method: axum::http::Method,
    Query(query): Query<HashMap<String, String>>,
    body: String,
) -> Response {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("request", id = %request_id, method = %method);
    let _guard = span.enter();

    let req = GatewayRequest {
        method: Method::from_token(method.as_str()),
        query,
        body,
    };
    into_http_response(gateway.dispatch(&req))
}

fn into_http_response(resp: GatewayResponse) -> Response {
    let status =
        StatusCode::from_u16(resp.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [(header::CONTENT_TYPE, resp.content_type)],
        resp.body,
    )
        .into_response()
}
