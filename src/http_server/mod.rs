//! # HTTP Server
//!
//! Axum glue binding the gateway dispatch to a real socket. This layer has
//! no decision logic of its own: it converts inbound HTTP requests into
//! gateway-shaped requests, hands them to [`crate::gateway::Gateway`], and
//! converts the envelopes back.
//!
//! # Endpoints
//!
//! - `/users` - the resource endpoint, any method
//! - `/health` - liveness check

mod server;

pub use server::HttpServer;
