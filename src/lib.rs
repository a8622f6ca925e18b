//! rolodex - a user record service backed by a key-value store
//!
//! One resource type (a user, keyed by email address), four operations
//! behind an HTTP-style gateway. The `gateway`, `user`, and `store` modules
//! hold the decision logic; everything else is wiring.

pub mod cli;
pub mod config;
pub mod gateway;
pub mod http_server;
pub mod store;
pub mod user;
