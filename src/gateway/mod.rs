//! Request Gateway
//!
//! Maps an inbound method token plus query parameters and body to the
//! matching resource operation, and wraps the outcome in a status-coded
//! response envelope. Dispatch is a single match over a closed method
//! enumeration; unsupported methods are answered directly and never reach
//! the resource layer.
//!
//! Status codes are fixed per operation:
//!
//! | Operation        | Success |
//! |------------------|---------|
//! | fetch one / all  | 202     |
//! | create           | 201     |
//! | update           | 200     |
//! | delete           | 200 (empty body) |
//!
//! Any resource failure becomes a 400 envelope carrying the error message;
//! unsupported methods always yield 405.

mod handler;
mod request;
mod response;

pub use handler::Gateway;
pub use request::{GatewayRequest, Method};
pub use response::GatewayResponse;
