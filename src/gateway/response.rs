//! Response envelope
//!
//! The status-coded, header-bearing wrapper returned to the invoking
//! gateway. Bodies are always JSON; failures carry a single-field
//! `{"error": ...}` object.

use serde::Serialize;

/// Error body shape for failure envelopes.
#[derive(Debug, Clone, Serialize)]
struct ErrorBody {
    error: String,
}

/// A status-coded response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayResponse {
    pub status_code: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl GatewayResponse {
    /// Wrap a serializable payload in a success envelope.
    pub fn json<T: Serialize>(status_code: u16, payload: &T) -> Self {
        let body =
            serde_json::to_string(payload).expect("response payload serialization cannot fail");
        Self {
            status_code,
            content_type: "application/json",
            body,
        }
    }

    /// An envelope with no body.
    pub fn empty(status_code: u16) -> Self {
        Self {
            status_code,
            content_type: "application/json",
            body: String::new(),
        }
    }

    /// Wrap a failure message in an error envelope.
    pub fn failure(status_code: u16, message: impl Into<String>) -> Self {
        Self::json(
            status_code,
            &ErrorBody {
                error: message.into(),
            },
        )
    }

    /// True for anything below the client-error range.
    pub fn is_success(&self) -> bool {
        self.status_code < 400
    }
}
