//! Method-to-operation dispatch

use serde::Serialize;
use tracing::info;

use crate::user::{UserManager, UserResult};

use super::request::{GatewayRequest, Method};
use super::response::GatewayResponse;

/// Fixed body for unsupported methods.
const ERROR_METHOD_NOT_ALLOWED: &str = "method not allowed";

/// Dispatches gateway requests onto the user resource manager.
pub struct Gateway {
    manager: UserManager,
}

impl Gateway {
    /// Create a gateway over the given manager.
    pub fn new(manager: UserManager) -> Self {
        Self { manager }
    }

    /// Route a request to the matching operation and envelope the outcome.
    ///
    /// No failure escapes this boundary as anything but an envelope.
    pub fn dispatch(&self, req: &GatewayRequest) -> GatewayResponse {
        let response = match req.method {
            Method::Get => self.get(req),
            Method::Post => self.post(req),
            Method::Put => self.put(req),
            Method::Delete => self.delete(req),
            Method::Unsupported => GatewayResponse::json(405, &ERROR_METHOD_NOT_ALLOWED),
        };
        info!(
            method = req.method.as_str(),
            status = response.status_code,
            "dispatched"
        );
        response
    }

    /// `GET` with a non-empty `email` parameter reads one record; without
    /// it, the whole collection.
    fn get(&self, req: &GatewayRequest) -> GatewayResponse {
        let email = req.email_param();
        if !email.is_empty() {
            reply(202, self.manager.fetch_one(email))
        } else {
            reply(202, self.manager.fetch_all())
        }
    }

    fn post(&self, req: &GatewayRequest) -> GatewayResponse {
        reply(201, self.manager.create(&req.body))
    }

    fn put(&self, req: &GatewayRequest) -> GatewayResponse {
        reply(200, self.manager.update(&req.body))
    }

    fn delete(&self, req: &GatewayRequest) -> GatewayResponse {
        match self.manager.delete(req.email_param()) {
            Ok(()) => GatewayResponse::empty(200),
            Err(err) => GatewayResponse::failure(400, err.to_string()),
        }
    }
}

/// Envelope an operation outcome: the fixed success code on `Ok`, a 400
/// carrying the error message on `Err`.
fn reply<T: Serialize>(status_code: u16, result: UserResult<T>) -> GatewayResponse {
    match result {
        Ok(payload) => GatewayResponse::json(status_code, &payload),
        Err(err) => GatewayResponse::failure(400, err.to_string()),
    }
}
