//! Gateway request shapes

use std::collections::HashMap;

/// Inbound method token, as a closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    /// Any other token; always answered with 405.
    Unsupported,
}

impl Method {
    /// Parse an inbound method token. Tokens are matched exactly.
    pub fn from_token(token: &str) -> Self {
        match token {
            "GET" => Method::Get,
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "DELETE" => Method::Delete,
            _ => Method::Unsupported,
        }
    }

    /// The canonical token for this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Unsupported => "UNSUPPORTED",
        }
    }
}

/// A gateway-shaped request: method, query parameters, raw body.
#[derive(Debug, Clone)]
pub struct GatewayRequest {
    pub method: Method,
    pub query: HashMap<String, String>,
    pub body: String,
}

impl GatewayRequest {
    /// Create an empty request for the given method.
    pub fn new(method: Method) -> Self {
        Self {
            method,
            query: HashMap::new(),
            body: String::new(),
        }
    }

    /// Attach a query parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Attach a body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// The `email` query parameter, empty when absent.
    pub fn email_param(&self) -> &str {
        self.query.get("email").map(String::as_str).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_tokens() {
        assert_eq!(Method::from_token("GET"), Method::Get);
        assert_eq!(Method::from_token("POST"), Method::Post);
        assert_eq!(Method::from_token("PUT"), Method::Put);
        assert_eq!(Method::from_token("DELETE"), Method::Delete);
        assert_eq!(Method::from_token("PATCH"), Method::Unsupported);
        assert_eq!(Method::from_token("get"), Method::Unsupported);
    }

    #[test]
    fn test_email_param_defaults_to_empty() {
        let req = GatewayRequest::new(Method::Get);
        assert_eq!(req.email_param(), "");

        let req = req.with_query("email", "a@b.co");
        assert_eq!(req.email_param(), "a@b.co");
    }
}
