//! Proxy request representation for handlers

use crate::error::HandlerError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An incoming proxy request, as delivered by the gateway.
///
/// Every field carries a serde default so that sparse events (a bare `{}`,
/// or a path with no body) deserialize without failure. Handlers read the
/// fields they care about and ignore the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    /// HTTP method (GET, POST, PUT, DELETE, etc.)
    #[serde(default)]
    pub method: String,

    /// Request path (e.g., "/items/123")
    #[serde(default)]
    pub path: String,

    /// Query parameters
    #[serde(default)]
    pub query: HashMap<String, String>,

    /// HTTP headers
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Request body. `None` when the gateway omitted the field; base64 text
    /// when `is_base64_encoded` is set.
    #[serde(default)]
    pub body: Option<String>,

    /// Whether the gateway base64-encoded the body for transport.
    #[serde(default)]
    pub is_base64_encoded: bool,

    /// Request ID for tracing
    #[serde(default)]
    pub request_id: String,
}

impl Request {
    /// Get the raw body as bytes, base64-decoding it when the gateway
    /// flagged it as encoded. An absent body yields an empty vector.
    pub fn decoded_body(&self) -> Result<Vec<u8>, HandlerError> {
        use base64::Engine;

        match &self.body {
            Some(body) if self.is_base64_encoded => {
                Ok(base64::engine::general_purpose::STANDARD.decode(body)?)
            }
            Some(body) => Ok(body.as_bytes().to_vec()),
            None => Ok(Vec::new()),
        }
    }
}

impl Default for Request {
    fn default() -> Self {
        Self {
            method: "GET".to_string(),
            path: "/".to_string(),
            query: HashMap::new(),
            headers: HashMap::new(),
            body: None,
            is_base64_encoded: false,
            request_id: String::new(),
        }
    }
}
