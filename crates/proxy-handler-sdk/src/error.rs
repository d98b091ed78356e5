//! Error types for gateway handlers

use thiserror::Error;

/// Errors a handler invocation can surface to the gateway.
///
/// These are transport-level failures owned by the SDK. A handler whose logic
/// never fails still returns `Result<Response, HandlerError>` so the gateway
/// contract stays two-outcome.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("IPC error: {0}")]
    Ipc(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Encoding error: {0}")]
    Encoding(#[from] base64::DecodeError),
}

impl HandlerError {
    /// Convert the error to an HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::Encoding(_) => 400,
            HandlerError::Ipc(_) | HandlerError::Serialization(_) => 500,
        }
    }

    /// Convert to a Response
    pub fn to_response(&self) -> crate::Response {
        crate::Response::new(self.status_code())
            .with_header("Content-Type", "application/json")
            .with_body(serde_json::json!({ "error": self.to_string() }).to_string())
    }
}
