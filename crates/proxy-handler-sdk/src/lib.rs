//! Proxy Handler SDK - types and utilities for writing gateway handlers
//!
//! This crate provides the request/response data model, the handler error
//! type, the diagnostic-sink abstraction, and the stdio wire codec that
//! handlers use to interact with the hosting gateway.

pub mod error;
pub mod ipc;
pub mod request;
pub mod response;
pub mod sink;

pub mod prelude {
    //! Common imports for gateway handlers
    pub use crate::error::HandlerError;
    pub use crate::ipc::{read_request, send_response};
    pub use crate::request::Request;
    pub use crate::response::Response;
    pub use crate::sink::{DiagnosticSink, NullSink};
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::{json, Value as JsonValue};
}

// Re-export key types at crate root
pub use error::HandlerError;
pub use request::Request;
pub use response::Response;
pub use sink::DiagnosticSink;
