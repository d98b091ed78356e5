//! Echo handler worker.
//!
//! Reads proxy requests from the gateway over stdin, hands each one to the
//! echo handler, and writes the response back over stdout. Stdout belongs to
//! the response channel, so all logging goes to stderr.

mod handler;

use anyhow::Result;
use proxy_handler_sdk::ipc::{read_request, send_response};
use proxy_handler_sdk::DiagnosticSink;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::handler::EchoHandler;

/// Production sink: forwards handler diagnostics to the tracing pipeline.
struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, message: &str) {
        tracing::info!("{}", message);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let handler = EchoHandler::new(TracingSink);

    loop {
        match read_request() {
            Ok(req) => {
                let response = match handler.handle(req) {
                    Ok(response) => response,
                    Err(err) => err.to_response(),
                };
                if let Err(e) = send_response(response) {
                    tracing::error!("Failed to send response: {}", e);
                }
            }
            Err(e) => {
                // The gateway closed the request pipe; shut the worker down.
                tracing::error!("Failed to read request: {}", e);
                break;
            }
        }
    }

    Ok(())
}
