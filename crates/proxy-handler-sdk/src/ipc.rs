//! IPC protocol for communicating with the hosting gateway.
//!
//! The gateway delivers one JSON-encoded request per invocation over the
//! handler process's stdin and reads one JSON-encoded response back from its
//! stdout. Each message carries a 4-byte big-endian length prefix.
//!
//! The codec is generic over `io::Read`/`io::Write`; `read_request` and
//! `send_response` bind it to stdin/stdout for handler binaries.

use crate::{HandlerError, Request, Response};
use std::io::{self, Read, Write};

/// Read one length-prefixed request frame from `reader`.
pub fn read_request_from<R: Read>(reader: &mut R) -> Result<Request, HandlerError> {
    let mut len_buf = [0u8; 4];
    reader
        .read_exact(&mut len_buf)
        .map_err(|e| HandlerError::Ipc(format!("Failed to read length prefix: {}", e)))?;
    let len = u32::from_be_bytes(len_buf) as usize;

    let mut payload = vec![0u8; len];
    reader
        .read_exact(&mut payload)
        .map_err(|e| HandlerError::Ipc(format!("Failed to read payload: {}", e)))?;

    Ok(serde_json::from_slice(&payload)?)
}

/// Write one length-prefixed response frame to `writer`.
pub fn write_response_to<W: Write>(
    writer: &mut W,
    response: &Response,
) -> Result<(), HandlerError> {
    let payload = serde_json::to_vec(response)?;

    let len = payload.len() as u32;
    writer
        .write_all(&len.to_be_bytes())
        .map_err(|e| HandlerError::Ipc(format!("Failed to write length: {}", e)))?;
    writer
        .write_all(&payload)
        .map_err(|e| HandlerError::Ipc(format!("Failed to write payload: {}", e)))?;
    writer
        .flush()
        .map_err(|e| HandlerError::Ipc(format!("Failed to flush: {}", e)))?;

    Ok(())
}

/// Read the next request from stdin (sent by the gateway).
pub fn read_request() -> Result<Request, HandlerError> {
    let stdin = io::stdin();
    let mut handle = stdin.lock();
    read_request_from(&mut handle)
}

/// Send a response to stdout (received by the gateway).
pub fn send_response(response: Response) -> Result<(), HandlerError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_response_to(&mut handle, &response)
}
