//! Diagnostic sink abstraction.
//!
//! Handlers receive their log destination as an injected capability rather
//! than writing to a process-global logger. The composition root (the handler
//! binary's `main`) decides which sink backs the handler and owns the sink's
//! lifecycle, so handlers stay testable without capturing global output
//! streams.

/// A destination for unstructured handler diagnostics.
pub trait DiagnosticSink: Send + Sync {
    /// Emit one line of diagnostic text.
    fn emit(&self, message: &str);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn emit(&self, message: &str) {
        (**self).emit(message);
    }
}

/// Sink that discards everything. Useful in tests that don't assert on logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _message: &str) {}
}
