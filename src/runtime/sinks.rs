// member-gate/src/runtime/sinks.rs
// ============================================================================
// Module: Diagnostics Sinks
// Description: Ready-made DiagnosticsSink implementations.
// Purpose: Capture, forward, or discard advisories without custom plumbing.
// Dependencies: serde_json
// ============================================================================

//! Ready-made [`DiagnosticsSink`] implementations.
//!
//! ## Overview
//! Four sinks cover the common embedding shapes: [`NullSink`] discards,
//! [`RecordingSink`] buffers for inspection, [`WriterSink`] appends JSON
//! lines to any writer, and [`CallbackSink`] forwards to a closure. All of
//! them honor the fire-and-forget sink contract: emission never fails the
//! read path.

use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

use crate::interfaces::Diagnostic;
use crate::interfaces::DiagnosticsSink;
use crate::interfaces::Severity;

/// Sink that discards every diagnostic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn emit(&self, _severity: Severity, _message: &str) {}
}

/// Sink that buffers diagnostics in memory for later inspection.
///
/// Clones share the same buffer, so a handle kept by the caller observes
/// everything the gate emits.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    /// Shared buffer of emitted diagnostics.
    records: Arc<Mutex<Vec<Diagnostic>>>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded diagnostics in emission order.
    #[must_use]
    pub fn records(&self) -> Vec<Diagnostic> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Removes and returns all recorded diagnostics in emission order.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.records.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl DiagnosticsSink for RecordingSink {
    fn emit(&self, severity: Severity, message: &str) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Diagnostic::new(severity, message));
    }
}

/// Sink that appends each diagnostic as one JSON line to a writer.
///
/// Serialization and write failures are dropped: diagnostics are advisory
/// and must never fail the read that produced them.
#[derive(Debug)]
pub struct WriterSink<W> {
    /// Writer guarded for exclusive append access.
    writer: Mutex<W>,
}

impl<W> WriterSink<W>
where
    W: Write,
{
    /// Creates a sink around the given writer.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the sink and returns the underlying writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W> DiagnosticsSink for WriterSink<W>
where
    W: Write,
{
    fn emit(&self, severity: Severity, message: &str) {
        let Ok(line) = serde_json::to_string(&Diagnostic::new(severity, message)) else {
            return;
        };
        let mut guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(guard, "{line}");
    }
}

/// Sink that forwards each diagnostic to a caller-supplied closure.
pub struct CallbackSink<F>
where
    F: Fn(Severity, &str),
{
    /// Closure invoked per diagnostic.
    callback: F,
}

impl<F> CallbackSink<F>
where
    F: Fn(Severity, &str),
{
    /// Creates a sink around the given closure.
    #[must_use]
    pub const fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> DiagnosticsSink for CallbackSink<F>
where
    F: Fn(Severity, &str),
{
    fn emit(&self, severity: Severity, message: &str) {
        (self.callback)(severity, message);
    }
}
