//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Faults reported while walking a frame chain at a breakpoint stop.
///
/// Neither variant aborts a capture: the sink keeps whatever it has read
/// and marks the trace truncated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// The frame exists but cannot report a function name
    #[error("Malformed frame: {0}")]
    MalformedFrame(String),

    /// Unwinding cannot continue past this point
    #[error("Frame chain broken: {0}")]
    ChainBroken(String),
}

/// Errors surfaced by call graph queries
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Invalid trace index {index} (session has {trace_count} traces)")]
    InvalidTraceIndex { index: usize, trace_count: usize },
}

/// Errors that can occur while parsing a capture feed
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid capture feed format: {0}")]
    InvalidFormat(String),

    #[error("Failed to read capture feed: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
