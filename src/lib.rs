//! Stack Trace Studio
//!
//! Aggregates stack traces captured at a debugger breakpoint into a
//! deduplicated call graph: one node per distinct function, one edge per
//! distinct caller -> callee pair, with optional highlighting of the edges
//! that belong to a single capture.
//!
//! This crate provides the core implementation for the
//! `stack-trace` CLI tool.
//!
//! ## Getting Started
//!
//! ```
//! use stack_trace_studio::capture::CaptureSession;
//!
//! let mut session = CaptureSession::default();
//! session.capture_names(["arrow::Foo(int)", "Bar()", "main"]);
//! session.capture_names(["arrow::Foo(int)", "Baz()", "main"]);
//!
//! let graph = session.aggregate();
//! assert_eq!(graph.node_count(), 4);
//! assert_eq!(graph.edge_count(), 4);
//!
//! let highlight = session.select_highlight(Some(1)).unwrap();
//! assert_eq!(highlight.len(), 2);
//! ```

pub mod capture;
pub mod commands;
pub mod graph;
pub mod normalizer;
pub mod output;
pub mod parser;
pub mod render;
pub mod utils;

pub use capture::{CaptureSession, SessionReport};
pub use graph::{aggregate, select_highlight, CallGraph};
pub use normalizer::{normalize, FrameName, Normalizer, NormalizerConfig};
