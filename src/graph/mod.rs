//! Aggregation of captured traces into a call graph.
//!
//! This module turns normalized traces into:
//! - A deduplicated caller -> callee graph with stable node ids
//! - Per-trace highlight sets for render sinks
//! - Summary statistics

pub mod callgraph;
pub mod highlight;
pub mod stats;

// Re-export main types and functions
pub use callgraph::{aggregate, CallGraph, Edge, GraphDelta, GraphNode, NodeId};
pub use highlight::{select_highlight, HighlightSet};
pub use stats::{calculate_graph_stats, GraphStats};
