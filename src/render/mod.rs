//! Render sinks for the aggregated graph and captured traces.
//!
//! - Graphviz DOT (layout and image export are left to Graphviz)
//! - Plain-text trace table

pub mod dot;
pub mod table;

// Re-export main types
pub use dot::{render_dot, DotConfig, RankDir};
pub use table::{render_trace_table, TableConfig};
