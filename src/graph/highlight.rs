//! Highlight selection for a single captured trace.

use super::callgraph::{CallGraph, Edge};
use crate::capture::Trace;
use crate::utils::error::GraphError;
use log::debug;
use std::collections::BTreeSet;

/// Edges a renderer should draw as distinguished
pub type HighlightSet = BTreeSet<Edge>;

/// Select the edges walked by one trace
///
/// **Public** - computed per request, never cached
///
/// # Arguments
/// * `graph` - Current aggregated graph
/// * `traces` - All captured traces, in capture order
/// * `trace_index` - Capture index to highlight, or `None` for no highlight
///
/// # Errors
/// * `GraphError::InvalidTraceIndex` - no trace was captured under that index
pub fn select_highlight(
    graph: &CallGraph,
    traces: &[Trace],
    trace_index: Option<usize>,
) -> Result<HighlightSet, GraphError> {
    let Some(index) = trace_index else {
        return Ok(HighlightSet::new());
    };

    let trace = traces.get(index).ok_or(GraphError::InvalidTraceIndex {
        index,
        trace_count: traces.len(),
    })?;

    let edges = graph.trace_edges(trace);
    debug!("Trace #{} highlights {} edges", index, edges.len());

    Ok(edges)
}
