//! Summary statistics over a capture session's graph.

use super::callgraph::CallGraph;
use crate::capture::Trace;

/// Graph and trace statistics
///
/// **Public** - logged after aggregation and printed by `--summary`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphStats {
    /// Number of captured traces
    pub trace_count: usize,

    /// Traces with skipped frames or a broken chain
    pub truncated_traces: usize,

    /// Traces with no frames at all
    pub empty_traces: usize,

    /// Distinct functions
    pub node_count: usize,

    /// Distinct caller -> callee pairs
    pub edge_count: usize,

    /// Edges from a function to itself
    pub self_loops: usize,

    /// Deepest captured stack
    pub max_depth: usize,

    /// Adjacencies observed across all traces, before deduplication
    pub observed_calls: usize,
}

impl GraphStats {
    pub fn summary(&self) -> String {
        format!(
            "Traces: {} ({} truncated, {} empty) | Nodes: {} | Edges: {} ({} observed) | Max depth: {}",
            self.trace_count,
            self.truncated_traces,
            self.empty_traces,
            self.node_count,
            self.edge_count,
            self.observed_calls,
            self.max_depth
        )
    }
}

/// Compute statistics for a graph and the traces it was built from
pub fn calculate_graph_stats(graph: &CallGraph, traces: &[Trace]) -> GraphStats {
    GraphStats {
        trace_count: traces.len(),
        truncated_traces: traces.iter().filter(|t| t.is_truncated()).count(),
        empty_traces: traces.iter().filter(|t| t.is_empty()).count(),
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        self_loops: graph.edges().iter().filter(|e| e.is_self_loop()).count(),
        max_depth: traces.iter().map(Trace::len).max().unwrap_or(0),
        observed_calls: traces.iter().map(|t| t.len().saturating_sub(1)).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::aggregate;
    use crate::normalizer::normalize;

    fn trace(names: &[&str], truncated: bool) -> Trace {
        Trace::new(names.iter().map(|n| normalize(n)).collect(), Vec::new(), truncated)
    }

    #[test]
    fn test_calculate_graph_stats() {
        let traces = vec![
            trace(&["C", "B", "A"], false),
            trace(&["C", "D", "A"], false),
            trace(&["C", "B", "A"], true),
            trace(&[], false),
        ];
        let graph = aggregate(&traces);

        let stats = calculate_graph_stats(&graph, &traces);

        assert_eq!(stats.trace_count, 4);
        assert_eq!(stats.truncated_traces, 1);
        assert_eq!(stats.empty_traces, 1);
        assert_eq!(stats.node_count, 4);
        assert_eq!(stats.edge_count, 4);
        assert_eq!(stats.observed_calls, 6);
        assert_eq!(stats.max_depth, 3);
        assert_eq!(stats.self_loops, 0);
    }

    #[test]
    fn test_stats_empty() {
        let stats = calculate_graph_stats(&CallGraph::new(), &[]);
        assert_eq!(stats, GraphStats::default());
        assert!(stats.summary().starts_with("Traces: 0"));
    }
}
