//! Deduplicated call graph built from captured traces.
//!
//! Nodes are distinct normalized frame names, numbered in first-seen order.
//! Edges are distinct `caller -> callee` adjacencies. Both are sets: seeing
//! the same adjacency twice, in one trace or across many, yields one edge.
//!
//! Example: traces `C <- B <- A` and `C <- D <- A` (innermost first: `[C, B, A]`
//! and `[C, D, A]`) give nodes `{C, B, A, D}` and edges
//! `{A->B, B->C, A->D, D->C}`.

use crate::capture::Trace;
use crate::normalizer::FrameName;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Stable node identifier, assigned on first appearance of a frame name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed `caller -> callee` edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    pub caller: NodeId,
    pub callee: NodeId,
}

impl Edge {
    pub fn new(caller: NodeId, callee: NodeId) -> Self {
        Self { caller, callee }
    }

    pub fn is_self_loop(&self) -> bool {
        self.caller == self.callee
    }
}

/// Node as exported to render sinks and reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: NodeId,
    pub name: FrameName,
}

/// What a single trace added to the graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphDelta {
    pub new_nodes: usize,
    pub new_edges: usize,
}

/// The aggregated call graph
///
/// Node ids index into an append-only arena, so an id keeps naming the same
/// frame for as long as the graph lives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallGraph {
    names: Vec<FrameName>,
    ids: HashMap<FrameName, NodeId>,
    edges: BTreeSet<Edge>,
}

impl CallGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one trace into the graph
    ///
    /// **Public** - incremental path used by the capture session
    ///
    /// Frames are interned innermost-first, then every adjacent pair is
    /// added as an edge from the outer frame to the inner one.
    pub fn add_trace(&mut self, trace: &Trace) -> GraphDelta {
        let nodes_before = self.names.len();
        let edges_before = self.edges.len();

        for frame in trace.frames() {
            self.intern(frame);
        }

        for (caller, callee) in trace.call_pairs() {
            let edge = Edge::new(self.intern(caller), self.intern(callee));
            self.edges.insert(edge);
        }

        GraphDelta {
            new_nodes: self.names.len() - nodes_before,
            new_edges: self.edges.len() - edges_before,
        }
    }

    fn intern(&mut self, name: &FrameName) -> NodeId {
        if let Some(id) = self.ids.get(name) {
            return *id;
        }

        let id = NodeId(self.names.len());
        self.names.push(name.clone());
        self.ids.insert(name.clone(), id);
        id
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.ids.get(name).copied()
    }

    pub fn name(&self, id: NodeId) -> Option<&FrameName> {
        self.names.get(id.0)
    }

    /// Nodes in id order
    pub fn nodes(&self) -> impl Iterator<Item = GraphNode> + '_ {
        self.names.iter().enumerate().map(|(i, name)| GraphNode {
            id: NodeId(i),
            name: name.clone(),
        })
    }

    /// Edges, sorted by `(caller, callee)`
    pub fn edges(&self) -> &BTreeSet<Edge> {
        &self.edges
    }

    pub fn contains_edge(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Distinct node names, independent of id assignment
    pub fn node_names(&self) -> BTreeSet<FrameName> {
        self.names.iter().cloned().collect()
    }

    /// Edges as `(caller, callee)` name pairs, independent of id assignment
    ///
    /// Two graphs built from the same traces in any order compare equal here.
    pub fn edge_names(&self) -> BTreeSet<(FrameName, FrameName)> {
        self.edges
            .iter()
            .map(|e| (self.names[e.caller.0].clone(), self.names[e.callee.0].clone()))
            .collect()
    }

    /// Edges of the graph walked by one trace
    ///
    /// Pairs whose frames aren't in the graph are skipped.
    pub fn trace_edges(&self, trace: &Trace) -> BTreeSet<Edge> {
        trace
            .call_pairs()
            .filter_map(|(caller, callee)| {
                let edge = Edge::new(
                    self.node_id(caller.as_str())?,
                    self.node_id(callee.as_str())?,
                );
                self.contains_edge(&edge).then_some(edge)
            })
            .collect()
    }
}

/// Aggregate a batch of traces into a fresh graph
///
/// **Public** - batch counterpart of [`CallGraph::add_trace`]
///
/// Traces are visited in the given order, so passing them in capture order
/// reproduces the ids a live session assigned.
pub fn aggregate(traces: &[Trace]) -> CallGraph {
    let mut graph = CallGraph::new();

    for trace in traces {
        graph.add_trace(trace);
    }

    debug!(
        "Aggregated {} traces into {} nodes and {} edges",
        traces.len(),
        graph.node_count(),
        graph.edge_count()
    );

    graph
}
