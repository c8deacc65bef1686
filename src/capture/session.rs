//! Capture session: the sink a debugger collaborator feeds at each stop.
//!
//! One session spans one debugged run. Each breakpoint stop calls
//! [`CaptureSession::capture`] with the frame chain, innermost first. The
//! session normalizes the names, appends a [`Trace`] and folds it into the
//! running [`CallGraph`]. [`CaptureSession::finish`] freezes everything into
//! a [`SessionReport`] that stays queryable after the run ends.
//!
//! `capture` takes `&mut self`, so there is only ever one writer. Callers
//! sharing a session across threads put it behind a mutex; that keeps node
//! ids in first-seen order.

use super::trace::{LocalValue, RawFrame, Trace};
use crate::graph::{
    aggregate, calculate_graph_stats, select_highlight, CallGraph, Edge, GraphNode, GraphStats,
    HighlightSet,
};
use crate::normalizer::{FrameName, Normalizer};
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::{FrameError, GraphError};
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// A live capture session
#[derive(Debug, Clone)]
pub struct CaptureSession {
    normalizer: Normalizer,
    breakpoint: Option<String>,
    started_at: DateTime<Utc>,
    traces: Vec<Trace>,
    graph: CallGraph,
}

impl Default for CaptureSession {
    fn default() -> Self {
        Self::new(Normalizer::default())
    }
}

impl CaptureSession {
    /// Start a new session
    pub fn new(normalizer: Normalizer) -> Self {
        Self {
            normalizer,
            breakpoint: None,
            started_at: Utc::now(),
            traces: Vec::new(),
            graph: CallGraph::new(),
        }
    }

    /// Label the session with the breakpoint location it captures at
    pub fn with_breakpoint(mut self, location: impl Into<String>) -> Self {
        self.breakpoint = Some(location.into());
        self
    }

    /// Record one breakpoint stop
    ///
    /// **Public** - single entry point for debugger collaborators
    ///
    /// # Arguments
    /// * `frames` - Frame reads from innermost to outermost
    ///
    /// # Returns
    /// The capture index of the new trace (0, 1, 2, ... in arrival order)
    ///
    /// Faults never drop the capture:
    /// * a frame without a name (or `FrameError::MalformedFrame`) is skipped
    /// * `FrameError::ChainBroken` stops the walk, keeping what was read
    ///
    /// Either way the trace is marked truncated.
    pub fn capture<I>(&mut self, frames: I) -> usize
    where
        I: IntoIterator<Item = Result<RawFrame, FrameError>>,
    {
        let index = self.traces.len();
        let mut names: Vec<FrameName> = Vec::new();
        let mut locals: Option<Vec<LocalValue>> = None;
        let mut truncated = false;

        for (depth, read) in frames.into_iter().enumerate() {
            match read {
                Ok(frame) => {
                    match frame.function {
                        Some(raw) => {
                            if locals.is_none() {
                                locals = Some(frame.locals);
                            }
                            names.push(self.normalizer.normalize(&raw));
                        }
                        None => {
                            warn!("Capture #{}: frame {} has no function name, skipping", index, depth);
                            truncated = true;
                        }
                    }
                }
                Err(FrameError::MalformedFrame(reason)) => {
                    warn!("Capture #{}: skipping malformed frame {}: {}", index, depth, reason);
                    truncated = true;
                }
                Err(FrameError::ChainBroken(reason)) => {
                    warn!(
                        "Capture #{}: frame chain broken at depth {}, keeping {} frames: {}",
                        index,
                        depth,
                        names.len(),
                        reason
                    );
                    truncated = true;
                    break;
                }
            }
        }

        if names.is_empty() {
            debug!("Capture #{} observed no frames", index);
        }

        let trace = Trace::new(names, locals.unwrap_or_default(), truncated);
        let delta = self.graph.add_trace(&trace);

        debug!(
            "Capture #{}: {} frames, {} new nodes, {} new edges",
            index,
            trace.len(),
            delta.new_nodes,
            delta.new_edges
        );

        self.traces.push(trace);
        index
    }

    /// Record a stop where every frame resolved to a name
    pub fn capture_names<I, S>(&mut self, raw_names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.capture(raw_names.into_iter().map(|name| Ok(RawFrame::named(name))))
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn breakpoint(&self) -> Option<&str> {
        self.breakpoint.as_deref()
    }

    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }

    pub fn trace(&self, index: usize) -> Option<&Trace> {
        self.traces.get(index)
    }

    pub fn len(&self) -> usize {
        self.traces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    /// Graph maintained incrementally as captures arrive
    pub fn graph(&self) -> &CallGraph {
        &self.graph
    }

    /// Current call graph over every capture so far
    pub fn aggregate(&self) -> CallGraph {
        self.graph.clone()
    }

    /// Edges of one captured trace; `None` selects nothing
    pub fn select_highlight(&self, trace_index: Option<usize>) -> Result<HighlightSet, GraphError> {
        select_highlight(&self.graph, &self.traces, trace_index)
    }

    pub fn stats(&self) -> GraphStats {
        calculate_graph_stats(&self.graph, &self.traces)
    }

    /// End the session and freeze its data
    pub fn finish(self) -> SessionReport {
        let stats = self.stats();
        info!("Capture session finished: {}", stats.summary());

        SessionReport {
            version: SCHEMA_VERSION.to_string(),
            breakpoint: self.breakpoint,
            started_at: self.started_at.to_rfc3339(),
            generated_at: Utc::now().to_rfc3339(),
            nodes: self.graph.nodes().collect(),
            edges: self.graph.edges().iter().copied().collect(),
            traces: self.traces,
        }
    }
}

/// Frozen result of a finished session
///
/// **Public** - written to JSON by the graph command and read back by `validate`
///
/// `nodes` and `edges` are a snapshot of the graph at session end. The graph
/// itself is rebuilt from `traces`, in capture order, whenever it's queried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Breakpoint location the traces were captured at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakpoint: Option<String>,

    pub started_at: String,

    pub generated_at: String,

    pub nodes: Vec<GraphNode>,

    pub edges: Vec<Edge>,

    /// Traces in capture order
    pub traces: Vec<Trace>,
}

impl SessionReport {
    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }

    /// Rebuild the call graph from the frozen traces
    pub fn aggregate(&self) -> CallGraph {
        aggregate(&self.traces)
    }

    pub fn select_highlight(&self, trace_index: Option<usize>) -> Result<HighlightSet, GraphError> {
        select_highlight(&self.aggregate(), &self.traces, trace_index)
    }

    pub fn stats(&self) -> GraphStats {
        calculate_graph_stats(&self.aggregate(), &self.traces)
    }

    /// Check that the stored node/edge snapshot matches the traces
    pub fn is_consistent(&self) -> bool {
        let graph = self.aggregate();
        let nodes: Vec<GraphNode> = graph.nodes().collect();
        let edges: Vec<Edge> = graph.edges().iter().copied().collect();

        nodes == self.nodes && edges == self.edges
    }
}
