//! Graph command implementation.
//!
//! The graph command:
//! 1. Reads a recorded capture feed
//! 2. Replays it into a capture session (normalizing frame names)
//! 3. Selects the highlighted trace, if any
//! 4. Renders the call graph as DOT
//! 5. Writes output files

use super::models::GraphArgs;
use crate::capture::{CaptureSession, SessionReport};
use crate::normalizer::Normalizer;
use crate::output::{write_dot, write_report};
use crate::parser::read_capture_feed;
use crate::render::{render_dot, render_trace_table};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the graph command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The finished session report
///
/// # Errors
/// * Unreadable or malformed capture feed
/// * Highlight index past the last capture
/// * File write errors
pub fn execute_graph(args: GraphArgs) -> Result<SessionReport> {
    let start_time = Instant::now();

    info!("Building call graph from: {}", args.input.display());

    // Step 1: Read feed
    info!("Step 1/5: Reading capture feed...");
    let feed = read_capture_feed(&args.input)
        .with_context(|| format!("Failed to read capture feed {}", args.input.display()))?;

    // Step 2: Replay captures
    info!("Step 2/5: Replaying {} captures...", feed.len());
    args.normalizer.validate();
    let mut session = CaptureSession::new(Normalizer::new(args.normalizer.clone()));
    if let Some(breakpoint) = feed.breakpoint.clone() {
        session = session.with_breakpoint(breakpoint);
    }
    feed.replay_into(&mut session);

    let stats = session.stats();
    info!("Call graph: {}", stats.summary());
    if stats.truncated_traces > 0 {
        warn!("{} captures were truncated", stats.truncated_traces);
    }

    // Step 3: Highlight
    info!("Step 3/5: Selecting highlighted trace...");
    let highlight = session
        .select_highlight(args.highlight)
        .context("Failed to select highlighted trace")?;
    debug!("Highlighting {} edges", highlight.len());

    // Step 4: Render DOT
    let dot_content = if args.output_dot.is_some() {
        info!("Step 4/5: Rendering DOT graph...");
        let mut config = args.dot_config.clone();
        if config.graph_name.is_none() {
            if let Some(breakpoint) = session.breakpoint() {
                config = config.with_graph_name(breakpoint);
            }
        }
        Some(render_dot(session.graph(), &highlight, Some(&config)))
    } else {
        info!("Step 4/5: Skipping DOT rendering (not requested)");
        None
    };

    if let Some(table_config) = &args.table {
        println!("{}", render_trace_table(session.traces(), table_config));
    }

    if args.print_summary {
        print_summary(&session);
    }

    // Step 5: Write outputs
    info!("Step 5/5: Writing output files...");
    let report = session.finish();

    if let Some(json_path) = &args.output_json {
        write_report(&report, json_path).context("Failed to write session report")?;
        info!("✓ Session report written to: {}", json_path.display());
    }

    if let (Some(dot), Some(dot_path)) = (dot_content, &args.output_dot) {
        write_dot(&dot, dot_path).context("Failed to write DOT graph")?;
        info!("✓ DOT graph written to: {}", dot_path.display());
    }

    let elapsed = start_time.elapsed();
    info!("Graph completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

fn print_summary(session: &CaptureSession) {
    let stats = session.stats();
    let graph = session.graph();

    println!("\n{}", "=".repeat(80));
    println!("CALL GRAPH SUMMARY");
    println!("{}", "=".repeat(80));
    if let Some(breakpoint) = session.breakpoint() {
        println!("Breakpoint:  {}", breakpoint);
    }
    println!("Captures:    {} ({} truncated)", stats.trace_count, stats.truncated_traces);
    println!("Functions:   {}", stats.node_count);
    println!("Call edges:  {} distinct / {} observed", stats.edge_count, stats.observed_calls);
    println!("Max depth:   {}", stats.max_depth);
    if stats.self_loops > 0 {
        println!("Recursive:   {}", stats.self_loops);
    }
    println!();
    for node in graph.nodes() {
        println!("  {:>4}  {}", node.id, node.name);
    }
    println!("{}", "=".repeat(80));
}

/// Validate graph arguments
///
/// **Public** - can be called before execute_graph for early validation
pub fn validate_args(args: &GraphArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if !args.input.exists() {
        anyhow::bail!("Capture feed not found: {}", args.input.display());
    }

    if args.output_json.is_none() && args.output_dot.is_none() && args.table.is_none() && !args.print_summary {
        anyhow::bail!("Nothing to do: request --output, --dot, --table or --summary");
    }

    if args.highlight.is_some() && args.output_dot.is_none() {
        anyhow::bail!("--highlight only affects DOT output; pass --dot as well");
    }

    if args.dot_config.graph_name.as_deref() == Some("") {
        anyhow::bail!("Graph title cannot be empty");
    }

    Ok(())
}
