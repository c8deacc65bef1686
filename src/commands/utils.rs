use crate::normalizer::{Normalizer, NormalizerConfig};
use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a session report JSON file
///
/// Fails when the stored node/edge snapshot disagrees with the traces.
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating session report: {}", file_path.display());

    let report = read_report(&file_path)?;

    if !report.is_consistent() {
        anyhow::bail!("Stored graph does not match the captured traces");
    }

    let stats = report.stats();

    println!("✓ Valid session report");
    println!("  Version: {}", report.version);
    if let Some(breakpoint) = &report.breakpoint {
        println!("  Breakpoint: {}", breakpoint);
    }
    println!("  Captures: {} ({} truncated)", stats.trace_count, stats.truncated_traces);
    println!("  Functions: {}", stats.node_count);
    println!("  Call edges: {}", stats.edge_count);
    println!("  Generated: {}", report.generated_at);

    Ok(())
}

/// Print the normalized form of each raw name
pub fn normalize_names(names: &[String], config: NormalizerConfig) -> Vec<String> {
    let normalizer = Normalizer::new(config);
    names
        .iter()
        .map(|raw| normalizer.normalize(raw).to_string())
        .collect()
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Stack Trace Studio Session Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  breakpoint: string?      - Breakpoint location");
        println!("  started_at: string       - RFC 3339 session start");
        println!("  generated_at: string     - RFC 3339 session end");
        println!("  nodes: array             - Distinct functions");
        println!("    id: number             - Stable node id (first-seen order)");
        println!("    name: string           - Normalized function name");
        println!("  edges: array             - Distinct caller -> callee pairs");
        println!("    caller: number         - Node id of the caller");
        println!("    callee: number         - Node id of the callee");
        println!("  traces: array            - Captures in arrival order");
        println!("    frames: string[]       - Normalized frames, innermost first");
        println!("    locals: object[]?      - {{name, value}} at the breakpoint");
        println!("    truncated: bool        - Frames were skipped or unwinding stopped");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Stack Trace Studio v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Aggregates breakpoint stack captures into a deduplicated call graph.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_names() {
        let names = vec![
            "arrow::engine::Foo(int)".to_string(),
            "CheckNotYetImplementedTestCase<Bar,Baz>(x)".to_string(),
        ];

        assert_eq!(
            normalize_names(&names, NormalizerConfig::default()),
            vec!["Foo".to_string(), "CheckNotYetImplementedTestCase".to_string()]
        );
    }
}
