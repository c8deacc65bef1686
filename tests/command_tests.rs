use stack_trace_studio::commands::{execute_graph, validate_args, validate_report_file, GraphArgs};
use stack_trace_studio::normalizer::NormalizerConfig;
use stack_trace_studio::output::read_report;
use stack_trace_studio::render::{DotConfig, RankDir, TableConfig};

const FEED: &str = r#"{
  "breakpoint": "CheckNotYetImplemented",
  "captures": [
    ["CheckNotYetImplemented()", "CheckNotYetImplementedTestCase<Int8Type>(x)", "main"],
    ["CheckNotYetImplemented()", "CheckNotYetImplementedTestCase<FloatType>(x)", "main"],
    { "frames": ["CheckNotYetImplemented()", "arrow::TestOther()"], "truncated": true }
  ]
}"#;

fn write_feed(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("captures.json");
    std::fs::write(&path, FEED).unwrap();
    path
}

#[test]
fn test_execute_graph_writes_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_feed(&dir);
    let json_path = dir.path().join("out/session.json");
    let dot_path = dir.path().join("out/callgraph.dot");

    let args = GraphArgs {
        input,
        output_json: Some(json_path.clone()),
        output_dot: Some(dot_path.clone()),
        highlight: Some(2),
        ..Default::default()
    };
    validate_args(&args).unwrap();

    let report = execute_graph(args).unwrap();

    // both test-case instantiations collapse into one family node
    assert_eq!(report.nodes.len(), 4);
    assert_eq!(report.edges.len(), 3);
    assert_eq!(report.breakpoint.as_deref(), Some("CheckNotYetImplemented"));

    let loaded = read_report(&json_path).unwrap();
    assert_eq!(loaded.traces.len(), 3);
    assert!(loaded.traces[2].is_truncated());

    let dot = std::fs::read_to_string(&dot_path).unwrap();
    assert!(dot.starts_with("digraph \"CheckNotYetImplemented\" {"));
    assert_eq!(dot.matches("color=\"red\"").count(), 1);

    validate_report_file(json_path).unwrap();
}

#[test]
fn test_execute_graph_highlight_out_of_range() {
    let dir = tempfile::tempdir().unwrap();
    let args = GraphArgs {
        input: write_feed(&dir),
        output_json: None,
        output_dot: Some(dir.path().join("callgraph.dot")),
        highlight: Some(99),
        ..Default::default()
    };

    assert!(execute_graph(args).is_err());
    assert!(!dir.path().join("callgraph.dot").exists());
}

#[test]
fn test_execute_graph_without_family_rules() {
    let dir = tempfile::tempdir().unwrap();
    let args = GraphArgs {
        input: write_feed(&dir),
        output_json: None,
        output_dot: None,
        table: Some(TableConfig::default().with_label_depth(1)),
        normalizer: NormalizerConfig::empty(),
        ..Default::default()
    };

    let report = execute_graph(args).unwrap();

    // no family collapse: each instantiation keeps its own node
    assert_eq!(report.nodes.len(), 5);
}

#[test]
fn test_validate_report_file_rejects_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bogus.json");
    std::fs::write(&path, "[]").unwrap();

    assert!(validate_report_file(path).is_err());
}

#[test]
fn test_execute_graph_keeps_explicit_default_title() {
    let dir = tempfile::tempdir().unwrap();
    let dot_path = dir.path().join("callgraph.dot");
    let args = GraphArgs {
        input: write_feed(&dir),
        output_json: None,
        output_dot: Some(dot_path.clone()),
        dot_config: DotConfig::new()
            .with_graph_name("breakpoint_location")
            .with_rankdir(RankDir::LeftRight),
        ..Default::default()
    };
    validate_args(&args).unwrap();

    execute_graph(args).unwrap();

    let dot = std::fs::read_to_string(&dot_path).unwrap();
    assert!(dot.starts_with("digraph \"breakpoint_location\" {"));
    assert!(dot.contains("rankdir=LR;"));
}
