//! Configuration and constants for the CLI.

/// Current session report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Namespace qualifiers stripped from every frame name by default.
// Removal happens in this order, each as a replace-all.
pub const DEFAULT_STRIP_PREFIXES: &[&str] = &["arrow::", "engine::", "std::"];

/// Marker the debugger reports for symbols in an anonymous namespace
pub const ANONYMOUS_NAMESPACE: &str = "(anonymous namespace)::";

// Parameterized test-case families collapsed into a single node
pub const DEFAULT_FAMILIES: &[&str] = &["CheckNotYetImplementedTestCase"];

// Graphviz defaults
pub const DEFAULT_GRAPH_NAME: &str = "breakpoint_location";
pub const HIGHLIGHT_EDGE_COLOR: &str = "red";
pub const DEFAULT_EDGE_COLOR: &str = "black";

// Field names accepted for the list of captures in a feed file
pub const CAPTURE_FIELD_NAMES: &[&str] = &["captures", "events", "stacks"];
