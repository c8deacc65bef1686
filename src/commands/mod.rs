//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod graph;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use graph::{execute_graph, validate_args};
pub use models::GraphArgs;
pub use utils::{display_schema, display_version, normalize_names, validate_report_file};
