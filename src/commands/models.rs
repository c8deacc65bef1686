use crate::normalizer::NormalizerConfig;
use crate::render::{DotConfig, TableConfig};
use std::path::PathBuf;

/// Arguments for the graph command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct GraphArgs {
    /// Capture feed recorded by the debugger script
    pub input: PathBuf,

    /// Output path for the JSON session report (optional)
    pub output_json: Option<PathBuf>,

    /// Output path for the DOT graph (optional)
    pub output_dot: Option<PathBuf>,

    /// Capture index whose edges are highlighted
    pub highlight: Option<usize>,

    /// Frame name normalization rules
    pub normalizer: NormalizerConfig,

    /// DOT rendering options
    pub dot_config: DotConfig,

    /// Print the trace table to stdout (`None` = don't print)
    pub table: Option<TableConfig>,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for GraphArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("captures.json"),
            output_json: Some(PathBuf::from("session.json")),
            output_dot: Some(PathBuf::from("callgraph.dot")),
            highlight: None,
            normalizer: NormalizerConfig::default(),
            dot_config: DotConfig::default(),
            table: None,
            print_summary: false,
        }
    }
}
