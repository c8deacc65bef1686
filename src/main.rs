//! Stack Trace Studio CLI
//!
//! Turns stack traces captured at a debugger breakpoint into a
//! deduplicated call graph (JSON report + Graphviz DOT).

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use stack_trace_studio::commands::{
    display_schema, display_version, execute_graph, normalize_names, validate_args,
    validate_report_file, GraphArgs,
};
use stack_trace_studio::normalizer::NormalizerConfig;
use stack_trace_studio::render::{DotConfig, RankDir, TableConfig};

/// Stack Trace Studio - call graphs from breakpoint stack captures
#[derive(Parser, Debug)]
#[command(name = "stack-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Frame name normalization flags shared by several commands
#[derive(Args, Debug, Clone)]
struct NormalizeFlags {
    /// Extra namespace prefix to strip (repeatable)
    #[arg(long = "strip-prefix", value_name = "PREFIX")]
    strip_prefixes: Vec<String>,

    /// Collapse names starting with this prefix into one node (repeatable)
    #[arg(long = "family", value_name = "PREFIX")]
    families: Vec<String>,

    /// Don't strip the built-in arrow::/engine::/std:: prefixes
    #[arg(long)]
    no_default_prefixes: bool,
}

impl NormalizeFlags {
    fn into_config(self) -> NormalizerConfig {
        let mut config = NormalizerConfig::default();

        if self.no_default_prefixes {
            config = config.without_default_prefixes();
        }
        for prefix in self.strip_prefixes {
            config = config.with_strip_prefix(prefix);
        }
        for family in self.families {
            config = config.with_family(family);
        }

        config
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a call graph from a recorded capture feed
    Graph {
        /// Capture feed JSON written by the debugger script
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the JSON session report
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output path for the Graphviz DOT graph
        #[arg(short, long)]
        dot: Option<PathBuf>,

        /// Capture index whose edges are drawn highlighted
        #[arg(long)]
        highlight: Option<usize>,

        /// Graph title (defaults to the breakpoint location)
        #[arg(long)]
        title: Option<String>,

        /// Graphviz rank direction (TB, BT, LR, RL)
        #[arg(long)]
        rankdir: Option<RankDir>,

        /// Print the capture table to stdout
        #[arg(long)]
        table: bool,

        /// Label frame depth from the outermost frame for --table
        #[arg(long)]
        label_depth: Option<usize>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        #[command(flatten)]
        normalize: NormalizeFlags,
    },

    /// Print the normalized form of raw function names
    Normalize {
        /// Raw function names
        #[arg(required = true)]
        names: Vec<String>,

        #[command(flatten)]
        normalize: NormalizeFlags,
    },

    /// Validate a session report JSON file
    Validate {
        /// Path to session report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Graph {
            input,
            output,
            dot,
            highlight,
            title,
            rankdir,
            table,
            label_depth,
            summary,
            normalize,
        } => {
            let mut dot_config = DotConfig::new();
            if let Some(title) = title {
                dot_config = dot_config.with_graph_name(title);
            }
            if let Some(rankdir) = rankdir {
                dot_config = dot_config.with_rankdir(rankdir);
            }

            let table_config = if table || label_depth.is_some() {
                let mut config = TableConfig::default();
                if let Some(depth) = label_depth {
                    config = config.with_label_depth(depth);
                }
                Some(config)
            } else {
                None
            };

            let args = GraphArgs {
                input,
                output_json: output,
                output_dot: dot,
                highlight,
                normalizer: normalize.into_config(),
                dot_config,
                table: table_config,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_graph(args)?;
        }

        Commands::Normalize { names, normalize } => {
            for (raw, name) in names.iter().zip(normalize_names(&names, normalize.into_config())) {
                println!("{} => {}", raw, name);
            }
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
