//! CLI argument parsing for waypath
//!
//! Uses clap for argument parsing. Supports global flags:
//! --format, --quiet, --verbose, --log-level, --log-json, --config

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use waypath_core::format::OutputFormat;

/// Waypath - lowest-cost route finding over edge-list graphs
#[derive(Parser, Debug)]
#[command(name = "waypath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// TOML config for edge-list loading
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the lowest-cost route between two nodes
    Route {
        /// Edge-list file (nodeA,nodeB,cost per line)
        graph: PathBuf,

        /// Start node name
        from: String,

        /// Goal node name
        to: String,
    },

    /// List the nodes of a graph
    Nodes {
        /// Edge-list file (nodeA,nodeB,cost per line)
        graph: PathBuf,

        /// Include neighbor and cost detail per node
        #[arg(long)]
        edges: bool,
    },

    /// Summarize a graph
    Stats {
        /// Edge-list file (nodeA,nodeB,cost per line)
        graph: PathBuf,
    },
}

/// Parse output format from string
fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_help() {
        // Should not panic
        let result = Cli::try_parse_from(["waypath", "--help"]);
        assert!(result.is_err()); // --help exits
    }

    #[test]
    fn test_parse_route() {
        let cli = Cli::try_parse_from(["waypath", "route", "g.csv", "A", "B"]).unwrap();
        match cli.command {
            Some(Commands::Route { from, to, .. }) => {
                assert_eq!(from, "A");
                assert_eq!(to, "B");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_format() {
        let cli =
            Cli::try_parse_from(["waypath", "route", "g.csv", "A", "B", "--format", "json"])
                .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_bad_format_fails() {
        let result = Cli::try_parse_from(["waypath", "--format", "csv", "stats", "g.csv"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_nodes_edges_flag() {
        let cli = Cli::try_parse_from(["waypath", "nodes", "g.csv", "--edges"]).unwrap();
        match cli.command {
            Some(Commands::Nodes { edges, .. }) => assert!(edges),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
