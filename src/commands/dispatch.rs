//! Command dispatch logic for waypath

use std::path::Path;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use waypath_core::config::GraphConfig;
use waypath_core::edgelist;
use waypath_core::error::{Result, WaypathError};
use waypath_core::graph::Graph;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = GraphConfig::load(cli.config.as_deref())?;

    match &cli.command {
        None => Err(WaypathError::UsageError(
            "no command given (try --help)".to_string(),
        )),

        Some(Commands::Route { graph, from, to }) => {
            let graph = load_graph(graph, &config, cli, start)?;
            commands::route::execute(cli, &graph, from, to)
        }

        Some(Commands::Nodes { graph, edges }) => {
            let graph = load_graph(graph, &config, cli, start)?;
            commands::nodes::execute(cli, &graph, *edges)
        }

        Some(Commands::Stats { graph }) => {
            let graph = load_graph(graph, &config, cli, start)?;
            commands::stats::execute(cli, &graph)
        }
    }
}

fn load_graph(path: &Path, config: &GraphConfig, cli: &Cli, start: Instant) -> Result<Graph> {
    let graph = edgelist::load_path(path, config)?;
    if cli.verbose {
        tracing::debug!(
            elapsed = ?start.elapsed(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "load_graph"
        );
    }
    Ok(graph)
}
