//! Stats command

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use waypath_core::error::Result;
use waypath_core::graph::Graph;

#[derive(Debug, Serialize)]
struct GraphStats {
    nodes: usize,
    edges: usize,
    isolated: usize,
}

impl GraphStats {
    fn of(graph: &Graph) -> Self {
        let isolated = graph
            .node_names()
            .filter(|name| graph.neighbors(name).map(Iterator::count).unwrap_or(0) == 0)
            .count();

        GraphStats {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            isolated,
        }
    }
}

/// Execute the stats command
pub fn execute(cli: &Cli, graph: &Graph) -> Result<()> {
    let stats = GraphStats::of(graph);

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Human => {
            println!("nodes: {}", stats.nodes);
            println!("edges: {}", stats.edges);
            println!("isolated: {}", stats.isolated);
        }
        OutputFormat::Records => {
            println!(
                "graph nodes={} edges={} isolated={}",
                stats.nodes, stats.edges, stats.isolated
            );
        }
    }

    Ok(())
}
