//! Nodes command

use crate::cli::{Cli, OutputFormat};
use waypath_core::error::Result;
use waypath_core::graph::Graph;
use waypath_core::records::escape_quotes;

/// Execute the nodes command
pub fn execute(cli: &Cli, graph: &Graph, with_edges: bool) -> Result<()> {
    let mut names: Vec<&str> = graph.node_names().collect();
    names.sort_unstable();

    match cli.format {
        OutputFormat::Json => output_json(graph, &names)?,
        OutputFormat::Human => output_human(cli, graph, &names, with_edges),
        OutputFormat::Records => output_records(graph, &names),
    }

    Ok(())
}

fn sorted_neighbors<'a>(graph: &'a Graph, name: &str) -> Vec<(&'a str, u64)> {
    let mut neighbors: Vec<(&str, u64)> = graph
        .neighbors(name)
        .map(|iter| {
            iter.map(|n| {
                let cost = graph.cost(name, n).map(|c| c.value()).unwrap_or(0);
                (n, cost)
            })
            .collect()
        })
        .unwrap_or_default();
    neighbors.sort_unstable();
    neighbors
}

fn output_human(cli: &Cli, graph: &Graph, names: &[&str], with_edges: bool) {
    if names.is_empty() {
        if !cli.quiet {
            println!("graph has no nodes");
        }
        return;
    }

    for name in names {
        if with_edges {
            let detail: Vec<String> = sorted_neighbors(graph, name)
                .into_iter()
                .map(|(neighbor, cost)| format!("{} ({})", neighbor, cost))
                .collect();
            println!("{}: {}", name, detail.join(", "));
        } else {
            println!("{}", name);
        }
    }
}

fn output_json(graph: &Graph, names: &[&str]) -> Result<()> {
    let nodes: Vec<serde_json::Value> = names
        .iter()
        .map(|name| {
            let neighbors: Vec<serde_json::Value> = sorted_neighbors(graph, name)
                .into_iter()
                .map(|(neighbor, cost)| {
                    serde_json::json!({ "name": neighbor, "cost": cost })
                })
                .collect();
            serde_json::json!({ "name": name, "neighbors": neighbors })
        })
        .collect();

    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({ "nodes": nodes }))?
    );
    Ok(())
}

fn output_records(graph: &Graph, names: &[&str]) {
    for name in names {
        let degree = graph.neighbors(name).map(Iterator::count).unwrap_or(0);
        println!("node \"{}\" degree={}", escape_quotes(name), degree);
    }
}
