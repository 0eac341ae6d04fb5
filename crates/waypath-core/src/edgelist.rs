//! Edge-list file loading
//!
//! One edge per line: `nodeA,nodeB,cost`. Surrounding whitespace is
//! trimmed and blank lines are skipped. The cost field may be omitted
//! or empty, in which case `GraphConfig::default_cost` applies.

use std::fs;
use std::path::Path;

use crate::config::GraphConfig;
use crate::error::{Result, WaypathError};
use crate::graph::{Cost, Graph};

/// Load a graph from an edge-list file.
#[tracing::instrument(skip(config))]
pub fn load_path(path: &Path, config: &GraphConfig) -> Result<Graph> {
    if !path.exists() {
        return Err(WaypathError::GraphNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    let graph = parse(&content, path, config)?;

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph_loaded"
    );
    Ok(graph)
}

/// Parse edge-list text into a graph. `origin` names the source in
/// error messages.
pub fn parse(input: &str, origin: &Path, config: &GraphConfig) -> Result<Graph> {
    let mut graph = Graph::new();

    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let (a, b, cost) =
            parse_line(line, config).map_err(|reason| WaypathError::InvalidEdgeLine {
                path: origin.to_path_buf(),
                line: index + 1,
                reason,
            })?;
        graph.add_edge(a, b, cost);
    }

    Ok(graph)
}

fn parse_line<'a>(
    line: &'a str,
    config: &GraphConfig,
) -> std::result::Result<(&'a str, &'a str, Cost), String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < 2 || fields.len() > 3 {
        return Err(format!(
            "expected nodeA,nodeB[,cost], got {} fields",
            fields.len()
        ));
    }

    let (a, b) = (fields[0], fields[1]);
    if a.is_empty() || b.is_empty() {
        return Err("empty node name".to_string());
    }
    if !config.allow_self_loops && a == b {
        return Err(format!("self-loop on node {:?}", a));
    }

    let cost = match fields.get(2) {
        Some(raw) if !raw.is_empty() => raw
            .parse::<u64>()
            .map_err(|e| format!("invalid cost {:?}: {}", raw, e))?,
        _ => config.default_cost,
    };

    Ok((a, b, Cost::new(cost)))
}
