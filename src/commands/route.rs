//! Route command

use crate::cli::{Cli, OutputFormat};
use waypath_core::error::{Result, WaypathError};
use waypath_core::graph::{search, Graph, RouteReport};
use waypath_core::records::escape_quotes;

/// Execute the route command
pub fn execute(cli: &Cli, graph: &Graph, from: &str, to: &str) -> Result<()> {
    // Verify both endpoints before searching so the caller gets a data
    // error rather than a silent "no route".
    for name in [from, to] {
        if !graph.contains(name) {
            return Err(WaypathError::NodeNotFound {
                name: name.to_string(),
            });
        }
    }

    let report = match search(graph, from, to) {
        Some(route) => RouteReport::found(from, to, &route),
        None => RouteReport::not_found(from, to),
    };

    match cli.format {
        OutputFormat::Json => output_json(&report)?,
        OutputFormat::Human => output_human(cli, &report),
        OutputFormat::Records => output_records(&report),
    }

    Ok(())
}

fn output_human(cli: &Cli, report: &RouteReport) {
    if !report.found {
        if !cli.quiet {
            println!("no route from {} to {}", report.from, report.to);
        }
        return;
    }

    let hops = report.hops.unwrap_or(0);
    let unit = if hops == 1 { "hop" } else { "hops" };
    println!(
        "{} (cost {}, {} {})",
        report.path.join(" -> "),
        report.cost.unwrap_or(0),
        hops,
        unit
    );
}

fn output_json(report: &RouteReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn output_records(report: &RouteReport) {
    let mut header = format!(
        "route from=\"{}\" to=\"{}\" found={}",
        escape_quotes(&report.from),
        escape_quotes(&report.to),
        report.found
    );
    if let (Some(cost), Some(hops)) = (report.cost, report.hops) {
        header.push_str(&format!(" cost={} hops={}", cost, hops));
    }
    println!("{}", header);

    for name in &report.path {
        println!("node \"{}\"", escape_quotes(name));
    }
}
