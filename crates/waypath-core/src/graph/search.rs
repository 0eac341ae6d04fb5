//! Uniform-cost route finding
//!
//! Classic Dijkstra frontier expansion without a decrease-key
//! operation: duplicate frontier entries per node are allowed and
//! pruned when popped.

use std::collections::HashMap;

use crate::graph::types::Cost;
use crate::graph::Graph;
use crate::heap::PriorityHeap;

/// A discovered-but-not-finalized candidate: the cost accumulated so
/// far, the node reached, and the path taken to reach it (exclusive
/// of the node itself).
#[derive(Debug, Clone)]
struct FrontierElement {
    cost: Cost,
    node: String,
    path: Vec<String>,
}

/// A completed route from start to goal, inclusive of both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: Vec<String>,
    pub cost: Cost,
}

impl Route {
    /// Edge traversals along the route.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Lowest-cost route between two named nodes.
///
/// Returns `None` when no route exists, including when `start` or
/// `goal` is not in the graph. With non-negative costs the first
/// frontier element popped for `goal` carries the minimal cost, so
/// the returned route is optimal.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn search(graph: &Graph, start: &str, goal: &str) -> Option<Route> {
    let mut explored: HashMap<String, Cost> = HashMap::new();
    let mut frontier =
        PriorityHeap::new(|a: &FrontierElement, b: &FrontierElement| a.cost < b.cost);

    frontier.push(FrontierElement {
        cost: Cost::ZERO,
        node: start.to_string(),
        path: Vec::new(),
    });

    while let Some(element) = frontier.pop() {
        // A strictly cheaper route to this node was already finalized.
        // Equal-cost duplicates pass through; re-expanding them is
        // redundant but cannot change the outcome.
        if explored
            .get(&element.node)
            .is_some_and(|best| *best < element.cost)
        {
            continue;
        }

        let mut current_path = element.path;
        current_path.push(element.node.clone());

        if element.node == goal {
            tracing::debug!(
                cost = element.cost.value(),
                hops = current_path.len() - 1,
                "route_found"
            );
            return Some(Route {
                path: current_path,
                cost: element.cost,
            });
        }

        if let Some(neighbors) = graph.neighbors(&element.node) {
            for neighbor in neighbors {
                if !explored.contains_key(neighbor) {
                    let step = graph.cost(&element.node, neighbor).unwrap_or_default();
                    frontier.push(FrontierElement {
                        cost: element.cost + step,
                        node: neighbor.to_string(),
                        path: current_path.clone(),
                    });
                }
            }
        }

        explored.insert(element.node, element.cost);
    }

    tracing::debug!("frontier_exhausted");
    None
}
