use serde::Serialize;

use crate::graph::search::Route;

/// Non-negative cost of traversing an edge, accumulated along a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct Cost(u64);

impl Cost {
    pub const ZERO: Cost = Cost(0);

    pub fn new(value: u64) -> Self {
        Cost(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl From<u64> for Cost {
    fn from(value: u64) -> Self {
        Cost(value)
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Route query result shaped for presentation
#[derive(Debug, Clone, Serialize)]
pub struct RouteReport {
    pub from: String,
    pub to: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hops: Option<usize>,
    pub path: Vec<String>,
}

impl RouteReport {
    pub fn found(from: &str, to: &str, route: &Route) -> Self {
        RouteReport {
            from: from.to_string(),
            to: to.to_string(),
            found: true,
            cost: Some(route.cost.value()),
            hops: Some(route.hops()),
            path: route.path.clone(),
        }
    }

    pub fn not_found(from: &str, to: &str) -> Self {
        RouteReport {
            from: from.to_string(),
            to: to.to_string(),
            found: false,
            cost: None,
            hops: None,
            path: Vec::new(),
        }
    }
}
