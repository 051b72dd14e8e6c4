use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Graph source selected by the user.
///
/// The serialized tags are part of the solver's request contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Built-in six node graph without negative weights
    Default,
    /// Built-in four node graph with one negative edge
    NegativeDemo,
    /// Graph parsed from user supplied node/edge text
    Custom,
}

impl Mode {
    /// Map a selector tag to a mode. Tags must match exactly; anything else falls back to `Custom`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "default" => Mode::Default,
            "negative_demo" => Mode::NegativeDemo,
            "custom" => Mode::Custom,
            other => {
                warn!("Unknown mode '{}', treating it as custom", other);
                Mode::Custom
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Default => "default",
            Mode::NegativeDemo => "negative_demo",
            Mode::Custom => "custom",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Algorithms understood by the solver, keyed by its numeric selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Dijkstra,
    BellmanFord,
    FloydWarshall,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Dijkstra,
        Algorithm::BellmanFord,
        Algorithm::FloydWarshall,
        Algorithm::AStar,
    ];

    /// Selector value sent in the `algo` field.
    pub fn tag(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "1",
            Algorithm::BellmanFord => "2",
            Algorithm::FloydWarshall => "3",
            Algorithm::AStar => "4",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::BellmanFord => "Bellman-Ford",
            Algorithm::FloydWarshall => "Floyd-Warshall",
            Algorithm::AStar => "A*",
        }
    }

    /// Whether the solver needs both `src` and `dst` to exist in the graph.
    pub fn needs_endpoints(&self) -> bool {
        !matches!(self, Algorithm::FloydWarshall)
    }

    /// Resolve a user selector to the value sent on the wire.
    ///
    /// Known names and tags become the numeric tag; anything else is forwarded
    /// untouched so the solver can reject it.
    pub fn selector(input: &str) -> String {
        match input.parse::<Algorithm>() {
            Ok(algo) => algo.tag().to_string(),
            Err(_) => input.to_string(),
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "dijkstra" => Ok(Algorithm::Dijkstra),
            "2" | "bellman-ford" | "bellman_ford" | "bellmanford" => Ok(Algorithm::BellmanFord),
            "3" | "floyd-warshall" | "floyd_warshall" | "floydwarshall" => {
                Ok(Algorithm::FloydWarshall)
            }
            "4" | "a-star" | "a_star" | "astar" | "a*" => Ok(Algorithm::AStar),
            other => Err(format!("unknown algorithm '{}'", other)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One parsed node. Coordinates are either both present or both absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub name: String,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
}

impl NodeRecord {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: None,
        }
    }

    pub fn at(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            position: Some(Point { x, y }),
        }
    }

    pub fn x(&self) -> Option<f64> {
        self.position.map(|p| p.x)
    }

    pub fn y(&self) -> Option<f64> {
        self.position.map(|p| p.y)
    }
}

/// One parsed directed, weighted edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub u: String,
    pub v: String,
    pub w: f64,
}

impl EdgeRecord {
    pub fn new(u: impl Into<String>, v: impl Into<String>, w: f64) -> Self {
        Self {
            u: u.into(),
            v: v.into(),
            w,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

impl Graph {
    pub fn has_negative_edge(&self) -> bool {
        self.edges.iter().any(|e| e.w < 0.0)
    }
}
