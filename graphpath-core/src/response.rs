use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A distance matrix cell. The solver sends unreachable pairs as the string `"inf"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Distance {
    Finite(f64),
    Unreachable(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixRow {
    pub row: String,
    pub dist: BTreeMap<String, Distance>,
}

/// Successful solver reply.
///
/// Single-pair algorithms fill `path`/`cost`, Bellman-Ford may only set
/// `negative_cycle`, Floyd-Warshall adds `nodes` and `matrix`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolveResponse {
    #[serde(default)]
    pub algo: Option<String>,
    #[serde(default)]
    pub path: Option<Vec<String>>,
    #[serde(default)]
    pub cost: Option<f64>,
    /// Base64 encoded PNG
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub negative_cycle: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrix: Option<Vec<MatrixRow>>,
}

impl SolveResponse {
    pub fn algo_label(&self) -> &str {
        self.algo.as_deref().unwrap_or("Solver")
    }
}
