use crate::builtin::{default_graph, negative_demo_graph};
use crate::model::{EdgeRecord, Graph, Mode, NodeRecord};
use crate::parse::{Diagnostic, parse_edges, parse_nodes};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Graph chosen for a mode, with any diagnostics from parsing custom text.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub graph: Graph,
    pub diagnostics: Vec<Diagnostic>,
}

/// Produce the node/edge set for a mode.
///
/// Built-in modes ignore the supplied text. Custom mode parses it as-is and
/// does not check that edge endpoints appear in the node list.
pub fn resolve(mode: Mode, node_text: Option<&str>, edge_text: Option<&str>) -> Resolved {
    let resolved = match mode {
        Mode::Default => Resolved {
            graph: default_graph().clone(),
            diagnostics: Vec::new(),
        },
        Mode::NegativeDemo => Resolved {
            graph: negative_demo_graph().clone(),
            diagnostics: Vec::new(),
        },
        Mode::Custom => {
            let nodes = parse_nodes(node_text.unwrap_or_default());
            let edges = parse_edges(edge_text.unwrap_or_default());
            let mut diagnostics = nodes.diagnostics;
            diagnostics.extend(edges.diagnostics);
            Resolved {
                graph: Graph {
                    nodes: nodes.records,
                    edges: edges.records,
                },
                diagnostics,
            }
        }
    };

    debug!(
        "Graph loaded for mode {}: {} nodes, {} edges, {} diagnostics",
        mode,
        resolved.graph.nodes.len(),
        resolved.graph.edges.len(),
        resolved.diagnostics.len()
    );
    resolved
}

/// Body of a solver invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestPayload {
    pub mode: Mode,
    pub algo: String,
    pub src: String,
    pub dst: String,
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

impl RequestPayload {
    /// Assemble a payload. `src` and `dst` are trimmed but keep their case;
    /// node names were already uppercased by the parser.
    pub fn build(mode: Mode, algo: &str, src: &str, dst: &str, graph: Graph) -> Self {
        Self {
            mode,
            algo: algo.to_string(),
            src: src.trim().to_string(),
            dst: dst.trim().to_string(),
            nodes: graph.nodes,
            edges: graph.edges,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Everything the user picked for one run.
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    pub mode: String,
    pub algo: String,
    pub src: String,
    pub dst: String,
    pub node_text: Option<String>,
    pub edge_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prepared {
    pub payload: RequestPayload,
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolve the graph for a run and build its payload.
pub fn prepare(request: &RunRequest) -> Prepared {
    let mode = Mode::from_tag(&request.mode);
    let Resolved { graph, diagnostics } = resolve(
        mode,
        request.node_text.as_deref(),
        request.edge_text.as_deref(),
    );

    Prepared {
        payload: RequestPayload::build(mode, &request.algo, &request.src, &request.dst, graph),
        diagnostics,
    }
}
