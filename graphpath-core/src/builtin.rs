use crate::model::{EdgeRecord, Graph, NodeRecord};
use std::sync::LazyLock;

fn graph(nodes: &[&str], edges: &[(&str, &str, f64)]) -> Graph {
    Graph {
        nodes: nodes.iter().map(|n| NodeRecord::named(*n)).collect(),
        edges: edges
            .iter()
            .map(|(u, v, w)| EdgeRecord::new(*u, *v, *w))
            .collect(),
    }
}

static DEFAULT_GRAPH: LazyLock<Graph> = LazyLock::new(|| {
    graph(
        &["A", "B", "C", "D", "E", "F"],
        &[
            ("A", "B", 2.0),
            ("A", "D", 4.0),
            ("B", "C", 2.0),
            ("B", "E", 5.0),
            ("C", "F", 3.0),
            ("D", "E", 1.0),
            ("E", "F", 2.0),
        ],
    )
});

static NEGATIVE_DEMO_GRAPH: LazyLock<Graph> = LazyLock::new(|| {
    graph(
        &["A", "B", "C", "D"],
        &[
            ("A", "B", 4.0),
            ("A", "C", 5.0),
            ("B", "C", -3.0),
            ("C", "D", 2.0),
            ("D", "B", 1.0),
        ],
    )
});

/// Six nodes A-F, seven positive edges.
pub fn default_graph() -> &'static Graph {
    &DEFAULT_GRAPH
}

/// Four nodes A-D, five edges, B->C is negative.
pub fn negative_demo_graph() -> &'static Graph {
    &NEGATIVE_DEMO_GRAPH
}
