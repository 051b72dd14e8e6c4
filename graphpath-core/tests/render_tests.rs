// Tests for rendering solver replies

use graphpath_core::render::{format_cost, render_error, render_summary, save_image};
use graphpath_core::response::SolveResponse;
use serde_json::json;
use tempfile::TempDir;

fn response(value: serde_json::Value) -> SolveResponse {
    serde_json::from_value(value).unwrap()
}

// ============================================================================
// Cost Formatting Tests
// ============================================================================

#[test]
fn test_format_cost_integral_gets_decimal() {
    assert_eq!(format_cost(7.0), "7.0");
    assert_eq!(format_cost(-3.0), "-3.0");
    assert_eq!(format_cost(0.0), "0.0");
}

#[test]
fn test_format_cost_fractional_unchanged() {
    assert_eq!(format_cost(2.5), "2.5");
}

// ============================================================================
// Summary Tests
// ============================================================================

#[test]
fn test_render_path_and_cost() {
    let resp = response(json!({
        "algo": "Dijkstra",
        "path": ["A", "B", "C", "F"],
        "cost": 7.0,
        "image": "aGk="
    }));
    let summary = render_summary(&resp);
    assert_eq!(
        summary,
        "Dijkstra Path: [\"A\",\"B\",\"C\",\"F\"] cost = 7.0\n"
    );
}

#[test]
fn test_render_negative_cycle() {
    let resp = response(json!({"algo": "Bellman-Ford", "negative_cycle": true}));
    let summary = render_summary(&resp);
    assert!(summary.contains("Bellman-Ford: negative cycle detected"));
    assert!(!summary.contains("Path"));
}

#[test]
fn test_render_matrix_with_unreachable_cells() {
    let resp = response(json!({
        "algo": "Floyd-Warshall",
        "nodes": ["A", "B"],
        "matrix": [
            {"row": "A", "dist": {"A": 0.0, "B": 4.0}},
            {"row": "B", "dist": {"A": "inf", "B": 0.0}}
        ],
        "path": ["A", "B"]
    }));
    let summary = render_summary(&resp);
    assert!(summary.contains("Floyd-Warshall Path: [\"A\",\"B\"]\n"));
    assert!(summary.contains("distance matrix"));
    assert!(summary.contains("4.0"));
    assert!(summary.contains("inf"));
    assert!(!summary.contains("cost ="));
}

#[test]
fn test_render_without_path() {
    let resp = response(json!({"algo": "A*"}));
    assert_eq!(render_summary(&resp), "A*: no path returned\n");
}

#[test]
fn test_render_missing_algo_uses_placeholder() {
    let resp = response(json!({"path": ["A"], "cost": 0}));
    assert!(render_summary(&resp).starts_with("Solver Path:"));
}

#[test]
fn test_render_error_pretty_prints() {
    let body = json!({"error": "Invalid src/dst. Available: ['A', 'B']"});
    let rendered = render_error(&body);
    assert!(rendered.contains("\"error\""));
    assert!(rendered.contains('\n'));
}

// ============================================================================
// Image Tests
// ============================================================================

#[test]
fn test_save_image_writes_decoded_bytes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("result.png");

    // "\x89PNG" base64 encoded
    let written = save_image("iVBORw==", &path).unwrap();

    assert_eq!(written, 4);
    assert_eq!(std::fs::read(&path).unwrap(), vec![0x89, b'P', b'N', b'G']);
}

#[test]
fn test_save_image_rejects_bad_base64() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.png");
    assert!(save_image("not base64!!", &path).is_err());
    assert!(!path.exists());
}
