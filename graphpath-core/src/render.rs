// Text rendering of solver replies

use crate::error::Result;
use crate::response::{Distance, MatrixRow, SolveResponse};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Format a cost with at least one decimal place (`7` -> `7.0`, `2.5` -> `2.5`).
pub fn format_cost(cost: f64) -> String {
    if cost.fract() == 0.0 {
        format!("{:.1}", cost)
    } else {
        format!("{}", cost)
    }
}

fn format_distance(distance: Option<&Distance>) -> String {
    match distance {
        Some(Distance::Finite(d)) => format_cost(*d),
        Some(Distance::Unreachable(_)) | None => "inf".to_string(),
    }
}

/// Human readable summary of a successful reply.
pub fn render_summary(response: &SolveResponse) -> String {
    let algo = response.algo_label();
    let mut report = String::new();

    if response.negative_cycle {
        report.push_str(&format!(
            "{}: negative cycle detected, no shortest path exists\n",
            algo
        ));
    }

    if let Some(path) = &response.path {
        let path_json = serde_json::to_string(path).unwrap_or_default();
        match response.cost {
            Some(cost) => report.push_str(&format!(
                "{} Path: {} cost = {}\n",
                algo,
                path_json,
                format_cost(cost)
            )),
            None => report.push_str(&format!("{} Path: {}\n", algo, path_json)),
        }
    }

    if let Some(matrix) = &response.matrix {
        report.push_str(&render_matrix(response, matrix));
    }

    if report.is_empty() {
        report.push_str(&format!("{}: no path returned\n", algo));
    }
    report
}

fn render_matrix(response: &SolveResponse, matrix: &[MatrixRow]) -> String {
    let columns: Vec<String> = match &response.nodes {
        Some(nodes) => nodes.clone(),
        None => matrix.iter().map(|r| r.row.clone()).collect(),
    };

    let cells: Vec<Vec<String>> = matrix
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|col| format_distance(row.dist.get(col)))
                .collect()
        })
        .collect();

    let width = columns
        .iter()
        .chain(matrix.iter().map(|r| &r.row))
        .map(|s| s.chars().count())
        .chain(cells.iter().flatten().map(|s| s.chars().count()))
        .max()
        .unwrap_or(1);

    let mut table = format!("{} distance matrix:\n", response.algo_label());
    table.push_str(&format!("{:>width$}", "", width = width));
    for col in &columns {
        table.push_str(&format!("  {:>width$}", col, width = width));
    }
    table.push('\n');
    for (row, row_cells) in matrix.iter().zip(&cells) {
        table.push_str(&format!("{:>width$}", row.row, width = width));
        for cell in row_cells {
            table.push_str(&format!("  {:>width$}", cell, width = width));
        }
        table.push('\n');
    }
    table
}

/// Pretty print an arbitrary error body returned by the solver.
pub fn render_error(body: &Value) -> String {
    serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string())
}

/// Decode the base64 image field and write the PNG bytes to `path`.
/// Returns the number of bytes written.
pub fn save_image(encoded: &str, path: &Path) -> Result<usize> {
    let bytes = STANDARD.decode(encoded.trim())?;
    fs::write(path, &bytes)?;
    debug!("Wrote {} image bytes to {}", bytes.len(), path.display());
    Ok(bytes.len())
}
