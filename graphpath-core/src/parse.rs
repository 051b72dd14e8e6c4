// Tolerant parsers for the node and edge text formats.
//
// Node line:  NAME[, X, Y]
// Edge line:  U, V[, WEIGHT]
//
// Parsing never fails. Lines that cannot produce a record are dropped and
// fields that cannot be used are defaulted; each case is reported as a
// Diagnostic so callers can show it.

use crate::model::{EdgeRecord, NodeRecord};
use serde::Serialize;
use std::fmt;

/// Weight used when an edge line has no usable weight.
pub const DEFAULT_WEIGHT: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Node line dropped, its name was empty
    MissingName,
    /// Node kept as name-only, coordinates were partial or not numeric
    CoordinatesIgnored,
    /// Edge line dropped, one endpoint was empty
    MissingEndpoint,
    /// Edge kept with the default weight, supplied weight was not numeric
    WeightDefaulted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// 1-based line number in the input text
    pub line: usize,
    pub kind: DiagnosticKind,
    /// The trimmed offending line
    pub text: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            DiagnosticKind::MissingName => "node line dropped: missing name",
            DiagnosticKind::CoordinatesIgnored => "coordinates ignored: need two numeric values",
            DiagnosticKind::MissingEndpoint => "edge line dropped: missing endpoint",
            DiagnosticKind::WeightDefaulted => "weight is not a number, using 1",
        };
        write!(f, "line {}: {} ('{}')", self.line, what, self.text)
    }
}

/// Records produced from a block of text plus what was dropped or defaulted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parsed<T> {
    pub records: Vec<T>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Default for Parsed<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            diagnostics: Vec::new(),
        }
    }
}

impl<T> Parsed<T> {
    fn note(&mut self, line: usize, kind: DiagnosticKind, text: &str) {
        self.diagnostics.push(Diagnostic {
            line,
            kind,
            text: text.to_string(),
        });
    }
}

/// Trim whitespace and byte order marks from both ends.
fn clean(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Non-empty trimmed lines with their 1-based line numbers.
///
/// `str::lines` splits on `\n` and strips a preceding `\r`.
fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(idx, raw)| (idx + 1, clean(raw)))
        .filter(|(_, line)| !line.is_empty())
}

fn fields(line: &str) -> Vec<&str> {
    line.split(',').map(clean).collect()
}

/// Coerce a trimmed field to a finite number.
///
/// Accepts decimal and exponent notation as well as `0x`, `0o` and `0b`
/// integer literals (unsigned, any length). NaN and infinities are rejected
/// since they cannot be carried in the JSON body.
pub fn coerce_number(field: &str) -> Option<f64> {
    let field = clean(field);
    if field.is_empty() {
        return None;
    }

    let radix = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)]
        .iter()
        .find_map(|(prefix, radix)| field.strip_prefix(prefix).map(|digits| (digits, *radix)));
    if let Some((digits, radix)) = radix {
        if digits.is_empty() {
            return None;
        }
        return digits
            .chars()
            .try_fold(0.0_f64, |acc, c| {
                c.to_digit(radix)
                    .map(|d| acc * f64::from(radix) + f64::from(d))
            })
            .filter(|n| n.is_finite());
    }

    // f64::from_str also takes "inf" and "nan" spellings
    let lowered = field.to_ascii_lowercase();
    if lowered.contains("inf") || lowered.contains("nan") {
        return None;
    }

    field.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse node lines of the form `NAME[, X, Y]`.
pub fn parse_nodes(text: &str) -> Parsed<NodeRecord> {
    let mut parsed = Parsed::default();

    for (line_no, line) in content_lines(text) {
        let parts = fields(line);
        let name = parts[0].to_uppercase();
        if name.is_empty() {
            parsed.note(line_no, DiagnosticKind::MissingName, line);
            continue;
        }

        if parts.len() >= 3 && !parts[1].is_empty() && !parts[2].is_empty() {
            if let (Some(x), Some(y)) = (coerce_number(parts[1]), coerce_number(parts[2])) {
                parsed.records.push(NodeRecord::at(name, x, y));
                continue;
            }
        }

        if parts.iter().skip(1).take(2).any(|p| !p.is_empty()) {
            parsed.note(line_no, DiagnosticKind::CoordinatesIgnored, line);
        }
        parsed.records.push(NodeRecord::named(name));
    }

    parsed
}

/// Parse edge lines of the form `U, V[, WEIGHT]`. Fields past the third are ignored.
pub fn parse_edges(text: &str) -> Parsed<EdgeRecord> {
    let mut parsed = Parsed::default();

    for (line_no, line) in content_lines(text) {
        let parts = fields(line);
        let u = parts[0];
        let v = parts.get(1).copied().unwrap_or("");
        if u.is_empty() || v.is_empty() {
            parsed.note(line_no, DiagnosticKind::MissingEndpoint, line);
            continue;
        }

        // An empty weight field counts as zero; only a missing one defaults
        let w = match parts.get(2).copied() {
            None => DEFAULT_WEIGHT,
            Some("") => 0.0,
            Some(raw) => coerce_number(raw).unwrap_or_else(|| {
                parsed.note(line_no, DiagnosticKind::WeightDefaulted, line);
                DEFAULT_WEIGHT
            }),
        };

        parsed
            .records
            .push(EdgeRecord::new(u.to_uppercase(), v.to_uppercase(), w));
    }

    parsed
}
