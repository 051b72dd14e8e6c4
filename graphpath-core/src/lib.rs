pub mod builtin;
pub mod error;
pub mod model;
pub mod parse;
pub mod render;
pub mod request;
pub mod response;

use colored::Colorize;

pub use error::{CoreError, Result};
pub use model::{Algorithm, EdgeRecord, Graph, Mode, NodeRecord, Point};
pub use parse::{Diagnostic, DiagnosticKind, Parsed, parse_edges, parse_nodes};
pub use request::{Prepared, RequestPayload, Resolved, RunRequest, prepare, resolve};
pub use response::SolveResponse;

const BANNER: &str = r#"
                         _                 _   _
   __ _ _ __ __ _ _ __ | |__  _ __   __ _| |_| |__
  / _` | '__/ _` | '_ \| '_ \| '_ \ / _` | __| '_ \
 | (_| | | | (_| | |_) | | | | |_) | (_| | |_| | | |
  \__, |_|  \__,_| .__/|_| |_| .__/ \__,_|\__|_| |_|
  |___/          |_|         |_|
"#;

pub fn print_banner() {
    println!("{}", BANNER.bright_blue().bold());
    println!(
        "  {} {}\n",
        "shortest paths, solved remotely".bright_white(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
}
