use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use colored::Colorize;
use graphpath_client::{ClientError, SolverClient};
use graphpath_core::builtin::{default_graph, negative_demo_graph};
use graphpath_core::model::{Algorithm, Graph, Mode};
use graphpath_core::parse::{Diagnostic, parse_edges, parse_nodes};
use graphpath_core::render::{format_cost, render_error, render_summary, save_image};
use graphpath_core::request::{RunRequest, prepare};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{Level, debug, warn};
use url::Url;

/// Install the stderr fmt subscriber. `verbose` raises the level to DEBUG.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

/// Expand a leading `~` in a user supplied path
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    PathBuf::from(shellexpand::tilde(raw.as_ref()).as_ref())
}

/// Graph text from an inline argument or a file. Inline text wins.
pub fn read_graph_text(inline: Option<&String>, file: Option<&PathBuf>) -> Result<Option<String>> {
    if let Some(text) = inline {
        return Ok(Some(text.clone()));
    }
    match file {
        Some(path) => {
            let path = expand_path(path);
            let text = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            debug!("Read {} bytes of graph text from {}", text.len(), path.display());
            Ok(Some(text))
        }
        None => Ok(None),
    }
}

fn graph_texts(args: &ArgMatches) -> Result<(Option<String>, Option<String>)> {
    let nodes = read_graph_text(
        args.get_one::<String>("nodes"),
        args.get_one::<PathBuf>("nodes-file"),
    )?;
    let edges = read_graph_text(
        args.get_one::<String>("edges"),
        args.get_one::<PathBuf>("edges-file"),
    )?;
    Ok((nodes, edges))
}

/// Collect the `run` arguments into a request description.
pub fn run_request_from_args(args: &ArgMatches) -> Result<RunRequest> {
    let (node_text, edge_text) = graph_texts(args)?;
    let text_arg = |id: &str| args.get_one::<String>(id).cloned().unwrap_or_default();

    Ok(RunRequest {
        mode: text_arg("mode"),
        algo: Algorithm::selector(&text_arg("algo")),
        src: text_arg("src"),
        dst: text_arg("dst"),
        node_text,
        edge_text,
    })
}

/// Plain text listing of a graph's nodes and edges.
pub fn describe_graph(graph: &Graph) -> String {
    let mut out = format!("Nodes ({}):\n", graph.nodes.len());
    for node in &graph.nodes {
        match node.position {
            Some(p) => out.push_str(&format!(
                "  {} ({}, {})\n",
                node.name,
                format_cost(p.x),
                format_cost(p.y)
            )),
            None => out.push_str(&format!("  {}\n", node.name)),
        }
    }
    out.push_str(&format!("Edges ({}):\n", graph.edges.len()));
    for edge in &graph.edges {
        out.push_str(&format!(
            "  {} -> {}  w={}\n",
            edge.u,
            edge.v,
            format_cost(edge.w)
        ));
    }
    out
}

fn print_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("{} {}", "⚠".yellow().bold(), diagnostic.to_string().yellow());
    }
}

fn or_solver_default(node: &str) -> &str {
    if node.is_empty() { "(solver default)" } else { node }
}

fn spinner(message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message.to_string());
    Ok(pb)
}

pub async fn handle_run(args: &ArgMatches, quiet: bool) -> Result<()> {
    let request = run_request_from_args(args)?;
    let prepared = prepare(&request);
    print_diagnostics(&prepared.diagnostics);

    let payload = prepared.payload;
    if payload.mode == Mode::Custom && payload.nodes.is_empty() {
        eprintln!(
            "{} {}",
            "⚠".yellow().bold(),
            "No nodes parsed; supply --nodes or --nodes-file for custom mode".yellow()
        );
    }

    if let Ok(algo) = payload.algo.parse::<Algorithm>() {
        if algo.needs_endpoints()
            && payload.mode == Mode::Custom
            && (payload.src.is_empty() || payload.dst.is_empty())
        {
            warn!("{} needs both --src and --dst on a custom graph", algo);
        }
        if algo == Algorithm::Dijkstra && payload.edges.iter().any(|e| e.w < 0.0) {
            warn!("Dijkstra does not accept negative weights, expect the solver to refuse");
        }
    }

    if args.get_flag("dry-run") {
        println!("{}", payload.to_json_pretty()?);
        return Ok(());
    }

    let endpoint = args
        .get_one::<Url>("endpoint")
        .context("missing solver endpoint")?;
    let timeout = *args.get_one::<u64>("timeout").unwrap_or(&30);
    let client = SolverClient::with_timeout(endpoint.as_str(), timeout)?;

    if !quiet {
        println!(
            "{} {} graph, algo {}, {} -> {}",
            "→".blue(),
            payload.mode.to_string().bright_white(),
            payload.algo.bright_white(),
            or_solver_default(&payload.src),
            or_solver_default(&payload.dst),
        );
    }

    let pb = spinner("Running...")?;
    let outcome = client.solve(&payload).await;
    pb.finish_and_clear();

    let response = match outcome {
        Ok(response) => response,
        Err(ClientError::Rejected { status, body }) => {
            eprintln!("{}", render_error(&body));
            bail!("Solver returned HTTP {}", status);
        }
        Err(e) => return Err(e.into()),
    };

    if let (Some(out), Some(image)) = (args.get_one::<PathBuf>("image-out"), &response.image) {
        let out = expand_path(out);
        let written = save_image(image, &out)
            .with_context(|| format!("Failed to save image to {}", out.display()))?;
        if !quiet {
            println!(
                "{} Image saved: {} ({} bytes)",
                "✓".green().bold(),
                out.display().to_string().bright_white(),
                written
            );
        }
    }

    match args.get_one::<String>("format").map(String::as_str) {
        Some("json") => println!("{}", serde_json::to_string_pretty(&response)?),
        _ => print!("{}", render_summary(&response)),
    }
    Ok(())
}

pub fn handle_parse(args: &ArgMatches) -> Result<()> {
    let (node_text, edge_text) = graph_texts(args)?;
    let nodes = parse_nodes(node_text.as_deref().unwrap_or_default());
    let edges = parse_edges(edge_text.as_deref().unwrap_or_default());

    match args.get_one::<String>("format").map(String::as_str) {
        Some("json") => {
            let diagnostics: Vec<&Diagnostic> =
                nodes.diagnostics.iter().chain(&edges.diagnostics).collect();
            let report = json!({
                "nodes": nodes.records,
                "edges": edges.records,
                "diagnostics": diagnostics,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            print_diagnostics(&nodes.diagnostics);
            print_diagnostics(&edges.diagnostics);
            let graph = Graph {
                nodes: nodes.records,
                edges: edges.records,
            };
            print!("{}", describe_graph(&graph));
        }
    }
    Ok(())
}

pub fn handle_examples(args: &ArgMatches) -> Result<()> {
    let builtins = [
        (Mode::Default, default_graph()),
        (Mode::NegativeDemo, negative_demo_graph()),
    ];

    match args.get_one::<String>("format").map(String::as_str) {
        Some("json") => {
            let report: serde_json::Map<String, serde_json::Value> = builtins
                .iter()
                .map(|(mode, graph)| -> Result<(String, serde_json::Value)> {
                    Ok((mode.to_string(), serde_json::to_value(graph)?))
                })
                .collect::<Result<_>>()?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            for (mode, graph) in builtins {
                let note = if graph.has_negative_edge() {
                    " negative weights"
                } else {
                    ""
                };
                println!("{}{}", format!("[{}]", mode).bright_blue().bold(), note.yellow());
                print!("{}", describe_graph(graph));
                println!();
            }
            println!("{}", "Algorithms:".bright_blue().bold());
            for algo in Algorithm::ALL {
                println!("  {}  {}", algo.tag(), algo.name());
            }
        }
    }
    Ok(())
}
