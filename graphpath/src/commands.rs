use crate::CLAP_STYLING;
use clap::{Arg, arg, command};
use graphpath_client::DEFAULT_ENDPOINT;
use url::Url;

fn graph_text_args() -> [Arg; 4] {
    [
        arg!(--"nodes" <TEXT>)
            .required(false)
            .help("Node lines, one per line: NAME[, X, Y]")
            .conflicts_with("nodes-file"),
        arg!(--"nodes-file" <PATH>)
            .required(false)
            .help("Path to a file of node lines")
            .value_parser(clap::value_parser!(std::path::PathBuf))
            .conflicts_with("nodes"),
        arg!(--"edges" <TEXT>)
            .required(false)
            .help("Edge lines, one per line: U, V[, WEIGHT] (weight defaults to 1)")
            .conflicts_with("edges-file"),
        arg!(--"edges-file" <PATH>)
            .required(false)
            .help("Path to a file of edge lines")
            .value_parser(clap::value_parser!(std::path::PathBuf))
            .conflicts_with("edges"),
    ]
}

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("graphpath")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("graphpath")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .arg(arg!(-v --"verbose" "Enable debug logging").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("run")
                .about(
                    "Send a graph to the remote solver and show the returned path, cost and \
                image.",
                )
                .arg(
                    arg!(-m --"mode" <MODE>)
                        .required(false)
                        .help("Graph source: default, negative_demo or custom")
                        .default_value("default"),
                )
                .arg(
                    arg!(-a --"algo" <ALGORITHM>)
                        .required(false)
                        .help("dijkstra, bellman-ford, floyd-warshall, a-star (or 1-4)")
                        .default_value("dijkstra"),
                )
                .arg(
                    arg!(-s --"src" <NODE>)
                        .required(false)
                        .help("Source node"),
                )
                .arg(
                    arg!(-d --"dst" <NODE>)
                        .required(false)
                        .help("Target node"),
                )
                .args(graph_text_args())
                .arg(
                    arg!(-e --"endpoint" <URL>)
                        .required(false)
                        .help("Solver endpoint")
                        .value_parser(clap::value_parser!(Url))
                        .default_value(DEFAULT_ENDPOINT),
                )
                .arg(
                    arg!(--"timeout" <SECONDS>)
                        .required(false)
                        .help("Request timeout in seconds")
                        .value_parser(clap::value_parser!(u64).range(1..))
                        .default_value("30"),
                )
                .arg(
                    arg!(-o --"image-out" <PATH>)
                        .required(false)
                        .help("Save the returned PNG rendering to this file")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(--"dry-run")
                        .required(false)
                        .help("Print the request payload instead of sending it")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Output format: text, json")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                ),
        )
        .subcommand(
            command!("parse")
                .about("Parse node and edge text and show the resulting records")
                .args(graph_text_args())
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Output format: text, json")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                ),
        )
        .subcommand(
            command!("examples")
                .about("List the built-in graphs")
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Output format: text, json")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_definition_is_valid() {
        command_argument_builder().debug_assert();
    }

    #[test]
    fn test_run_defaults() {
        let matches = command_argument_builder()
            .try_get_matches_from(["graphpath", "run"])
            .unwrap();
        let (_, run) = matches.subcommand().unwrap();
        assert_eq!(run.get_one::<String>("mode").unwrap(), "default");
        assert_eq!(run.get_one::<String>("algo").unwrap(), "dijkstra");
        assert_eq!(run.get_one::<Url>("endpoint").unwrap().as_str(), DEFAULT_ENDPOINT);
        assert!(!run.get_flag("dry-run"));
    }

    #[test]
    fn test_timeout_must_be_positive() {
        let zero = command_argument_builder()
            .try_get_matches_from(["graphpath", "run", "--timeout", "0"]);
        assert!(zero.is_err());

        let matches = command_argument_builder()
            .try_get_matches_from(["graphpath", "run", "--timeout", "5"])
            .unwrap();
        let (_, run) = matches.subcommand().unwrap();
        assert_eq!(*run.get_one::<u64>("timeout").unwrap(), 5);
    }

    #[test]
    fn test_inline_and_file_nodes_conflict() {
        let result = command_argument_builder().try_get_matches_from([
            "graphpath",
            "parse",
            "--nodes",
            "a",
            "--nodes-file",
            "nodes.txt",
        ]);
        assert!(result.is_err());
    }
}
