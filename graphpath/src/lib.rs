pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{describe_graph, expand_path, read_graph_text, run_request_from_args};
