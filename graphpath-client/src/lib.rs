pub mod client;
pub mod error;

pub use client::{DEFAULT_ENDPOINT, SolverClient};
pub use error::ClientError;
