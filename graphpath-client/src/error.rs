use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Solver rejected the request ({status})")]
    Rejected {
        status: u16,
        body: serde_json::Value,
    },

    #[error("Could not decode solver response: {reason}")]
    Decode { reason: String, body: String },
}

pub type Result<T> = std::result::Result<T, ClientError>;
