use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid image data: {0}")]
    InvalidImage(#[from] base64::DecodeError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
