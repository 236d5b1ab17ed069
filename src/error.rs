use thiserror::Error;

pub type SplitsResult<T> = Result<T, SplitsError>;

#[derive(Debug, Error)]
pub enum SplitsError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}
