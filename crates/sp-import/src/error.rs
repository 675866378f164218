use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed simulation payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ImportResult<T> = Result<T, ImportError>;
