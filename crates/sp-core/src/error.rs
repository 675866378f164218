//! Framework error type.
//!
//! Sub-crates either convert their own error enums into `SpError` via `From`
//! or wrap `SpError` as one variant of a richer enum.

use thiserror::Error;

use crate::{CustomerId, ShelfId};

/// The top-level error type for `sp-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SpError {
    #[error("customer {0} not found")]
    CustomerNotFound(CustomerId),

    #[error("shelf {0} not found")]
    ShelfNotFound(ShelfId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `sp-*` crates.
pub type SpResult<T> = Result<T, SpError>;
