//! Layout error type.

use thiserror::Error;

use sp_core::{ShelfId, SpError};

/// Errors produced by `sp-layout`.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("unknown shelf type {0:?}")]
    UnknownKind(String),

    #[error("unknown shelf size {0:?}")]
    UnknownSize(String),

    #[error("shelf {0} already exists")]
    DuplicateShelf(ShelfId),

    #[error(transparent)]
    Core(#[from] SpError),
}

pub type LayoutResult<T> = Result<T, LayoutError>;
