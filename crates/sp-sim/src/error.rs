use sp_core::SpError;
use sp_import::ImportError;
use sp_layout::LayoutError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] SpError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("batch import failed: {0}")]
    Import(#[from] ImportError),
}

pub type SimResult<T> = Result<T, SimError>;
