use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("unknown target policy {0:?} (expected \"checkout_aware\" or \"uniform\")")]
    UnknownPolicy(String),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
