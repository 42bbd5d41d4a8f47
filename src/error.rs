use thiserror::Error;

/// Errors raised by the circle model and its collaborators.
///
/// Every fallible operation checks its inputs before touching any state, so an
/// `Err` always means nothing was changed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("invalid color {0:?}: expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
