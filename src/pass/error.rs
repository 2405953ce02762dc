use thiserror::Error;

/// Request validation failures. Both are detected before any random draw.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("At least one character type must be selected.")]
    InvalidRequest,

    #[error(
        "Password length must be at least {required} to include each selected character type (got {length})."
    )]
    LengthTooShort { length: usize, required: usize },
}
