use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Paired series must have equal length, got {left} and {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
