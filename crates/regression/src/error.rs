use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegressionError {
    #[error("Design and response do not line up: {0}")]
    DimensionMismatch(String),

    #[error("Not enough observations: n = {n} must exceed k = {k}")]
    InsufficientObservations { n: usize, k: usize },

    #[error("X'X is singular or near-singular; regressors are collinear")]
    SingularMatrix,

    #[error("The design matrix has no columns")]
    EmptyDesign,

    #[error("Failed to build the Student-t distribution: {0}")]
    Distribution(String),
}
