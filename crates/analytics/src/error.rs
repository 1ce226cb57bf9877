use core_types::CoreError;
use regression::RegressionError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    #[error("Invalid input series: {0}")]
    Input(#[from] CoreError),

    #[error("Regression could not be solved: {0}")]
    Regression(#[from] RegressionError),
}
