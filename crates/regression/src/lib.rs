//! # OLS Regression Engine
//!
//! Closed-form ordinary least squares over a dense design matrix, with the
//! classical diagnostics: standard errors, t-statistics, two-sided p-values,
//! R² and adjusted R².
//!
//! ## Architectural Principles
//!
//! - **All or nothing:** `Ols::fit` either returns a fully populated `OlsFit`
//!   or an error. Collinear regressors fail with `SingularMatrix` instead of
//!   producing meaningless coefficients. The collinearity test works on X'X
//!   rescaled to unit diagonal, so column units do not matter.
//! - **External linear algebra:** matrix products and the Cholesky inversion come
//!   from `nalgebra`; the Student-t CDF comes from `statrs`.
//!
//! ## Public API
//!
//! - `Ols`: validated (X, y) pair; `fit()` runs the regression. `ols(x, y)` does both.
//! - `OlsFit`: the immutable result bundle.
//! - `DesignMatrix`: assembles X from named columns with an optional intercept.
//! - `RegressionError`: shape, rank and observation-count failures.

pub mod design;
pub mod error;
pub mod ols;

pub use design::{DesignMatrix, DesignMatrixBuilder};
pub use error::RegressionError;
pub use nalgebra::{DMatrix, DVector};
pub use ols::{Ols, OlsFit, ols};
