use crate::design::DesignMatrix;
use crate::error::RegressionError;
use nalgebra::{DMatrix, DVector};
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Smallest squared Cholesky pivot accepted on the unit-diagonal form of X'X.
///
/// Each pivot is the fraction of a column's sum of squares left unexplained by
/// the columns before it, so the test does not depend on column units.
const COLLINEARITY_TOLERANCE: f64 = 1e-10;

/// A validated regression problem: `n x k` design `x` and response `y` of length `n`.
#[derive(Debug, Clone)]
pub struct Ols {
    x: DMatrix<f64>,
    y: DVector<f64>,
}

/// The result of a completed OLS run. Every field is populated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OlsFit {
    coefficients: Vec<f64>,
    standard_errors: Vec<f64>,
    t_stats: Vec<f64>,
    p_values: Vec<f64>,
    residuals: Vec<f64>,
    fitted: Vec<f64>,
    r_squared: f64,
    adj_r_squared: f64,
    n: usize,
    k: usize,
    df: usize,
}

impl Ols {
    /// Builds a problem from an `n x k` design and an `n x 1` response matrix.
    pub fn new(x: DMatrix<f64>, y: DMatrix<f64>) -> Result<Self, RegressionError> {
        if y.ncols() != 1 {
            return Err(RegressionError::DimensionMismatch(format!(
                "response must have exactly one column, got {}",
                y.ncols()
            )));
        }
        let y = y.column(0).into_owned();
        Self::with_response(x, y)
    }

    pub fn with_response(x: DMatrix<f64>, y: DVector<f64>) -> Result<Self, RegressionError> {
        let (n, k) = x.shape();
        if k == 0 {
            return Err(RegressionError::EmptyDesign);
        }
        if n != y.len() {
            return Err(RegressionError::DimensionMismatch(format!(
                "design has {n} rows but response has {}",
                y.len()
            )));
        }
        if n <= k {
            return Err(RegressionError::InsufficientObservations { n, k });
        }
        Ok(Self { x, y })
    }

    pub fn from_design(design: &DesignMatrix, y: &[f64]) -> Result<Self, RegressionError> {
        Self::with_response(design.matrix().clone(), DVector::from_column_slice(y))
    }

    pub fn design(&self) -> &DMatrix<f64> {
        &self.x
    }

    pub fn response(&self) -> &DVector<f64> {
        &self.y
    }

    /// Solves the normal equations and computes the coefficient diagnostics.
    #[tracing::instrument(name = "ols_fit", skip(self), fields(n = self.x.nrows(), k = self.x.ncols()))]
    pub fn fit(&self) -> Result<OlsFit, RegressionError> {
        let (n, k) = self.x.shape();
        let df = n - k;

        // 1. beta = (X'X)^-1 X'y
        let xt = self.x.transpose();
        let xtx_inv = invert(&xt * &self.x)?;
        let beta = &xtx_inv * (&xt * &self.y);

        // 2. Fitted values and residuals
        let fitted = &self.x * &beta;
        let residuals = &self.y - &fitted;

        // 3. Residual variance and coefficient standard errors
        let ss_res = residuals.dot(&residuals);
        let sigma2 = ss_res / df as f64;
        let standard_errors: Vec<f64> = (0..k)
            .map(|i| (sigma2 * xtx_inv[(i, i)]).sqrt())
            .collect();

        // 4. t-statistics and two-sided p-values
        let t_stats: Vec<f64> = beta
            .iter()
            .zip(&standard_errors)
            .map(|(b, se)| b / se)
            .collect();
        let dist = StudentsT::new(0.0, 1.0, df as f64)
            .map_err(|e| RegressionError::Distribution(e.to_string()))?;
        let p_values = t_stats.iter().map(|t| two_sided_p_value(&dist, *t)).collect();

        // 5. Goodness of fit
        let y_mean = self.y.mean();
        let ss_tot: f64 = self.y.iter().map(|v| (v - y_mean) * (v - y_mean)).sum();
        let r_squared = 1.0 - ss_res / ss_tot;
        let adj_r_squared = 1.0 - (1.0 - r_squared) * (n as f64 - 1.0) / df as f64;

        tracing::debug!(r_squared, adj_r_squared, sigma2, "OLS fit complete");

        Ok(OlsFit {
            coefficients: beta.iter().copied().collect(),
            standard_errors,
            t_stats,
            p_values,
            residuals: residuals.iter().copied().collect(),
            fitted: fitted.iter().copied().collect(),
            r_squared,
            adj_r_squared,
            n,
            k,
            df,
        })
    }
}

/// Inverts X'X, refusing (near-)collinear designs.
///
/// X'X is first rescaled to unit diagonal, `D X'X D` with `D = diag(1 / sqrt(X'X_ii))`,
/// then factored by Cholesky. The inverse is recovered as `D (D X'X D)^-1 D`.
fn invert(xtx: DMatrix<f64>) -> Result<DMatrix<f64>, RegressionError> {
    let diagonal = xtx.diagonal();
    if diagonal.iter().any(|d| !(d.is_finite() && *d > 0.0)) {
        tracing::debug!("X'X has a zero or non-finite diagonal entry");
        return Err(RegressionError::SingularMatrix);
    }
    let scaling = DMatrix::from_diagonal(&diagonal.map(|d| d.sqrt().recip()));
    let equilibrated = &scaling * xtx * &scaling;

    let cholesky = equilibrated.cholesky().ok_or(RegressionError::SingularMatrix)?;
    let pivots: Vec<f64> = cholesky.l_dirty().diagonal().iter().map(|l| l * l).collect();
    if !pivots.iter().all(|p| *p > COLLINEARITY_TOLERANCE) {
        tracing::debug!(?pivots, "X'X rejected as singular");
        return Err(RegressionError::SingularMatrix);
    }
    Ok(&scaling * cholesky.inverse() * &scaling)
}

/// Shorthand for `Ols::new(x, y)?.fit()`.
pub fn ols(x: DMatrix<f64>, y: DMatrix<f64>) -> Result<OlsFit, RegressionError> {
    Ols::new(x, y)?.fit()
}

/// `2 * (1 - F(|t|))` under Student-t with the fit's degrees of freedom.
fn two_sided_p_value(dist: &StudentsT, t: f64) -> f64 {
    if t.is_nan() {
        f64::NAN
    } else if t.is_infinite() {
        0.0
    } else {
        2.0 * (1.0 - dist.cdf(t.abs()))
    }
}

impl OlsFit {
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn standard_errors(&self) -> &[f64] {
        &self.standard_errors
    }

    pub fn t_stats(&self) -> &[f64] {
        &self.t_stats
    }

    pub fn p_values(&self) -> &[f64] {
        &self.p_values
    }

    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    pub fn fitted(&self) -> &[f64] {
        &self.fitted
    }

    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    pub fn adj_r_squared(&self) -> f64 {
        self.adj_r_squared
    }

    /// Number of observations.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of estimated coefficients, intercept included.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Residual degrees of freedom, `n - k`.
    pub fn df(&self) -> usize {
        self.df
    }
}
