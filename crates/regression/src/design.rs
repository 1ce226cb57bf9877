use crate::error::RegressionError;
use nalgebra::DMatrix;

pub const INTERCEPT: &str = "intercept";

/// A design matrix with a name for every column.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignMatrix {
    names: Vec<String>,
    matrix: DMatrix<f64>,
}

/// Collects named regressor columns, optionally prefixed by an intercept of ones.
#[derive(Debug, Default)]
pub struct DesignMatrixBuilder {
    intercept: bool,
    columns: Vec<(String, Vec<f64>)>,
}

impl DesignMatrix {
    pub fn builder() -> DesignMatrixBuilder {
        DesignMatrixBuilder::default()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    pub fn into_matrix(self) -> DMatrix<f64> {
        self.matrix
    }

    pub fn nrows(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.matrix.ncols()
    }
}

impl DesignMatrixBuilder {
    pub fn intercept(mut self, intercept: bool) -> Self {
        self.intercept = intercept;
        self
    }

    pub fn column(mut self, name: impl Into<String>, values: &[f64]) -> Self {
        self.columns.push((name.into(), values.to_vec()));
        self
    }

    pub fn build(self) -> Result<DesignMatrix, RegressionError> {
        let Some((_, first)) = self.columns.first() else {
            return Err(RegressionError::EmptyDesign);
        };
        let n = first.len();
        if let Some((name, col)) = self.columns.iter().find(|(_, c)| c.len() != n) {
            return Err(RegressionError::DimensionMismatch(format!(
                "column '{name}' has {} rows, expected {n}",
                col.len()
            )));
        }

        let offset = usize::from(self.intercept);
        let k = self.columns.len() + offset;
        let matrix = DMatrix::from_fn(n, k, |row, col| {
            if col < offset {
                1.0
            } else {
                self.columns[col - offset].1[row]
            }
        });

        let mut names = Vec::with_capacity(k);
        if self.intercept {
            names.push(INTERCEPT.to_string());
        }
        names.extend(self.columns.into_iter().map(|(name, _)| name));

        Ok(DesignMatrix { names, matrix })
    }
}
