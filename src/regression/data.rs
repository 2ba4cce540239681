//! Validated regression inputs: response vector and design matrix.
//!
//! Purpose
//! -------
//! Represent the immutable `(B, M)` pair a fit operates on, guaranteeing that
//! it has been validated once so the objective and its derivatives can index
//! freely without re-checking shapes in the hot loops.
//!
//! Key behaviors
//! -------------
//! - Enforce `|B| = rows(M)`, at least one sample and one basis function, and
//!   finite entries, via [`RegressionData::new`].
//! - Expose predictions `Mβ` and residuals `δ(β) = B − Mβ`.
//!
//! Invariants & assumptions
//! ------------------------
//! - After construction, `n = response.len() = design.nrows() ≥ 1` and
//!   `m = design.ncols() ≥ 1`; all entries are finite.
//! - The data are never mutated; a fit only borrows them.
//!
//! Testing notes
//! -------------
//! - Unit tests cover construction failures (each validation path) and the
//!   algebra of `predict`/`residuals` on small hand-checked problems.
use crate::regression::{
    errors::FitResult,
    types::{Beta, Design, Response},
    validation::{validate_beta, validate_design, validate_dimensions, validate_response},
};
use ndarray::Array1;

/// RegressionData — validated `(B, M)` pair for a correntropy fit.
///
/// Fields
/// ------
/// - `response`: [`Response`]
///   Observed targets `B` (length `n`).
/// - `design`: [`Design`]
///   Basis evaluations `M` (`n × m`).
///
/// Invariants
/// ----------
/// - `response.len() == design.nrows() >= 1`, `design.ncols() >= 1`, every
///   entry finite.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionData {
    response: Response,
    design: Design,
}

impl RegressionData {
    /// Validate and wrap a response vector and design matrix.
    ///
    /// The dimension check runs first so a row-count mismatch is always
    /// reported as `DimensionMismatch`, regardless of entry values.
    ///
    /// # Errors
    /// - `FitError::DimensionMismatch` if `|B| != rows(M)`.
    /// - `FitError::EmptyResponse` / `FitError::EmptyDesign` for empty inputs.
    /// - `FitError::NonFiniteResponse` / `FitError::NonFiniteDesign` for
    ///   NaN/±inf entries.
    pub fn new(response: Response, design: Design) -> FitResult<Self> {
        validate_dimensions(&response, &design)?;
        validate_response(&response)?;
        validate_design(&design)?;
        Ok(Self { response, design })
    }

    /// Number of samples `n`.
    pub fn n_samples(&self) -> usize {
        self.response.len()
    }

    /// Number of basis functions `m`.
    pub fn n_basis(&self) -> usize {
        self.design.ncols()
    }

    /// Observed response `B`.
    pub fn response(&self) -> &Response {
        &self.response
    }

    /// Design matrix `M`.
    pub fn design(&self) -> &Design {
        &self.design
    }

    /// Predicted responses `Mβ`.
    ///
    /// # Errors
    /// Returns `FitError::BetaLengthMismatch` if `beta.len() != m`.
    pub fn predict(&self, beta: &Beta) -> FitResult<Array1<f64>> {
        validate_beta(beta, self.n_basis())?;
        Ok(self.design.dot(beta))
    }

    /// Residuals `δ_i(β) = B[i] − Σ_j β[j]·M[i][j]`.
    ///
    /// # Errors
    /// Returns `FitError::BetaLengthMismatch` if `beta.len() != m`.
    pub fn residuals(&self, beta: &Beta) -> FitResult<Array1<f64>> {
        let fitted = self.predict(beta)?;
        Ok(&self.response - &fitted)
    }

    /// Unchecked residuals for callers that already validated `beta`.
    pub(crate) fn residuals_unchecked(&self, beta: &Beta) -> Array1<f64> {
        &self.response - &self.design.dot(beta)
    }
}
