//! Validation helpers for correntropy fitting.
//!
//! This module centralizes the consistency checks used across the fitting
//! interface:
//!
//! - **Bandwidth**: [`validate_sigma`] ensures `σ` is finite and strictly
//!   positive before a kernel is built.
//! - **Problem data**: [`validate_response`], [`validate_design`], and
//!   [`validate_dimensions`] enforce non-empty, finite inputs with
//!   `|B| = rows(M)`.
//! - **Coefficients**: [`validate_beta`] checks a caller-supplied starting
//!   point against the number of basis functions.
//! - **Options**: [`verify_tol_grad`], [`verify_shrink_factor`], and
//!   [`verify_singular_tol`] guard the optimizer configuration.
//!
//! These helpers standardize error reporting by returning domain-specific
//! [`FitError`] variants, making higher-level code more uniform.
use crate::regression::{
    errors::{FitError, FitResult},
    types::{Beta, Design, Response},
};

/// Validate the kernel bandwidth.
///
/// # Errors
/// Returns [`FitError::InvalidSigma`] if `sigma` is non-finite or ≤ 0.0.
pub fn validate_sigma(sigma: f64) -> FitResult<()> {
    if !sigma.is_finite() {
        return Err(FitError::InvalidSigma { value: sigma, reason: "Sigma must be finite." });
    }
    if sigma <= 0.0 {
        return Err(FitError::InvalidSigma { value: sigma, reason: "Sigma must be positive." });
    }
    Ok(())
}

/// Validate that the response vector is non-empty and finite.
///
/// # Errors
/// - [`FitError::EmptyResponse`] if `response` has no entries.
/// - [`FitError::NonFiniteResponse`] with the index/value of the first
///   offending element.
pub fn validate_response(response: &Response) -> FitResult<()> {
    if response.is_empty() {
        return Err(FitError::EmptyResponse);
    }
    for (index, &value) in response.iter().enumerate() {
        if !value.is_finite() {
            return Err(FitError::NonFiniteResponse { index, value });
        }
    }
    Ok(())
}

/// Validate that the design matrix has at least one column and finite entries.
///
/// # Errors
/// - [`FitError::EmptyDesign`] if `design` has zero columns.
/// - [`FitError::NonFiniteDesign`] with the row/col/value of the first
///   offending entry.
pub fn validate_design(design: &Design) -> FitResult<()> {
    if design.ncols() == 0 {
        return Err(FitError::EmptyDesign);
    }
    for ((row, col), &value) in design.indexed_iter() {
        if !value.is_finite() {
            return Err(FitError::NonFiniteDesign { row, col, value });
        }
    }
    Ok(())
}

/// Validate `|B| = rows(M)`.
///
/// # Errors
/// Returns [`FitError::DimensionMismatch`] when the lengths disagree.
pub fn validate_dimensions(response: &Response, design: &Design) -> FitResult<()> {
    if response.len() != design.nrows() {
        return Err(FitError::DimensionMismatch {
            response_len: response.len(),
            design_rows: design.nrows(),
        });
    }
    Ok(())
}

/// Validate a coefficient vector against the number of basis functions.
///
/// # Errors
/// Returns [`FitError::BetaLengthMismatch`] if `beta.len() != dim`.
pub fn validate_beta(beta: &Beta, dim: usize) -> FitResult<()> {
    if beta.len() != dim {
        return Err(FitError::BetaLengthMismatch { expected: dim, found: beta.len() });
    }
    Ok(())
}

/// Validate the optional gradient-norm tolerance.
///
/// - Accepts `None` (no stopping rule on gradient).
/// - If `Some`, the value must be **finite** and **strictly positive**.
///
/// # Errors
/// Returns [`FitError::InvalidTolGrad`] if the value is non-finite or ≤ 0.0.
pub fn verify_tol_grad(tol: Option<f64>) -> FitResult<()> {
    if let Some(tol) = tol {
        if !tol.is_finite() {
            return Err(FitError::InvalidTolGrad { tol, reason: "Tolerance must be finite." });
        }
        if tol <= 0.0 {
            return Err(FitError::InvalidTolGrad { tol, reason: "Tolerance must be positive." });
        }
    }
    Ok(())
}

/// Validate the backtracking shrink factor (strictly inside `(0, 1)`).
///
/// # Errors
/// Returns [`FitError::InvalidShrinkFactor`] otherwise.
pub fn verify_shrink_factor(value: f64) -> FitResult<()> {
    if !value.is_finite() {
        return Err(FitError::InvalidShrinkFactor {
            value,
            reason: "Shrink factor must be finite.",
        });
    }
    if value <= 0.0 || value >= 1.0 {
        return Err(FitError::InvalidShrinkFactor {
            value,
            reason: "Shrink factor must lie strictly between 0 and 1.",
        });
    }
    Ok(())
}

/// Validate the relative cutoff used to reject singular Newton systems.
///
/// # Errors
/// Returns [`FitError::InvalidSingularTol`] if the value is non-finite or < 0.0.
pub fn verify_singular_tol(tol: f64) -> FitResult<()> {
    if !tol.is_finite() {
        return Err(FitError::InvalidSingularTol { tol, reason: "Tolerance must be finite." });
    }
    if tol < 0.0 {
        return Err(FitError::InvalidSingularTol { tol, reason: "Tolerance must be non-negative." });
    }
    Ok(())
}
