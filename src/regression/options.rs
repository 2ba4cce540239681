//! NewtonOptions — configuration for the correntropy Newton iterator.
//!
//! Purpose
//! -------
//! Collect the iteration constants of the optimizer in one validated value
//! instead of scattering them through the loop: the outer iteration budget,
//! the backtracking shrink factor and attempt budget, an optional
//! gradient-norm stopping rule, and the cutoff used to reject singular Newton
//! systems.
//!
//! Key behaviors
//! -------------
//! - [`NewtonOptions::new`] validates every field and returns a
//!   `FitError` on the first violation.
//! - [`NewtonOptions::default`] reproduces the classic constants:
//!   100 iterations, shrink factor 0.8, 1000 line-search attempts, no
//!   gradient tolerance.
//! - [`NewtonOptions::line_search`] projects the options onto the
//!   [`LineSearchConfig`] consumed by the backtracking search.
//!
//! Invariants & assumptions
//! ------------------------
//! - `max_iter > 0`, `0 < shrink_factor < 1`, `max_line_search > 0`.
//! - `tol_grad`, if present, is finite and strictly positive.
//! - `singular_tol` is finite and non-negative.
//!
//! Downstream usage
//! ----------------
//! - Pass a `NewtonOptions` to [`crate::regression::solver::fit`] or
//!   [`crate::regression::solver::NewtonIterator::new`]. The CLI builds one
//!   from its optional flags.
//!
//! Testing notes
//! -------------
//! - Unit tests check the defaults, that `new` preserves valid inputs, and
//!   that each invalid field is rejected with the matching error variant.
use crate::regression::{
    errors::{FitError, FitResult},
    line_search::{DEFAULT_MAX_ATTEMPTS, DEFAULT_SHRINK_FACTOR, LineSearchConfig},
    validation::{verify_shrink_factor, verify_singular_tol, verify_tol_grad},
};

/// Default outer-iteration budget.
pub const DEFAULT_MAX_ITER: usize = 100;

/// Default relative cutoff on the pivoted-QR diagonal of the Hessian.
pub const DEFAULT_SINGULAR_TOL: f64 = 1e-12;

/// Optimizer-level configuration.
///
/// Fields
/// ------
/// - `max_iter`: hard cap on outer Newton/gradient iterations.
/// - `shrink_factor`: backtracking factor applied after a rejected step.
/// - `max_line_search`: maximum trial steps per line search.
/// - `tol_grad`: stop with `Converged` once `‖∇F‖₂ ≤ tol_grad`; `None`
///   disables the rule so only the iteration cap and line-search
///   stagnation end the loop.
/// - `singular_tol`: Newton systems whose pivoted-QR diagonal falls below
///   this (relative) threshold are treated as singular.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonOptions {
    pub max_iter: usize,
    pub shrink_factor: f64,
    pub max_line_search: usize,
    pub tol_grad: Option<f64>,
    pub singular_tol: f64,
}

impl NewtonOptions {
    /// Construct validated options.
    ///
    /// # Errors
    /// - [`FitError::InvalidMaxIter`] if `max_iter == 0`.
    /// - [`FitError::InvalidShrinkFactor`] unless `0 < shrink_factor < 1`.
    /// - [`FitError::InvalidMaxLineSearch`] if `max_line_search == 0`.
    /// - [`FitError::InvalidTolGrad`] for a non-finite or non-positive tolerance.
    /// - [`FitError::InvalidSingularTol`] for a non-finite or negative cutoff.
    pub fn new(
        max_iter: usize, shrink_factor: f64, max_line_search: usize, tol_grad: Option<f64>,
        singular_tol: f64,
    ) -> FitResult<Self> {
        if max_iter == 0 {
            return Err(FitError::InvalidMaxIter {
                max_iter,
                reason: "Maximum iterations must be greater than zero.",
            });
        }
        verify_shrink_factor(shrink_factor)?;
        if max_line_search == 0 {
            return Err(FitError::InvalidMaxLineSearch {
                max_attempts: max_line_search,
                reason: "Line search needs at least one attempt.",
            });
        }
        verify_tol_grad(tol_grad)?;
        verify_singular_tol(singular_tol)?;
        Ok(Self { max_iter, shrink_factor, max_line_search, tol_grad, singular_tol })
    }

    /// Backtracking configuration implied by these options.
    pub fn line_search(&self) -> LineSearchConfig {
        LineSearchConfig { shrink_factor: self.shrink_factor, max_attempts: self.max_line_search }
    }

    /// Re-run validation, for options assembled field by field.
    pub fn validate(&self) -> FitResult<()> {
        Self::new(
            self.max_iter,
            self.shrink_factor,
            self.max_line_search,
            self.tol_grad,
            self.singular_tol,
        )
        .map(|_| ())
    }
}

impl Default for NewtonOptions {
    fn default() -> Self {
        Self {
            max_iter: DEFAULT_MAX_ITER,
            shrink_factor: DEFAULT_SHRINK_FACTOR,
            max_line_search: DEFAULT_MAX_ATTEMPTS,
            tol_grad: None,
            singular_tol: DEFAULT_SINGULAR_TOL,
        }
    }
}
