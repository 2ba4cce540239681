//! regression — maximum-correntropy linear fitting and its error surface.
//!
//! Purpose
//! -------
//! Provide a cohesive fitting layer for robust linear models: given a response
//! vector `B` and a design matrix `M` whose columns are basis functions
//! evaluated at the sample points, find coefficients `β` maximizing the
//! correntropy criterion `F(β) = Σ_i exp(−(B[i] − (Mβ)[i])² / 2σ²)`.
//!
//! Key behaviors
//! -------------
//! - Validate inputs once (`data`, `validation`) so the hot loops can assume
//!   consistent shapes and finite entries.
//! - Evaluate the objective with analytic first and second derivatives
//!   (`kernel`, `objective`).
//! - Maximize it with a damped-Newton iteration that falls back to gradient
//!   ascent whenever the Newton candidate is not an ascent direction
//!   (`direction`), guarded by a monotone backtracking line search
//!   (`line_search`), orchestrated by an explicit state machine (`solver`).
//! - Offer an ordinary least-squares baseline for comparison (`baseline`).
//! - Normalize every failure into [`errors::FitError`] with the common
//!   result alias [`errors::FitResult`].
//!
//! Invariants & assumptions
//! ------------------------
//! - `σ > 0`; the kernel is always the peaked form with `g(0) = 1`, so
//!   `F(β) ≤ n` for every `β`.
//! - The objective value never decreases across accepted iterations.
//! - A line search that cannot improve the objective ends the fit normally
//!   (`FitStatus::StagnationStop`); it is not an error.
//!
//! Conventions
//! -----------
//! - Vectors and matrices use the `ndarray` aliases in [`types`]; the dense
//!   Newton solve and the least-squares baseline bridge into `nalgebra`.
//! - Indices are 0-based: rows are samples, columns are basis functions.
//! - Configuration lives in [`options::NewtonOptions`]; nothing in the loop
//!   reads global constants.
//!
//! Downstream usage
//! ----------------
//! - Most callers build a [`data::RegressionData`], pick `σ`, and call
//!   [`solver::fit`] with `NewtonOptions::default()`.
//! - Callers that want to observe each iteration drive a
//!   [`solver::NewtonIterator`] with `step` themselves.
//! - Front-ends import the curated surface via `regression::prelude::*`.
//!
//! Testing notes
//! -------------
//! - Unit tests in each submodule cover local concerns: kernel derivatives,
//!   gradient/Hessian vs finite differences, direction selection, line-search
//!   acceptance and exhaustion, option validation, and each stopping path.
//! - The integration suite exercises the full dataset → fit → dataset
//!   pipeline and robustness against outliers.

pub mod baseline;
pub mod data;
pub mod direction;
pub mod errors;
pub mod kernel;
pub mod line_search;
pub mod objective;
pub mod options;
pub mod solver;
pub mod types;
pub mod validation;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use correntropy_fit::regression::prelude::*;
//
// to import the main fitting surface in a single line.

pub mod prelude {
    pub use super::baseline::least_squares;
    pub use super::data::RegressionData;
    pub use super::errors::{FitError, FitResult};
    pub use super::kernel::GaussianKernel;
    pub use super::objective::CorrentropyObjective;
    pub use super::options::NewtonOptions;
    pub use super::solver::{
        FitOutcome, FitStatus, NewtonIterator, fit, fit_correntropy, fit_from,
    };
    pub use super::types::{Beta, Design, Response};
}
