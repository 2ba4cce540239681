//! regression::types — shared numeric aliases for the correntropy fitter.
//!
//! Purpose
//! -------
//! Centralize the numeric container types used by the objective, its
//! derivatives, and the Newton iterator, so the rest of the fitting code
//! stays agnostic to `ndarray` generics and can evolve if the backend
//! changes.
//!
//! Invariants & assumptions
//! ------------------------
//! - All vectors and matrices are `ndarray` containers over `f64`.
//! - `Beta` and `Grad` have length `m` (number of basis functions);
//!   `Response` has length `n` (number of samples); `Design` is `n × m`;
//!   `Hessian` is `m × m`.
//!
//! Testing notes
//! -------------
//! - This module only defines type aliases; correctness is exercised by the
//!   modules that operate on them.
use ndarray::{Array1, Array2};

/// Coefficient vector `β` being optimized (length `m`).
pub type Beta = Array1<f64>;

/// Gradient `∇F(β)` of the correntropy objective (length `m`).
pub type Grad = Array1<f64>;

/// Dense `m × m` Hessian `∇²F(β)`.
pub type Hessian = Array2<f64>;

/// Observed response vector `B` (length `n`).
pub type Response = Array1<f64>;

/// Design matrix `M` (`n × m`); `M[[i, j]]` is basis function `j` at sample `i`.
pub type Design = Array2<f64>;
