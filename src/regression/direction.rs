//! Newton direction and ascent-direction selection.
//!
//! The Newton candidate solves `H·d = −g` with a column-pivoted QR
//! factorization of the (possibly indefinite, possibly singular) Hessian.
//! Since `F` is maximized, the candidate is only kept when it is an ascent
//! direction (`d·g > 0`); otherwise the gradient itself is used.
//!
//! A rank-deficient or non-finite solve is treated as "no Newton candidate"
//! and falls straight back to the gradient. Rank is judged relative to the
//! largest pivot, so the test does not depend on the scale of the design.
use crate::regression::types::{Grad, Hessian};
use nalgebra::{DMatrix, DVector};
use ndarray::Array1;

/// Which rule produced the chosen ascent direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionKind {
    /// Damped-Newton candidate `−H⁻¹g` with positive slope.
    Newton,
    /// Plain gradient ascent (`d = g`).
    Gradient,
}

/// Direction handed to the line search.
#[derive(Debug, Clone, PartialEq)]
pub struct AscentDirection {
    pub direction: Array1<f64>,
    pub kind: DirectionKind,
    /// Directional derivative `d·g` (non-negative by construction).
    pub slope: f64,
    /// The Newton system was rejected as singular.
    pub singular: bool,
}

/// Solve `H·d = −g` for the Newton candidate.
///
/// Returns `None` when the Hessian is numerically singular: the pivoted QR
/// has an all-zero or non-finite diagonal, or some `|R_kk|` falls to
/// `singular_tol · max|R_kk|` or below. Also returns `None` when the solve
/// produces non-finite values.
pub fn newton_direction(grad: &Grad, hess: &Hessian, singular_tol: f64) -> Option<Array1<f64>> {
    let m = grad.len();
    if hess.nrows() != m || hess.ncols() != m {
        return None;
    }
    let mut h = DMatrix::<f64>::zeros(m, m);
    fill_dmatrix(hess, &mut h);
    let neg_grad = DVector::from_iterator(m, grad.iter().map(|&v| -v));

    let qr = h.col_piv_qr();
    let r = qr.r();
    let max_diag = r.diagonal().iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if max_diag == 0.0 || !max_diag.is_finite() {
        return None;
    }
    if r.diagonal().iter().any(|v| v.abs() <= singular_tol * max_diag) {
        return None;
    }
    let solution = qr.solve(&neg_grad)?;
    if solution.iter().any(|v| !v.is_finite()) {
        return None;
    }
    Some(Array1::from_iter(solution.iter().copied()))
}

/// Pick the ascent direction for the current iterate.
///
/// Uses the Newton candidate when `d·g > 0`; otherwise (including a
/// singular solve) falls back to the gradient, whose slope is `‖g‖²`.
pub fn select_ascent_direction(grad: &Grad, hess: &Hessian, singular_tol: f64) -> AscentDirection {
    match newton_direction(grad, hess, singular_tol) {
        Some(dir) => {
            let slope = dir.dot(grad);
            if slope > 0.0 {
                return AscentDirection {
                    direction: dir,
                    kind: DirectionKind::Newton,
                    slope,
                    singular: false,
                };
            }
            tracing::trace!(slope, "Newton candidate is not an ascent direction");
            gradient_direction(grad, false)
        }
        None => {
            tracing::debug!("Newton system is singular; falling back to gradient ascent");
            gradient_direction(grad, true)
        }
    }
}

fn gradient_direction(grad: &Grad, singular: bool) -> AscentDirection {
    AscentDirection {
        direction: grad.clone(),
        kind: DirectionKind::Gradient,
        slope: grad.dot(grad),
        singular,
    }
}

// ---- Helper methods ----

/// Copy an `ndarray` Hessian into a preallocated `nalgebra::DMatrix`,
/// column by column.
fn fill_dmatrix(hess: &Hessian, out: &mut DMatrix<f64>) {
    let n = hess.ncols();
    for j in 0..n {
        for i in 0..hess.nrows() {
            out[(i, j)] = hess[[i, j]];
        }
    }
}
