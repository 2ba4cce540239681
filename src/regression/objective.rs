//! objective — correntropy criterion and its analytic derivatives.
//!
//! Purpose
//! -------
//! Evaluate the correntropy objective
//! `F(β) = Σ_i g(δ_i(β))`, `δ_i(β) = B[i] − Σ_j β[j]·M[i][j]`,
//! together with its gradient and Hessian with respect to `β`. These are the
//! quantities the Newton iterator maximizes.
//!
//! Key behaviors
//! -------------
//! - [`CorrentropyObjective::value`]: `F(β)` in `O(n·m)`.
//! - [`CorrentropyObjective::gradient`]: `∇F[k] = Σ_i −M[i][k]·g′(δ_i)`, with
//!   residuals factored out per sample so the cost stays `O(n·m)`.
//! - [`CorrentropyObjective::hessian`]:
//!   `∇²F[k][l] = Σ_i M[i][k]·M[i][l]·g″(δ_i)`, accumulated on the upper
//!   triangle and mirrored so the result is exactly symmetric.
//! - [`CorrentropyObjective::evaluate`]: all three from one residual pass.
//!
//! Invariants & assumptions
//! ------------------------
//! - Each kernel term lies in `(0, 1]`, so `0 < F(β) ≤ n` for every finite
//!   `β`. The supremum `n` is attained only by an exact interpolant.
//! - Far from the optimum the Hessian can be indefinite or even positive
//!   definite; direction selection handles that, not this module.
//!
//! Conventions
//! -----------
//! - `F` is **maximized**; no sign flip to a cost is applied here.
//! - Inputs are borrowed from a validated [`RegressionData`]; only the length
//!   of `β` is checked per call.
//!
//! Testing notes
//! -------------
//! - Unit tests compare the analytic gradient and Hessian against central
//!   finite differences (`finitediff`), check the bound `F ≤ n`, and
//!   verify exact Hessian symmetry.
use crate::regression::{
    data::RegressionData,
    errors::FitResult,
    kernel::GaussianKernel,
    types::{Beta, Grad, Hessian},
    validation::validate_beta,
};
use ndarray::{Array1, Array2};

/// Objective value, gradient, and Hessian at a single point.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// `F(β)`.
    pub value: f64,
    /// `∇F(β)`.
    pub gradient: Grad,
    /// `∇²F(β)`.
    pub hessian: Hessian,
}

/// CorrentropyObjective — `F(β)` over a borrowed dataset.
///
/// Cheap to construct and `Copy`; owns no buffers. Every evaluation
/// recomputes residuals from scratch, so it holds no state between calls.
#[derive(Debug, Clone, Copy)]
pub struct CorrentropyObjective<'a> {
    data: &'a RegressionData,
    kernel: GaussianKernel,
}

impl<'a> CorrentropyObjective<'a> {
    pub fn new(data: &'a RegressionData, kernel: GaussianKernel) -> Self {
        Self { data, kernel }
    }

    pub fn data(&self) -> &'a RegressionData {
        self.data
    }

    pub fn kernel(&self) -> &GaussianKernel {
        &self.kernel
    }

    /// Number of coefficients `m`.
    pub fn dim(&self) -> usize {
        self.data.n_basis()
    }

    /// Upper bound `n·g(0) = n` on the objective.
    pub fn upper_bound(&self) -> f64 {
        self.data.n_samples() as f64
    }

    /// Evaluate `F(β)`.
    ///
    /// # Errors
    /// `FitError::BetaLengthMismatch` if `beta.len() != m`.
    pub fn value(&self, beta: &Beta) -> FitResult<f64> {
        validate_beta(beta, self.dim())?;
        Ok(self.value_unchecked(beta))
    }

    /// Evaluate `∇F(β)`.
    ///
    /// # Errors
    /// `FitError::BetaLengthMismatch` if `beta.len() != m`.
    pub fn gradient(&self, beta: &Beta) -> FitResult<Grad> {
        validate_beta(beta, self.dim())?;
        let residuals = self.data.residuals_unchecked(beta);
        let slopes = residuals.mapv(|d| self.kernel.first_derivative(d));
        Ok(self.gradient_from_slopes(&slopes))
    }

    /// Evaluate `∇²F(β)`.
    ///
    /// # Errors
    /// `FitError::BetaLengthMismatch` if `beta.len() != m`.
    pub fn hessian(&self, beta: &Beta) -> FitResult<Hessian> {
        validate_beta(beta, self.dim())?;
        let residuals = self.data.residuals_unchecked(beta);
        let curvatures = residuals.mapv(|d| self.kernel.second_derivative(d));
        Ok(self.hessian_from_curvatures(&curvatures))
    }

    /// Evaluate `F`, `∇F`, and `∇²F` from a single residual pass.
    ///
    /// # Errors
    /// `FitError::BetaLengthMismatch` if `beta.len() != m`.
    pub fn evaluate(&self, beta: &Beta) -> FitResult<Evaluation> {
        validate_beta(beta, self.dim())?;
        let residuals = self.data.residuals_unchecked(beta);
        let n = residuals.len();
        let mut value = 0.0;
        let mut slopes = Array1::<f64>::zeros(n);
        let mut curvatures = Array1::<f64>::zeros(n);
        for (i, &d) in residuals.iter().enumerate() {
            let (g, g1, g2) = self.kernel.derivatives(d);
            value += g;
            slopes[i] = g1;
            curvatures[i] = g2;
        }
        Ok(Evaluation {
            value,
            gradient: self.gradient_from_slopes(&slopes),
            hessian: self.hessian_from_curvatures(&curvatures),
        })
    }

    // ---- Helper methods ----

    /// `F(β)` for a `β` whose length is already known to be `m`.
    pub(crate) fn value_unchecked(&self, beta: &Beta) -> f64 {
        self.data.residuals_unchecked(beta).iter().map(|&d| self.kernel.value(d)).sum()
    }

    /// `∇F[k] = −Σ_i M[i][k]·g′(δ_i)`, i.e. `−Mᵀ g′`.
    fn gradient_from_slopes(&self, slopes: &Array1<f64>) -> Grad {
        -self.data.design().t().dot(slopes)
    }

    /// `∇²F = Mᵀ diag(g″) M`, upper triangle accumulated then mirrored.
    fn hessian_from_curvatures(&self, curvatures: &Array1<f64>) -> Hessian {
        let design = self.data.design();
        let m = design.ncols();
        let mut hess = Array2::<f64>::zeros((m, m));
        for (row, &w) in design.rows().into_iter().zip(curvatures.iter()) {
            for k in 0..m {
                let wk = w * row[k];
                if wk == 0.0 {
                    continue;
                }
                for l in k..m {
                    hess[[k, l]] += wk * row[l];
                }
            }
        }
        for k in 0..m {
            for l in (k + 1)..m {
                hess[[l, k]] = hess[[k, l]];
            }
        }
        hess
    }
}
