//! Gaussian similarity kernel used by the correntropy criterion.
//!
//! With `α = 1/(2σ²)`:
//! - `g(x)   = exp(-α x²)`, peaked at `g(0) = 1`;
//! - `g'(x)  = -2α x exp(-α x²)`;
//! - `g''(x) = (-2α + 4α² x²) exp(-α x²)`.
//!
//! Only the peaked form (`α > 0`) is representable: the constructor rejects
//! any bandwidth that would make `α` non-positive or non-finite.
use crate::regression::{
    errors::{FitError, FitResult},
    validation::validate_sigma,
};

/// Gaussian kernel parametrized by its bandwidth `σ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianKernel {
    sigma: f64,
    alpha: f64,
}

impl GaussianKernel {
    /// Build a kernel from a bandwidth.
    ///
    /// # Errors
    /// Returns `FitError::InvalidSigma` if `sigma` is non-finite or `<= 0`,
    /// or so extreme that `α = 1/(2σ²)` overflows or underflows to zero.
    pub fn new(sigma: f64) -> FitResult<Self> {
        validate_sigma(sigma)?;
        let alpha = 1.0 / (2.0 * sigma * sigma);
        if !alpha.is_finite() {
            return Err(FitError::InvalidSigma {
                value: sigma,
                reason: "Sigma is too small; kernel width overflows.",
            });
        }
        if alpha <= 0.0 {
            return Err(FitError::InvalidSigma {
                value: sigma,
                reason: "Sigma is too large; kernel is flat.",
            });
        }
        Ok(Self { sigma, alpha })
    }

    /// Bandwidth `σ`.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Kernel rate `α = 1/(2σ²)`.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// `g(x)`.
    #[inline]
    pub fn value(&self, x: f64) -> f64 {
        (-self.alpha * x * x).exp()
    }

    /// `g'(x)`.
    #[inline]
    pub fn first_derivative(&self, x: f64) -> f64 {
        -2.0 * self.alpha * x * self.value(x)
    }

    /// `g''(x)`.
    #[inline]
    pub fn second_derivative(&self, x: f64) -> f64 {
        let a = self.alpha;
        (-2.0 * a + 4.0 * a * a * x * x) * self.value(x)
    }

    /// `(g(x), g'(x), g''(x))` sharing a single exponential.
    #[inline]
    pub fn derivatives(&self, x: f64) -> (f64, f64, f64) {
        let a = self.alpha;
        let e = (-a * x * x).exp();
        (e, -2.0 * a * x * e, (-2.0 * a + 4.0 * a * a * x * x) * e)
    }
}
