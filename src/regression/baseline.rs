//! Ordinary least-squares baseline.
//!
//! Solves `min_β ‖B − Mβ‖₂` with an SVD of the design matrix, for comparing
//! correntropy fits against the non-robust estimator they replace.
use crate::regression::{
    data::RegressionData,
    errors::{FitError, FitResult},
    types::Beta,
};
use nalgebra::{DMatrix, DVector};

/// Relative singular-value cutoff for the least-squares solve.
const LSTSQ_RCOND: f64 = 1e-12;

/// Least-squares coefficients for `data`.
///
/// Singular values below `LSTSQ_RCOND · σ_max` are discarded (minimum-norm
/// solution for rank-deficient designs).
///
/// # Errors
/// Returns [`FitError::SingularDesign`] if the design matrix has no
/// singular value above the cutoff (e.g. all zeros).
pub fn least_squares(data: &RegressionData) -> FitResult<Beta> {
    let design = data.design();
    let (n, m) = design.dim();
    let a = DMatrix::from_fn(n, m, |i, j| design[[i, j]]);
    let b = DVector::from_iterator(n, data.response().iter().copied());

    let svd = a.svd(true, true);
    let max_sv = svd.singular_values.max();
    if max_sv.is_nan() || max_sv <= 0.0 {
        return Err(FitError::SingularDesign);
    }
    let solution = svd.solve(&b, LSTSQ_RCOND * max_sv).map_err(|_| FitError::SingularDesign)?;
    Ok(Beta::from_iter(solution.iter().copied()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{Array2, array};

    #[test]
    // Purpose
    // -------
    // Exact data is reproduced; an overdetermined line fit matches the
    // closed-form answer.
    fn matches_closed_form() {
        let data = RegressionData::new(array![2.0, 4.0, 6.0], array![[1.0], [2.0], [3.0]]).unwrap();
        assert_abs_diff_eq!(least_squares(&data).unwrap()[0], 2.0, epsilon = 1e-12);

        // y = [0, 1, 1, 3] on x = [0, 1, 2, 3] with intercept: β = [-0.1, 0.9].
        let data = RegressionData::new(
            array![0.0, 1.0, 1.0, 3.0],
            array![[1.0, 0.0], [1.0, 1.0], [1.0, 2.0], [1.0, 3.0]],
        )
        .unwrap();
        let beta = least_squares(&data).unwrap();
        assert_abs_diff_eq!(beta[0], -0.1, epsilon = 1e-10);
        assert_abs_diff_eq!(beta[1], 0.9, epsilon = 1e-10);
    }

    #[test]
    fn zero_design_is_singular() {
        let data = RegressionData::new(array![1.0, 2.0], Array2::zeros((2, 2))).unwrap();
        assert_eq!(least_squares(&data), Err(FitError::SingularDesign));
    }
}
