//! Integration tests for the correntropy fitting pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end path: a problem file on disk, through the
//!   dataset loader, the Newton/gradient optimizer, and back out through the
//!   vector writer.
//! - Check the robustness claim that motivates correntropy: a single severe
//!   outlier drags least squares far off, while narrowing `σ` pulls the fit
//!   back onto the clean data.
//!
//! Coverage
//! --------
//! - `dataset`: `load_problem`, `save_beta`, `read_vector` on real files.
//! - `regression::solver`: `fit`, `fit_correntropy`, `FitOutcome` traces.
//! - `regression::baseline`: `least_squares` as the non-robust reference.
//! - The `CorrEntropyFit` binary: success path and exit codes.
//!
//! Exclusions
//! ----------
//! - Kernel derivatives, direction selection, and line-search details are
//!   covered by unit tests next to their modules.
use approx::assert_abs_diff_eq;
use correntropy_fit::{
    dataset::{load_problem, read_vector, save_beta},
    regression::{
        errors::{EXIT_DIMENSION_MISMATCH, EXIT_USAGE},
        prelude::*,
    },
};
use ndarray::{Array1, Array2, array};
use std::{fs, io::BufReader, path::Path, process::Command};

/// Purpose
/// -------
/// Ten points on `y = 1 + 2x` with small deterministic noise, and the last
/// response shifted by +50.
///
/// Returns
/// -------
/// - `(B, M)` with `M = [1, x]` rows for `x = 0..9`.
fn line_with_outlier() -> (Response, Design) {
    let noise = [0.1, -0.2, 0.05, 0.15, -0.1, 0.0, 0.2, -0.15, 0.1, -0.05];
    let mut response = Array1::from_iter((0..10).map(|i| 1.0 + 2.0 * i as f64 + noise[i]));
    response[9] += 50.0;
    let design = Array2::from_shape_fn((10, 2), |(i, j)| if j == 0 { 1.0 } else { i as f64 });
    (response, design)
}

fn write_problem(path: &Path, sigma: f64, response: &Response, design: &Design) {
    let mut text = format!("{sigma}\n{}\n", response.len());
    for v in response {
        text.push_str(&format!("{v}\n"));
    }
    text.push_str(&format!("{} {}\n", design.nrows(), design.ncols()));
    for row in design.rows() {
        let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        text.push_str(&cells.join(" "));
        text.push('\n');
    }
    fs::write(path, text).unwrap();
}

fn distance_to(beta: &Beta, truth: &[f64]) -> f64 {
    beta.iter().zip(truth).map(|(b, t)| (b - t).powi(2)).sum::<f64>().sqrt()
}

#[test]
// Purpose
// -------
// Load a perfect-fit problem from disk, fit it, save the coefficients, and
// read them back.
//
// Given
// -----
// - σ = 1, B = [2, 4, 6], M = [[1], [2], [3]].
//
// Expect
// ------
// - β ≈ [2] within 1e-4 and F ≈ n = 3.
// - The saved file reads back to the same vector exactly.
fn file_pipeline_recovers_perfect_fit() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("problem.txt");
    let output = dir.path().join("beta.txt");
    write_problem(&input, 1.0, &array![2.0, 4.0, 6.0], &array![[1.0], [2.0], [3.0]]);

    let (sigma, data) = load_problem(&input).unwrap().into_data().unwrap();
    let outcome = fit(&data, sigma, &NewtonOptions::default()).unwrap();
    assert_abs_diff_eq!(outcome.beta[0], 2.0, epsilon = 1e-4);
    assert_abs_diff_eq!(outcome.objective, 3.0, epsilon = 1e-8);
    assert!(outcome.status.is_terminal());

    save_beta(&output, &outcome.beta).unwrap();
    let back = read_vector(BufReader::new(fs::File::open(&output).unwrap())).unwrap();
    assert_eq!(back, outcome.beta);
}

#[test]
// Purpose
// -------
// Shrinking σ moves the fit toward the outlier-free line, away from the
// least-squares answer.
//
// Given
// -----
// - `line_with_outlier()`; true coefficients [1, 2].
//
// Expect
// ------
// - Least squares lands far from [1, 2].
// - σ = 20 improves on it; σ = 2 lands within 0.05 of [1, 2].
fn narrow_sigma_resists_outlier() {
    let (response, design) = line_with_outlier();
    let data = RegressionData::new(response, design).unwrap();
    let truth = [1.0, 2.0];
    let opts = NewtonOptions::default();

    let ls = least_squares(&data).unwrap();
    let wide = fit(&data, 20.0, &opts).unwrap();
    let narrow = fit(&data, 2.0, &opts).unwrap();

    let d_ls = distance_to(&ls, &truth);
    let d_wide = distance_to(&wide.beta, &truth);
    let d_narrow = distance_to(&narrow.beta, &truth);

    assert!(d_ls > 5.0, "least squares unexpectedly robust: {ls}");
    assert!(d_wide < d_ls, "σ=20 {d_wide} vs least squares {d_ls}");
    assert!(d_narrow < d_wide, "σ=2 {d_narrow} vs σ=20 {d_wide}");
    assert!(d_narrow < 0.05, "σ=2 fit {} too far from truth", narrow.beta);
}

#[test]
// Purpose
// -------
// The objective trace never decreases and never exceeds `n`, for several
// bandwidths on data with an outlier.
fn trace_is_monotone_and_bounded() {
    let (response, design) = line_with_outlier();
    let n = response.len() as f64;
    for sigma in [0.5, 1.0, 5.0] {
        let outcome =
            fit_correntropy(response.clone(), design.clone(), sigma, &NewtonOptions::default())
                .unwrap();
        assert_eq!(outcome.trace.len(), outcome.iterations + 1);
        for pair in outcome.trace.windows(2) {
            assert!(pair[1] > pair[0], "σ={sigma}: trace decreased {pair:?}");
        }
        assert!(outcome.trace.iter().all(|&f| f <= n));
        assert_eq!(outcome.newton_steps + outcome.gradient_steps, outcome.iterations);
    }
}

#[test]
fn mismatched_file_fails_before_fitting() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.txt");
    write_problem(&input, 1.0, &array![1.0, 2.0], &array![[1.0], [2.0], [3.0]]);

    let err = load_problem(&input).unwrap().into_data().unwrap_err();
    assert_eq!(err, FitError::DimensionMismatch { response_len: 2, design_rows: 3 });
    assert_eq!(err.exit_code(), EXIT_DIMENSION_MISMATCH);
}

#[test]
// Purpose
// -------
// Drive the binary: a valid run writes β, a wrong argument count exits with
// the usage code, and a dimension mismatch exits with its own code.
fn binary_exit_codes() {
    let exe = env!("CARGO_BIN_EXE_CorrEntropyFit");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("problem.txt");
    let output = dir.path().join("beta.txt");
    write_problem(&input, 1.0, &array![2.0, 4.0, 6.0], &array![[1.0], [2.0], [3.0]]);

    let ok = Command::new(exe).arg(&input).arg(&output).output().unwrap();
    assert!(ok.status.success(), "stderr: {}", String::from_utf8_lossy(&ok.stderr));
    let beta = read_vector(BufReader::new(fs::File::open(&output).unwrap())).unwrap();
    assert_eq!(beta.len(), 1);
    assert_abs_diff_eq!(beta[0], 2.0, epsilon = 1e-4);

    let usage = Command::new(exe).arg(&input).output().unwrap();
    assert_eq!(usage.status.code(), Some(EXIT_USAGE));

    let bad = dir.path().join("bad.txt");
    write_problem(&bad, 1.0, &array![1.0, 2.0], &array![[1.0], [2.0], [3.0]]);
    let mismatch = Command::new(exe).arg(&bad).arg(&output).output().unwrap();
    assert_eq!(mismatch.status.code(), Some(EXIT_DIMENSION_MISMATCH));
    assert!(!mismatch.stderr.is_empty());
}
