//! Unified error surface for correntropy fitting and dataset I/O.
//!
//! This module defines [`FitError`], the single error type returned by the
//! fitting layer, the option builders, and the dataset loader/writer, plus the
//! [`FitResult`] alias used across the crate.
//!
//! ## Conventions
//! - **Indices are 0-based** (rows of the design matrix are samples, columns
//!   are basis functions).
//! - Every fatal condition is detected before the Newton loop starts; the loop
//!   itself never produces an error. A line search that exhausts its budget is
//!   a normal termination (`FitStatus::StagnationStop`), not a `FitError`.
//! - Each variant maps to a process exit code via [`FitError::exit_code`], so
//!   front-ends can turn a failure into a typed terminal exit.
use thiserror::Error;

/// Crate-wide result alias for fitting and dataset operations.
pub type FitResult<T> = Result<T, FitError>;

/// Exit code reserved for malformed command-line invocations.
pub const EXIT_USAGE: i32 = 2;
/// Exit code for a response/design row-count mismatch.
pub const EXIT_DIMENSION_MISMATCH: i32 = 3;
/// Exit code for any other invalid input (non-finite data, bad sigma, ...).
pub const EXIT_INVALID_INPUT: i32 = 4;
/// Exit code for rejected optimizer options.
pub const EXIT_INVALID_OPTIONS: i32 = 5;
/// Exit code for dataset read/write failures.
pub const EXIT_DATASET: i32 = 6;
/// Exit code for a least-squares baseline that cannot be solved.
pub const EXIT_BASELINE: i32 = 7;

/// Unified error type for correntropy regression.
///
/// Covers input validation, optimizer configuration, dataset parsing, and
/// the least-squares baseline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    // ---- Input validation ----
    /// Response length does not match the number of design-matrix rows.
    #[error("Dimension mismatch: response has {response_len} entries but design matrix has {design_rows} rows")]
    DimensionMismatch { response_len: usize, design_rows: usize },

    /// Response vector has no observations.
    #[error("Response vector is empty")]
    EmptyResponse,

    /// Design matrix has no basis-function columns.
    #[error("Design matrix has no columns")]
    EmptyDesign,

    /// A response entry is NaN/±inf.
    #[error("Non-finite response at index {index}: {value}")]
    NonFiniteResponse { index: usize, value: f64 },

    /// A design-matrix entry is NaN/±inf.
    #[error("Non-finite design entry at ({row}, {col}): {value}")]
    NonFiniteDesign { row: usize, col: usize, value: f64 },

    /// Bandwidth must be finite and strictly positive.
    #[error("Invalid sigma {value}: {reason}")]
    InvalidSigma { value: f64, reason: &'static str },

    /// A coefficient vector does not match the number of design columns.
    #[error("Beta length mismatch: expected {expected}, found {found}")]
    BetaLengthMismatch { expected: usize, found: usize },

    // ---- NewtonOptions ----
    /// Maximum outer iterations needs to be positive.
    #[error("Invalid maximum iterations {max_iter}: {reason}")]
    InvalidMaxIter { max_iter: usize, reason: &'static str },

    /// Line-search shrink factor must lie strictly inside (0, 1).
    #[error("Invalid shrink factor {value}: {reason}")]
    InvalidShrinkFactor { value: f64, reason: &'static str },

    /// Line-search attempt budget needs to be positive.
    #[error("Invalid line-search budget {max_attempts}: {reason}")]
    InvalidMaxLineSearch { max_attempts: usize, reason: &'static str },

    /// Gradient tolerance needs to be positive and finite.
    #[error("Invalid gradient tolerance {tol}: {reason}")]
    InvalidTolGrad { tol: f64, reason: &'static str },

    /// Singular-value cutoff needs to be finite and non-negative.
    #[error("Invalid singular tolerance {tol}: {reason}")]
    InvalidSingularTol { tol: f64, reason: &'static str },

    // ---- Dataset I/O ----
    /// Underlying reader/writer failed.
    #[error("I/O error while {context}: {message}")]
    Io { context: String, message: String },

    /// Stream ended before the requested item was complete.
    #[error("Unexpected end of input while reading {what}")]
    UnexpectedEof { what: &'static str },

    /// A token could not be parsed as the requested type.
    #[error("Could not parse {what} from token '{token}'")]
    ParseToken { what: &'static str, token: String },

    /// A dimension header is not usable.
    #[error("Invalid {what} dimension: {value}")]
    InvalidDimension { what: &'static str, value: String },

    // ---- Baseline ----
    /// Least-squares baseline found no usable singular value.
    #[error("Design matrix is numerically singular; least-squares baseline unavailable")]
    SingularDesign,
}

impl FitError {
    /// Process exit code associated with this failure.
    ///
    /// Usage errors are owned by the command-line parser and use
    /// [`EXIT_USAGE`]; no `FitError` maps to it.
    pub fn exit_code(&self) -> i32 {
        match self {
            FitError::DimensionMismatch { .. } => EXIT_DIMENSION_MISMATCH,
            FitError::EmptyResponse
            | FitError::EmptyDesign
            | FitError::NonFiniteResponse { .. }
            | FitError::NonFiniteDesign { .. }
            | FitError::InvalidSigma { .. }
            | FitError::BetaLengthMismatch { .. } => EXIT_INVALID_INPUT,
            FitError::InvalidMaxIter { .. }
            | FitError::InvalidShrinkFactor { .. }
            | FitError::InvalidMaxLineSearch { .. }
            | FitError::InvalidTolGrad { .. }
            | FitError::InvalidSingularTol { .. } => EXIT_INVALID_OPTIONS,
            FitError::Io { .. }
            | FitError::UnexpectedEof { .. }
            | FitError::ParseToken { .. }
            | FitError::InvalidDimension { .. } => EXIT_DATASET,
            FitError::SingularDesign => EXIT_BASELINE,
        }
    }

    /// Wrap a `std::io::Error` with a short description of the operation.
    pub fn io(context: impl Into<String>, err: std::io::Error) -> Self {
        FitError::Io { context: context.into(), message: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The exit-code mapping for each error family.
    // - Display strings for the variants users see most often.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that each error family maps to its documented exit code.
    //
    // Expect
    // ------
    // - Dimension mismatch, input, options, dataset, and baseline errors all
    //   map to distinct non-zero codes, none equal to the usage code.
    fn exit_codes_are_distinct_per_family() {
        let cases = [
            (FitError::DimensionMismatch { response_len: 3, design_rows: 2 }, EXIT_DIMENSION_MISMATCH),
            (FitError::InvalidSigma { value: 0.0, reason: "x" }, EXIT_INVALID_INPUT),
            (FitError::InvalidMaxIter { max_iter: 0, reason: "x" }, EXIT_INVALID_OPTIONS),
            (FitError::UnexpectedEof { what: "vector" }, EXIT_DATASET),
            (FitError::SingularDesign, EXIT_BASELINE),
        ];
        for (err, code) in cases {
            assert_eq!(err.exit_code(), code, "{err}");
            assert_ne!(err.exit_code(), 0);
            assert_ne!(err.exit_code(), EXIT_USAGE);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the dimension-mismatch message names both lengths.
    fn dimension_mismatch_display_names_both_lengths() {
        let err = FitError::DimensionMismatch { response_len: 4, design_rows: 5 };
        let msg = err.to_string();
        assert!(msg.contains('4'));
        assert!(msg.contains('5'));
    }

    #[test]
    // Purpose
    // -------
    // Verify that `FitError::io` keeps the context and the OS message.
    fn io_helper_keeps_context() {
        let raw = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
        let err = FitError::io("opening input.txt", raw);
        match &err {
            FitError::Io { context, message } => {
                assert_eq!(context, "opening input.txt");
                assert!(message.contains("missing file"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
        assert_eq!(err.exit_code(), EXIT_DATASET);
    }
}
