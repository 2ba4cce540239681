//! Token reader for the plain-text dataset format.
//!
//! A dataset file is a stream of whitespace-separated tokens; line breaks carry
//! no meaning. Items are:
//!
//! - scalar: one real number;
//! - vector: a length `n` followed by `n` reals;
//! - matrix: `rows cols` followed by `rows · cols` reals in row-major order.
//!
//! A problem file holds `σ`, then `B`, then `M`, in that order.
use crate::regression::{
    data::RegressionData,
    errors::{FitError, FitResult},
    types::{Design, Response},
};
use ndarray::{Array1, Array2};
use std::{
    collections::VecDeque,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Upper bound on entries reserved up front; headers are untrusted.
const MAX_PREALLOC: usize = 1 << 16;

/// Raw contents of a problem file, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    pub sigma: f64,
    pub response: Response,
    pub design: Design,
}

impl Problem {
    /// Validate `(B, M)` into [`RegressionData`], keeping `σ` alongside.
    ///
    /// # Errors
    /// Any [`RegressionData::new`] failure, dimension mismatch first.
    pub fn into_data(self) -> FitResult<(f64, RegressionData)> {
        let data = RegressionData::new(self.response, self.design)?;
        Ok((self.sigma, data))
    }
}

/// Pulls whitespace-separated tokens from a buffered source, one line at a time.
#[derive(Debug)]
pub struct TokenReader<R> {
    inner: R,
    pending: VecDeque<String>,
    line: String,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, pending: VecDeque::new(), line: String::new() }
    }

    fn next_token(&mut self, what: &'static str) -> FitResult<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            self.line.clear();
            let read = self
                .inner
                .read_line(&mut self.line)
                .map_err(|e| FitError::io(format!("reading {what}"), e))?;
            if read == 0 {
                return Err(FitError::UnexpectedEof { what });
            }
            self.pending.extend(self.line.split_whitespace().map(str::to_owned));
        }
    }

    fn next_real(&mut self, what: &'static str) -> FitResult<f64> {
        let token = self.next_token(what)?;
        token.parse::<f64>().map_err(|_| FitError::ParseToken { what, token })
    }

    fn next_dimension(&mut self, what: &'static str) -> FitResult<usize> {
        let token = self.next_token(what)?;
        token.parse::<usize>().map_err(|_| FitError::InvalidDimension { what, value: token })
    }

    /// Read a single real number.
    pub fn read_scalar(&mut self) -> FitResult<f64> {
        self.next_real("scalar")
    }

    /// Read a length header and that many reals.
    pub fn read_vector(&mut self) -> FitResult<Array1<f64>> {
        let len = self.next_dimension("vector length")?;
        let mut values = Vec::with_capacity(len.min(MAX_PREALLOC));
        for _ in 0..len {
            values.push(self.next_real("vector entry")?);
        }
        Ok(Array1::from_vec(values))
    }

    /// Read a `rows cols` header and the row-major entries.
    pub fn read_matrix(&mut self) -> FitResult<Array2<f64>> {
        let rows = self.next_dimension("matrix rows")?;
        let cols = self.next_dimension("matrix columns")?;
        let total = rows.checked_mul(cols).ok_or_else(|| FitError::InvalidDimension {
            what: "matrix size",
            value: format!("{rows} x {cols}"),
        })?;
        let mut values = Vec::with_capacity(total.min(MAX_PREALLOC));
        for _ in 0..total {
            values.push(self.next_real("matrix entry")?);
        }
        Array2::from_shape_vec((rows, cols), values).map_err(|e| FitError::InvalidDimension {
            what: "matrix shape",
            value: e.to_string(),
        })
    }

    /// Read `σ`, `B`, `M` in file order.
    pub fn read_problem(&mut self) -> FitResult<Problem> {
        let sigma = self.read_scalar()?;
        let response = self.read_vector()?;
        let design = self.read_matrix()?;
        Ok(Problem { sigma, response, design })
    }
}

/// Read one scalar from `input`.
pub fn read_scalar<R: BufRead>(input: R) -> FitResult<f64> {
    TokenReader::new(input).read_scalar()
}

/// Read one vector from `input`.
pub fn read_vector<R: BufRead>(input: R) -> FitResult<Array1<f64>> {
    TokenReader::new(input).read_vector()
}

/// Read one matrix from `input`.
pub fn read_matrix<R: BufRead>(input: R) -> FitResult<Array2<f64>> {
    TokenReader::new(input).read_matrix()
}

/// Read a full problem (`σ`, `B`, `M`) from `input`.
pub fn read_problem<R: BufRead>(input: R) -> FitResult<Problem> {
    TokenReader::new(input).read_problem()
}

/// Open `path` and read a problem from it.
///
/// # Errors
/// `FitError::Io` if the file cannot be opened, otherwise as [`read_problem`].
pub fn load_problem<P: AsRef<Path>>(path: P) -> FitResult<Problem> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| FitError::io(format!("opening input file '{}'", path.display()), e))?;
    read_problem(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::io::Cursor;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Parsing of each item kind, independent of line layout.
    // - Sequential reads of a full problem.
    // - Each failure mode: truncation, bad reals, bad dimensions.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Tokens may be split across lines arbitrarily.
    fn layout_is_whitespace_agnostic() {
        let one_line = read_vector(Cursor::new("3 1.5 -2 4e-1")).unwrap();
        let many_lines = read_vector(Cursor::new("3\n1.5\n\n  -2\t4e-1\n")).unwrap();
        assert_eq!(one_line, array![1.5, -2.0, 0.4]);
        assert_eq!(one_line, many_lines);
    }

    #[test]
    fn matrix_is_row_major() {
        let m = read_matrix(Cursor::new("2 3\n1 2 3\n4 5 6\n")).unwrap();
        assert_eq!(m, array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    }

    #[test]
    // Purpose
    // -------
    // A problem file yields sigma, response, and design in order, and
    // validates into `RegressionData`.
    fn reads_full_problem() {
        let text = "1.0\n3\n2 4 6\n3 1\n1\n2\n3\n";
        let problem = read_problem(Cursor::new(text)).unwrap();
        assert_eq!(problem.sigma, 1.0);
        assert_eq!(problem.response, array![2.0, 4.0, 6.0]);
        assert_eq!(problem.design, array![[1.0], [2.0], [3.0]]);

        let (sigma, data) = problem.into_data().unwrap();
        assert_eq!(sigma, 1.0);
        assert_eq!(data.n_samples(), 3);
        assert_eq!(data.n_basis(), 1);
    }

    #[test]
    fn mismatched_problem_fails_on_validation() {
        let problem = read_problem(Cursor::new("1.0 2 1 2 3 1 1 2 3")).unwrap();
        assert_eq!(
            problem.into_data().unwrap_err(),
            FitError::DimensionMismatch { response_len: 2, design_rows: 3 }
        );
    }

    #[test]
    // Purpose
    // -------
    // Each malformed input maps to a dataset error naming what was expected.
    fn malformed_input_rejected() {
        assert_eq!(
            read_vector(Cursor::new("3 1 2")),
            Err(FitError::UnexpectedEof { what: "vector entry" })
        );
        assert_eq!(read_scalar(Cursor::new("")), Err(FitError::UnexpectedEof { what: "scalar" }));
        assert_eq!(
            read_vector(Cursor::new("2 1 x")),
            Err(FitError::ParseToken { what: "vector entry", token: "x".to_string() })
        );
        assert_eq!(
            read_vector(Cursor::new("-1")),
            Err(FitError::InvalidDimension { what: "vector length", value: "-1".to_string() })
        );
        assert!(matches!(
            read_matrix(Cursor::new("2 2.5 1 2")),
            Err(FitError::InvalidDimension { what: "matrix columns", .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Oversized headers followed by a short body end in a dataset error, not
    // an allocation failure.
    fn oversized_headers_fail_cleanly() {
        assert_eq!(
            read_vector(Cursor::new("2305843009213693952 1 2")),
            Err(FitError::UnexpectedEof { what: "vector entry" })
        );
        assert_eq!(
            read_matrix(Cursor::new("1000000000 1000000000 1 2")),
            Err(FitError::UnexpectedEof { what: "matrix entry" })
        );
        assert!(matches!(
            read_matrix(Cursor::new("18446744073709551615 2")),
            Err(FitError::InvalidDimension { what: "matrix size", .. })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_problem(dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, FitError::Io { .. }));
    }
}
