//! Vector writer for the plain-text dataset format.
//!
//! Output is the length on its own line, then one value per line. Values use
//! Rust's shortest round-trip float formatting, so reading the file back
//! reproduces them exactly.
use crate::regression::errors::{FitError, FitResult};
use ndarray::Array1;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Write `values` to `out` with a length header.
pub fn write_vector<W: Write>(out: &mut W, values: &Array1<f64>) -> FitResult<()> {
    let wrap = |e| FitError::io("writing vector", e);
    writeln!(out, "{}", values.len()).map_err(wrap)?;
    for v in values.iter() {
        writeln!(out, "{v}").map_err(wrap)?;
    }
    Ok(())
}

/// Create (or truncate) `path` and write `beta` to it.
///
/// # Errors
/// `FitError::Io` if the file cannot be created, written, or flushed.
pub fn save_beta<P: AsRef<Path>>(path: P, beta: &Array1<f64>) -> FitResult<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| FitError::io(format!("creating output file '{}'", path.display()), e))?;
    let mut out = BufWriter::new(file);
    write_vector(&mut out, beta)?;
    out.flush().map_err(|e| FitError::io(format!("flushing '{}'", path.display()), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::reader::read_vector;
    use ndarray::array;
    use std::io::Cursor;

    #[test]
    fn header_then_one_value_per_line() {
        let mut buf = Vec::new();
        write_vector(&mut buf, &array![2.0, -0.5, 1e-3]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "3\n2\n-0.5\n0.001\n");
    }

    #[test]
    // Purpose
    // -------
    // Values with no short decimal form read back bit-for-bit.
    fn awkward_values_read_back_exactly() {
        let values = array![0.1 + 0.2, std::f64::consts::PI, -1.0 / 3.0, 6.02214076e23, 5e-324];
        let mut buf = Vec::new();
        write_vector(&mut buf, &values).unwrap();
        let back = read_vector(Cursor::new(buf)).unwrap();
        assert_eq!(back, values);
    }

    #[test]
    fn save_beta_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("beta.txt");
        save_beta(&path, &array![1.25, 3.0]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "2\n1.25\n3\n");
    }

    #[test]
    fn unwritable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = save_beta(dir.path().join("missing").join("beta.txt"), &array![1.0]).unwrap_err();
        assert!(matches!(err, FitError::Io { .. }));
    }
}
