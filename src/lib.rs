//! correntropy_fit — robust linear-model fitting by maximum correntropy.
//!
//! Purpose
//! -------
//! Serve as the crate root for fitting the coefficients `β` of a linear model
//! `B ≈ Mβ` by maximizing the correntropy criterion, a Gaussian-kernel
//! similarity between observed and predicted responses that is far less
//! sensitive to outliers than squared error.
//!
//! Key behaviors
//! -------------
//! - Re-export the core modules as the public crate surface:
//!   [`regression`] (kernel, objective, optimizer, baseline) and [`dataset`]
//!   (plain-text loader and writer).
//! - The `CorrEntropyFit` binary wires both together as
//!   `CorrEntropyFit <input> <output>`.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is single-threaded and allocation-light; each fit
//!   owns its own iterate and borrows the validated data immutably.
//! - Library code reports failures as [`regression::errors::FitError`] and
//!   never panics on bad input.
//!
//! Conventions
//! -----------
//! - Vectors are `ndarray::Array1<f64>`, matrices `ndarray::Array2<f64>`
//!   with rows indexing samples and columns indexing basis functions.
//! - Diagnostics are emitted through `tracing`; installing a subscriber is
//!   left to the application.
//!
//! Downstream usage
//! ----------------
//! - `use correntropy_fit::regression::prelude::*;` then
//!   `fit(&RegressionData::new(b, m)?, sigma, &NewtonOptions::default())?`.
//!
//! Testing notes
//! -------------
//! - Unit tests live beside each module; `tests/` holds the end-to-end
//!   load → fit → save pipeline.

pub mod dataset;
pub mod regression;
