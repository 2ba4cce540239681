//! dataset — plain-text loader and writer for fitting problems.
//!
//! Reads the bandwidth `σ`, response `B`, and design `M` from a token stream
//! and writes coefficient vectors back out. See [`reader`] for the format.

pub mod reader;
pub mod writer;

pub use reader::{
    Problem, TokenReader, load_problem, read_matrix, read_problem, read_scalar, read_vector,
};
pub use writer::{save_beta, write_vector};
