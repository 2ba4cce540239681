//! Backtracking line search for correntropy ascent.
//!
//! Starting from a unit step, the search evaluates `F(β + s·d)` and accepts
//! the first scale `s` for which the objective **strictly** exceeds the
//! current value. After each rejection the scale is multiplied by a fixed
//! shrink factor, up to a fixed number of attempts.
//!
//! The search is a pure function of `(β, d, F(β))`: it never mutates the
//! current point, and on failure returns no point at all. Every accepted
//! step therefore increases the objective.
use crate::regression::{
    errors::FitResult,
    objective::CorrentropyObjective,
    types::Beta,
    validation::{validate_beta, verify_shrink_factor},
};
use ndarray::Array1;

/// Default geometric shrink factor applied after a rejected trial step.
pub const DEFAULT_SHRINK_FACTOR: f64 = 0.8;

/// Default number of trial steps before the search gives up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Configuration for the backtracking search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSearchConfig {
    /// Factor in `(0, 1)` applied to the step scale after each rejection.
    pub shrink_factor: f64,
    /// Maximum number of objective evaluations.
    pub max_attempts: usize,
}

impl Default for LineSearchConfig {
    fn default() -> Self {
        Self { shrink_factor: DEFAULT_SHRINK_FACTOR, max_attempts: DEFAULT_MAX_ATTEMPTS }
    }
}

/// Outcome of a single backtracking search.
#[derive(Debug, Clone, PartialEq)]
pub enum LineSearchOutcome {
    /// An improving point was found.
    Improved {
        beta: Beta,
        value: f64,
        /// Accepted step scale `s`.
        scale: f64,
        /// Objective evaluations spent, including the accepted one.
        evaluations: usize,
    },
    /// No trial scale improved on the current value within the budget.
    Stagnated { evaluations: usize },
}

impl LineSearchOutcome {
    pub fn is_improved(&self) -> bool {
        matches!(self, LineSearchOutcome::Improved { .. })
    }

    pub fn evaluations(&self) -> usize {
        match self {
            LineSearchOutcome::Improved { evaluations, .. }
            | LineSearchOutcome::Stagnated { evaluations } => *evaluations,
        }
    }
}

/// Run the backtracking search along `direction` from `beta`.
///
/// # Arguments
/// - `objective`: correntropy objective `F`.
/// - `beta`: current point (left untouched).
/// - `direction`: candidate ascent direction, same length as `beta`.
/// - `current_value`: `F(beta)`, the value a trial must strictly exceed.
/// - `config`: shrink factor and attempt budget.
///
/// An all-zero direction cannot improve anything and is reported as
/// stagnated without spending evaluations.
///
/// # Errors
/// - `FitError::BetaLengthMismatch` if `beta` or `direction` has the wrong
///   length.
/// - `FitError::InvalidShrinkFactor` if the shrink factor is outside `(0, 1)`.
pub fn backtracking_search(
    objective: &CorrentropyObjective<'_>, beta: &Beta, direction: &Array1<f64>,
    current_value: f64, config: &LineSearchConfig,
) -> FitResult<LineSearchOutcome> {
    let dim = objective.dim();
    validate_beta(beta, dim)?;
    validate_beta(direction, dim)?;
    verify_shrink_factor(config.shrink_factor)?;

    if direction.iter().all(|&v| v == 0.0) {
        return Ok(LineSearchOutcome::Stagnated { evaluations: 0 });
    }

    let mut scale = 1.0;
    for attempt in 1..=config.max_attempts {
        let trial = beta + &(direction * scale);
        let value = objective.value_unchecked(&trial);
        if value > current_value {
            return Ok(LineSearchOutcome::Improved { beta: trial, value, scale, evaluations: attempt });
        }
        scale *= config.shrink_factor;
    }
    Ok(LineSearchOutcome::Stagnated { evaluations: config.max_attempts })
}
