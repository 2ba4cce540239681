//! solver — damped-Newton / gradient-ascent iterator for correntropy fits.
//!
//! Purpose
//! -------
//! Drive the coefficient vector `β` from its starting point toward a
//! maximizer of the correntropy objective `F(β)`, combining analytic
//! derivatives, ascent-direction selection, and a monotone backtracking line
//! search.
//!
//! Key behaviors
//! -------------
//! - [`NewtonIterator`] is an explicit state machine with states
//!   [`FitStatus::Running`], [`FitStatus::Converged`],
//!   [`FitStatus::StagnationStop`], and [`FitStatus::MaxIterReached`]. Each
//!   call to [`NewtonIterator::step`] performs one outer iteration:
//!   1. evaluate `F(β)`, `∇F(β)`, `∇²F(β)` from one residual pass;
//!   2. optionally stop with `Converged` if `‖∇F‖₂ ≤ tol_grad`;
//!   3. solve `H·d = −g` and keep `d` only if `d·g > 0`, else use `g`;
//!   4. backtrack along the chosen direction; accept the improved point or
//!      stop with `StagnationStop`.
//! - [`fit`], [`fit_from`], and [`fit_correntropy`] are the one-shot entry
//!   points returning a [`FitOutcome`].
//!
//! Invariants & assumptions
//! ------------------------
//! - `β` is only replaced by points whose objective strictly exceeds the
//!   current value, so [`FitOutcome::trace`] is strictly increasing.
//! - At most `max_iter` accepted steps and `max_iter · max_line_search`
//!   line-search evaluations are performed.
//! - All inputs are validated before the first iteration; the loop itself
//!   cannot fail on valid inputs.
//!
//! Conventions
//! -----------
//! - `F` is **maximized** directly; no cost sign flip is involved.
//! - All terminal states return the current `β` as the answer. The status is
//!   reported for diagnostics only.
//!
//! Testing notes
//! -------------
//! - Unit tests cover perfect-fit recovery, monotone traces, the iteration
//!   cap, stagnation, the optional gradient tolerance, and stepping a
//!   terminal iterator.
//! - The integration suite covers outlier robustness against the
//!   least-squares baseline and the full load → fit → save pipeline.
use crate::regression::{
    data::RegressionData,
    direction::{DirectionKind, select_ascent_direction},
    errors::FitResult,
    kernel::GaussianKernel,
    line_search::{LineSearchOutcome, backtracking_search},
    objective::CorrentropyObjective,
    options::NewtonOptions,
    types::{Beta, Design, Response},
    validation::validate_beta,
};
use std::fmt;

/// State of a [`NewtonIterator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitStatus {
    /// More iterations may be taken.
    Running,
    /// Gradient norm fell below `tol_grad`.
    Converged,
    /// The line search found no improving step.
    StagnationStop,
    /// The outer iteration budget was used up.
    MaxIterReached,
}

impl FitStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FitStatus::Running)
    }
}

impl fmt::Display for FitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FitStatus::Running => "running",
            FitStatus::Converged => "converged",
            FitStatus::StagnationStop => "stagnation",
            FitStatus::MaxIterReached => "max-iterations",
        };
        f.write_str(s)
    }
}

/// Result of a correntropy fit.
///
/// - `beta`: fitted coefficients (the answer for every terminal status).
/// - `objective`: `F(beta)`.
/// - `status`: terminal [`FitStatus`].
/// - `iterations`: number of accepted steps.
/// - `grad_norm`: `‖∇F‖₂` at the last evaluated iterate.
/// - `trace`: `F` at the start point and after every accepted step.
/// - `newton_steps` / `gradient_steps`: accepted steps per direction kind.
/// - `objective_evaluations`: objective values computed by line searches.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOutcome {
    pub beta: Beta,
    pub objective: f64,
    pub status: FitStatus,
    pub iterations: usize,
    pub grad_norm: f64,
    pub trace: Vec<f64>,
    pub newton_steps: usize,
    pub gradient_steps: usize,
    pub objective_evaluations: usize,
}

/// Outer-loop state machine for maximizing `F(β)`.
#[derive(Debug, Clone)]
pub struct NewtonIterator<'a> {
    objective: CorrentropyObjective<'a>,
    options: NewtonOptions,
    beta: Beta,
    value: f64,
    grad_norm: f64,
    status: FitStatus,
    iteration: usize,
    trace: Vec<f64>,
    newton_steps: usize,
    gradient_steps: usize,
    objective_evaluations: usize,
    singular_reported: bool,
}

impl<'a> NewtonIterator<'a> {
    /// Start an iterator at `β = 0`.
    ///
    /// # Errors
    /// - `FitError::InvalidSigma` for a non-positive or non-finite bandwidth.
    /// - Any option-validation error from [`NewtonOptions::validate`].
    pub fn new(data: &'a RegressionData, sigma: f64, options: NewtonOptions) -> FitResult<Self> {
        Self::with_start(data, sigma, Beta::zeros(data.n_basis()), options)
    }

    /// Start an iterator at a caller-supplied `β₀`.
    ///
    /// # Errors
    /// As [`NewtonIterator::new`], plus `FitError::BetaLengthMismatch` if
    /// `beta0.len() != m`.
    pub fn with_start(
        data: &'a RegressionData, sigma: f64, beta0: Beta, options: NewtonOptions,
    ) -> FitResult<Self> {
        options.validate()?;
        let kernel = GaussianKernel::new(sigma)?;
        validate_beta(&beta0, data.n_basis())?;
        let objective = CorrentropyObjective::new(data, kernel);
        let value = objective.value_unchecked(&beta0);
        Ok(Self {
            objective,
            options,
            beta: beta0,
            value,
            grad_norm: f64::NAN,
            status: FitStatus::Running,
            iteration: 0,
            trace: vec![value],
            newton_steps: 0,
            gradient_steps: 0,
            objective_evaluations: 0,
            singular_reported: false,
        })
    }

    pub fn status(&self) -> FitStatus {
        self.status
    }

    pub fn beta(&self) -> &Beta {
        &self.beta
    }

    /// Objective value at the current iterate.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Accepted steps so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn trace(&self) -> &[f64] {
        &self.trace
    }

    /// Perform one outer iteration and return the resulting status.
    ///
    /// Calling `step` on a terminal iterator is a no-op that returns the
    /// terminal status again.
    pub fn step(&mut self) -> FitResult<FitStatus> {
        if self.status.is_terminal() {
            return Ok(self.status);
        }

        let eval = self.objective.evaluate(&self.beta)?;
        self.value = eval.value;
        self.grad_norm = eval.gradient.dot(&eval.gradient).sqrt();

        if let Some(tol) = self.options.tol_grad {
            if self.grad_norm <= tol {
                self.status = FitStatus::Converged;
                return Ok(self.status);
            }
        }

        let ascent = select_ascent_direction(&eval.gradient, &eval.hessian, self.options.singular_tol);
        if ascent.singular && !self.singular_reported {
            tracing::warn!(
                iteration = self.iteration,
                "Newton system is singular; using gradient ascent where needed"
            );
            self.singular_reported = true;
        }
        let search = backtracking_search(
            &self.objective,
            &self.beta,
            &ascent.direction,
            self.value,
            &self.options.line_search(),
        )?;
        self.objective_evaluations += search.evaluations();

        match search {
            LineSearchOutcome::Improved { beta, value, scale, evaluations } => {
                tracing::debug!(
                    iteration = self.iteration,
                    objective = value,
                    grad_norm = self.grad_norm,
                    direction = ?ascent.kind,
                    scale,
                    evaluations,
                    "accepted step"
                );
                match ascent.kind {
                    DirectionKind::Newton => self.newton_steps += 1,
                    DirectionKind::Gradient => self.gradient_steps += 1,
                }
                self.beta = beta;
                self.value = value;
                self.trace.push(value);
                self.iteration += 1;
                if self.iteration >= self.options.max_iter {
                    self.status = FitStatus::MaxIterReached;
                }
            }
            LineSearchOutcome::Stagnated { evaluations } => {
                tracing::debug!(
                    iteration = self.iteration,
                    objective = self.value,
                    grad_norm = self.grad_norm,
                    direction = ?ascent.kind,
                    evaluations,
                    "line search stagnated"
                );
                self.status = FitStatus::StagnationStop;
            }
        }
        Ok(self.status)
    }

    /// Iterate until a terminal state and return the outcome.
    pub fn run(mut self) -> FitResult<FitOutcome> {
        while !self.step()?.is_terminal() {}
        // The last accepted step moved β past the point the norm was taken at.
        if self.status == FitStatus::MaxIterReached {
            let grad = self.objective.gradient(&self.beta)?;
            self.grad_norm = grad.dot(&grad).sqrt();
        }
        tracing::info!(
            status = %self.status,
            iterations = self.iteration,
            objective = self.value,
            grad_norm = self.grad_norm,
            "correntropy fit finished"
        );
        Ok(FitOutcome {
            beta: self.beta,
            objective: self.value,
            status: self.status,
            iterations: self.iteration,
            grad_norm: self.grad_norm,
            trace: self.trace,
            newton_steps: self.newton_steps,
            gradient_steps: self.gradient_steps,
            objective_evaluations: self.objective_evaluations,
        })
    }
}

/// Fit from `β = 0` on validated data.
///
/// # Errors
/// Propagates bandwidth and option validation failures.
pub fn fit(data: &RegressionData, sigma: f64, options: &NewtonOptions) -> FitResult<FitOutcome> {
    NewtonIterator::new(data, sigma, *options)?.run()
}

/// Fit from a caller-supplied starting point.
///
/// # Errors
/// As [`fit`], plus `FitError::BetaLengthMismatch` for a wrong-length start.
pub fn fit_from(
    data: &RegressionData, sigma: f64, beta0: Beta, options: &NewtonOptions,
) -> FitResult<FitOutcome> {
    NewtonIterator::with_start(data, sigma, beta0, *options)?.run()
}

/// Validate raw `(B, M)` and fit from `β = 0`.
///
/// The dimension check happens before anything else, so `|B| != rows(M)`
/// fails with `FitError::DimensionMismatch` before any iteration runs.
///
/// # Errors
/// Any `RegressionData::new` validation error, then as [`fit`].
pub fn fit_correntropy(
    response: Response, design: Design, sigma: f64, options: &NewtonOptions,
) -> FitResult<FitOutcome> {
    let data = RegressionData::new(response, design)?;
    fit(&data, sigma, options)
}
