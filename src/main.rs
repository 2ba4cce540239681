//! CorrEntropyFit CLI

use anyhow::{Context, Result};
use clap::Parser;
use correntropy_fit::{
    dataset::{load_problem, save_beta},
    regression::prelude::*,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "CorrEntropyFit")]
#[command(about = "Fit linear-model coefficients by maximum correntropy")]
#[command(version)]
struct Cli {
    /// Input file: sigma, then the response vector B, then the design matrix M
    input: PathBuf,

    /// Output file for the fitted coefficient vector
    output: PathBuf,

    /// Maximum number of outer iterations
    #[arg(long)]
    max_iter: Option<usize>,

    /// Backtracking shrink factor, in (0, 1)
    #[arg(long)]
    shrink_factor: Option<f64>,

    /// Maximum trial steps per line search
    #[arg(long)]
    max_line_search: Option<usize>,

    /// Stop once the gradient norm falls to this value
    #[arg(long)]
    tol_grad: Option<f64>,

    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,
}

impl Cli {
    fn options(&self) -> FitResult<NewtonOptions> {
        let defaults = NewtonOptions::default();
        NewtonOptions::new(
            self.max_iter.unwrap_or(defaults.max_iter),
            self.shrink_factor.unwrap_or(defaults.shrink_factor),
            self.max_line_search.unwrap_or(defaults.max_line_search),
            self.tol_grad,
            defaults.singular_tol,
        )
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(cli.log_level)
        .with_target(false)
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err:#}");
        let code = err.downcast_ref::<FitError>().map_or(1, FitError::exit_code);
        std::process::exit(code);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = cli.options().context("invalid optimizer options")?;
    let outcome = cmd_fit(&cli.input, options)?;
    save_beta(&cli.output, &outcome.beta)
        .with_context(|| format!("writing coefficients to {}", cli.output.display()))?;
    tracing::info!(path = %cli.output.display(), len = outcome.beta.len(), "coefficients written");
    Ok(())
}

fn cmd_fit(input: &Path, options: NewtonOptions) -> Result<FitOutcome> {
    tracing::info!(path = %input.display(), "loading problem");
    let problem =
        load_problem(input).with_context(|| format!("loading problem from {}", input.display()))?;
    let (sigma, data) = problem.into_data().context("invalid regression data")?;
    tracing::info!(samples = data.n_samples(), basis = data.n_basis(), sigma, "problem loaded");

    let outcome = fit(&data, sigma, &options).context("correntropy fit failed")?;
    tracing::info!(
        status = %outcome.status,
        iterations = outcome.iterations,
        objective = outcome.objective,
        "fit complete"
    );
    Ok(outcome)
}
