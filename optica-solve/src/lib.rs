//! Validation, solving, and classification for single mirrors and thin lenses.
//!
//! The pipeline is [`validate`] then [`solve`]; [`calculate`] runs both and
//! merges their warnings.

mod classify;
mod config;
pub mod solve;
pub mod validate;
mod warning;

pub use classify::{ImageCharacteristics, Magnification, Nature, Orientation, Size, classify};
pub use config::SolverConfig;
pub use solve::{Solution, SolveError, solve};
pub use validate::{RawInputs, Rejection, ValidatedInput, ValidationError, validate};
pub use warning::Warning;

use thiserror::Error;
use tracing::debug;

/// Why a calculation produced no values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Failure {
    #[error(transparent)]
    Rejected(#[from] Rejection),

    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Validates raw inputs and solves them.
///
/// Warnings raised by validation come first in the returned solution,
/// followed by those raised while solving.
///
/// # Errors
///
/// Returns [`Failure::Rejected`] if validation fails and [`Failure::Solve`]
/// if the solver does.
pub fn calculate(raw: &RawInputs, config: &SolverConfig) -> Result<Solution, Failure> {
    let input = validate(raw)?;
    debug!(
        spec = %input.spec.title(),
        known = input.measurements.known_count(),
        "inputs validated"
    );

    let mut solution = solve(input.spec, &input.measurements, config)?;

    let mut warnings = input.warnings;
    warnings.append(&mut solution.warnings);
    solution.warnings = warnings;

    Ok(solution)
}
