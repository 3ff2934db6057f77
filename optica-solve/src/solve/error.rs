use thiserror::Error;

/// Errors that abandon a solve.
///
/// A solve that fails never returns a partial [`MeasurementSet`].
///
/// [`MeasurementSet`]: optica_core::MeasurementSet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// An arithmetic fault outside the guarded focal-point cases.
    #[error("Calculation error: {reason} while deriving {quantity}")]
    Calculation {
        quantity: &'static str,
        reason: &'static str,
    },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },
}
