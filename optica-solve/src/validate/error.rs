use std::fmt;

use optica_core::Quantity;
use thiserror::Error;

use crate::Warning;

/// A reason the supplied inputs cannot be solved.
///
/// The display text of each variant is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please select both optic type and shape")]
    MissingSelection,

    #[error("{} must be a valid number, got `{input}`", capitalize(.quantity))]
    NotANumber { quantity: Quantity, input: String },

    #[error("Focal length cannot be zero")]
    ZeroFocalLength,

    #[error("Object distance (u) must be negative (object is on the left side), got {value}")]
    InvalidObjectDistance { value: f64 },

    #[error("Object height (h1) must be positive, got {value}")]
    InvalidObjectHeight { value: f64 },

    #[error("At least 2 parameters must be provided for calculation, got {given}")]
    InsufficientInputs { given: usize },
}

/// Every problem found while validating one request.
///
/// Validation does not stop at the first problem, so `errors` holds all of
/// them in the order the inputs were checked. Warnings gathered before the
/// rejection are kept for context.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rejection {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<Warning>,
}

impl Rejection {
    /// Returns `true` if any error is of the given kind.
    #[must_use]
    pub fn contains(&self, predicate: impl Fn(&ValidationError) -> bool) -> bool {
        self.errors.iter().any(predicate)
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid inputs: ")?;
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Rejection {}

fn capitalize(text: impl fmt::Display) -> String {
    let text = text.to_string();
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = ValidationError::NotANumber {
            quantity: Quantity::ImageHeight,
            input: "abc".into(),
        };
        assert_eq!(err.to_string(), "Image height (h2) must be a valid number, got `abc`");

        let err = ValidationError::InsufficientInputs { given: 1 };
        assert!(err.to_string().starts_with("At least 2 parameters"));
    }

    #[test]
    fn rejection_lists_every_error() {
        let rejection = Rejection {
            errors: vec![
                ValidationError::ZeroFocalLength,
                ValidationError::InvalidObjectHeight { value: -1.0 },
            ],
            warnings: Vec::new(),
        };
        assert_eq!(
            rejection.to_string(),
            "invalid inputs: Focal length cannot be zero; Object height (h1) must be positive, got -1"
        );
    }
}
