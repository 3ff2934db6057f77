//! Sign-convention checks on raw user input.
//!
//! Validation runs before any solving. It either admits the inputs, possibly
//! with advisory [`Warning`]s, or rejects them with every problem it found.
//! It never touches a [`MeasurementSet`] that the solver will later use; it
//! builds a fresh one from the parsed text.

mod error;
mod raw;

pub use error::{Rejection, ValidationError};
pub use raw::RawInputs;

use optica_core::{
    MeasurementSet, OpticSpec, OpticType, Quantity, Shape,
    constraint::{NonZero, StrictlyNegative, StrictlyPositive},
};

use crate::Warning;

/// Minimum number of known quantities for a closed-form solve.
pub const MIN_KNOWN: usize = 2;

/// Inputs that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    pub spec: OpticSpec,
    pub measurements: MeasurementSet,
    pub warnings: Vec<Warning>,
}

/// Validates raw inputs against the sign conventions for the selected optic.
///
/// Checks, in order: the optic selection, the focal length, the object
/// distance, the object height, the image distance and height (format only),
/// and finally the number of supplied quantities.
///
/// # Errors
///
/// Returns a [`Rejection`] listing every [`ValidationError`] found.
pub fn validate(raw: &RawInputs) -> Result<ValidatedInput, Rejection> {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut measurements = MeasurementSet::new();

    let spec = selection(raw);
    if spec.is_none() {
        errors.push(ValidationError::MissingSelection);
    }

    if let Some(f) = parse(raw, Quantity::FocalLength, &mut errors) {
        match NonZero::new(f) {
            Ok(f) => {
                if let Some(spec) = spec {
                    warnings.extend(focal_sign_warning(spec, f.get()));
                }
                measurements = measurements.with(Quantity::FocalLength, f.into_inner());
            }
            Err(_) => errors.push(ValidationError::ZeroFocalLength),
        }
    }

    if let Some(u) = parse(raw, Quantity::ObjectDistance, &mut errors) {
        match StrictlyNegative::new(u) {
            Ok(u) => measurements = measurements.with(Quantity::ObjectDistance, u.into_inner()),
            Err(_) => errors.push(ValidationError::InvalidObjectDistance { value: u }),
        }
    }

    if let Some(h1) = parse(raw, Quantity::ObjectHeight, &mut errors) {
        match StrictlyPositive::new(h1) {
            Ok(h1) => measurements = measurements.with(Quantity::ObjectHeight, h1.into_inner()),
            Err(_) => errors.push(ValidationError::InvalidObjectHeight { value: h1 }),
        }
    }

    for quantity in [Quantity::ImageDistance, Quantity::ImageHeight] {
        if let Some(value) = parse(raw, quantity, &mut errors) {
            measurements = measurements.with(quantity, value);
        }
    }

    let given = raw.supplied_count();
    if given < MIN_KNOWN {
        errors.push(ValidationError::InsufficientInputs { given });
    }

    match spec {
        Some(spec) if errors.is_empty() => Ok(ValidatedInput {
            spec,
            measurements,
            warnings,
        }),
        _ => Err(Rejection { errors, warnings }),
    }
}

/// Parses the optic selection, returning `None` if either part is absent or
/// unrecognized.
fn selection(raw: &RawInputs) -> Option<OpticSpec> {
    let optic_type = raw.optic_type.as_deref()?.parse::<OpticType>().ok()?;
    let shape = raw.shape.as_deref()?.parse::<Shape>().ok()?;
    Some(OpticSpec::new(optic_type, shape))
}

/// Parses the text for `quantity` as a finite real number.
///
/// Records a [`ValidationError::NotANumber`] and returns `None` on failure.
/// Returns `None` without an error if the quantity was not supplied.
fn parse(raw: &RawInputs, quantity: Quantity, errors: &mut Vec<ValidationError>) -> Option<f64> {
    let text = raw.get(quantity)?;
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            errors.push(ValidationError::NotANumber {
                quantity,
                input: text.to_string(),
            });
            None
        }
    }
}

/// Advisory checks on the sign of a non-zero focal length.
///
/// Mirrors are always normalized by shape later, so a non-positive mirror
/// focal length only warns. Lens sign mismatches also only warn.
fn focal_sign_warning(spec: OpticSpec, f: f64) -> Option<Warning> {
    match (spec.optic_type, spec.shape) {
        (OpticType::Mirror, shape) if f <= 0.0 => Some(Warning::MirrorFocalSign { shape }),
        (OpticType::Lens, Shape::Convex) if f <= 0.0 => Some(Warning::ConvexLensFocalSign),
        (OpticType::Lens, Shape::Concave) if f >= 0.0 => Some(Warning::ConcaveLensFocalSign),
        _ => None,
    }
}
