use optica_core::{OpticType, Shape, Value};

use crate::solve::SolveError;

/// Closed-form relations between focal length, distances, and magnification.
///
/// Each optic type supplies the three denominators of its reciprocal formula
/// and its magnification convention; the derivations are shared.
pub trait Formula {
    /// Denominator of `f` derived from `(u, v)`.
    fn focal_denominator(&self, u: f64, v: f64) -> f64;

    /// Denominator of `v` derived from `(f, u)`.
    ///
    /// Zero when the object sits at the focal point.
    fn image_denominator(&self, f: f64, u: f64) -> f64;

    /// Denominator of `u` derived from `(f, v)`.
    ///
    /// Zero when the image sits at the focal point.
    fn object_denominator(&self, f: f64, v: f64) -> f64;

    /// Whether the conjugate distance is `+∞` when a focal-point degeneracy
    /// occurs with focal length `f`.
    fn infinity_is_positive(&self, f: f64) -> bool;

    /// Signed magnification `m = h2/h1` expressed through distances.
    ///
    /// # Errors
    ///
    /// Returns an error if `u` is zero.
    fn magnification(&self, u: f64, v: f64) -> Result<f64, SolveError>;

    /// Sign applied to `v/u` to give the magnification.
    fn magnification_sign(&self) -> f64;

    /// Image height for object height `h1` when a distance may be infinite.
    ///
    /// An infinite image distance gives an infinite image height with the
    /// sign of the magnification. An infinite object distance gives zero.
    /// Returns `None` when both distances are infinite.
    fn limiting_image_height(&self, u: Value, v: Value, h1: f64) -> Option<Value> {
        Value::from_f64(self.magnification_sign() * v.to_f64() / u.to_f64() * h1)
    }

    /// Image distance implied by magnification `m` and object distance `u`.
    fn image_distance_for(&self, m: f64, u: f64) -> f64;

    /// Object distance implied by magnification `m` and image distance `v`.
    ///
    /// # Errors
    ///
    /// Returns an error if `m` is zero.
    fn object_distance_for(&self, m: f64, v: f64) -> Result<f64, SolveError>;

    /// Applies the shape's sign convention to a supplied focal length.
    fn normalize_focal_length(&self, _shape: Shape, f: f64) -> f64 {
        f
    }

    /// Derives `f` from `(u, v)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the denominator is zero.
    fn focal_length(&self, u: f64, v: f64) -> Result<f64, SolveError> {
        divide(u * v, self.focal_denominator(u, v), "focal length")
    }

    /// Derives `v` from `(f, u)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the denominator is zero.
    fn image_distance(&self, f: f64, u: f64) -> Result<f64, SolveError> {
        divide(f * u, self.image_denominator(f, u), "image distance")
    }

    /// Derives `u` from `(f, v)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the denominator is zero.
    fn object_distance(&self, f: f64, v: f64) -> Result<f64, SolveError> {
        divide(f * v, self.object_denominator(f, v), "object distance")
    }
}

/// Spherical mirror: `1/f = 1/u + 1/v`, `m = −v/u`.
///
/// Concave mirrors carry a negative focal length, convex mirrors a positive one.
#[derive(Debug, Clone, Copy)]
pub struct Mirror;

impl Formula for Mirror {
    fn focal_denominator(&self, u: f64, v: f64) -> f64 {
        u + v
    }

    fn image_denominator(&self, f: f64, u: f64) -> f64 {
        u - f
    }

    fn object_denominator(&self, f: f64, v: f64) -> f64 {
        v - f
    }

    fn infinity_is_positive(&self, f: f64) -> bool {
        f < 0.0
    }

    fn magnification(&self, u: f64, v: f64) -> Result<f64, SolveError> {
        divide(-v, u, "magnification")
    }

    fn magnification_sign(&self) -> f64 {
        -1.0
    }

    fn image_distance_for(&self, m: f64, u: f64) -> f64 {
        -m * u
    }

    fn object_distance_for(&self, m: f64, v: f64) -> Result<f64, SolveError> {
        divide(-v, m, "object distance")
    }

    fn normalize_focal_length(&self, shape: Shape, f: f64) -> f64 {
        match shape {
            Shape::Concave => -f.abs(),
            Shape::Convex => f.abs(),
        }
    }
}

/// Thin lens: `1/f = 1/v − 1/u`, `m = v/u`.
#[derive(Debug, Clone, Copy)]
pub struct Lens;

impl Formula for Lens {
    fn focal_denominator(&self, u: f64, v: f64) -> f64 {
        u - v
    }

    fn image_denominator(&self, f: f64, u: f64) -> f64 {
        u + f
    }

    fn object_denominator(&self, f: f64, v: f64) -> f64 {
        f - v
    }

    fn infinity_is_positive(&self, f: f64) -> bool {
        f > 0.0
    }

    fn magnification(&self, u: f64, v: f64) -> Result<f64, SolveError> {
        divide(v, u, "magnification")
    }

    fn magnification_sign(&self) -> f64 {
        1.0
    }

    fn image_distance_for(&self, m: f64, u: f64) -> f64 {
        m * u
    }

    fn object_distance_for(&self, m: f64, v: f64) -> Result<f64, SolveError> {
        divide(v, m, "object distance")
    }
}

/// Returns the formula for an optic type.
#[must_use]
pub fn formula_for(optic_type: OpticType) -> &'static dyn Formula {
    match optic_type {
        OpticType::Mirror => &Mirror,
        OpticType::Lens => &Lens,
    }
}

/// Divides, failing on a zero divisor or a non-finite quotient.
pub(crate) fn divide(numerator: f64, denominator: f64, quantity: &'static str) -> Result<f64, SolveError> {
    #[allow(clippy::float_cmp)]
    if denominator == 0.0 {
        return Err(SolveError::Calculation {
            quantity,
            reason: "division by zero",
        });
    }

    let quotient = numerator / denominator;
    if quotient.is_finite() {
        Ok(quotient)
    } else {
        Err(SolveError::Calculation {
            quantity,
            reason: "result is not a finite number",
        })
    }
}
