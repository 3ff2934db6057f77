//! Sign constraints on validated inputs.
//!
//! The Cartesian convention pins the sign of several inputs: an object sits
//! left of the optic, so its distance is strictly negative; it stands above
//! the axis, so its height is strictly positive; a focal length is never
//! zero. Values that pass validation are wrapped in [`Constrained`] so later
//! stages can rely on the sign without re-checking it.

use std::{cmp::Ordering, fmt, marker::PhantomData};

use num_traits::Zero;
use thiserror::Error;

/// Where a value sits relative to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// Classifies `value`, or returns `None` when it is unordered (NaN).
    pub fn of<T: PartialOrd + Zero>(value: &T) -> Option<Self> {
        value.partial_cmp(&T::zero()).map(|ordering| match ordering {
            Ordering::Less => Self::Negative,
            Ordering::Equal => Self::Zero,
            Ordering::Greater => Self::Positive,
        })
    }
}

/// A rule a value must satisfy before it can be wrapped in [`Constrained`].
pub trait Constraint<T> {
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] describing why `value` was refused.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be positive")]
    Positive,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}

impl From<Sign> for ConstraintError {
    fn from(sign: Sign) -> Self {
        match sign {
            Sign::Negative => Self::Negative,
            Sign::Zero => Self::Zero,
            Sign::Positive => Self::Positive,
        }
    }
}

/// Declares a marker type that admits only the listed signs.
macro_rules! sign_constraint {
    ($(#[$meta:meta])* $name:ident => $($allowed:ident)|+) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name;

        impl $name {
            /// Wraps `value` if its sign is admitted.
            ///
            /// # Errors
            ///
            /// Returns the offending sign as a [`ConstraintError`], or
            /// [`ConstraintError::NotANumber`] for NaN.
            pub fn new<T: PartialOrd + Zero>(
                value: T,
            ) -> Result<Constrained<T, $name>, ConstraintError> {
                Constrained::new(value)
            }
        }

        impl<T: PartialOrd + Zero> Constraint<T> for $name {
            fn check(value: &T) -> Result<(), ConstraintError> {
                match Sign::of(value).ok_or(ConstraintError::NotANumber)? {
                    $(Sign::$allowed)|+ => Ok(()),
                    rejected => Err(rejected.into()),
                }
            }
        }
    };
}

sign_constraint!(
    /// Zero or greater, e.g. the size of a magnification.
    NonNegative => Zero | Positive
);

sign_constraint!(
    /// Anything but zero, e.g. a focal length.
    NonZero => Negative | Positive
);

sign_constraint!(
    /// Below zero, e.g. an object distance.
    StrictlyNegative => Negative
);

sign_constraint!(
    /// Above zero, e.g. an object height.
    StrictlyPositive => Positive
);

/// A value known to satisfy the constraint `C`.
///
/// ```
/// use optica_core::constraint::{Constrained, StrictlyNegative};
///
/// let u: Constrained<f64, StrictlyNegative> = Constrained::new(-20.0).unwrap();
/// assert_eq!(u.get(), -20.0);
/// assert!(StrictlyNegative::new(20.0).is_err());
/// ```
pub struct Constrained<T, C> {
    value: T,
    rule: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// # Errors
    ///
    /// Returns an error if `value` breaks the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            rule: PhantomData,
        })
    }
}

impl<T, C> Constrained<T, C> {
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Copy, C> Constrained<T, C> {
    pub fn get(&self) -> T {
        self.value
    }
}

// Manual impls so the marker type needs no bounds of its own.
impl<T: Clone, C> Clone for Constrained<T, C> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            rule: PhantomData,
        }
    }
}

impl<T: Copy, C> Copy for Constrained<T, C> {}

impl<T: PartialEq, C> PartialEq for Constrained<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Constrained<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Constrained").field(&self.value).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_of_floats() {
        assert_eq!(Sign::of(&-3.0), Some(Sign::Negative));
        assert_eq!(Sign::of(&0.0), Some(Sign::Zero));
        assert_eq!(Sign::of(&-0.0), Some(Sign::Zero));
        assert_eq!(Sign::of(&2.5), Some(Sign::Positive));
        assert_eq!(Sign::of(&f64::NAN), None);
    }

    #[test]
    fn object_distance_must_be_left_of_the_optic() {
        assert_eq!(StrictlyNegative::new(-0.5).map(|u| u.get()), Ok(-0.5));
        assert_eq!(StrictlyNegative::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyNegative::new(25.0), Err(ConstraintError::Positive));
    }

    #[test]
    fn object_height_must_be_above_the_axis() {
        assert!(StrictlyPositive::new(4.0).is_ok());
        assert_eq!(StrictlyPositive::new(-2.0), Err(ConstraintError::Negative));
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
    }

    #[test]
    fn focal_length_may_take_either_sign() {
        assert!(NonZero::new(-10.0).is_ok());
        assert!(NonZero::new(10.0).is_ok());
        assert_eq!(NonZero::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(NonZero::new(0_i32), Err(ConstraintError::Zero));
    }

    #[test]
    fn magnification_admits_zero() {
        assert!(NonNegative::new(0.0).is_ok());
        assert!(NonNegative::new(1.667).is_ok());
        assert_eq!(NonNegative::new(-1.0), Err(ConstraintError::Negative));
    }

    #[test]
    fn nan_is_never_admitted() {
        assert_eq!(NonNegative::new(f64::NAN), Err(ConstraintError::NotANumber));
        assert_eq!(NonZero::new(f64::NAN), Err(ConstraintError::NotANumber));
        assert_eq!(
            StrictlyNegative::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }
}
