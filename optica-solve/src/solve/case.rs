//! The decision table over which quantities are known.
//!
//! Solving is a fixed sequence of [`Stage`]s. At each stage the presence
//! pattern of the working set selects at most one [`Case`], which names the
//! quantity to derive and the knowns it is derived from. Keeping the table
//! explicit makes the priority order testable: the distance pair is always
//! resolved before heights are back-substituted.

use optica_core::{MeasurementSet, Quantity, Value};

/// One pass of the solver, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Resolve the missing member of `(f, u, v)` from the other two.
    DistancePair,
    /// Derive the missing height from the distance magnification.
    MagnificationHeights,
    /// Derive the missing distance from the height magnification.
    HeightDistances,
    /// Resolve `(f, u, v)` again if a height-derived distance completed a pair.
    ClosingDistancePair,
    /// Synthesize an object height when no height was given.
    DefaultHeights,
}

impl Stage {
    /// All stages, in the order the solver runs them.
    pub const ORDER: [Self; 5] = [
        Self::DistancePair,
        Self::MagnificationHeights,
        Self::HeightDistances,
        Self::ClosingDistancePair,
        Self::DefaultHeights,
    ];

    /// Selects the case that applies to `set` at this stage, if any.
    #[must_use]
    pub fn case(self, set: &MeasurementSet) -> Option<Case> {
        match self {
            Self::DistancePair | Self::ClosingDistancePair => distance_case(set),
            Self::MagnificationHeights => magnification_case(set),
            Self::HeightDistances => height_distance_case(set),
            Self::DefaultHeights => default_height_case(set),
        }
    }
}

/// A single derivation chosen from the presence pattern.
///
/// Every `f64` field holds a finite known value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Case {
    /// `u` and `v` known: derive `f`.
    FocalFromDistances { u: f64, v: f64 },
    /// `f` and `u` known: derive `v`, which may be infinite.
    ImageFromFocalAndObject { f: f64, u: f64 },
    /// `f` and `v` known: derive `u`, which may be infinite.
    ObjectFromFocalAndImage { f: f64, v: f64 },
    /// Distances and `h1` known: derive `h2`.
    ImageHeightFromDistances { u: f64, v: f64, h1: f64 },
    /// Distances and `h2` known: derive `h1`.
    ObjectHeightFromDistances { u: f64, v: f64, h2: f64 },
    /// Heights and `u` known: derive `v`.
    ImageDistanceFromHeights { h1: f64, h2: f64, u: f64 },
    /// Heights and `v` known: derive `u`.
    ObjectDistanceFromHeights { h1: f64, h2: f64, v: f64 },
    /// No height known but `f` is: synthesize `h1`, and `h2` when both
    /// distances are known. Either distance may be infinite.
    DefaultHeights {
        f: f64,
        distances: Option<(Value, Value)>,
    },
}

/// Finite value of `quantity`, if known and finite.
fn finite(set: &MeasurementSet, quantity: Quantity) -> Option<f64> {
    set.get(quantity).and_then(|value| value.as_finite())
}

/// Finite `(u, v)` if both distances are known and finite.
fn finite_distances(set: &MeasurementSet) -> Option<(f64, f64)> {
    Some((
        finite(set, Quantity::ObjectDistance)?,
        finite(set, Quantity::ImageDistance)?,
    ))
}

fn distance_case(set: &MeasurementSet) -> Option<Case> {
    let f = set.f.map(|f| f.as_finite());
    let u = set.u.map(|u| u.as_finite());
    let v = set.v.map(|v| v.as_finite());

    match (f, u, v) {
        (None, Some(Some(u)), Some(Some(v))) => Some(Case::FocalFromDistances { u, v }),
        (Some(Some(f)), Some(Some(u)), None) => Some(Case::ImageFromFocalAndObject { f, u }),
        (Some(Some(f)), None, Some(Some(v))) => Some(Case::ObjectFromFocalAndImage { f, v }),
        _ => None,
    }
}

fn magnification_case(set: &MeasurementSet) -> Option<Case> {
    let (u, v) = finite_distances(set)?;

    match (set.h1, set.h2) {
        (Some(_), Some(_)) | (None, None) => None,
        (Some(_), None) => Some(Case::ImageHeightFromDistances {
            u,
            v,
            h1: finite(set, Quantity::ObjectHeight)?,
        }),
        (None, Some(_)) => Some(Case::ObjectHeightFromDistances {
            u,
            v,
            h2: finite(set, Quantity::ImageHeight)?,
        }),
    }
}

fn height_distance_case(set: &MeasurementSet) -> Option<Case> {
    let h1 = finite(set, Quantity::ObjectHeight)?;
    let h2 = finite(set, Quantity::ImageHeight)?;

    match (set.u, set.v) {
        (Some(_), None) => Some(Case::ImageDistanceFromHeights {
            h1,
            h2,
            u: finite(set, Quantity::ObjectDistance)?,
        }),
        (None, Some(_)) => Some(Case::ObjectDistanceFromHeights {
            h1,
            h2,
            v: finite(set, Quantity::ImageDistance)?,
        }),
        _ => None,
    }
}

fn default_height_case(set: &MeasurementSet) -> Option<Case> {
    if set.h1.is_some() || set.h2.is_some() {
        return None;
    }

    Some(Case::DefaultHeights {
        f: finite(set, Quantity::FocalLength)?,
        distances: set.u.zip(set.v),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(pairs: &[(Quantity, f64)]) -> MeasurementSet {
        pairs
            .iter()
            .fold(MeasurementSet::new(), |set, &(quantity, value)| {
                set.with(quantity, value)
            })
    }

    #[test]
    fn distance_pair_patterns() {
        use Quantity::{FocalLength as F, ImageDistance as V, ObjectDistance as U};

        assert_eq!(
            Stage::DistancePair.case(&set(&[(U, -20.), (V, 30.)])),
            Some(Case::FocalFromDistances { u: -20., v: 30. })
        );
        assert_eq!(
            Stage::DistancePair.case(&set(&[(F, 10.), (U, -20.)])),
            Some(Case::ImageFromFocalAndObject { f: 10., u: -20. })
        );
        assert_eq!(
            Stage::DistancePair.case(&set(&[(F, 10.), (V, 30.)])),
            Some(Case::ObjectFromFocalAndImage { f: 10., v: 30. })
        );
        assert_eq!(
            Stage::DistancePair.case(&set(&[(F, 10.), (U, -20.), (V, 20.)])),
            None
        );
        assert_eq!(Stage::DistancePair.case(&set(&[(F, 10.)])), None);
    }

    #[test]
    fn infinite_distances_do_not_select_a_case() {
        let set = MeasurementSet::new()
            .with(Quantity::ObjectDistance, -20.)
            .with_value(Quantity::ImageDistance, Some(Value::PositiveInfinity))
            .with(Quantity::ObjectHeight, 5.);

        assert_eq!(Stage::DistancePair.case(&set), None);
        assert_eq!(Stage::MagnificationHeights.case(&set), None);
    }

    #[test]
    fn height_patterns() {
        use Quantity::{
            ImageDistance as V, ImageHeight as H2, ObjectDistance as U, ObjectHeight as H1,
        };

        assert_eq!(
            Stage::MagnificationHeights.case(&set(&[(U, -20.), (V, 30.), (H1, 2.)])),
            Some(Case::ImageHeightFromDistances {
                u: -20.,
                v: 30.,
                h1: 2.
            })
        );
        assert_eq!(
            Stage::MagnificationHeights.case(&set(&[(U, -20.), (V, 30.), (H2, 3.)])),
            Some(Case::ObjectHeightFromDistances {
                u: -20.,
                v: 30.,
                h2: 3.
            })
        );
        assert_eq!(
            Stage::HeightDistances.case(&set(&[(H1, 2.), (H2, -4.), (U, -20.)])),
            Some(Case::ImageDistanceFromHeights {
                h1: 2.,
                h2: -4.,
                u: -20.
            })
        );
        assert_eq!(
            Stage::HeightDistances.case(&set(&[(H1, 2.), (H2, -4.), (V, 40.)])),
            Some(Case::ObjectDistanceFromHeights {
                h1: 2.,
                h2: -4.,
                v: 40.
            })
        );
    }

    #[test]
    fn default_heights_need_focal_length_and_no_heights() {
        use Quantity::{FocalLength as F, ImageHeight as H2, ObjectDistance as U};

        assert_eq!(
            Stage::DefaultHeights.case(&set(&[(F, 10.), (U, -20.)])),
            Some(Case::DefaultHeights {
                f: 10.,
                distances: None
            })
        );
        assert_eq!(Stage::DefaultHeights.case(&set(&[(F, 10.), (H2, 1.)])), None);

        let at_focus = set(&[(F, 10.), (U, -10.)])
            .with_value(Quantity::ImageDistance, Some(Value::PositiveInfinity));
        assert_eq!(
            Stage::DefaultHeights.case(&at_focus),
            Some(Case::DefaultHeights {
                f: 10.,
                distances: Some((Value::Finite(-10.), Value::PositiveInfinity))
            })
        );
        assert_eq!(Stage::DefaultHeights.case(&set(&[(U, -20.)])), None);
    }
}
