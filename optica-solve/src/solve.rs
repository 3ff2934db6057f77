//! Mirror and thin-lens equation solving.
//!
//! The solver takes the validated knowns, fills in every quantity the
//! knowns determine, rounds the result, and classifies the image. It runs the
//! [`Stage`]s of the decision table in [`Stage::ORDER`]; each stage fills at
//! most one case, and a filled quantity is never recomputed or overwritten.

mod case;
mod error;
mod formula;
mod solution;

pub use case::{Case, Stage};
pub use error::SolveError;
pub use formula::{Formula, Lens, Mirror, formula_for};
pub use solution::{Derivation, Solution};

use optica_core::{MeasurementSet, OpticSpec, OpticType, Quantity, Value};
use tracing::{debug, info};

use crate::{SolverConfig, Warning, classify::classify};

/// Solves for every quantity the knowns determine.
///
/// `known` is not modified; the returned [`Solution`] carries a new set.
///
/// # Errors
///
/// Returns [`SolveError::InvalidConfig`] if the config is invalid, or
/// [`SolveError::Calculation`] on an arithmetic fault outside the guarded
/// focal-point cases. No partial result is returned on error.
pub fn solve(
    spec: OpticSpec,
    known: &MeasurementSet,
    config: &SolverConfig,
) -> Result<Solution, SolveError> {
    config
        .validate()
        .map_err(|reason| SolveError::InvalidConfig { reason })?;

    let formula = formula_for(spec.optic_type);
    let mut work = Working::new(*known);

    if spec.optic_type == OpticType::Mirror {
        work.normalize_focal_length(formula, spec);
    }

    for stage in Stage::ORDER {
        if let Some(case) = stage.case(&work.set) {
            debug!(?stage, ?case, "applying derivation");
            work.apply(stage, case, formula, config)?;
        }
    }

    let measurements = work.set.rounded(config.decimals);
    let characteristics = classify(spec.optic_type, &measurements, config.decimals);

    Ok(Solution {
        spec,
        measurements,
        characteristics,
        warnings: work.warnings,
        derivations: work.derivations,
    })
}

/// Solver-local state for one solve.
struct Working {
    set: MeasurementSet,
    warnings: Vec<Warning>,
    derivations: Vec<Derivation>,
}

impl Working {
    fn new(set: MeasurementSet) -> Self {
        Self {
            set,
            warnings: Vec::new(),
            derivations: Vec::new(),
        }
    }

    /// Forces a supplied mirror focal length to the shape's sign.
    #[allow(clippy::float_cmp)]
    fn normalize_focal_length(&mut self, formula: &dyn Formula, spec: OpticSpec) {
        let Some(Value::Finite(from)) = self.set.f else {
            return;
        };

        let to = formula.normalize_focal_length(spec.shape, from);
        if to == from {
            return;
        }

        debug!(from, to, "normalized mirror focal length");
        self.set.f = Some(Value::Finite(to));
        self.warnings.push(Warning::FocalLengthNormalized {
            shape: spec.shape,
            from,
            to,
        });
    }

    /// Fills an unknown quantity; known quantities are left untouched.
    fn fill(&mut self, stage: Stage, quantity: Quantity, value: Value) {
        let slot = self.set.slot_mut(quantity);
        if slot.is_none() {
            *slot = Some(value);
            self.derivations.push(Derivation { quantity, stage });
        }
    }

    fn fill_finite(&mut self, stage: Stage, quantity: Quantity, value: f64) {
        self.fill(stage, quantity, Value::Finite(value));
    }

    fn apply(
        &mut self,
        stage: Stage,
        case: Case,
        formula: &dyn Formula,
        config: &SolverConfig,
    ) -> Result<(), SolveError> {
        match case {
            Case::FocalFromDistances { u, v } => {
                let f = formula.focal_length(u, v)?;
                self.fill_finite(stage, Quantity::FocalLength, f);
            }
            Case::ImageFromFocalAndObject { f, u } => {
                if formula.image_denominator(f, u).abs() < config.focal_tolerance {
                    let v = Value::infinity(formula.infinity_is_positive(f));
                    info!(f, u, %v, "object at focal point");
                    self.fill(stage, Quantity::ImageDistance, v);
                    self.warnings.push(Warning::ObjectAtFocalPoint);
                } else {
                    let v = formula.image_distance(f, u)?;
                    self.fill_finite(stage, Quantity::ImageDistance, v);
                }
            }
            Case::ObjectFromFocalAndImage { f, v } => {
                if formula.object_denominator(f, v).abs() < config.focal_tolerance {
                    let u = Value::infinity(formula.infinity_is_positive(f));
                    info!(f, v, %u, "image at focal point");
                    self.fill(stage, Quantity::ObjectDistance, u);
                    self.warnings.push(Warning::ImageAtFocalPoint);
                } else {
                    let u = formula.object_distance(f, v)?;
                    self.fill_finite(stage, Quantity::ObjectDistance, u);
                }
            }
            Case::ImageHeightFromDistances { u, v, h1 } => {
                let m = formula.magnification(u, v)?;
                self.fill_finite(stage, Quantity::ImageHeight, m * h1);
            }
            Case::ObjectHeightFromDistances { u, v, h2 } => {
                let m = formula.magnification(u, v)?;
                let h1 = formula::divide(h2, m, "object height")?;
                self.fill_finite(stage, Quantity::ObjectHeight, h1);
            }
            Case::ImageDistanceFromHeights { h1, h2, u } => {
                let m = formula::divide(h2, h1, "magnification")?;
                self.fill_finite(stage, Quantity::ImageDistance, formula.image_distance_for(m, u));
            }
            Case::ObjectDistanceFromHeights { h1, h2, v } => {
                let m = formula::divide(h2, h1, "magnification")?;
                let u = formula.object_distance_for(m, v)?;
                self.fill_finite(stage, Quantity::ObjectDistance, u);
            }
            Case::DefaultHeights { f, distances } => {
                let h1 = config.default_height_ratio * f.abs();
                self.fill_finite(stage, Quantity::ObjectHeight, h1);
                match distances {
                    Some((Value::Finite(u), Value::Finite(v))) => {
                        let m = formula.magnification(u, v)?;
                        self.fill_finite(stage, Quantity::ImageHeight, m * h1);
                    }
                    Some((u, v)) => {
                        if let Some(h2) = formula.limiting_image_height(u, v, h1) {
                            debug!(%u, %v, %h2, "image height at the focal-point limit");
                            self.fill(stage, Quantity::ImageHeight, h2);
                        }
                    }
                    None => {}
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use optica_core::Shape;

    use crate::classify::{Nature, Orientation, Size};

    fn finite(value: Option<Value>) -> f64 {
        value
            .and_then(Value::as_finite)
            .expect("value should be finite")
    }

    #[test]
    fn concave_mirror_virtual_image() {
        let known = MeasurementSet::new()
            .with(Quantity::FocalLength, 50.)
            .with(Quantity::ObjectDistance, -20.);

        let solution = solve(
            OpticSpec::mirror(Shape::Concave),
            &known,
            &SolverConfig::default(),
        )
        .expect("should solve");

        let set = solution.measurements;
        assert_relative_eq!(finite(set.f), -50.);
        assert_relative_eq!(finite(set.u), -20.);
        assert_relative_eq!(finite(set.v), 33.333);
        assert_relative_eq!(finite(set.h1), 15.);
        assert_relative_eq!(finite(set.h2), 25.);

        let image = solution.characteristics.expect("should classify");
        assert_eq!(image.nature, Nature::Virtual);
        assert_eq!(image.orientation, Orientation::Erect);
        assert_eq!(image.size, Size::Magnified);

        assert_eq!(
            solution.warnings,
            vec![Warning::FocalLengthNormalized {
                shape: Shape::Concave,
                from: 50.,
                to: -50.
            }]
        );
    }

    #[test]
    fn input_set_is_not_modified() {
        let known = MeasurementSet::new()
            .with(Quantity::FocalLength, 50.)
            .with(Quantity::ObjectDistance, -20.);
        let before = known;

        solve(
            OpticSpec::mirror(Shape::Concave),
            &known,
            &SolverConfig::default(),
        )
        .unwrap();

        assert_eq!(known, before);
    }

    #[test]
    fn lens_object_at_focal_point() {
        let known = MeasurementSet::new()
            .with(Quantity::FocalLength, 20.)
            .with(Quantity::ObjectDistance, -20.);

        let solution =
            solve(OpticSpec::lens(Shape::Convex), &known, &SolverConfig::default()).unwrap();

        assert_eq!(solution.measurements.v, Some(Value::PositiveInfinity));
        assert_eq!(solution.measurements.h2, Some(Value::NegativeInfinity));
        assert_relative_eq!(finite(solution.measurements.h1), 6.);
        assert!(solution.warnings.contains(&Warning::ObjectAtFocalPoint));
        assert_eq!(
            solution.characteristics,
            Some(crate::ImageCharacteristics::AT_INFINITY)
        );
    }

    #[test]
    fn default_image_height_follows_an_infinite_distance() {
        let config = SolverConfig::default();
        let concave = OpticSpec::mirror(Shape::Concave);

        let known = MeasurementSet::new()
            .with(Quantity::FocalLength, -10.)
            .with(Quantity::ObjectDistance, -10.);
        let solution = solve(concave, &known, &config).unwrap();
        assert_eq!(solution.measurements.v, Some(Value::PositiveInfinity));
        assert_relative_eq!(finite(solution.measurements.h1), 3.);
        assert_eq!(solution.measurements.h2, Some(Value::PositiveInfinity));

        let known = MeasurementSet::new()
            .with(Quantity::FocalLength, -10.)
            .with(Quantity::ImageDistance, -10.);
        let solution = solve(concave, &known, &config).unwrap();
        assert_eq!(solution.measurements.u, Some(Value::PositiveInfinity));
        assert_relative_eq!(finite(solution.measurements.h2), 0.);
        assert_eq!(
            solution.characteristics,
            Some(crate::ImageCharacteristics::AT_INFINITY)
        );
    }

    #[test]
    fn infinity_sign_mapping() {
        let config = SolverConfig::default();
        // Each case places the known distance exactly at the focal point.
        let cases = [
            (OpticSpec::mirror(Shape::Concave), -10., Quantity::ObjectDistance, Value::PositiveInfinity),
            (OpticSpec::mirror(Shape::Concave), -10., Quantity::ImageDistance, Value::PositiveInfinity),
            (OpticSpec::mirror(Shape::Convex), 10., Quantity::ImageDistance, Value::NegativeInfinity),
            (OpticSpec::lens(Shape::Convex), 10., Quantity::ObjectDistance, Value::PositiveInfinity),
            (OpticSpec::lens(Shape::Convex), 10., Quantity::ImageDistance, Value::PositiveInfinity),
            (OpticSpec::lens(Shape::Concave), -10., Quantity::ImageDistance, Value::NegativeInfinity),
        ];

        for (spec, f, quantity, expected) in cases {
            // A lens object sits at the focus when u = -f.
            let known_value = match (spec.optic_type, quantity) {
                (OpticType::Lens, Quantity::ObjectDistance) => -f,
                _ => f,
            };
            let known = MeasurementSet::new()
                .with(Quantity::FocalLength, f)
                .with(quantity, known_value);

            let solution = solve(spec, &known, &config).unwrap();
            let derived = match quantity {
                Quantity::ObjectDistance => solution.measurements.v,
                _ => solution.measurements.u,
            };
            assert_eq!(derived, Some(expected), "{spec:?} with {quantity:?}");
        }
    }

    #[test]
    fn lens_image_at_focal_point() {
        let known = MeasurementSet::new()
            .with(Quantity::FocalLength, 15.)
            .with(Quantity::ImageDistance, 15.);

        let solution =
            solve(OpticSpec::lens(Shape::Convex), &known, &SolverConfig::default()).unwrap();

        assert_eq!(solution.measurements.u, Some(Value::PositiveInfinity));
        assert!(solution.warnings.contains(&Warning::ImageAtFocalPoint));
    }

    #[test]
    fn heights_recover_distances_then_focal_length() {
        let known = MeasurementSet::new()
            .with(Quantity::ObjectDistance, -30.)
            .with(Quantity::ObjectHeight, 2.)
            .with(Quantity::ImageHeight, -4.);

        let solution =
            solve(OpticSpec::lens(Shape::Convex), &known, &SolverConfig::default()).unwrap();

        assert_relative_eq!(finite(solution.measurements.v), 60.);
        assert_relative_eq!(finite(solution.measurements.f), 20.);
        assert_eq!(
            solution.derivations,
            vec![
                Derivation {
                    quantity: Quantity::ImageDistance,
                    stage: Stage::HeightDistances
                },
                Derivation {
                    quantity: Quantity::FocalLength,
                    stage: Stage::ClosingDistancePair
                },
            ]
        );
    }

    #[test]
    fn distance_pair_runs_before_height_back_substitution() {
        let known = MeasurementSet::new()
            .with(Quantity::FocalLength, 20.)
            .with(Quantity::ObjectDistance, -30.)
            .with(Quantity::ObjectHeight, 3.);

        let solution =
            solve(OpticSpec::lens(Shape::Convex), &known, &SolverConfig::default()).unwrap();

        assert_eq!(
            solution.derived_by(Quantity::ImageDistance),
            Some(Stage::DistancePair)
        );
        assert_eq!(
            solution.derived_by(Quantity::ImageHeight),
            Some(Stage::MagnificationHeights)
        );
        assert_relative_eq!(finite(solution.measurements.h2), -6.);
    }

    #[test]
    fn supplied_image_height_is_never_overwritten() {
        let known = MeasurementSet::new()
            .with(Quantity::FocalLength, 20.)
            .with(Quantity::ImageHeight, 7.);

        let solution =
            solve(OpticSpec::lens(Shape::Convex), &known, &SolverConfig::default()).unwrap();

        assert_relative_eq!(finite(solution.measurements.h2), 7.);
        assert_eq!(solution.measurements.h1, None);
        assert!(solution.derivations.is_empty());
        assert_eq!(solution.characteristics, None);
    }

    #[test]
    fn computed_zero_divisor_is_a_calculation_error() {
        // u + v = 0 for a mirror leaves f undefined.
        let known = MeasurementSet::new()
            .with(Quantity::ObjectDistance, -10.)
            .with(Quantity::ImageDistance, 10.);

        let result = solve(
            OpticSpec::mirror(Shape::Concave),
            &known,
            &SolverConfig::default(),
        );

        assert!(matches!(result, Err(SolveError::Calculation { .. })));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SolverConfig {
            decimals: 99,
            ..SolverConfig::default()
        };
        let known = MeasurementSet::new()
            .with(Quantity::FocalLength, 20.)
            .with(Quantity::ObjectDistance, -30.);

        let result = solve(OpticSpec::lens(Shape::Convex), &known, &config);
        assert!(matches!(result, Err(SolveError::InvalidConfig { .. })));
    }
}
