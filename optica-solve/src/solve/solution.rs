use optica_core::{MeasurementSet, OpticSpec, Quantity};

use crate::{Warning, classify::ImageCharacteristics, solve::Stage};

/// A record of one derived quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Derivation {
    /// The quantity that was filled in.
    pub quantity: Quantity,
    /// The stage that filled it.
    pub stage: Stage,
}

/// The result of a successful solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// The optic the values were solved for.
    pub spec: OpticSpec,
    /// Known and derived values, with finite values rounded.
    pub measurements: MeasurementSet,
    /// Image classification, present once `u`, `v`, `h1`, `h2` are resolved
    /// or a distance is infinite.
    pub characteristics: Option<ImageCharacteristics>,
    /// Advisory diagnostics, in the order they were raised.
    pub warnings: Vec<Warning>,
    /// Derived quantities, in the order they were derived.
    pub derivations: Vec<Derivation>,
}

impl Solution {
    /// Returns the stage that derived `quantity`, or `None` if it was supplied
    /// or is still unknown.
    #[must_use]
    pub fn derived_by(&self, quantity: Quantity) -> Option<Stage> {
        self.derivations
            .iter()
            .find(|derivation| derivation.quantity == quantity)
            .map(|derivation| derivation.stage)
    }
}
