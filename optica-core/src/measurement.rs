use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Value;

/// One of the five quantities related by the mirror and lens formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    /// Focal length `f`.
    FocalLength,
    /// Object distance `u`, negative when the object is left of the optic.
    ObjectDistance,
    /// Image distance `v`.
    ImageDistance,
    /// Object height `h1`.
    ObjectHeight,
    /// Image height `h2`, whose sign encodes orientation.
    ImageHeight,
}

impl Quantity {
    /// All quantities, in reporting order.
    pub const ALL: [Self; 5] = [
        Self::FocalLength,
        Self::ObjectDistance,
        Self::ImageDistance,
        Self::ObjectHeight,
        Self::ImageHeight,
    ];

    /// Conventional symbol (`f`, `u`, `v`, `h1`, `h2`).
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::FocalLength => "f",
            Self::ObjectDistance => "u",
            Self::ImageDistance => "v",
            Self::ObjectHeight => "h1",
            Self::ImageHeight => "h2",
        }
    }

    /// Descriptive name used in messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::FocalLength => "focal length",
            Self::ObjectDistance => "object distance",
            Self::ImageDistance => "image distance",
            Self::ObjectHeight => "object height",
            Self::ImageHeight => "image height",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.symbol())
    }
}

/// The working record of up to five optional quantities.
///
/// A set is built fresh for each calculation and never shared between
/// calculations. `None` means "unknown"; a known value may be infinite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSet {
    #[serde(rename = "focal_length", alias = "f")]
    pub f: Option<Value>,
    pub u: Option<Value>,
    pub v: Option<Value>,
    pub h1: Option<Value>,
    pub h2: Option<Value>,
}

impl MeasurementSet {
    /// Returns an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the set with `quantity` set to a finite `value`.
    #[must_use]
    pub fn with(self, quantity: Quantity, value: f64) -> Self {
        self.with_value(quantity, Value::from_f64(value))
    }

    /// Returns a copy of the set with `quantity` replaced by `value`.
    #[must_use]
    pub fn with_value(mut self, quantity: Quantity, value: Option<Value>) -> Self {
        *self.slot_mut(quantity) = value;
        self
    }

    /// Returns the value of `quantity`, if known.
    #[must_use]
    pub fn get(&self, quantity: Quantity) -> Option<Value> {
        match quantity {
            Quantity::FocalLength => self.f,
            Quantity::ObjectDistance => self.u,
            Quantity::ImageDistance => self.v,
            Quantity::ObjectHeight => self.h1,
            Quantity::ImageHeight => self.h2,
        }
    }

    /// Returns a mutable reference to the slot holding `quantity`.
    pub fn slot_mut(&mut self, quantity: Quantity) -> &mut Option<Value> {
        match quantity {
            Quantity::FocalLength => &mut self.f,
            Quantity::ObjectDistance => &mut self.u,
            Quantity::ImageDistance => &mut self.v,
            Quantity::ObjectHeight => &mut self.h1,
            Quantity::ImageHeight => &mut self.h2,
        }
    }

    /// Returns `true` if `quantity` is known.
    #[must_use]
    pub fn is_known(&self, quantity: Quantity) -> bool {
        self.get(quantity).is_some()
    }

    /// Number of known quantities.
    #[must_use]
    pub fn known_count(&self) -> usize {
        Quantity::ALL
            .into_iter()
            .filter(|&quantity| self.is_known(quantity))
            .count()
    }

    /// Returns `true` if any known quantity is infinite.
    #[must_use]
    pub fn has_infinite(&self) -> bool {
        Quantity::ALL
            .into_iter()
            .filter_map(|quantity| self.get(quantity))
            .any(Value::is_infinite)
    }

    /// Returns a copy with every finite value rounded to `decimals` places.
    #[must_use]
    pub fn rounded(self, decimals: u32) -> Self {
        let round = |value: Option<Value>| value.map(|value| value.rounded(decimals));
        Self {
            f: round(self.f),
            u: round(self.u),
            v: round(self.v),
            h1: round(self.h1),
            h2: round(self.h2),
        }
    }
}
