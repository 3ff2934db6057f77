//! Image classification from resolved distances and heights.

use optica_core::{
    MeasurementSet, OpticType, POSITIVE_INFINITY, Value,
    constraint::{Constrained, NonNegative},
};
use serde::{Serialize, Serializer};

/// Whether light actually converges at the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Nature {
    Real,
    Virtual,
    #[serde(rename = "Image at infinity")]
    AtInfinity,
}

/// Orientation of the image relative to the object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    Erect,
    Inverted,
    #[serde(rename = "Parallel rays")]
    ParallelRays,
}

/// Size of the image relative to the object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Size {
    Magnified,
    Diminished,
    #[serde(rename = "Same size")]
    SameSize,
    Infinite,
}

/// Unsigned magnification `|h2/h1|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Magnification {
    Finite(Constrained<f64, NonNegative>),
    Infinite,
}

impl Magnification {
    /// Returns the magnification as an `f64` (`+inf` when infinite).
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Self::Finite(m) => m.get(),
            Self::Infinite => f64::INFINITY,
        }
    }
}

impl Serialize for Magnification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Finite(m) => serializer.serialize_f64(m.get()),
            Self::Infinite => serializer.serialize_str(POSITIVE_INFINITY),
        }
    }
}

/// Read-only summary of the formed image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImageCharacteristics {
    pub nature: Nature,
    pub orientation: Orientation,
    pub size: Size,
    pub magnification: Magnification,
}

impl ImageCharacteristics {
    /// Characteristics when the object or image is at infinity.
    pub const AT_INFINITY: Self = Self {
        nature: Nature::AtInfinity,
        orientation: Orientation::ParallelRays,
        size: Size::Infinite,
        magnification: Magnification::Infinite,
    };
}

/// Classifies the image described by `set`.
///
/// Returns `None` until both distances are known and either one of them is
/// infinite or both heights are known.
#[must_use]
pub fn classify(
    optic_type: OpticType,
    set: &MeasurementSet,
    decimals: u32,
) -> Option<ImageCharacteristics> {
    let (u, v) = (set.u?, set.v?);
    if u.is_infinite() || v.is_infinite() {
        return Some(ImageCharacteristics::AT_INFINITY);
    }

    let v = v.as_finite()?;
    let h1 = set.h1?.as_finite()?;
    let h2 = set.h2?.as_finite()?;

    #[allow(clippy::float_cmp)]
    let ratio = if h1 == 0.0 { 0.0 } else { (h2 / h1).abs() };
    let m = Value::Finite(ratio).rounded(decimals).as_finite()?;
    let magnification = NonNegative::new(m).ok()?;

    let nature = match optic_type {
        OpticType::Mirror if v < 0.0 => Nature::Real,
        OpticType::Lens if v > 0.0 => Nature::Real,
        _ => Nature::Virtual,
    };

    let orientation = if h1 * h2 > 0.0 {
        Orientation::Erect
    } else {
        Orientation::Inverted
    };

    let size = if ratio > 1.0 {
        Size::Magnified
    } else if ratio < 1.0 {
        Size::Diminished
    } else {
        Size::SameSize
    };

    Some(ImageCharacteristics {
        nature,
        orientation,
        size,
        magnification: Magnification::Finite(magnification),
    })
}
