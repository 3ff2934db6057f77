use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Wire text for positive infinity.
pub const POSITIVE_INFINITY: &str = "∞";

/// Wire text for negative infinity.
pub const NEGATIVE_INFINITY: &str = "-∞";

/// A solved optical quantity.
///
/// An image formed at infinity is a legitimate answer, so signed infinity is
/// a first-class variant here rather than a floating-point special value.
/// "Unknown" is modeled separately as `Option<Value>::None`.
///
/// A [`Value::Finite`] never holds NaN or an infinite `f64`; use
/// [`Value::from_f64`] to convert arbitrary floats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// An ordinary finite quantity.
    Finite(f64),
    /// Positive infinity (`+∞`).
    PositiveInfinity,
    /// Negative infinity (`−∞`).
    NegativeInfinity,
}

impl Value {
    /// Converts an `f64`, mapping infinities onto the sentinels.
    ///
    /// Returns `None` for NaN.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        if value.is_nan() {
            None
        } else if value == f64::INFINITY {
            Some(Self::PositiveInfinity)
        } else if value == f64::NEG_INFINITY {
            Some(Self::NegativeInfinity)
        } else {
            Some(Self::Finite(value))
        }
    }

    /// Returns the infinity sentinel with the requested sign.
    #[must_use]
    pub fn infinity(positive: bool) -> Self {
        if positive {
            Self::PositiveInfinity
        } else {
            Self::NegativeInfinity
        }
    }

    /// Returns the inner number if the value is finite.
    #[must_use]
    pub fn as_finite(self) -> Option<f64> {
        match self {
            Self::Finite(value) => Some(value),
            Self::PositiveInfinity | Self::NegativeInfinity => None,
        }
    }

    /// Returns `true` for either infinity sentinel.
    #[must_use]
    pub fn is_infinite(self) -> bool {
        !matches!(self, Self::Finite(_))
    }

    /// Returns the value as an `f64`, with the sentinels mapped to `±inf`.
    #[must_use]
    pub fn to_f64(self) -> f64 {
        match self {
            Self::Finite(value) => value,
            Self::PositiveInfinity => f64::INFINITY,
            Self::NegativeInfinity => f64::NEG_INFINITY,
        }
    }

    /// Rounds a finite value to `decimals` places; infinities pass through.
    ///
    /// Negative zero is normalized to zero.
    #[must_use]
    pub fn rounded(self, decimals: u32) -> Self {
        match self {
            Self::Finite(value) => {
                let scale = 10_f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
                let rounded = (value * scale).round() / scale;
                if rounded.is_finite() {
                    Self::Finite(rounded + 0.0)
                } else {
                    Self::Finite(value)
                }
            }
            infinite => infinite,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(value) => write!(f, "{value}"),
            Self::PositiveInfinity => f.write_str(POSITIVE_INFINITY),
            Self::NegativeInfinity => f.write_str(NEGATIVE_INFINITY),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Finite(value) => serializer.serialize_f64(*value),
            Self::PositiveInfinity => serializer.serialize_str(POSITIVE_INFINITY),
            Self::NegativeInfinity => serializer.serialize_str(NEGATIVE_INFINITY),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => {
                Value::from_f64(value).ok_or_else(|| de::Error::custom("value is not a number"))
            }
            Repr::Text(text) => match text.as_str() {
                POSITIVE_INFINITY => Ok(Value::PositiveInfinity),
                NEGATIVE_INFINITY => Ok(Value::NegativeInfinity),
                other => Err(de::Error::custom(format!(
                    "expected a number, `{POSITIVE_INFINITY}` or `{NEGATIVE_INFINITY}`, found `{other}`"
                ))),
            },
        }
    }
}
