use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The kind of optical element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpticType {
    /// A spherical mirror, governed by `1/f = 1/u + 1/v`.
    Mirror,
    /// A thin lens, governed by `1/f = 1/v − 1/u`.
    Lens,
}

/// The curvature of the optical element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Concave,
    Convex,
}

/// An immutable selection of optic type and shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpticSpec {
    pub optic_type: OpticType,
    pub shape: Shape,
}

impl OpticSpec {
    #[must_use]
    pub fn new(optic_type: OpticType, shape: Shape) -> Self {
        Self { optic_type, shape }
    }

    #[must_use]
    pub fn mirror(shape: Shape) -> Self {
        Self::new(OpticType::Mirror, shape)
    }

    #[must_use]
    pub fn lens(shape: Shape) -> Self {
        Self::new(OpticType::Lens, shape)
    }

    /// Returns a human-readable name such as "Concave Mirror".
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} {}", self.shape.title(), self.optic_type.title())
    }
}

impl OpticType {
    /// Capitalized name for titles and labels.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Mirror => "Mirror",
            Self::Lens => "Lens",
        }
    }
}

impl Shape {
    /// Capitalized name for titles and labels.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Concave => "Concave",
            Self::Convex => "Convex",
        }
    }
}

impl fmt::Display for OpticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Mirror => "mirror",
            Self::Lens => "lens",
        })
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Concave => "concave",
            Self::Convex => "convex",
        })
    }
}

/// Error returned when an optic type or shape name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {kind} `{input}`")]
pub struct ParseSelectionError {
    pub kind: &'static str,
    pub input: String,
}

impl FromStr for OpticType {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mirror" => Ok(Self::Mirror),
            "lens" => Ok(Self::Lens),
            _ => Err(ParseSelectionError {
                kind: "optic type",
                input: s.to_string(),
            }),
        }
    }
}

impl FromStr for Shape {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "concave" => Ok(Self::Concave),
            "convex" => Ok(Self::Convex),
            _ => Err(ParseSelectionError {
                kind: "shape",
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(" Mirror ".parse(), Ok(OpticType::Mirror));
        assert_eq!("LENS".parse(), Ok(OpticType::Lens));
        assert_eq!("Concave".parse(), Ok(Shape::Concave));
        assert_eq!("convex".parse(), Ok(Shape::Convex));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "prism".parse::<OpticType>().unwrap_err();
        assert_eq!(err.to_string(), "unrecognized optic type `prism`");
        assert!("flat".parse::<Shape>().is_err());
    }

    #[test]
    fn titles() {
        assert_eq!(OpticSpec::mirror(Shape::Concave).title(), "Concave Mirror");
        assert_eq!(OpticSpec::lens(Shape::Convex).title(), "Convex Lens");
    }
}
