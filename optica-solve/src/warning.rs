use std::fmt;

use optica_core::Shape;
use serde::{Serialize, Serializer};

/// An advisory diagnostic.
///
/// Warnings never stop a calculation. They report a sign convention that was
/// merely advisory, a sign that was auto-corrected, or a focal-point
/// degeneracy that produced an infinite distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Warning {
    /// A mirror focal length was supplied as zero or negative.
    MirrorFocalSign { shape: Shape },
    /// A convex lens focal length was supplied as zero or negative.
    ConvexLensFocalSign,
    /// A concave lens focal length was supplied as zero or positive.
    ConcaveLensFocalSign,
    /// A mirror focal length sign was flipped to match the mirror shape.
    FocalLengthNormalized { shape: Shape, from: f64, to: f64 },
    /// The object sits at the focal point, so the image is at infinity.
    ObjectAtFocalPoint,
    /// The image sits at the focal point, so the object is at infinity.
    ImageAtFocalPoint,
}

impl Warning {
    /// Returns `true` for the focal-point degeneracy advisories.
    #[must_use]
    pub fn is_focal_point_degeneracy(&self) -> bool {
        matches!(self, Self::ObjectAtFocalPoint | Self::ImageAtFocalPoint)
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MirrorFocalSign { shape } => {
                write!(f, "Using absolute value of focal length for {shape} mirror")
            }
            Self::ConvexLensFocalSign => f.write_str("Convex lens focal length should be positive"),
            Self::ConcaveLensFocalSign => {
                f.write_str("Concave lens focal length should be negative")
            }
            Self::FocalLengthNormalized { shape, from, to } => {
                write!(f, "Focal length adjusted from {from} to {to} for {shape} mirror")
            }
            Self::ObjectAtFocalPoint => {
                f.write_str("Object at focal point - image formed at infinity (parallel rays)")
            }
            Self::ImageAtFocalPoint => {
                f.write_str("Image at focal point - object would be at infinity")
            }
        }
    }
}

/// Warnings travel over the wire as their display text.
impl Serialize for Warning {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Warning::MirrorFocalSign {
                shape: Shape::Convex
            }
            .to_string(),
            "Using absolute value of focal length for convex mirror"
        );
        assert_eq!(
            Warning::FocalLengthNormalized {
                shape: Shape::Concave,
                from: 50.0,
                to: -50.0
            }
            .to_string(),
            "Focal length adjusted from 50 to -50 for concave mirror"
        );
        assert!(
            Warning::ObjectAtFocalPoint
                .to_string()
                .starts_with("Object at focal point")
        );
    }

    #[test]
    fn serializes_as_text() {
        let json = serde_json::to_string(&Warning::ImageAtFocalPoint).unwrap();
        assert_eq!(json, r#""Image at focal point - object would be at infinity""#);
    }
}
