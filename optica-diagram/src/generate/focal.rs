use optica_core::{MeasurementSet, OpticSpec, OpticType, Quantity};

use super::{axes, finite, lens, mirror};
use crate::{Bounds, Color, Diagram, Primitive};

/// Focal length assumed when none is known.
const FALLBACK_FOCAL_LENGTH: f64 = 20.0;

/// Diagram for an object at the focal point: parallel rays, image at infinity.
pub(super) fn diagram(spec: OpticSpec, set: &MeasurementSet) -> Diagram {
    let f = finite(set, Quantity::FocalLength);
    let magnitude = f.map_or(FALLBACK_FOCAL_LENGTH, f64::abs);
    let range = magnitude * 3.0;
    let half_height = range * 0.6;

    let title = format!("{} - Object at Focal Point", spec.title());
    let mut diagram = Diagram::new(title, Bounds::symmetric(range, half_height));
    axes(&mut diagram, range, half_height);

    // Mirrors send the rays back toward the object; lenses pass them through.
    let (object_x, direction) = match spec.optic_type {
        OpticType::Mirror => {
            mirror::surface(&mut diagram, spec.shape, range);
            (f.unwrap_or(-magnitude), -1.0)
        }
        OpticType::Lens => {
            lens::surface(&mut diagram, spec.shape, range);
            (f.map_or(-magnitude, |f| -f), 1.0)
        }
    };

    if let Some(f) = f {
        diagram.push(
            Primitive::Point {
                at: [object_x, 0.0],
                color: Color::Red,
                size: 8.0,
                name: None,
            }
            .named(format!("Focus F (f={f})")),
        );
    }

    let height = magnitude * 0.3;
    diagram.push(Primitive::arrow([object_x, 0.0], [object_x, height], Color::Blue));
    diagram.push(Primitive::label(
        [object_x, height * 1.1],
        "Object at Focus",
        Color::Blue,
    ));

    for i in 0..3 {
        let y = height * (0.3 + f64::from(i) * 0.35);
        diagram.push(Primitive::segment([object_x, y], [0.0, y], Color::Red));
        diagram.push(Primitive::arrow(
            [0.0, y],
            [direction * range * 0.8, y],
            Color::Red,
        ));
    }

    diagram.push(Primitive::label(
        [direction * range * 0.7, height * 0.7],
        "Parallel Rays (Image at ∞)",
        Color::Red,
    ));

    diagram
}
