use optica_core::{MeasurementSet, OpticSpec, Quantity, Shape};

use super::{
    HEIGHT_FRACTION, OUTLINE_SAMPLES, Resolved, axes, axis_range, finite, height_at, image_arrow,
    linspace, object_arrow,
};
use crate::{Bounds, Color, Diagram, LineStyle, Primitive};

/// Lens outline: two parabolic faces meeting at the rim.
///
/// Convex lenses are thickest at the axis, concave lenses thinnest.
pub(super) fn surface(diagram: &mut Diagram, shape: Shape, range: f64) {
    let half_height = range * 0.6;
    let thickness = half_height * 0.1;
    let bulge = match shape {
        Shape::Convex => thickness,
        Shape::Concave => -thickness,
    };

    let face = |side: f64| -> Vec<[f64; 2]> {
        linspace(-half_height, half_height, OUTLINE_SAMPLES)
            .map(|y| {
                let ratio = y / half_height;
                [side * bulge * (1.0 - ratio * ratio), y]
            })
            .collect()
    };

    diagram.push(Primitive::Polyline {
        points: face(-1.0),
        style: LineStyle::Solid,
        color: Color::Red,
        name: None,
    });
    diagram.push(Primitive::Polyline {
        points: face(1.0),
        style: LineStyle::Solid,
        color: Color::Red,
        name: Some(format!("{} Lens", shape.title())),
    });
}

pub(super) fn diagram(shape: Shape, set: &MeasurementSet) -> Diagram {
    let range = axis_range(set);
    let half_height = range * HEIGHT_FRACTION;
    let title = format!("{} Ray Diagram", OpticSpec::lens(shape).title());
    let mut diagram = Diagram::new(title, Bounds::symmetric(range, half_height));

    axes(&mut diagram, range, half_height);
    surface(&mut diagram, shape, range);

    if let Some(f) = finite(set, Quantity::FocalLength) {
        for x in [f, -f] {
            diagram.push(Primitive::Point {
                at: [x, 0.0],
                color: Color::Red,
                size: 8.0,
                name: None,
            });
            diagram.push(Primitive::label(
                [x, -range * 0.1],
                format!("F ({x})"),
                Color::Red,
            ));
        }
    }

    if let (Some(u), Some(h1)) = (
        finite(set, Quantity::ObjectDistance),
        finite(set, Quantity::ObjectHeight),
    ) {
        object_arrow(&mut diagram, u, h1);
    }

    if let (Some(v), Some(h2)) = (
        finite(set, Quantity::ImageDistance),
        finite(set, Quantity::ImageHeight),
    ) {
        image_arrow(&mut diagram, v, h2, v > 0.0);
    }

    if let Some(resolved) = Resolved::from_set(set) {
        rays(&mut diagram, shape, &resolved);
    }

    diagram
}

fn rays(diagram: &mut Diagram, shape: Shape, r: &Resolved) {
    let object = [r.u, r.h1];
    let image = [r.v, r.h2];

    diagram.push(Primitive::segment(object, [0.0, r.h1], Color::Gray).named("Incident Ray"));
    diagram.push(Primitive::segment([0.0, r.h1], image, Color::Gray).named("Refracted Ray"));

    // Through the optical centre, undeviated.
    diagram.push(Primitive::segment(object, image, Color::LightBlue).named("Central Ray"));

    // Through the near focus, leaving parallel to the axis.
    if shape == Shape::Convex && r.f > 0.0 {
        if let Some(y) = height_at(object, [-r.f, 0.0], 0.0) {
            diagram.push(
                Primitive::segment(object, [0.0, y], Color::LightGreen)
                    .named("Ray 3: Through near focus"),
            );
            diagram.push(Primitive::segment([0.0, y], [r.v, y], Color::LightGreen));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn convex_real() -> MeasurementSet {
        MeasurementSet::new()
            .with(Quantity::FocalLength, 20.)
            .with(Quantity::ObjectDistance, -30.)
            .with(Quantity::ImageDistance, 60.)
            .with(Quantity::ObjectHeight, 6.)
            .with(Quantity::ImageHeight, -12.)
    }

    #[test]
    fn outline_faces_by_shape() {
        for (shape, sign) in [(Shape::Convex, 1.0), (Shape::Concave, -1.0)] {
            let mut diagram = Diagram::new("lens", Bounds::symmetric(100., 80.));
            surface(&mut diagram, shape, 100.);

            let [
                Primitive::Polyline { points: left, .. },
                Primitive::Polyline { points: right, name, .. },
            ] = diagram.primitives.as_slice()
            else {
                panic!("expected two polylines");
            };

            assert_eq!(name.as_deref(), Some(format!("{} Lens", shape.title()).as_str()));
            assert_relative_eq!(left[0][0], 0.);
            assert_relative_eq!(left[0][1], -60.);
            assert_relative_eq!(right[OUTLINE_SAMPLES - 1][1], 60.);

            let widest = right.iter().map(|p| p[0] * sign).fold(f64::MIN, f64::max);
            assert!(widest > 5.9 && widest <= 6.0);
        }
    }

    #[test]
    fn both_foci_are_marked() {
        let diagram = diagram(Shape::Convex, &convex_real());

        let foci: Vec<[f64; 2]> = diagram
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Point { at, .. } => Some(*at),
                _ => None,
            })
            .collect();
        assert_eq!(foci, vec![[20., 0.], [-20., 0.]]);
        assert_eq!(diagram.title, "Convex Lens Ray Diagram");
        assert_relative_eq!(diagram.bounds.x[1], 78.);
    }

    #[test]
    fn convex_lens_traces_near_focus_ray() {
        let diagram = diagram(Shape::Convex, &convex_real());
        let legend: Vec<&str> = diagram.legend().collect();

        assert!(legend.contains(&"Central Ray"));
        assert!(legend.contains(&"Ray 3: Through near focus"));

        // The near-focus ray meets the lens at the image height.
        let leg = diagram.primitives.iter().find_map(|p| match p {
            Primitive::Segment {
                from,
                to,
                color: Color::LightGreen,
                name: None,
                ..
            } => Some((*from, *to)),
            _ => None,
        });
        let (from, to) = leg.expect("refracted leg");
        assert_relative_eq!(from[1], -12., epsilon = 1e-9);
        assert_relative_eq!(to[0], 60.);
        assert_relative_eq!(to[1], -12., epsilon = 1e-9);
    }

    #[test]
    fn concave_lens_has_virtual_image_and_no_focus_ray() {
        let set = MeasurementSet::new()
            .with(Quantity::FocalLength, -20.)
            .with(Quantity::ObjectDistance, -30.)
            .with(Quantity::ImageDistance, -12.)
            .with(Quantity::ObjectHeight, 6.)
            .with(Quantity::ImageHeight, 2.4);
        let diagram = diagram(Shape::Concave, &set);

        assert!(!diagram.legend().any(|name| name.starts_with("Ray 3")));
        assert!(diagram.primitives.iter().any(|p| matches!(
            p,
            Primitive::Arrow { color: Color::Orange, style: LineStyle::Dashed, .. }
        )));
    }
}
