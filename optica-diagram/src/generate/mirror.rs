use std::f64::consts::FRAC_PI_3;

use optica_core::{MeasurementSet, OpticSpec, Quantity, Shape};

use super::{
    HEIGHT_FRACTION, OUTLINE_SAMPLES, Resolved, axes, axis_range, finite, height_at, image_arrow,
    linspace, object_arrow,
};
use crate::{Bounds, Color, Diagram, LineStyle, Primitive};

/// Apex offset of the drawn mirror arc from the optic plane.
pub(super) fn curvature_scale(range: f64) -> f64 {
    (range * 0.05).max(2.0)
}

/// Mirror outline: an arc bulging right when concave and left when convex.
pub(super) fn surface(diagram: &mut Diagram, shape: Shape, range: f64) {
    let height = (range * 0.6).max(10.0);
    let apex = match shape {
        Shape::Concave => curvature_scale(range),
        Shape::Convex => -curvature_scale(range),
    };

    let points = linspace(-FRAC_PI_3, FRAC_PI_3, OUTLINE_SAMPLES)
        .map(|theta| [apex * theta.cos(), height * theta.sin() / 2.0])
        .collect();

    diagram.push(Primitive::Polyline {
        points,
        style: LineStyle::Solid,
        color: Color::Red,
        name: Some(format!("{} Mirror", shape.title())),
    });
}

pub(super) fn diagram(shape: Shape, set: &MeasurementSet) -> Diagram {
    let range = axis_range(set);
    let half_height = range * HEIGHT_FRACTION;
    let title = format!("{} Ray Diagram", OpticSpec::mirror(shape).title());
    let mut diagram = Diagram::new(title, Bounds::symmetric(range, half_height));

    axes(&mut diagram, range, half_height);
    surface(&mut diagram, shape, range);

    if let Some(f) = finite(set, Quantity::FocalLength) {
        diagram.push(
            Primitive::Point {
                at: [f, 0.0],
                color: Color::Red,
                size: 8.0,
                name: None,
            }
            .named(format!("Focus F (f={f})")),
        );
        diagram.push(
            Primitive::Point {
                at: [2.0 * f, 0.0],
                color: Color::Red,
                size: 6.0,
                name: None,
            }
            .named("Center C"),
        );
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
        image_arrow(&mut diagram, v, h2, v < 0.0);
    }

    if let Some(resolved) = Resolved::from_set(set) {
        rays(&mut diagram, shape, range, &resolved);
    }

    diagram
}

/// Principal rays, with reflected legs dashed for a virtual erect image.
fn rays(diagram: &mut Diagram, shape: Shape, range: f64, r: &Resolved) {
    let mirror_x = match shape {
        Shape::Concave => curvature_scale(range),
        Shape::Convex => -curvature_scale(range),
    };
    let reflected = if r.v > 0.0 && r.is_erect() {
        LineStyle::Dashed
    } else {
        LineStyle::Solid
    };
    let object = [r.u, r.h1];
    let image = [r.v, r.h2];

    // Parallel to the axis, reflected through (or away from) the focus.
    diagram.push(
        Primitive::segment(object, [mirror_x, r.h1], Color::Blue).named("Ray 1: Parallel to axis"),
    );
    diagram.push(Primitive::segment([mirror_x, r.h1], image, Color::Blue).styled(reflected));

    // Aimed at the focus, reflected parallel to the axis.
    if let Some(y) = height_at(object, [r.f, 0.0], mirror_x) {
        let name = match shape {
            Shape::Concave => "Ray 2: Through focus",
            Shape::Convex => "Ray 2: Toward focus",
        };
        diagram.push(Primitive::segment(object, [mirror_x, y], Color::Red).named(name));
        diagram.push(Primitive::segment([mirror_x, y], [r.v, y], Color::Red).styled(reflected));
    }

    // Aimed at the centre of curvature, reflected back on itself.
    if let Some(y) = height_at(object, [2.0 * r.f, 0.0], mirror_x) {
        diagram.push(
            Primitive::segment(object, [mirror_x, y], Color::Green)
                .named("Ray 3: Normal incidence"),
        );
        diagram.push(Primitive::segment([mirror_x, y], image, Color::Green).styled(reflected));
    }
}
