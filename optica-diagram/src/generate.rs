//! Ray-diagram generation from solved measurements.
//!
//! Generation is total: whatever subset of the measurements is known, a
//! diagram is produced. Elements that need an unknown value are omitted, and
//! rays are only traced once every quantity is known and finite.

mod focal;
mod lens;
mod mirror;

use optica_core::{MeasurementSet, OpticSpec, OpticType, Quantity};
use tracing::debug;

use crate::{Color, Diagram, LineStyle, Point2, Primitive};

/// Half-width used when no finite distance is known.
const FALLBACK_EXTENT: f64 = 10.0;

/// Margin applied to the largest finite distance.
const RANGE_MARGIN: f64 = 1.3;

/// Vertical half-extent as a fraction of the axis range.
const HEIGHT_FRACTION: f64 = 0.8;

/// Samples used for curved optic outlines.
const OUTLINE_SAMPLES: usize = 100;

/// Generates the ray diagram for `spec` and the solved `set`.
///
/// An infinite object or image distance produces the focal-point diagram.
#[must_use]
pub fn generate(spec: OpticSpec, set: &MeasurementSet) -> Diagram {
    let diagram = if set.has_infinite() {
        focal::diagram(spec, set)
    } else {
        match spec.optic_type {
            OpticType::Mirror => mirror::diagram(spec.shape, set),
            OpticType::Lens => lens::diagram(spec.shape, set),
        }
    };

    debug!(
        title = %diagram.title,
        primitives = diagram.primitives.len(),
        "generated ray diagram"
    );
    diagram
}

/// Half-width of the plotted axis: `1.3 × max(|u|, |v|, |f|)` over the
/// finite known distances.
#[must_use]
pub fn axis_range(set: &MeasurementSet) -> f64 {
    let extent = [
        Quantity::FocalLength,
        Quantity::ObjectDistance,
        Quantity::ImageDistance,
    ]
    .into_iter()
    .filter_map(|quantity| finite(set, quantity))
    .map(f64::abs)
    .fold(None, |max: Option<f64>, value| {
        Some(max.map_or(value, |max| max.max(value)))
    })
    .unwrap_or(FALLBACK_EXTENT);

    extent * RANGE_MARGIN
}

fn finite(set: &MeasurementSet, quantity: Quantity) -> Option<f64> {
    set.get(quantity).and_then(|value| value.as_finite())
}

/// Every quantity, if all five are known and finite.
struct Resolved {
    f: f64,
    u: f64,
    v: f64,
    h1: f64,
    h2: f64,
}

impl Resolved {
    fn from_set(set: &MeasurementSet) -> Option<Self> {
        Some(Self {
            f: finite(set, Quantity::FocalLength)?,
            u: finite(set, Quantity::ObjectDistance)?,
            v: finite(set, Quantity::ImageDistance)?,
            h1: finite(set, Quantity::ObjectHeight)?,
            h2: finite(set, Quantity::ImageHeight)?,
        })
    }

    fn is_erect(&self) -> bool {
        self.h1 * self.h2 > 0.0
    }
}

/// The horizontal principal axis and the vertical optic plane.
fn axes(diagram: &mut Diagram, range: f64, half_height: f64) {
    diagram.push(Primitive::segment([-range, 0.0], [range, 0.0], Color::Black));
    diagram.push(
        Primitive::segment([0.0, -half_height], [0.0, half_height], Color::Gray)
            .styled(LineStyle::Dashed),
    );
}

/// `n` evenly spaced samples of `[start, end]`.
fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let last = (n.max(2) - 1) as f64;
    (0..n).map(move |i| start + (end - start) * (i as f64 / last))
}

/// Object arrow and its label.
fn object_arrow(diagram: &mut Diagram, u: f64, h1: f64) {
    diagram.push(Primitive::arrow([u, 0.0], [u, h1], Color::Blue));
    diagram.push(Primitive::label([u, h1 * 1.1], "Object", Color::Blue));
}

/// Image arrow and its label, dashed when the image is virtual.
fn image_arrow(diagram: &mut Diagram, v: f64, h2: f64, real: bool) {
    let (color, style, text) = if real {
        (Color::Green, LineStyle::Solid, "Real Image")
    } else {
        (Color::Orange, LineStyle::Dashed, "Virtual Image")
    };

    diagram.push(Primitive::arrow([v, 0.0], [v, h2], color).styled(style));
    diagram.push(Primitive::label([v, h2 * 1.1], text, color));
}

/// Height at `x` of the line through `from` and `through`, or `None` if the
/// line is vertical.
fn height_at(from: Point2, through: Point2, x: f64) -> Option<f64> {
    let run = through[0] - from[0];
    if run.abs() < f64::EPSILON {
        return None;
    }
    let slope = (through[1] - from[1]) / run;
    Some(from[1] + slope * (x - from[0]))
}
