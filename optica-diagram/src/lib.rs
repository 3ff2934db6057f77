//! Ray-diagram geometry for single mirrors and thin lenses.
//!
//! [`generate`] turns a solved [`MeasurementSet`] into a backend-agnostic
//! [`Diagram`]: a title, a bounding box, and a list of [`Primitive`]s in
//! optic coordinates (distance along the principal axis, height above it).
//! Presenting a diagram is the job of a [`Renderer`].
//!
//! [`MeasurementSet`]: optica_core::MeasurementSet

mod generate;
mod primitive;
mod render;

pub use generate::{axis_range, generate};
pub use primitive::{Bounds, Color, Diagram, LineStyle, Point2, Primitive};
pub use render::{RenderError, Renderer};
