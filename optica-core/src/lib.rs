//! Shared vocabulary for geometric-optics calculations.
//!
//! Types in this crate describe *what* is being solved: the selected optic
//! ([`OpticSpec`]), the quantities related by the mirror and lens formulas
//! ([`Quantity`], [`MeasurementSet`]), and solved values that may legitimately
//! be infinite ([`Value`]).

pub mod constraint;
mod measurement;
mod optic;
mod value;

pub use measurement::{MeasurementSet, Quantity};
pub use optic::{OpticSpec, OpticType, ParseSelectionError, Shape};
pub use value::{NEGATIVE_INFINITY, POSITIVE_INFINITY, Value};
