use thiserror::Error;

use crate::Diagram;

/// Turns a [`Diagram`] into some presentable artifact.
///
/// Generating a diagram never fails, but rendering it may. Callers are
/// expected to treat a rendering failure as "no diagram" rather than as a
/// failed calculation.
pub trait Renderer {
    type Artifact;
    type Error: std::error::Error;

    /// Renders `diagram`.
    ///
    /// # Errors
    ///
    /// Returns an error if the diagram cannot be rendered.
    fn render(&self, diagram: &Diagram) -> Result<Self::Artifact, Self::Error>;
}

/// Reasons a diagram could not be rendered.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum RenderError {
    #[error("diagram has nothing to draw")]
    Empty,

    #[error("primitive {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    #[error("diagram bounds are degenerate")]
    DegenerateBounds,

    #[error("rendering backend failed: {0}")]
    Backend(String),
}

impl Diagram {
    /// Checks that the diagram can be drawn.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] if the diagram is empty, its bounds are not
    /// a finite non-empty box, or any coordinate is not finite.
    pub fn ensure_drawable(&self) -> Result<(), RenderError> {
        if self.primitives.is_empty() {
            return Err(RenderError::Empty);
        }

        let [x0, x1] = self.bounds.x;
        let [y0, y1] = self.bounds.y;
        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite())
            || x0 >= x1
            || y0 >= y1
        {
            return Err(RenderError::DegenerateBounds);
        }

        if let Some(index) = self.primitives.iter().position(|primitive| {
            primitive
                .points()
                .iter()
                .flatten()
                .any(|coordinate| !coordinate.is_finite())
        }) {
            return Err(RenderError::NonFinite { index });
        }

        Ok(())
    }
}
