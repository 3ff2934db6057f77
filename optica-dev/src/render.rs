use optica_diagram::{Diagram, RenderError, Renderer};

/// Renders a diagram as JSON for a browser front end to draw.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    type Artifact = serde_json::Value;
    type Error = RenderError;

    fn render(&self, diagram: &Diagram) -> Result<serde_json::Value, RenderError> {
        diagram.ensure_drawable()?;
        serde_json::to_value(diagram).map_err(|error| RenderError::Backend(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use optica_diagram::{Bounds, Color, Primitive};

    #[test]
    fn renders_title_bounds_and_primitives() {
        let mut diagram = Diagram::new("Convex Lens Ray Diagram", Bounds::symmetric(78., 62.4));
        diagram.push(Primitive::segment([-78., 0.], [78., 0.], Color::Black));

        let json = JsonRenderer.render(&diagram).unwrap();

        assert_eq!(json["title"], "Convex Lens Ray Diagram");
        assert_eq!(json["bounds"]["x"][1], 78.0);
        assert_eq!(json["primitives"][0]["kind"], "segment");
        assert_eq!(json["primitives"][0]["color"], "black");
    }

    #[test]
    fn refuses_undrawable_diagrams() {
        let diagram = Diagram::new("empty", Bounds::symmetric(1., 1.));
        assert_eq!(JsonRenderer.render(&diagram), Err(RenderError::Empty));
    }
}
