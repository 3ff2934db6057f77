use serde::Serialize;

/// A point in diagram coordinates: `[distance along the axis, height]`.
pub type Point2 = [f64; 2];

/// Named colors used by the generated diagrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Black,
    Gray,
    Red,
    Blue,
    Green,
    Orange,
    LightBlue,
    LightGreen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
}

/// A drawable element of a ray diagram.
///
/// Elements with a `name` appear in the legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Segment {
        from: Point2,
        to: Point2,
        style: LineStyle,
        color: Color,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    Polyline {
        points: Vec<Point2>,
        style: LineStyle,
        color: Color,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    Point {
        at: Point2,
        color: Color,
        size: f32,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    Arrow {
        from: Point2,
        to: Point2,
        style: LineStyle,
        color: Color,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    Label {
        at: Point2,
        text: String,
        color: Color,
    },
}

impl Primitive {
    /// A solid, unnamed segment.
    #[must_use]
    pub fn segment(from: Point2, to: Point2, color: Color) -> Self {
        Self::Segment {
            from,
            to,
            style: LineStyle::Solid,
            color,
            name: None,
        }
    }

    /// A solid, unnamed arrow.
    #[must_use]
    pub fn arrow(from: Point2, to: Point2, color: Color) -> Self {
        Self::Arrow {
            from,
            to,
            style: LineStyle::Solid,
            color,
            name: None,
        }
    }

    #[must_use]
    pub fn label(at: Point2, text: impl Into<String>, color: Color) -> Self {
        Self::Label {
            at,
            text: text.into(),
            color,
        }
    }

    /// Sets the line style; has no effect on points and labels.
    #[must_use]
    pub fn styled(mut self, line_style: LineStyle) -> Self {
        match &mut self {
            Self::Segment { style, .. } | Self::Polyline { style, .. } | Self::Arrow { style, .. } => {
                *style = line_style;
            }
            Self::Point { .. } | Self::Label { .. } => {}
        }
        self
    }

    /// Sets the legend name; has no effect on labels.
    #[must_use]
    pub fn named(mut self, legend: impl Into<String>) -> Self {
        match &mut self {
            Self::Segment { name, .. }
            | Self::Polyline { name, .. }
            | Self::Point { name, .. }
            | Self::Arrow { name, .. } => *name = Some(legend.into()),
            Self::Label { .. } => {}
        }
        self
    }

    /// Returns the legend name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Segment { name, .. }
            | Self::Polyline { name, .. }
            | Self::Point { name, .. }
            | Self::Arrow { name, .. } => name.as_deref(),
            Self::Label { .. } => None,
        }
    }

    /// Returns every coordinate this primitive places.
    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        match self {
            Self::Segment { from, to, .. } | Self::Arrow { from, to, .. } => vec![*from, *to],
            Self::Polyline { points, .. } => points.clone(),
            Self::Point { at, .. } | Self::Label { at, .. } => vec![*at],
        }
    }
}

/// Visible region of a diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl Bounds {
    /// Bounds symmetric about the origin.
    #[must_use]
    pub fn symmetric(half_width: f64, half_height: f64) -> Self {
        Self {
            x: [-half_width, half_width],
            y: [-half_height, half_height],
        }
    }
}

/// A complete ray diagram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagram {
    pub title: String,
    pub bounds: Bounds,
    pub primitives: Vec<Primitive>,
}

impl Diagram {
    #[must_use]
    pub fn new(title: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            title: title.into(),
            bounds,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Iterates over the primitives that carry a legend name.
    pub fn legend(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(Primitive::name)
    }
}
