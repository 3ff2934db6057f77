//! Desktop viewer for ray diagrams.
//!
//! See [`DiagramApp`] to open a window directly, or [`NativeWindow`] to use the
//! viewer wherever a [`Renderer`] is expected.

use eframe::egui::{self, Color32};
use egui_plot::{Arrows, Legend, Line, Plot, PlotPoint, PlotPoints, Points, Text};
use optica_diagram::{Color, Diagram, LineStyle, Primitive, RenderError, Renderer};
use tracing::debug;

/// A runnable egui application that draws one [`Diagram`].
pub struct DiagramApp {
    diagram: Diagram,
}

impl DiagramApp {
    /// Creates a viewer for `diagram`.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] if the diagram is not drawable.
    pub fn new(diagram: Diagram) -> Result<Self, RenderError> {
        diagram.ensure_drawable()?;
        Ok(Self { diagram })
    }

    /// Opens a blocking window titled `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn run(self, name: &str) -> Result<(), eframe::Error> {
        debug!(
            title = %self.diagram.title,
            primitives = self.diagram.primitives.len(),
            "opening diagram window"
        );
        eframe::run_native(
            name,
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }
}

impl eframe::App for DiagramApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(&self.diagram.title);

            let bounds = self.diagram.bounds;
            Plot::new("ray-diagram")
                .legend(Legend::default())
                .include_x(bounds.x[0])
                .include_x(bounds.x[1])
                .include_y(bounds.y[0])
                .include_y(bounds.y[1])
                .x_axis_label("Distance")
                .y_axis_label("Height")
                .show(ui, |plot_ui| {
                    for primitive in &self.diagram.primitives {
                        match primitive {
                            Primitive::Segment {
                                from,
                                to,
                                style,
                                color,
                                name,
                            } => plot_ui.line(line(vec![*from, *to], *style, *color, name.as_deref())),
                            Primitive::Polyline {
                                points,
                                style,
                                color,
                                name,
                            } => plot_ui.line(line(points.clone(), *style, *color, name.as_deref())),
                            Primitive::Point {
                                at,
                                color,
                                size,
                                name,
                            } => {
                                let mut points = Points::new(PlotPoints::from(vec![*at]))
                                    .radius(*size / 2.0)
                                    .color(color32(*color));
                                if let Some(name) = name {
                                    points = points.name(name);
                                }
                                plot_ui.points(points);
                            }
                            Primitive::Arrow {
                                from,
                                to,
                                style,
                                color,
                                name,
                            } => {
                                // Arrows have no dash support, so draw the shaft as a line.
                                let shaft = line(vec![*from, *to], *style, *color, name.as_deref());
                                plot_ui.line(shaft.width(3.0));
                                plot_ui.arrows(
                                    Arrows::new(vec![*from], vec![*to]).color(color32(*color)),
                                );
                            }
                            Primitive::Label { at, text, color } => plot_ui.text(
                                Text::new(PlotPoint::new(at[0], at[1]), text.as_str())
                                    .color(color32(*color)),
                            ),
                        }
                    }
                });
        });
    }
}

fn line(points: Vec<[f64; 2]>, style: LineStyle, color: Color, name: Option<&str>) -> Line {
    let mut line = Line::new(PlotPoints::from(points))
        .color(color32(color))
        .width(2.0)
        .style(line_style(style));
    if let Some(name) = name {
        line = line.name(name);
    }
    line
}

/// Maps a diagram line style onto egui's.
#[must_use]
pub fn line_style(style: LineStyle) -> egui_plot::LineStyle {
    match style {
        LineStyle::Solid => egui_plot::LineStyle::Solid,
        LineStyle::Dashed => egui_plot::LineStyle::dashed_loose(),
    }
}

/// Maps a diagram color onto an egui color.
#[must_use]
pub fn color32(color: Color) -> Color32 {
    match color {
        Color::Black => Color32::BLACK,
        Color::Gray => Color32::GRAY,
        Color::Red => Color32::from_rgb(220, 50, 50),
        Color::Blue => Color32::from_rgb(50, 90, 220),
        Color::Green => Color32::from_rgb(50, 170, 80),
        Color::Orange => Color32::from_rgb(240, 150, 30),
        Color::LightBlue => Color32::from_rgb(130, 190, 240),
        Color::LightGreen => Color32::from_rgb(140, 220, 140),
    }
}

/// Renders a diagram by opening a blocking viewer window.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeWindow;

impl Renderer for NativeWindow {
    type Artifact = ();
    type Error = RenderError;

    fn render(&self, diagram: &Diagram) -> Result<(), RenderError> {
        let title = diagram.title.clone();
        DiagramApp::new(diagram.clone())?
            .run(&title)
            .map_err(|error| RenderError::Backend(error.to_string()))
    }
}
