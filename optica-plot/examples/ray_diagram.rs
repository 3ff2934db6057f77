//! Solves a concave mirror scene and opens its ray diagram.
//!
//! Run with `cargo run -p optica-plot --example ray_diagram`.

use optica_core::Quantity;
use optica_diagram::generate;
use optica_plot::DiagramApp;
use optica_solve::{RawInputs, SolverConfig, calculate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let raw = RawInputs::new()
        .optic_type("mirror")
        .shape("concave")
        .value(Quantity::FocalLength, "-10")
        .value(Quantity::ObjectDistance, "-30")
        .value(Quantity::ObjectHeight, "4");

    let solution = calculate(&raw, &SolverConfig::default())?;
    for warning in &solution.warnings {
        eprintln!("warning: {warning}");
    }

    let diagram = generate(solution.spec, &solution.measurements);
    let title = diagram.title.clone();
    DiagramApp::new(diagram)?.run(&title)?;

    Ok(())
}
