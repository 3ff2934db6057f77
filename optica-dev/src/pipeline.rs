use optica_diagram::{Renderer, generate};
use optica_solve::{Failure, SolverConfig, Warning};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{Request, Response};

/// Runs one calculation with the default solver configuration.
pub fn calculate<R>(request: &Request, renderer: &R) -> Response
where
    R: Renderer,
    R::Artifact: Serialize,
{
    calculate_with(request, &SolverConfig::default(), renderer)
}

/// Validates, solves, and renders one request.
///
/// A rendering failure leaves `diagram` empty but never fails the response;
/// the computed values are returned regardless.
pub fn calculate_with<R>(request: &Request, config: &SolverConfig, renderer: &R) -> Response
where
    R: Renderer,
    R::Artifact: Serialize,
{
    let solution = match optica_solve::calculate(&request.to_raw(), config) {
        Ok(solution) => solution,
        Err(Failure::Rejected(rejection)) => {
            debug!(%rejection, "request rejected");
            return Response::Failure {
                errors: rejection.errors.iter().map(ToString::to_string).collect(),
            };
        }
        Err(Failure::Solve(error)) => {
            warn!(%error, "solve failed");
            return Response::Failure {
                errors: vec![error.to_string()],
            };
        }
    };

    info!(
        spec = %solution.spec.title(),
        derived = solution.derivations.len(),
        warnings = solution.warnings.len(),
        at_infinity = solution.warnings.iter().any(Warning::is_focal_point_degeneracy),
        "calculation complete"
    );

    let diagram = generate(solution.spec, &solution.measurements);
    let diagram = match renderer.render(&diagram) {
        Ok(artifact) => serde_json::to_value(artifact)
            .inspect_err(|error| warn!(%error, "failed to encode diagram"))
            .ok(),
        Err(error) => {
            warn!(%error, "failed to render diagram");
            None
        }
    };

    Response::Success {
        results: solution.measurements,
        image_characteristics: solution.characteristics,
        warnings: solution.warnings.iter().map(ToString::to_string).collect(),
        diagram,
    }
}
