use std::{convert::Infallible, path::PathBuf};

use optica_solve::SolverConfig;
use thiserror::Error;
use tracing::{error, info, warn};
use warp::{Filter, hyper::body::Bytes};

use crate::{JsonRenderer, Request, Response, ServerConfig, calculate_with};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid host `{host}`")]
    InvalidHost {
        host: String,
        source: std::net::AddrParseError,
    },

    #[error("failed to bind server")]
    Bind(#[from] warp::Error),
}

/// Runs the calculator server until the process exits.
///
/// The server provides:
/// - `/calculate` endpoint for POST requests with a JSON body
/// - Static file serving from the configured directory
///
/// # Errors
///
/// Returns an error if the address is invalid or cannot be bound.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let addr = config.addr()?;
    let static_dir = config.static_dir();
    if !static_dir.is_dir() {
        warn!(dir = %static_dir.display(), "static directory not found");
    }

    let (addr, server) = warp::serve(routes(static_dir, SolverConfig::default()))
        .try_bind_ephemeral(addr)?;

    info!("Server running on http://{addr}");
    server.await;
    Ok(())
}

/// The `/calculate` endpoint and static files.
pub fn routes(
    static_dir: PathBuf,
    solver: SolverConfig,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let calculate = warp::path("calculate")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::bytes())
        .and_then(move |body: Bytes| async move {
            let response = handle(body, solver).await;
            Ok::<_, Infallible>(warp::reply::json(&response))
        });

    let static_files = warp::fs::dir(static_dir);

    calculate.or(static_files)
}

/// Parses and calculates one request off the async runtime.
async fn handle(body: Bytes, solver: SolverConfig) -> Response {
    let request: Request = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(error) => {
            warn!(%error, "malformed request body");
            return Response::server_error(error);
        }
    };

    match tokio::task::spawn_blocking(move || calculate_with(&request, &solver, &JsonRenderer))
        .await
    {
        Ok(response) => response,
        Err(join_error) => {
            error!(error = %join_error, "calculation task failed");
            Response::server_error(join_error)
        }
    }
}
