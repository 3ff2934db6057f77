use clap::Parser;
use optica_dev::{ServerConfig, ServerError, run_server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let config = ServerConfig::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_directive()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    run_server(config).await
}
