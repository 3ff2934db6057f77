use std::{
    net::{IpAddr, SocketAddr},
    path::PathBuf,
};

use clap::Parser;

use crate::ServerError;

/// Serves the optica mirror and lens calculator over HTTP.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "optica-dev")]
#[command(version, about, long_about = None)]
pub struct ServerConfig {
    /// Host address to bind to
    #[arg(short = 'H', long, env = "OPTICA_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "OPTICA_PORT", default_value_t = 3030)]
    pub port: u16,

    /// Directory of static front-end files
    #[arg(long, env = "OPTICA_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3030,
            static_dir: None,
            verbose: false,
        }
    }
}

impl ServerConfig {
    /// Socket address to listen on.
    ///
    /// # Errors
    ///
    /// Returns an error if `host` is not an IP address.
    pub fn addr(&self) -> Result<SocketAddr, ServerError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ServerError::InvalidHost {
                host: self.host.clone(),
                source,
            })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Directory served at `/`, defaulting to `static/` beside this crate.
    #[must_use]
    pub fn static_dir(&self) -> PathBuf {
        self.static_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"))
    }

    /// Default log filter when `RUST_LOG` is not set.
    #[must_use]
    pub fn log_directive(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let config =
            ServerConfig::try_parse_from(["optica-dev", "-H", "0.0.0.0", "--port", "8080", "-v"])
                .unwrap();

        assert_eq!(config.addr().unwrap(), "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.log_directive(), "debug");
    }

    #[test]
    fn default_serves_bundled_static_dir() {
        let config = ServerConfig::default();

        assert_eq!(config.addr().unwrap(), "127.0.0.1:3030".parse().unwrap());
        assert!(config.static_dir().ends_with("static"));
        assert_eq!(config.log_directive(), "info");
    }

    #[test]
    fn rejects_host_names() {
        let config = ServerConfig {
            host: "localhost".into(),
            ..ServerConfig::default()
        };
        assert!(matches!(
            config.addr(),
            Err(ServerError::InvalidHost { .. })
        ));
    }
}
