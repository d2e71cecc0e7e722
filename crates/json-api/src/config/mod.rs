//! Server configuration module

use clap::Parser;
#[cfg(test)]
use clap::{CommandFactory, FromArgMatches};

use crate::config::{cors::CorsConfig, logging::LoggingConfig, server::ServerRuntimeConfig};

pub(crate) mod cors;
pub(crate) mod logging;
pub(crate) mod server;

pub(crate) use logging::LogFormat;

/// Comercio JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "comercio-json", about = "Comercio JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network and request settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Cross-origin settings.
    #[command(flatten)]
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }

    /// Parse flags only, ignoring the process environment.
    #[cfg(test)]
    pub(crate) fn parse_without_env<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Self::command()
            .mut_args(|arg| arg.env(None::<&'static str>))
            .try_get_matches_from(args)?;

        Self::from_arg_matches(&matches)
    }

    /// Line logged once the listener is bound.
    #[must_use]
    pub fn startup_message(&self) -> String {
        format!("server listening on http://{}", self.socket_addr())
    }
}
