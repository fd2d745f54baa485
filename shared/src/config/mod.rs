//! Configuration module with business-specific sub-modules
//!
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration
//!
//! [`AppConfig::load`] layers, lowest precedence first: the built-in defaults
//! for the detected environment, an optional `config.<env>.toml` file, and
//! `APP__`-prefixed environment variables (`APP__SERVER__PORT=9000`). The
//! conventional `DATABASE_URL` variable is honoured last.

pub mod database;
pub mod environment;
pub mod server;

use config::{Config, Environment as EnvSource, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use thiserror::Error;

pub use database::DatabaseConfig;
pub use environment::{Environment, LoggingConfig};
pub use server::ServerConfig;

/// Errors raised while assembling the application configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Built-in defaults for an environment
    pub fn for_environment(environment: Environment) -> Self {
        let server = match environment {
            Environment::Development => ServerConfig::new("127.0.0.1", 3000),
            Environment::Staging | Environment::Production => ServerConfig::new("0.0.0.0", 3000),
        };

        Self {
            environment,
            server,
            database: DatabaseConfig::default(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Load configuration for the environment detected from the process
    pub fn load() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let file = environment.config_file();
        let mut config = Self::load_with(
            environment,
            Some(Path::new(&file)),
            EnvSource::with_prefix("APP"),
        )?;

        if let Ok(url) = env::var("DATABASE_URL") {
            config.database.url = Some(url);
        }

        Ok(config)
    }

    /// Load configuration from explicit sources.
    ///
    /// `file` may point at a missing file; it is then skipped.
    pub fn load_with(
        environment: Environment,
        file: Option<&Path>,
        overrides: EnvSource,
    ) -> Result<Self, ConfigError> {
        let defaults = Config::try_from(&Self::for_environment(environment))?;

        let mut builder = Config::builder().add_source(defaults);
        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(false));
        }
        builder = builder.add_source(overrides.separator("__").try_parsing(true));

        Ok(builder.build()?.try_deserialize()?)
    }
}
