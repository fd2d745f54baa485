//! Shared types for the GathEvent server
//!
//! This crate provides common functionality used across all server modules:
//! - The error taxonomy and the error response envelope (the wire contract)
//! - Configuration types

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{AppConfig, ConfigError, DatabaseConfig, Environment, LoggingConfig, ServerConfig};
pub use errors::{create_error_response, ErrorBody, ErrorCode, ErrorDetails, ErrorEnvelope};
