//! Database module - PostgreSQL client wiring using SQLx
//!
//! - Connection pool management
//! - Mapping of database failures onto API errors

pub mod connection;
pub mod error;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use error::DatabaseError;
