//! # Infrastructure Layer
//!
//! Concrete implementations of the external collaborators the GathEvent API
//! consumes. Currently this is the PostgreSQL client: a lazily connecting
//! SQLx pool and the translation of database failures into API errors.

pub mod database;

pub use database::{DatabaseError, DatabasePool, PoolStatistics};
