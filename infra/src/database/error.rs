//! Database failures and their mapping onto API errors

use ge_core::errors::ApiError;
use thiserror::Error;

/// Errors raised by the database layer
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database URL is not configured")]
    NotConfigured,

    #[error("Invalid database URL: {0}")]
    InvalidUrl(String),

    #[error("Database error: {0}")]
    Query(#[from] sqlx::Error),
}

/// Database failures surface to clients without their internal text:
/// missing rows become `NOT_FOUND`, constraint violations `CONFLICT`, and
/// everything else an internal error with the default message.
impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::Query(sqlx::Error::RowNotFound) => ApiError::not_found("ResourceNotFound"),
            DatabaseError::Query(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                let error = ApiError::conflict("UniqueViolation");
                match db_err.constraint() {
                    Some(constraint) => error.with_detail("constraint", constraint),
                    None => error,
                }
            }
            DatabaseError::Query(sqlx::Error::Database(db_err))
                if db_err.is_foreign_key_violation() =>
            {
                ApiError::conflict("ForeignKeyViolation")
            }
            DatabaseError::NotConfigured => ApiError::internal_server_error("DatabaseNotConfigured"),
            _ => ApiError::internal_server_error("DatabaseError"),
        }
    }
}
