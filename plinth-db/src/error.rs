//! Structured error types for plinth-db.
//!
//! Uses `thiserror` for composable library errors. Driver errors propagate
//! as-is; only startup connection failures get translated into a
//! diagnostic `Unavailable` variant so operators see the likely cause
//! instead of a bare I/O error.

use thiserror::Error;

/// Result type alias for plinth-db operations
pub type Result<T> = std::result::Result<T, DbError>;

/// Main error type for plinth-db operations
#[derive(Error, Debug)]
pub enum DbError {
    /// Driver or query error, propagated from sqlx
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Database could not be reached during startup
    #[error("database unavailable: {reason}")]
    Unavailable { reason: String },

    /// Missing or invalid configuration
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// Row lookup miss
    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    /// Create an unavailable error with a diagnostic reason
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Create a not-found error for a resource lookup
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

/// Map a startup failure to `Unavailable` when it is connection-level,
/// leaving query-level errors untouched.
///
/// Connection-level means the server never processed a statement: socket
/// or TLS failure, pool acquire timeout, or a malformed connection string.
pub(crate) fn translate_startup_error(err: sqlx::Error) -> DbError {
    match err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Configuration(_) => DbError::Unavailable {
            reason: format!(
                "could not connect to PostgreSQL ({err}); \
                 is the database running and DATABASE_URL correct?"
            ),
        },
        other => DbError::Sqlx(other),
    }
}
