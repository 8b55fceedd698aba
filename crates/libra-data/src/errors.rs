use sqlx::error::ErrorKind;
use thiserror::Error as ThisError;

pub type Result<T, E = QueryError> = std::result::Result<T, E>;

/// Data access errors
#[derive(Debug, ThisError)]
pub enum QueryError {
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    #[error("{context}: database unavailable")]
    ConnectionFailure {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("{context}: constraint violation")]
    ConstraintViolation {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("{context}")]
    Database {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl QueryError {
    /// Classify a driver error. `context` is the message shown to callers,
    /// e.g. "failed to fetch card data".
    pub fn from_sqlx(context: &'static str, source: sqlx::Error) -> Self {
        match &source {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::ConnectionFailure { context, source },
            sqlx::Error::Database(err) => match err.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => Self::ConstraintViolation { context, source },
                _ => Self::Database { context, source },
            },
            _ => Self::Database { context, source },
        }
    }

    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
