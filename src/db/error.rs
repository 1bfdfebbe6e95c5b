//! Storage error types.

use sqlx::error::ErrorKind;
use std::fmt;

/// Integrity constraint that rejected a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// A required column was null.
    NotNull,
    /// A unique column or composite key already holds the value.
    Unique,
    /// A `CHECK` constraint failed (column length limits).
    Check,
    /// A referenced teacher or student does not exist.
    ForeignKey,
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotNull => write!(f, "not null"),
            Self::Unique => write!(f, "unique"),
            Self::Check => write!(f, "check"),
            Self::ForeignKey => write!(f, "foreign key"),
        }
    }
}

/// Storage error types.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database could not be opened or created.
    #[error("failed to open database: {0}")]
    Connection(#[source] sqlx::Error),

    /// A column constraint rejected the statement.
    #[error("{kind} constraint violated: {message}")]
    Constraint {
        /// Which constraint failed.
        kind: ConstraintKind,
        /// Message reported by the database.
        message: String,
    },

    /// Schema initialization failed.
    #[error("schema initialization failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Any other query failure.
    #[error("query failed: {0}")]
    Query(#[source] sqlx::Error),
}

impl StoreError {
    /// Returns the violated constraint, if this is a constraint error.
    #[must_use]
    pub fn constraint(&self) -> Option<ConstraintKind> {
        match self {
            Self::Constraint { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let kind = match db_err.kind() {
                ErrorKind::UniqueViolation => Some(ConstraintKind::Unique),
                ErrorKind::ForeignKeyViolation => Some(ConstraintKind::ForeignKey),
                ErrorKind::NotNullViolation => Some(ConstraintKind::NotNull),
                ErrorKind::CheckViolation => Some(ConstraintKind::Check),
                _ => None,
            };
            if let Some(kind) = kind {
                return StoreError::Constraint {
                    kind,
                    message: db_err.message().to_string(),
                };
            }
        }
        StoreError::Query(err)
    }
}
