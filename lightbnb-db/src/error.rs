//! Error types for lightbnb-db
//!
//! Every operation returns [`Result`]. "Not found" is never an error: lookups
//! return `Ok(None)` and only store failures surface as [`DbError`].

use sqlx::error::ErrorKind;
use thiserror::Error;

use crate::models::ValidationError;

pub type Result<T> = std::result::Result<T, DbError>;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("conflict on {resource}: {detail}")]
    Conflict {
        resource: &'static str,
        detail: String,
    },

    #[error("{resource} references a missing row: {detail}")]
    MissingReference {
        resource: &'static str,
        detail: String,
    },

    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("configuration error: {reason}")]
    Config { reason: String },

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

impl DbError {
    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Classify an error raised by an INSERT into `resource`.
    ///
    /// Unique and foreign-key violations become [`DbError::Conflict`] and
    /// [`DbError::MissingReference`]; everything else stays [`DbError::Sqlx`].
    pub(crate) fn on_insert(resource: &'static str, err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::UniqueViolation => {
                    return Self::Conflict {
                        resource,
                        detail: db_err.message().to_owned(),
                    }
                }
                ErrorKind::ForeignKeyViolation => {
                    return Self::MissingReference {
                        resource,
                        detail: db_err.message().to_owned(),
                    }
                }
                _ => {}
            }
        }
        Self::Sqlx(err)
    }

    /// True when the store rejected a duplicate (e.g. an email already taken).
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}
