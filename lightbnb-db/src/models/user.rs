//! User rows and the record used to insert them

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{fit_varchar, require_text};
use super::ValidationError;

/// Loose shape check: one `@`, no whitespace, something on both sides.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("invalid email regex"));

/// User record from database
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Already hashed by the caller; never hashed or compared here.
    #[serde(skip_serializing)]
    pub password: String,
}

/// Fields for a new `users` row.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check the record fits the `users` table.
    ///
    /// Email uniqueness is left to the table's constraint.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        require_text("email", &self.email)?;
        if !EMAIL_RE.is_match(&self.email) {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "must look like name@host",
            });
        }
        if self.password.is_empty() {
            return Err(ValidationError::Empty { field: "password" });
        }
        fit_varchar("password", &self.password)
    }
}
