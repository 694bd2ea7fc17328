//! Validation error types

use std::fmt;

/// Validation error for insert records
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds the column's maximum length
    TooLong { field: &'static str, max: usize },

    /// String doesn't match required format (e.g., email)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Count or amount below zero
    Negative { field: &'static str, value: i64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::Negative { field, value } => {
                write!(f, "{} cannot be negative (got {})", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Maximum length of VARCHAR(255) columns.
pub(crate) const MAX_VARCHAR_LEN: usize = 255;

/// Require a non-blank string that fits a VARCHAR(255) column.
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    fit_varchar(field, value)
}

/// Length check only; empty strings pass.
pub(crate) fn fit_varchar(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.chars().count() > MAX_VARCHAR_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_VARCHAR_LEN,
        });
    }
    Ok(())
}

pub(crate) fn non_negative(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "title",
            max: 255,
        };
        assert_eq!(
            err.to_string(),
            "title exceeds maximum length of 255 characters"
        );

        let err = ValidationError::Negative {
            field: "cost_per_night",
            value: -5,
        };
        assert_eq!(err.to_string(), "cost_per_night cannot be negative (got -5)");
    }

    #[test]
    fn require_text_rejects_blank() {
        assert_eq!(
            require_text("name", "   "),
            Err(ValidationError::Empty { field: "name" })
        );
        assert!(require_text("name", "Devin Sanders").is_ok());
    }

    #[test]
    fn varchar_limit_counts_chars() {
        assert!(fit_varchar("street", &"é".repeat(255)).is_ok());
        assert!(matches!(
            fit_varchar("street", &"a".repeat(256)),
            Err(ValidationError::TooLong { max: 255, .. })
        ));
    }
}
