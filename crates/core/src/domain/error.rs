// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Field '{field}' must not be blank")]
    BlankField { field: &'static str },

    #[error("Field '{field}' must not be negative (got {value})")]
    NegativeValue { field: &'static str, value: i64 },

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Invalid stay: end date {end} is not after start date {start}")]
    InvalidStay { start: String, end: String },
}

pub type Result<T> = std::result::Result<T, DomainError>;

/// Reject empty or whitespace-only text fields
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DomainError::BlankField { field });
    }
    Ok(())
}

pub(crate) fn require_non_negative(field: &'static str, value: i32) -> Result<()> {
    if value < 0 {
        return Err(DomainError::NegativeValue {
            field,
            value: i64::from(value),
        });
    }
    Ok(())
}
