// sqlx::Error -> AppError conversion
//
// Lives here rather than in core because of the orphan rule (core has no
// sqlx dependency and cannot implement From<sqlx::Error>).

use lightbnb_core::error::AppError;

/// Convert sqlx::Error to AppError with structured information
pub fn map_sqlx_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) => classify_database_error(
            db_err.code().as_deref(),
            db_err.message(),
            db_err.constraint(),
        ),
        sqlx::Error::RowNotFound => AppError::NotFound("Row not found".to_string()),
        sqlx::Error::ColumnNotFound(col) => {
            AppError::Internal(format!("Column not found in result set: {}", col))
        }
        sqlx::Error::ColumnDecode { index, source } => {
            AppError::Internal(format!("Failed to decode column {}: {}", index, source))
        }
        sqlx::Error::Configuration(e) => AppError::Config(e.to_string()),
        sqlx::Error::PoolTimedOut => {
            AppError::Database("Store unavailable: timed out acquiring a connection".to_string())
        }
        sqlx::Error::PoolClosed => {
            AppError::Database("Store unavailable: connection pool is closed".to_string())
        }
        _ => {
            // Io, Tls, Protocol and other connectivity failures
            AppError::Database(format!("Store unavailable: {}", err))
        }
    }
}

/// Classify a server-reported error by its SQLSTATE code.
///
/// Codes: https://www.postgresql.org/docs/current/errcodes-appendix.html
pub(crate) fn classify_database_error(
    code: Option<&str>,
    message: &str,
    constraint: Option<&str>,
) -> AppError {
    let constraint = constraint.unwrap_or("unknown");

    match code {
        Some("23505") => AppError::Conflict(format!(
            "Unique constraint violation ({}): {}",
            constraint, message
        )),
        Some(code @ ("23503" | "23502" | "23514")) => AppError::Database(format!(
            "Constraint violation [{}] ({}): {}",
            code, constraint, message
        )),
        // The statement itself is malformed: an invariant violation, not user error
        Some(code @ ("42601" | "42703" | "42P01" | "42883" | "42P02" | "42803")) => {
            AppError::Internal(format!("Malformed statement [{}]: {}", code, message))
        }
        Some("57014") => AppError::Database(format!("Statement cancelled: {}", message)),
        Some(code) => AppError::Database(format!("Database error [{}]: {}", code, message)),
        None => AppError::Database(format!("Database error: {}", message)),
    }
}
