// Caller-supplied deadlines for store round trips

use crate::error::{AppError, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;
use tracing::warn;

/// Run `operation` with a deadline.
///
/// When the deadline elapses first, the in-flight future is dropped (which
/// releases its pooled connection) and `AppError::Timeout` is returned.
pub async fn within<T, F>(deadline: Duration, operation: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match timeout(deadline, operation).await {
        Ok(result) => result,
        Err(_) => {
            warn!(deadline_ms = deadline.as_millis() as u64, "Store round trip exceeded deadline");
            Err(AppError::Timeout(deadline))
        }
    }
}
