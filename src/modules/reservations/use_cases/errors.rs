use crate::modules::reservations::adapters::outbound::event_records::EventRecordStoreError;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    StoreUnavailable(#[from] EventRecordStoreError),

    #[error("store did not confirm within {timeout_ms}ms, outcome unknown")]
    OutcomeUnknown { timeout_ms: u64 },

    #[error("capacity must be at least 1")]
    InvalidCapacity,
}

impl ApplicationError {
    /// Whether an idempotent caller may repeat the operation.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApplicationError::StoreUnavailable(EventRecordStoreError::Backend(_))
                | ApplicationError::OutcomeUnknown { .. }
        )
    }
}

/// Runs one store call under a deadline. An elapsed deadline means the
/// operation may or may not have been applied.
pub async fn within_deadline<T>(
    timeout: Duration,
    call: impl Future<Output = Result<T, EventRecordStoreError>>,
) -> Result<T, ApplicationError> {
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result.map_err(ApplicationError::StoreUnavailable),
        Err(_) => Err(ApplicationError::OutcomeUnknown {
            timeout_ms: timeout.as_millis() as u64,
        }),
    }
}
