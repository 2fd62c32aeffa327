//! Timeout enforcement.
//!
//! # Responsibilities
//! - Bound every view load with a deadline
//! - Turn an elapsed deadline into a distinct [`LoadError::Timeout`]
//!
//! # Design Decisions
//! - Uses Tokio's timeout facilities
//! - A zero timeout disables the deadline
//! - The timed-out future is dropped; nothing is retried here

use std::future::Future;
use std::time::Duration;

use tokio::time;

use crate::views::LoadError;

/// Run a load future under `timeout_ms`.
pub async fn with_load_timeout<T, F>(timeout_ms: u64, fut: F) -> Result<T, LoadError>
where
    F: Future<Output = Result<T, LoadError>>,
{
    if timeout_ms == 0 {
        return fut.await;
    }

    match time::timeout(Duration::from_millis(timeout_ms), fut).await {
        Ok(result) => result,
        Err(_) => Err(LoadError::Timeout(timeout_ms)),
    }
}
