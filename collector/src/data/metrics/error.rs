//! Metric sink error types

use thiserror::Error;

/// Errors from metric batch submission
///
/// Already-submitted batches are never rolled back; a `Batch` error names the
/// failing batch so operators can see how much was sent before the abort.
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("metric backend error: {0}")]
    Backend(String),

    #[error("metric batch {batch}/{total} failed ({sent} already sent): {reason}")]
    Batch {
        batch: usize,
        total: usize,
        sent: usize,
        reason: String,
    },
}
