//! Cluster/service directory error types

use thiserror::Error;

/// Errors from the cluster/service directory backend
///
/// Both variants are terminal for the current run; nothing is retried.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("upstream list call failed: {0}")]
    List(String),

    #[error("upstream describe call failed: {0}")]
    Describe(String),
}
