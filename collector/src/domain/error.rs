//! Collection run error types

use thiserror::Error;

use crate::data::directory::DirectoryError;
use crate::data::metrics::PublishError;

/// Terminal outcome of a failed collection run
///
/// Every variant aborts the remainder of the run; nothing is retried.
#[derive(Error, Debug)]
pub enum CollectError {
    #[error("service discovery failed: {0}")]
    Directory(#[from] DirectoryError),

    #[error("metric publication failed: {0}")]
    Publish(#[from] PublishError),
}
