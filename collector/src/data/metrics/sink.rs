use async_trait::async_trait;

use crate::domain::types::MetricRecord;

use super::error::PublishError;

/// The metrics backend boundary
///
/// One call submits one bounded batch; batching policy lives in the domain
/// publisher, not in implementations.
#[async_trait]
pub trait MetricSink: Send + Sync {
    /// Submit up to 20 records as a single batch under the given namespace
    async fn put_batch(
        &self,
        namespace: &str,
        records: &[MetricRecord],
    ) -> Result<(), PublishError>;

    /// Human-readable backend name
    fn name(&self) -> &'static str;
}
