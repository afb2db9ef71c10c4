//! Dry-run metric sink
//!
//! Renders every record through structured logging instead of calling the
//! metrics backend. The publisher's chunking path is exercised unchanged.

use async_trait::async_trait;

use crate::domain::types::MetricRecord;

use super::error::PublishError;
use super::sink::MetricSink;

#[derive(Debug, Clone, Default)]
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MetricSink for LogSink {
    async fn put_batch(
        &self,
        namespace: &str,
        records: &[MetricRecord],
    ) -> Result<(), PublishError> {
        for record in records {
            tracing::info!(
                namespace,
                metric = record.kind.as_str(),
                cluster = %record.cluster_name,
                service = %record.service_name,
                unit = record.unit,
                value = record.value,
                "Dry-run metric"
            );
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
