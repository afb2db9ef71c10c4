//! Metric publisher
//!
//! Submits an arbitrarily long record sequence in chunks of at most 20,
//! sequentially. Fails fast on the first rejected batch; batches already
//! submitted stand uncorrected (accepted trade-off, not mitigated).

use crate::core::constants::PUT_METRIC_BATCH_MAX;
use crate::data::metrics::{MetricSink, PublishError};
use crate::domain::types::MetricRecord;

/// Publish all records under the given namespace; returns the batch count
///
/// Empty input performs no network call and reports zero batches.
pub async fn publish_metrics(
    sink: &dyn MetricSink,
    namespace: &str,
    records: &[MetricRecord],
) -> Result<usize, PublishError> {
    if records.is_empty() {
        tracing::debug!("No metric records to publish");
        return Ok(0);
    }

    let total = records.len().div_ceil(PUT_METRIC_BATCH_MAX);
    let mut sent = 0usize;

    for chunk in records.chunks(PUT_METRIC_BATCH_MAX) {
        sink.put_batch(namespace, chunk)
            .await
            .map_err(|e| PublishError::Batch {
                batch: sent + 1,
                total,
                sent,
                reason: e.to_string(),
            })?;
        sent += 1;
    }

    tracing::debug!(
        records = records.len(),
        batches = sent,
        sink = sink.name(),
        "Metrics published"
    );

    Ok(sent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::testing::MockSink;
    use crate::domain::types::MetricKind;

    fn records(count: usize) -> Vec<MetricRecord> {
        (0..count)
            .map(|i| MetricRecord {
                kind: MetricKind::RunningTaskCount,
                cluster_name: "prod".to_string(),
                service_name: format!("service-{i}"),
                unit: "Count",
                value: i as f64,
            })
            .collect()
    }

    #[tokio::test]
    async fn test_empty_input_is_a_no_op_success() {
        let sink = MockSink::new();

        let batches = publish_metrics(&sink, "ECS/ServiceCounts", &[]).await.unwrap();

        assert_eq!(batches, 0);
        assert!(sink.batches.lock().unwrap().is_empty(), "no network call");
    }

    #[tokio::test]
    async fn test_batching_is_ceil_m_over_20() {
        let input = records(45);
        let sink = MockSink::new();

        let batches = publish_metrics(&sink, "ECS/ServiceCounts", &input)
            .await
            .unwrap();

        assert_eq!(batches, 3);
        let submitted = sink.batches.lock().unwrap();
        let sizes: Vec<usize> = submitted.iter().map(|(_, batch)| batch.len()).collect();
        assert_eq!(sizes, vec![20, 20, 5]);

        let covered: Vec<MetricRecord> = submitted
            .iter()
            .flat_map(|(_, batch)| batch.clone())
            .collect();
        assert_eq!(covered, input, "every record submitted exactly once, in order");
    }

    #[tokio::test]
    async fn test_exact_multiple_produces_full_batches_only() {
        let sink = MockSink::new();

        let batches = publish_metrics(&sink, "ECS/ServiceCounts", &records(40))
            .await
            .unwrap();

        assert_eq!(batches, 2);
    }

    #[tokio::test]
    async fn test_namespace_passed_to_every_batch() {
        let sink = MockSink::new();

        publish_metrics(&sink, "Custom/Fleet", &records(25)).await.unwrap();

        for (namespace, _) in sink.batches.lock().unwrap().iter() {
            assert_eq!(namespace, "Custom/Fleet");
        }
    }

    #[tokio::test]
    async fn test_failing_batch_aborts_and_leaves_sent_batches_standing() {
        let input = records(50);
        let sink = MockSink::failing_on_batch(2);

        let err = publish_metrics(&sink, "ECS/ServiceCounts", &input)
            .await
            .unwrap_err();

        match err {
            PublishError::Batch { batch, total, sent, .. } => {
                assert_eq!(batch, 2);
                assert_eq!(total, 3);
                assert_eq!(sent, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
        // First batch stands; third was never attempted
        assert_eq!(sink.batches.lock().unwrap().len(), 1);
    }
}
