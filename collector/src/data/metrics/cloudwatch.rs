//! CloudWatch metric sink
//!
//! Submits each batch via PutMetricData. Records carry no explicit timestamp;
//! CloudWatch stamps them at ingestion.

use async_trait::async_trait;
use aws_sdk_cloudwatch::Client;
use aws_sdk_cloudwatch::types::{Dimension, MetricDatum, StandardUnit};

use crate::core::constants::{DIMENSION_CLUSTER, DIMENSION_SERVICE};
use crate::domain::types::MetricRecord;

use super::error::PublishError;
use super::sink::MetricSink;

/// Metric sink backed by CloudWatch
#[derive(Debug, Clone)]
pub struct CloudWatchSink {
    client: Client,
}

impl CloudWatchSink {
    /// Create a new sink with the given region and optional endpoint override
    pub async fn new(region: Option<String>, endpoint: Option<String>) -> Self {
        let mut config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

        if let Some(region) = region {
            config_loader = config_loader.region(aws_sdk_cloudwatch::config::Region::new(region));
        }

        let config = config_loader.load().await;

        let mut cw_config = aws_sdk_cloudwatch::config::Builder::from(&config);
        if let Some(endpoint_url) = endpoint {
            cw_config = cw_config.endpoint_url(endpoint_url);
        }

        let client = Client::from_conf(cw_config.build());

        tracing::debug!("CloudWatch sink initialized");

        Self { client }
    }

    fn to_datum(record: &MetricRecord) -> MetricDatum {
        MetricDatum::builder()
            .metric_name(record.kind.as_str())
            .unit(StandardUnit::from(record.unit))
            .value(record.value)
            .dimensions(
                Dimension::builder()
                    .name(DIMENSION_CLUSTER)
                    .value(&record.cluster_name)
                    .build(),
            )
            .dimensions(
                Dimension::builder()
                    .name(DIMENSION_SERVICE)
                    .value(&record.service_name)
                    .build(),
            )
            .build()
    }
}

#[async_trait]
impl MetricSink for CloudWatchSink {
    async fn put_batch(
        &self,
        namespace: &str,
        records: &[MetricRecord],
    ) -> Result<(), PublishError> {
        let data: Vec<MetricDatum> = records.iter().map(Self::to_datum).collect();

        self.client
            .put_metric_data()
            .namespace(namespace)
            .set_metric_data(Some(data))
            .send()
            .await
            .map_err(|e| PublishError::Backend(format!("CloudWatch PutMetricData error: {}", e)))?;

        tracing::debug!(records = records.len(), namespace, "Metric batch submitted");

        Ok(())
    }

    fn name(&self) -> &'static str {
        "cloudwatch"
    }
}
