//! Run orchestration
//!
//! One strictly sequential pass: list clusters once; per cluster, list
//! services and shape their counters; hand the accumulated records to the
//! publisher once at the end. Cluster N+1 is not started until cluster N is
//! fully listed and shaped.

use std::fmt;

use crate::data::directory::ServiceDirectory;
use crate::data::metrics::MetricSink;

use super::error::CollectError;
use super::lister::{list_clusters, list_services};
use super::publish::publish_metrics;
use super::shape::shape_metrics;
use super::types::MetricRecord;

/// Terminal summary of a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub clusters: usize,
    pub services: usize,
    pub records: usize,
    pub batches: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Published {} metrics for {} services across {} clusters ({} batches)",
            self.records, self.services, self.clusters, self.batches
        )
    }
}

/// Execute one collection run
pub async fn run_collection(
    directory: &dyn ServiceDirectory,
    sink: &dyn MetricSink,
    namespace: &str,
) -> Result<RunSummary, CollectError> {
    let clusters = list_clusters(directory).await?;
    tracing::info!(clusters = clusters.len(), "Clusters discovered");

    let mut records: Vec<MetricRecord> = Vec::new();
    let mut services_total = 0usize;

    for cluster in &clusters {
        let services = list_services(directory, cluster).await?;
        tracing::debug!(cluster = %cluster.name, services = services.len(), "Services resolved");
        services_total += services.len();
        records.extend(shape_metrics(cluster, &services));
    }

    let batches = publish_metrics(sink, namespace, &records).await?;

    Ok(RunSummary {
        clusters: clusters.len(),
        services: services_total,
        records: records.len(),
        batches,
    })
}
