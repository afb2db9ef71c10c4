//! Metric shaper
//!
//! Pure transformation of one (cluster, services) pair into dimensional
//! metric records. Never fails; an empty service list yields an empty output.

use crate::core::constants::UNIT_COUNT;
use crate::domain::types::{ClusterDetail, MetricKind, MetricRecord, ServiceDetail};

/// Emit exactly three records per service, in input order, with kinds in the
/// fixed sequence [running, desired, pending]
pub fn shape_metrics(cluster: &ClusterDetail, services: &[ServiceDetail]) -> Vec<MetricRecord> {
    let mut records = Vec::with_capacity(services.len() * 3);

    for service in services {
        for (kind, value) in [
            (MetricKind::RunningTaskCount, service.running),
            (MetricKind::DesiredTaskCount, service.desired),
            (MetricKind::PendingTaskCount, service.pending),
        ] {
            records.push(MetricRecord {
                kind,
                cluster_name: cluster.name.clone(),
                service_name: service.name.clone(),
                unit: UNIT_COUNT,
                value: value as f64,
            });
        }
    }

    records
}
