//! Core types for one collection run
//!
//! Everything here is created and discarded within a single run; there is no
//! cross-run persistence.

use std::fmt;

/// One page of an upstream listing call
#[derive(Debug, Clone, Default)]
pub struct Page {
    /// Identifiers (ARNs) returned by this page
    pub items: Vec<String>,
    /// Continuation token; absent on the final page
    pub next_token: Option<String>,
}

/// A cluster resolved by describe-batch resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterDetail {
    pub arn: String,
    pub name: String,
}

/// A service resolved by describe-batch resolution, scoped to one cluster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDetail {
    pub name: String,
    pub running: i64,
    pub desired: i64,
    pub pending: i64,
}

/// The three fixed metric kinds emitted per service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    RunningTaskCount,
    DesiredTaskCount,
    PendingTaskCount,
}

impl MetricKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::RunningTaskCount => "RunningTaskCount",
            MetricKind::DesiredTaskCount => "DesiredTaskCount",
            MetricKind::PendingTaskCount => "PendingTaskCount",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One dimensional data point, immutable once shaped
///
/// The timestamp is implicit: the metrics backend stamps each record at
/// ingestion time.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRecord {
    pub kind: MetricKind,
    pub cluster_name: String,
    pub service_name: String,
    pub unit: &'static str,
    pub value: f64,
}
