//! Cluster and service listers
//!
//! Both listers share one shape: follow the continuation token until the
//! backend reports no further pages, accumulate the identifiers into an
//! immutable sequence, then resolve it with one describe call per chunk of
//! at most 10 identifiers, in chunk order. The first error from either stage
//! aborts with no partial results.

use crate::core::constants::DESCRIBE_BATCH_MAX;
use crate::data::directory::{DirectoryError, ServiceDirectory};
use crate::domain::types::{ClusterDetail, ServiceDetail};

/// Enumerate and resolve every cluster
pub async fn list_clusters(
    directory: &dyn ServiceDirectory,
) -> Result<Vec<ClusterDetail>, DirectoryError> {
    let mut arns: Vec<String> = Vec::new();
    let mut next_token: Option<String> = None;

    loop {
        let page = directory.list_cluster_page(next_token).await?;
        arns.extend(page.items);
        next_token = page.next_token;
        if next_token.is_none() {
            break;
        }
    }

    tracing::debug!(clusters = arns.len(), "Cluster listing complete");

    let mut clusters = Vec::with_capacity(arns.len());
    for chunk in arns.chunks(DESCRIBE_BATCH_MAX) {
        clusters.extend(directory.describe_clusters(chunk).await?);
    }

    Ok(clusters)
}

/// Enumerate and resolve every service in one cluster
pub async fn list_services(
    directory: &dyn ServiceDirectory,
    cluster: &ClusterDetail,
) -> Result<Vec<ServiceDetail>, DirectoryError> {
    let mut arns: Vec<String> = Vec::new();
    let mut next_token: Option<String> = None;

    loop {
        let page = directory
            .list_service_page(&cluster.arn, next_token)
            .await?;
        arns.extend(page.items);
        next_token = page.next_token;
        if next_token.is_none() {
            break;
        }
    }

    tracing::debug!(cluster = %cluster.name, services = arns.len(), "Service listing complete");

    let mut services = Vec::with_capacity(arns.len());
    for chunk in arns.chunks(DESCRIBE_BATCH_MAX) {
        services.extend(directory.describe_services(&cluster.arn, chunk).await?);
    }

    Ok(services)
}
