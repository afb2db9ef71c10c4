use async_trait::async_trait;

use crate::domain::types::{ClusterDetail, Page, ServiceDetail};

use super::error::DirectoryError;

/// The cluster/service directory boundary
///
/// Page-level list calls and chunk-level describe calls; pagination and
/// chunking policy live in the domain listers, not in implementations.
#[async_trait]
pub trait ServiceDirectory: Send + Sync {
    /// Fetch one page of cluster identifiers
    async fn list_cluster_page(
        &self,
        next_token: Option<String>,
    ) -> Result<Page, DirectoryError>;

    /// Resolve up to 10 cluster identifiers to detail records
    async fn describe_clusters(
        &self,
        arns: &[String],
    ) -> Result<Vec<ClusterDetail>, DirectoryError>;

    /// Fetch one page of service identifiers for a cluster
    async fn list_service_page(
        &self,
        cluster_arn: &str,
        next_token: Option<String>,
    ) -> Result<Page, DirectoryError>;

    /// Resolve up to 10 service identifiers to detail records
    async fn describe_services(
        &self,
        cluster_arn: &str,
        arns: &[String],
    ) -> Result<Vec<ServiceDetail>, DirectoryError>;

    /// Connectivity check (one minimal list call). Default: first cluster page.
    async fn health_check(&self) -> Result<(), DirectoryError> {
        self.list_cluster_page(None).await.map(|_| ())
    }
}
