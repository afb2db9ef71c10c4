//! ECS-backed cluster/service directory

use async_trait::async_trait;
use aws_sdk_ecs::Client;
use aws_sdk_ecs::types::Failure;

use crate::domain::types::{ClusterDetail, Page, ServiceDetail};

use super::error::DirectoryError;
use super::provider::ServiceDirectory;

/// Cluster/service directory backed by the ECS control plane
#[derive(Debug, Clone)]
pub struct EcsDirectory {
    client: Client,
}

impl EcsDirectory {
    /// Create a new directory with the given region and optional endpoint
    /// override (for ECS-compatible local stacks)
    pub async fn new(region: Option<String>, endpoint: Option<String>) -> Self {
        let mut config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

        if let Some(region) = region {
            config_loader = config_loader.region(aws_sdk_ecs::config::Region::new(region));
        }

        let config = config_loader.load().await;

        let mut ecs_config = aws_sdk_ecs::config::Builder::from(&config);
        if let Some(endpoint_url) = endpoint {
            ecs_config = ecs_config.endpoint_url(endpoint_url);
        }

        let client = Client::from_conf(ecs_config.build());

        tracing::debug!("ECS directory initialized");

        Self { client }
    }

    /// Render in-band describe failures ("arn: reason" per entry)
    ///
    /// DescribeClusters/DescribeServices report unresolvable identifiers in a
    /// failures list rather than as a transport error.
    fn format_failures(failures: &[Failure]) -> String {
        failures
            .iter()
            .map(|f| {
                format!(
                    "{}: {}",
                    f.arn().unwrap_or("<unknown>"),
                    f.reason().unwrap_or("<no reason>")
                )
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[async_trait]
impl ServiceDirectory for EcsDirectory {
    async fn list_cluster_page(
        &self,
        next_token: Option<String>,
    ) -> Result<Page, DirectoryError> {
        let response = self
            .client
            .list_clusters()
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| DirectoryError::List(format!("ECS ListClusters error: {}", e)))?;

        Ok(Page {
            items: response.cluster_arns().to_vec(),
            next_token: response.next_token().map(|s| s.to_string()),
        })
    }

    async fn describe_clusters(
        &self,
        arns: &[String],
    ) -> Result<Vec<ClusterDetail>, DirectoryError> {
        let response = self
            .client
            .describe_clusters()
            .set_clusters(Some(arns.to_vec()))
            .send()
            .await
            .map_err(|e| DirectoryError::Describe(format!("ECS DescribeClusters error: {}", e)))?;

        if !response.failures().is_empty() {
            return Err(DirectoryError::Describe(format!(
                "ECS DescribeClusters failures: {}",
                Self::format_failures(response.failures())
            )));
        }

        Ok(response
            .clusters()
            .iter()
            .filter_map(|cluster| {
                let arn = cluster.cluster_arn()?.to_string();
                let name = cluster.cluster_name()?.to_string();
                Some(ClusterDetail { arn, name })
            })
            .collect())
    }

    async fn list_service_page(
        &self,
        cluster_arn: &str,
        next_token: Option<String>,
    ) -> Result<Page, DirectoryError> {
        let response = self
            .client
            .list_services()
            .cluster(cluster_arn)
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| DirectoryError::List(format!("ECS ListServices error: {}", e)))?;

        Ok(Page {
            items: response.service_arns().to_vec(),
            next_token: response.next_token().map(|s| s.to_string()),
        })
    }

    async fn describe_services(
        &self,
        cluster_arn: &str,
        arns: &[String],
    ) -> Result<Vec<ServiceDetail>, DirectoryError> {
        let response = self
            .client
            .describe_services()
            .cluster(cluster_arn)
            .set_services(Some(arns.to_vec()))
            .send()
            .await
            .map_err(|e| DirectoryError::Describe(format!("ECS DescribeServices error: {}", e)))?;

        if !response.failures().is_empty() {
            return Err(DirectoryError::Describe(format!(
                "ECS DescribeServices failures: {}",
                Self::format_failures(response.failures())
            )));
        }

        Ok(response
            .services()
            .iter()
            .filter_map(|service| {
                let name = service.service_name()?.to_string();
                Some(ServiceDetail {
                    name,
                    running: service.running_count() as i64,
                    desired: service.desired_count() as i64,
                    pending: service.pending_count() as i64,
                })
            })
            .collect())
    }

    async fn health_check(&self) -> Result<(), DirectoryError> {
        self.client
            .list_clusters()
            .max_results(1)
            .send()
            .await
            .map_err(|e| DirectoryError::List(format!("ECS ListClusters error: {}", e)))?;
        Ok(())
    }
}
