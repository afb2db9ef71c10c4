//! In-memory fakes for the backend boundaries, with call recording

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::data::directory::{DirectoryError, ServiceDirectory};
use crate::data::metrics::{MetricSink, PublishError};
use crate::domain::types::{ClusterDetail, MetricRecord, Page, ServiceDetail};

fn short_name(arn: &str) -> String {
    arn.rsplit('/').next().unwrap_or(arn).to_string()
}

/// Scripted directory: serves preset pages in order and resolves describe
/// calls from ARN suffixes, asserting correct continuation-token threading.
#[derive(Default)]
pub(crate) struct MockDirectory {
    cluster_pages: Vec<Page>,
    service_pages: HashMap<String, Vec<Page>>,
    service_counts: HashMap<String, (i64, i64, i64)>,
    fail_list: bool,
    fail_describe_clusters: bool,
    fail_describe_services: bool,
    cluster_page_cursor: Mutex<usize>,
    service_page_cursors: Mutex<HashMap<String, usize>>,
    pub describe_cluster_calls: Mutex<Vec<Vec<String>>>,
    pub describe_service_calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl MockDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cluster_pages(mut self, pages: Vec<Page>) -> Self {
        self.cluster_pages = pages;
        self
    }

    pub fn with_service_pages(mut self, cluster_arn: &str, pages: Vec<Page>) -> Self {
        self.service_pages.insert(cluster_arn.to_string(), pages);
        self
    }

    /// Set running/desired/pending counters for a service ARN
    pub fn with_service_counts(mut self, arn: &str, counts: (i64, i64, i64)) -> Self {
        self.service_counts.insert(arn.to_string(), counts);
        self
    }

    pub fn with_list_failure(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn with_describe_cluster_failure(mut self) -> Self {
        self.fail_describe_clusters = true;
        self
    }

    pub fn with_describe_service_failure(mut self) -> Self {
        self.fail_describe_services = true;
        self
    }

    fn next_page(
        pages: &[Page],
        cursor: &mut usize,
        token: Option<String>,
    ) -> Result<Page, DirectoryError> {
        let expected = if *cursor == 0 {
            None
        } else {
            pages[*cursor - 1].next_token.clone()
        };
        assert_eq!(token, expected, "continuation token must be threaded through");
        let page = pages
            .get(*cursor)
            .cloned()
            .ok_or_else(|| DirectoryError::List("listed past the final page".to_string()))?;
        *cursor += 1;
        Ok(page)
    }
}

#[async_trait]
impl ServiceDirectory for MockDirectory {
    async fn list_cluster_page(
        &self,
        next_token: Option<String>,
    ) -> Result<Page, DirectoryError> {
        if self.fail_list {
            return Err(DirectoryError::List("scripted list failure".to_string()));
        }
        let mut cursor = self.cluster_page_cursor.lock().unwrap();
        Self::next_page(&self.cluster_pages, &mut cursor, next_token)
    }

    async fn describe_clusters(
        &self,
        arns: &[String],
    ) -> Result<Vec<ClusterDetail>, DirectoryError> {
        self.describe_cluster_calls
            .lock()
            .unwrap()
            .push(arns.to_vec());
        if self.fail_describe_clusters {
            return Err(DirectoryError::Describe(
                "scripted describe failure".to_string(),
            ));
        }
        Ok(arns
            .iter()
            .map(|arn| ClusterDetail {
                arn: arn.clone(),
                name: short_name(arn),
            })
            .collect())
    }

    async fn list_service_page(
        &self,
        cluster_arn: &str,
        next_token: Option<String>,
    ) -> Result<Page, DirectoryError> {
        if self.fail_list {
            return Err(DirectoryError::List("scripted list failure".to_string()));
        }
        let pages = self
            .service_pages
            .get(cluster_arn)
            .cloned()
            .unwrap_or_else(|| vec![Page::default()]);
        let mut cursors = self.service_page_cursors.lock().unwrap();
        let cursor = cursors.entry(cluster_arn.to_string()).or_insert(0);
        Self::next_page(&pages, cursor, next_token)
    }

    async fn describe_services(
        &self,
        cluster_arn: &str,
        arns: &[String],
    ) -> Result<Vec<ServiceDetail>, DirectoryError> {
        self.describe_service_calls
            .lock()
            .unwrap()
            .push((cluster_arn.to_string(), arns.to_vec()));
        if self.fail_describe_services {
            return Err(DirectoryError::Describe(
                "scripted describe failure".to_string(),
            ));
        }
        Ok(arns
            .iter()
            .map(|arn| {
                let (running, desired, pending) =
                    self.service_counts.get(arn).copied().unwrap_or((0, 0, 0));
                ServiceDetail {
                    name: short_name(arn),
                    running,
                    desired,
                    pending,
                }
            })
            .collect())
    }
}

/// Recording sink; optionally rejects one scripted batch (1-based index).
#[derive(Default)]
pub(crate) struct MockSink {
    fail_on_batch: Option<usize>,
    calls: Mutex<usize>,
    pub batches: Mutex<Vec<(String, Vec<MetricRecord>)>>,
}

impl MockSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on_batch(batch: usize) -> Self {
        Self {
            fail_on_batch: Some(batch),
            ..Self::default()
        }
    }
}

#[async_trait]
impl MetricSink for MockSink {
    async fn put_batch(
        &self,
        namespace: &str,
        records: &[MetricRecord],
    ) -> Result<(), PublishError> {
        let mut calls = self.calls.lock().unwrap();
        *calls += 1;
        if self.fail_on_batch == Some(*calls) {
            return Err(PublishError::Backend(
                "scripted batch rejection".to_string(),
            ));
        }
        self.batches
            .lock()
            .unwrap()
            .push((namespace.to_string(), records.to_vec()));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
