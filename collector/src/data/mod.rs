//! Backend providers (ECS directory, metric sinks)

pub mod directory;
pub mod metrics;

pub use directory::{DirectoryError, EcsDirectory, ServiceDirectory};
pub use metrics::{CloudWatchSink, LogSink, MetricSink, PublishError};
