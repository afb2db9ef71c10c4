//! Metric sink backends

pub mod cloudwatch;
pub mod error;
pub mod log;
pub mod sink;

pub use cloudwatch::CloudWatchSink;
pub use error::PublishError;
pub use log::LogSink;
pub use sink::MetricSink;
