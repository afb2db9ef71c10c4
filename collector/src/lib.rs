//! ECS service counter collector
//!
//! Lists every ECS cluster and service, shapes their running/desired/pending
//! task counts into dimensional metric records, and publishes them to
//! CloudWatch in bounded batches. One invocation equals one collection run.

pub mod app;
pub mod core;
pub mod data;
pub mod domain;
