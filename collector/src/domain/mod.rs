//! Collection pipeline domain logic

pub mod error;
pub mod lister;
pub mod publish;
pub mod run;
pub mod shape;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use error::CollectError;
pub use lister::{list_clusters, list_services};
pub use publish::publish_metrics;
pub use run::{RunSummary, run_collection};
pub use shape::shape_metrics;
