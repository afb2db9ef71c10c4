//! Cluster/service directory backends

pub mod ecs;
pub mod error;
pub mod provider;

pub use ecs::EcsDirectory;
pub use error::DirectoryError;
pub use provider::ServiceDirectory;
