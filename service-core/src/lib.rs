//! service-core: Shared infrastructure for the MindMesh relay.
pub mod config;
pub mod error;
pub mod observability;
