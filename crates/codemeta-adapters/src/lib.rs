//! Infrastructure adapters for codemeta.
//!
//! This crate implements the ports defined in `codemeta-core::application::ports`.
//! It contains all I/O: reading project manifests from disk and serving the
//! candidate pool and metadata from memory.

pub mod catalog;
pub mod conventions;
pub mod metadata;

// Re-export commonly used adapters
pub use catalog::{InMemoryCatalog, ManifestFormat, ProjectAdapters, ProjectManifest};
pub use metadata::{InMemoryMetadataService, ReflectionCodeModelService};
