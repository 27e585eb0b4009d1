//! Metadata service adapters.

mod memory;
mod reflection;

pub use memory::InMemoryMetadataService;
pub use reflection::ReflectionCodeModelService;
