//! Type catalog adapters.

mod manifest;
mod memory;

pub use manifest::{ManifestFormat, ProjectAdapters, ProjectManifest};
pub use memory::InMemoryCatalog;
