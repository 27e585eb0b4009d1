//! Application ports (traits) for external dependencies.
//!
//! - **Driven (Output) Ports**: called by the application, implemented by infrastructure
//!   - `ModelTypesLocator`: the candidate type pool
//!   - `MetadataService`: persistence-context metadata
//!   - `CodeModelService`: metadata from bare type inspection
//!
//! - **Driving (Input) Ports**: the generator command models in
//!   `crate::application::services::requests`, consumed by `ValidationService`

pub mod output;

pub use output::{CodeModelService, MetadataService, ModelTypesLocator};

#[cfg(test)]
pub use output::{MockCodeModelService, MockMetadataService, MockModelTypesLocator};
