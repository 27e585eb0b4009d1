//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `codemeta-adapters` crate provides implementations.

use async_trait::async_trait;

use crate::domain::{ContextProcessingResult, ProjectType, ProviderKind, ResolvedType};
use crate::error::CodemetaResult;

/// Port for discovering the types declared in the target project.
///
/// Implemented by:
/// - `codemeta_adapters::catalog::InMemoryCatalog`
///
/// Every call returns a snapshot; callers never observe later changes.
#[cfg_attr(test, mockall::automock)]
pub trait ModelTypesLocator: Send + Sync {
    /// All candidate types, in a stable order.
    fn all_types(&self) -> CodemetaResult<Vec<ProjectType>>;
}

/// Port to the persistence layer's metadata service.
///
/// Implemented by:
/// - `codemeta_adapters::metadata::InMemoryMetadataService`
///
/// A non-success outcome is reported through the returned status; `Err` is
/// reserved for the service itself breaking.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataService: Send + Sync {
    /// Produce metadata for `model` within the context named
    /// `context_full_name`, generating that context for `provider` when it
    /// does not exist yet.
    async fn get_model_metadata(
        &self,
        context_full_name: &str,
        model: &ResolvedType,
        area_name: &str,
        provider: ProviderKind,
    ) -> CodemetaResult<ContextProcessingResult>;
}

/// Port producing metadata from a bare type, with no context involved.
///
/// Implemented by:
/// - `codemeta_adapters::metadata::ReflectionCodeModelService`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CodeModelService: Send + Sync {
    async fn get_model_metadata(&self, model: &ResolvedType)
    -> CodemetaResult<ContextProcessingResult>;
}
