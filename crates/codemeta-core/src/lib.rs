//! Codemeta Core - model and context resolution for code generators.
//!
//! This crate provides the domain and application layers that every
//! generator variant (list, CRUD, Blazor, minimal API) goes through before
//! rendering anything: resolve the model type, decide what to do about the
//! persistence context, validate the provider and classify the model's
//! members into metadata.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          codemeta-cli (CLI)             │
//! │   (builds generator command models)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (ValidationService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (ModelTypesLocator, MetadataService,    │
//! │  CodeModelService)                      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   codemeta-adapters (Infrastructure)    │
//! │ (InMemoryCatalog, ProjectManifest, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (resolver, provider validator,          │
//! │  classifier)                            │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use codemeta_core::application::{CommonCommandLineModel, ValidationService};
//!
//! # async fn run(service: ValidationService) -> codemeta_core::error::CodemetaResult<()> {
//! let command = CommonCommandLineModel::new("Product")
//!     .with_data_context("ShopContext")
//!     .with_database_provider("sqlite");
//!
//! let outcome = service.validate_and_resolve(&command, "").await?;
//! println!("{} -> {}", outcome.model_type, outcome.processing_result.status);
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BlazorCrudCommandLineModel, CommonCommandLineModel, MinimalApiCommandLineModel,
        ModelSelection, ValidationOutcome, ValidationService,
        ports::{CodeModelService, MetadataService, ModelTypesLocator},
    };
    pub use crate::domain::{
        ContextDefinition, ContextProcessingResult, ContextProcessingStatus, EntityDescriptor,
        MetadataSource, ModelMetadata, ProjectType, PropertyMetadata, ProviderKind,
        ProviderValidator, ResolvedType, classify,
    };
    pub use crate::error::{CodemetaError, CodemetaResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
