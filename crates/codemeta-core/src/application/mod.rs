//! Application layer for codemeta.
//!
//! This layer contains:
//! - **Services**: the validation orchestrator (`ValidationService`)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! Resolution and classification rules live in `crate::domain`; this layer
//! only sequences them around the asynchronous metadata boundary.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    BlazorCrudCommandLineModel, CommonCommandLineModel, ContextResolution,
    MinimalApiCommandLineModel, ModelSelection, ValidationOutcome, ValidationService,
};

pub use ports::{CodeModelService, MetadataService, ModelTypesLocator};

pub use error::ApplicationError;
