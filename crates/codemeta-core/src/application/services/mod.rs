//! Application services - orchestrate use cases.
//!
//! `ValidationService` is the single entry point every generator variant
//! goes through; the generator-specific command models only differ in the
//! fields they carry next to the model selection.

pub mod requests;
pub mod validation_service;

pub use requests::{
    BlazorCrudCommandLineModel, CommonCommandLineModel, MinimalApiCommandLineModel,
    ModelSelection, ValidationOutcome,
};
pub use validation_service::{ContextResolution, ValidationService};
