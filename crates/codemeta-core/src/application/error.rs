//! Application layer errors.
//!
//! These errors represent failures of the ports the orchestrator talks to,
//! not resolution or validation failures. Those are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while talking to adapters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The candidate type pool could not be read.
    #[error("Type catalog unavailable: {reason}")]
    CatalogUnavailable { reason: String },

    /// The metadata service itself failed (as opposed to reporting a
    /// non-success status).
    #[error("Metadata service failed for '{model}': {reason}")]
    MetadataServiceFailed { model: String, reason: String },

    /// A project manifest could not be read or parsed.
    #[error("Invalid project manifest at {path}: {reason}", path = .path.display())]
    ManifestInvalid { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::CatalogUnavailable { .. } => vec![
                "The project's types could not be loaded".into(),
                "Try again; if it persists, rebuild the project".into(),
            ],
            Self::MetadataServiceFailed { model, .. } => vec![
                format!("Metadata for '{}' could not be produced", model),
                "Check that the persistence context compiles".into(),
            ],
            Self::ManifestInvalid { path, .. } => vec![
                format!("Fix or regenerate the manifest: {}", path.display()),
                "Manifests must be JSON (.json) or TOML (.toml)".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CatalogUnavailable { .. } | Self::MetadataServiceFailed { .. } => {
                ErrorCategory::Internal
            }
            Self::ManifestInvalid { .. } => ErrorCategory::Configuration,
        }
    }
}
