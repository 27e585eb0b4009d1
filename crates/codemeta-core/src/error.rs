//! Unified error handling for Codemeta Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Codemeta Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CodemetaError {
    /// Errors from the domain layer (resolution and validation failures).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (port failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl CodemetaError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }

    /// `true` when the error was caused by what the user typed (bad model
    /// name, unsupported provider) rather than by the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Validation | ErrorCategory::NotFound
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type CodemetaResult<T> = Result<T, CodemetaError>;
