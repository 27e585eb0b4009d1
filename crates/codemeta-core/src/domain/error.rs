// ============================================================================
// domain/error.rs - RESOLUTION AND VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::resolver::TypeRole;
use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (outcomes are handed to several generators)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("A {role} type with the name '{name}' does not exist")]
    TypeNotFound { role: TypeRole, name: String },

    #[error(
        "Multiple {} types matching the name '{}' exist: {}. Please use a fully qualified name",
        .role,
        .name,
        .matches.join(", ")
    )]
    TypeAmbiguous {
        role: TypeRole,
        name: String,
        matches: Vec<String>,
    },

    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    /// `supported` is the pre-formatted provider list; its exact text is
    /// part of the user-facing contract.
    #[error("Invalid database provider '{provider}'.\nSupported database providers include : {supported}")]
    UnsupportedProvider { provider: String, supported: String },
}

impl DomainError {
    /// Build an [`DomainError::UnsupportedProvider`] listing every supported
    /// provider in declaration order.
    pub fn unsupported_provider(provider: impl Into<String>) -> Self {
        Self::UnsupportedProvider {
            provider: provider.into(),
            supported: crate::domain::format::format_quoted_list(
                &crate::domain::ProviderKind::supported_names(),
            ),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TypeNotFound { role, name } => vec![
                format!("No {} type named '{}' was found in the project", role, name),
                "Check the spelling, or pass the fully qualified name".into(),
                "Make sure the project builds so its types can be discovered".into(),
            ],
            Self::TypeAmbiguous { matches, .. } => {
                let mut suggestions =
                    vec!["Use one of the fully qualified names below:".to_string()];
                suggestions.extend(matches.iter().map(|m| format!("  • {m}")));
                suggestions
            }
            Self::UnsupportedProvider { supported, .. } => vec![
                format!("Supported providers: {}", supported),
                "Provider names are matched case-insensitively".into(),
                "Omit --provider to use the configured default".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TypeNotFound { .. } => ErrorCategory::NotFound,
            Self::TypeAmbiguous { .. } | Self::UnsupportedProvider { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}
