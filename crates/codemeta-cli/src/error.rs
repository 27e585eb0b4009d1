//! CLI error handling.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use codemeta_core::error::{CodemetaError, ErrorCategory as CoreCategory};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// No manifest was given and none was found in the working directory.
    #[error("No project manifest found")]
    ManifestMissing { searched: Vec<PathBuf> },

    /// A configuration key or value could not be read or rendered.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `codemeta-core` or an adapter.
    #[error("{0}")]
    Core(#[from] CodemetaError),

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Output could not be serialised.
    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ManifestMissing { searched } => {
                let mut suggestions = vec![
                    "Pass a manifest with --manifest FILE".into(),
                    "Or set project.manifest in the config file".into(),
                ];
                if !searched.is_empty() {
                    suggestions.push("Looked for:".into());
                    suggestions.extend(searched.iter().map(|p| format!("  • {}", p.display())));
                }
                suggestions
            }

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Run 'codemeta config path' to find the config file".into(),
                "Run 'codemeta config list' to see the loaded values".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
            ],

            Self::Render(_) => vec!["Try --output-format plain".into()],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ManifestMissing { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } | Self::Render(_) => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));

        for line in self.to_string().lines() {
            output.push_str(&format!("  {}\n", line.red()));
        }

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use codemeta_core::{
        application::ApplicationError,
        domain::{DomainError, TypeRole},
    };
    use std::io;

    fn unsupported() -> CliError {
        CliError::Core(DomainError::unsupported_provider("oracle").into())
    }

    #[test]
    fn unsupported_provider_is_a_user_error() {
        assert_eq!(unsupported().exit_code(), 2);
    }

    #[test]
    fn missing_model_is_not_found() {
        let err = CliError::Core(
            DomainError::TypeNotFound {
                role: TypeRole::Model,
                name: "Widget".into(),
            }
            .into(),
        );
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn invalid_manifest_is_a_configuration_error() {
        let err = CliError::Core(
            ApplicationError::ManifestInvalid {
                path: PathBuf::from("shop.toml"),
                reason: "bad".into(),
            }
            .into(),
        );
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn io_error_is_internal() {
        let err = CliError::from(io::Error::other("disk"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn core_message_is_shown_verbatim() {
        let plain = unsupported().format_plain(false);
        assert!(plain.contains(
            "Supported database providers include : 'SqlServer', 'SQLite', 'CosmosDb' and 'Postgres'"
        ));
    }

    #[test]
    fn manifest_missing_lists_searched_paths() {
        let err = CliError::ManifestMissing {
            searched: vec![PathBuf::from("codemeta.toml")],
        };
        let suggestions = err.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("--manifest")));
        assert!(suggestions.iter().any(|s| s.contains("codemeta.toml")));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let s = unsupported().format_plain(true);
        assert!(!s.contains("--verbose"));
    }
}
