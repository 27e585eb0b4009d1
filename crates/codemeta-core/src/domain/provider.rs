//! Database provider validation.

use tracing::info;

use crate::domain::error::DomainError;
use crate::domain::value_objects::ProviderKind;

/// Maps a user-supplied provider string onto a [`ProviderKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderValidator {
    default: ProviderKind,
}

impl ProviderValidator {
    /// Validator falling back to `default` when no provider is given.
    ///
    /// `default` must itself be a supported provider.
    pub fn new(default: ProviderKind) -> Result<Self, DomainError> {
        if default.is_supported() {
            Ok(Self { default })
        } else {
            Err(DomainError::unsupported_provider(default.as_str()))
        }
    }

    /// Validator whose default comes from configuration text.
    pub fn from_default_name(default: &str) -> Result<Self, DomainError> {
        let default: ProviderKind = default.parse()?;
        Self::new(default)
    }

    pub fn default_provider(&self) -> ProviderKind {
        self.default
    }

    /// Validate `provider`.
    ///
    /// Absent or blank input yields the default provider and logs a note.
    /// Anything else must name a provider kind, ignoring case. `Existing`
    /// and `None` parse too; a generated context then fails downstream.
    pub fn validate(&self, provider: Option<&str>) -> Result<ProviderKind, DomainError> {
        match provider.map(str::trim).filter(|p| !p.is_empty()) {
            None => {
                info!(
                    default = %self.default,
                    "No database provider specified, using the default provider"
                );
                Ok(self.default)
            }
            Some(name) => name.parse(),
        }
    }
}

impl Default for ProviderValidator {
    fn default() -> Self {
        Self {
            default: ProviderKind::DEFAULT,
        }
    }
}
