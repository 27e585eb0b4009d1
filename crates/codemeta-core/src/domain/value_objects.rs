//! Domain value objects: providers, processing statuses, member traits.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Each carries its canonical string form and, where users type it, a
//! `FromStr` parser.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ProviderKind ─────────────────────────────────────────────────────────────

/// Storage provider a persistence context targets.
///
/// `None` means no context is involved at all. `Existing` means a context
/// type was found and already carries its own provider, so no provider
/// string is validated. The remaining variants are the supported providers,
/// listed in [`ProviderKind::SUPPORTED`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProviderKind {
    #[default]
    None,
    Existing,
    SqlServer,
    #[serde(rename = "SQLite")]
    Sqlite,
    CosmosDb,
    Postgres,
}

impl ProviderKind {
    /// Providers a new context may be generated for, in the order they are
    /// listed to users.
    pub const SUPPORTED: [ProviderKind; 4] = [
        ProviderKind::SqlServer,
        ProviderKind::Sqlite,
        ProviderKind::CosmosDb,
        ProviderKind::Postgres,
    ];

    pub const ALL: [ProviderKind; 6] = [
        ProviderKind::None,
        ProviderKind::Existing,
        ProviderKind::SqlServer,
        ProviderKind::Sqlite,
        ProviderKind::CosmosDb,
        ProviderKind::Postgres,
    ];

    /// Provider used when a new context is generated and none was requested.
    pub const DEFAULT: ProviderKind = ProviderKind::SqlServer;

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Existing => "Existing",
            Self::SqlServer => "SqlServer",
            Self::Sqlite => "SQLite",
            Self::CosmosDb => "CosmosDb",
            Self::Postgres => "Postgres",
        }
    }

    /// Whether a new context can be generated for this provider.
    pub const fn is_supported(self) -> bool {
        matches!(
            self,
            Self::SqlServer | Self::Sqlite | Self::CosmosDb | Self::Postgres
        )
    }

    /// Names of [`Self::SUPPORTED`], in order.
    pub fn supported_names() -> Vec<&'static str> {
        Self::SUPPORTED.iter().map(|p| p.as_str()).collect()
    }

    /// Case-insensitive lookup over every member name, `None` and
    /// `Existing` included.
    pub fn parse_name(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_name(s).ok_or_else(|| DomainError::unsupported_provider(s))
    }
}

// ── ContextProcessingStatus ──────────────────────────────────────────────────

/// Why metadata is, or is not, available for a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContextProcessingStatus {
    /// No context was requested.
    MissingContext,
    /// The context exists and already maps the model.
    ContextAndModelFound,
    /// The context could not be found or created.
    ContextNotFound,
    /// A new context was generated for the model.
    ContextAdded,
    /// The context exists and the model was added to it.
    ModelAddedToContext,
    /// Generating the context failed.
    ContextAddFailed,
    /// Metadata came from bare type inspection; no context is involved.
    ModelOnly,
}

impl ContextProcessingStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingContext => "missing-context",
            Self::ContextAndModelFound => "context-and-model-found",
            Self::ContextNotFound => "context-not-found",
            Self::ContextAdded => "context-added",
            Self::ModelAddedToContext => "model-added-to-context",
            Self::ContextAddFailed => "context-add-failed",
            Self::ModelOnly => "model-only",
        }
    }

    /// Statuses that come with a [`ModelMetadata`](crate::domain::ModelMetadata).
    pub const fn is_success(self) -> bool {
        matches!(
            self,
            Self::ContextAndModelFound
                | Self::ContextAdded
                | Self::ModelAddedToContext
                | Self::ModelOnly
        )
    }
}

impl fmt::Display for ContextProcessingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Member traits ────────────────────────────────────────────────────────────

/// Declared accessibility of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Internal,
    Protected,
    Private,
}

/// Declarative markers a member can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerKind {
    /// Always include the member in generated code.
    ScaffoldOptIn,
    /// Leave the member out of generated code.
    ScaffoldOptOut,
}

/// When the store generates a value for a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueGenerated {
    #[default]
    Never,
    OnAdd,
    OnAddOrUpdate,
}

/// What happens to a property value written after the entity is saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SaveBehavior {
    #[default]
    Save,
    Ignore,
    Throw,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_parses_case_insensitively() {
        assert_eq!(
            ProviderKind::from_str("sqlserver").unwrap(),
            ProviderKind::SqlServer
        );
        assert_eq!(
            ProviderKind::from_str("SQLSERVER").unwrap(),
            ProviderKind::SqlServer
        );
        assert_eq!(ProviderKind::from_str("sqlite").unwrap(), ProviderKind::Sqlite);
        assert_eq!(
            ProviderKind::from_str("cosmosdb").unwrap(),
            ProviderKind::CosmosDb
        );
        assert_eq!(
            ProviderKind::from_str(" Postgres ").unwrap(),
            ProviderKind::Postgres
        );
    }

    #[test]
    fn provider_parses_every_member_name() {
        assert_eq!(
            ProviderKind::from_str("existing").unwrap(),
            ProviderKind::Existing
        );
        assert_eq!(ProviderKind::from_str("None").unwrap(), ProviderKind::None);
        assert!(!ProviderKind::from_str("none").unwrap().is_supported());
        assert!(ProviderKind::from_str("oracle").is_err());
    }

    #[test]
    fn supported_names_are_in_declaration_order() {
        assert_eq!(
            ProviderKind::supported_names(),
            vec!["SqlServer", "SQLite", "CosmosDb", "Postgres"]
        );
        assert!(ProviderKind::DEFAULT.is_supported());
        assert!(!ProviderKind::Existing.is_supported());
    }

    #[test]
    fn success_statuses_carry_metadata() {
        assert!(ContextProcessingStatus::ContextAndModelFound.is_success());
        assert!(ContextProcessingStatus::ModelOnly.is_success());
        assert!(!ContextProcessingStatus::MissingContext.is_success());
        assert!(!ContextProcessingStatus::ContextNotFound.is_success());
        assert!(!ContextProcessingStatus::ContextAddFailed.is_success());
    }

    #[test]
    fn status_display_matches_serde_name() {
        let json = serde_json::to_string(&ContextProcessingStatus::ModelAddedToContext).unwrap();
        assert_eq!(
            json,
            format!("\"{}\"", ContextProcessingStatus::ModelAddedToContext)
        );
    }
}
