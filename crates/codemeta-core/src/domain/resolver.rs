//! Type name resolution against a pool of project types.
//!
//! Matching policy, in order:
//!
//! 1. exact fully-qualified name,
//! 2. unique case-insensitive short name,
//! 3. two or more short-name matches is ambiguous.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::entities::{ProjectType, ResolvedType};
use crate::domain::error::DomainError;

/// What the type being resolved is for. Only used in messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeRole {
    Model,
    DataContext,
}

impl fmt::Display for TypeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Model => f.write_str("model"),
            Self::DataContext => f.write_str("data context"),
        }
    }
}

/// Raw outcome of matching a name against candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeMatch<'a> {
    Found(&'a ProjectType),
    NotFound,
    /// Full names of every candidate sharing the short name.
    Ambiguous(Vec<String>),
}

/// Match `name` against `candidates` without deciding whether a miss is fatal.
pub fn find_type<'a>(name: &str, candidates: &'a [ProjectType]) -> TypeMatch<'a> {
    let name = name.trim();
    if name.is_empty() {
        return TypeMatch::NotFound;
    }

    if let Some(exact) = candidates.iter().find(|c| c.full_name() == name) {
        return TypeMatch::Found(exact);
    }

    let by_short: Vec<&ProjectType> = candidates
        .iter()
        .filter(|c| c.short_name().eq_ignore_ascii_case(name))
        .collect();

    match by_short.as_slice() {
        [] => TypeMatch::NotFound,
        [single] => TypeMatch::Found(*single),
        many => TypeMatch::Ambiguous(many.iter().map(|c| c.full_name()).collect()),
    }
}

/// Resolve `name` to a type handle.
///
/// With `required` set, a miss or an ambiguity is an error. Otherwise both
/// yield `Ok(None)` and the caller keeps the raw string.
pub fn resolve_type(
    name: &str,
    candidates: &[ProjectType],
    role: TypeRole,
    required: bool,
) -> Result<Option<ResolvedType>, DomainError> {
    match find_type(name, candidates) {
        TypeMatch::Found(ty) => {
            debug!(%role, name, resolved = %ty.full_name(), "Type resolved");
            Ok(Some(ty.resolved()))
        }
        TypeMatch::NotFound if required => Err(DomainError::TypeNotFound {
            role,
            name: name.to_string(),
        }),
        TypeMatch::Ambiguous(matches) if required => Err(DomainError::TypeAmbiguous {
            role,
            name: name.to_string(),
            matches,
        }),
        TypeMatch::NotFound | TypeMatch::Ambiguous(_) => {
            debug!(%role, name, "Optional type did not resolve");
            Ok(None)
        }
    }
}
