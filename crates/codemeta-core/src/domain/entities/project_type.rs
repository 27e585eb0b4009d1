//! Types discovered in the target project and the handles that point at them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{MarkerKind, Visibility};

/// Structural shape of a type, as far as classification cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TypeShape {
    /// Primitive-like value (numbers, strings, dates, ...).
    #[default]
    Scalar,
    /// Enumeration; `flags` is set when its values combine bitwise.
    Enum {
        #[serde(default)]
        flags: bool,
    },
    /// Class or struct with members of its own.
    Complex,
    /// Sequence of another type.
    Collection,
}

/// Reference to the declared type of a member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    /// Fully-qualified name, e.g. `System.Int32` or `Shop.Models.Status`.
    pub full_name: String,
    #[serde(default)]
    pub shape: TypeShape,
    /// `Nullable<T>` style wrapper around `full_name`.
    #[serde(default)]
    pub nullable: bool,
}

impl TypeRef {
    pub fn new(full_name: impl Into<String>, shape: TypeShape) -> Self {
        Self {
            full_name: full_name.into(),
            shape,
            nullable: false,
        }
    }

    pub fn scalar(full_name: impl Into<String>) -> Self {
        Self::new(full_name, TypeShape::Scalar)
    }

    pub fn enumeration(full_name: impl Into<String>, flags: bool) -> Self {
        Self::new(full_name, TypeShape::Enum { flags })
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Last dotted segment of the name, ignoring generic arguments.
    pub fn short_name(&self) -> &str {
        short_name_of(&self.full_name)
    }

    /// `Some(flags)` when the type, nullable or not, is an enumeration.
    pub fn enum_flags(&self) -> Option<bool> {
        match self.shape {
            TypeShape::Enum { flags } => Some(flags),
            _ => None,
        }
    }
}

/// Capability query over a member's declarative markers.
///
/// The classifier only asks this question; how markers are discovered is up
/// to whatever produced the member.
pub trait MemberMarkers {
    fn has_marker(&self, kind: MarkerKind) -> bool;
}

/// A data member (property) declared on a project type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub declared_type: TypeRef,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default = "default_true")]
    pub readable: bool,
    #[serde(default)]
    pub markers: Vec<MarkerKind>,
}

fn default_true() -> bool {
    true
}

impl MemberInfo {
    pub fn new(name: impl Into<String>, declared_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            declared_type,
            visibility: Visibility::Public,
            readable: true,
            markers: Vec::new(),
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn write_only(mut self) -> Self {
        self.readable = false;
        self
    }

    pub fn with_marker(mut self, marker: MarkerKind) -> Self {
        if !self.markers.contains(&marker) {
            self.markers.push(marker);
        }
        self
    }

    /// Public and readable: the members generated code can see.
    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Public && self.readable
    }
}

impl MemberMarkers for MemberInfo {
    fn has_marker(&self, kind: MarkerKind) -> bool {
        self.markers.contains(&kind)
    }
}

/// A type declared in the target project: one entry of the candidate pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectType {
    #[serde(default)]
    pub namespace: String,
    pub name: String,
    #[serde(default = "default_complex")]
    pub shape: TypeShape,
    /// Members in declaration order.
    #[serde(default)]
    pub members: Vec<MemberInfo>,
}

fn default_complex() -> TypeShape {
    TypeShape::Complex
}

impl ProjectType {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            shape: TypeShape::Complex,
            members: Vec::new(),
        }
    }

    pub fn with_shape(mut self, shape: TypeShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_member(mut self, member: MemberInfo) -> Self {
        self.members.push(member);
        self
    }

    /// `Namespace.Name`, or just `Name` for the global namespace.
    pub fn full_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    pub fn short_name(&self) -> &str {
        &self.name
    }

    pub fn member(&self, name: &str) -> Option<&MemberInfo> {
        self.members.iter().find(|m| m.name == name)
    }

    /// Public, readable members in declaration order.
    pub fn visible_members(&self) -> impl Iterator<Item = &MemberInfo> {
        self.members.iter().filter(|m| m.is_visible())
    }

    /// Handle to this type.
    pub fn resolved(&self) -> ResolvedType {
        ResolvedType::new(self.full_name(), self.name.clone())
    }

    /// The shape members referencing this type should report.
    pub fn as_type_ref(&self) -> TypeRef {
        TypeRef::new(self.full_name(), self.shape)
    }
}

/// Handle to a concrete type in the target project.
///
/// Produced by the resolver; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedType {
    full_name: String,
    short_name: String,
}

impl ResolvedType {
    pub fn new(full_name: impl Into<String>, short_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            short_name: short_name.into(),
        }
    }

    /// Derive the short name from the last dotted segment.
    pub fn from_full_name(full_name: impl Into<String>) -> Self {
        let full_name = full_name.into();
        let short_name = short_name_of(&full_name).to_string();
        Self {
            full_name,
            short_name,
        }
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

pub(crate) fn short_name_of(full_name: &str) -> &str {
    let base = full_name.split('<').next().unwrap_or(full_name);
    base.rsplit('.').next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_namespace() {
        assert_eq!(ProjectType::new("Shop.Models", "Product").full_name(), "Shop.Models.Product");
        assert_eq!(ProjectType::new("", "Product").full_name(), "Product");
    }

    #[test]
    fn short_name_ignores_generic_arguments() {
        assert_eq!(TypeRef::scalar("System.Int32").short_name(), "Int32");
        assert_eq!(
            TypeRef::new("System.Collections.Generic.List<Shop.Order>", TypeShape::Collection)
                .short_name(),
            "List"
        );
        assert_eq!(ResolvedType::from_full_name("Product").short_name(), "Product");
    }

    #[test]
    fn visible_members_skip_private_and_write_only() {
        let ty = ProjectType::new("Shop", "Product")
            .with_member(MemberInfo::new("Name", TypeRef::scalar("System.String")))
            .with_member(
                MemberInfo::new("secret", TypeRef::scalar("System.String"))
                    .with_visibility(Visibility::Private),
            )
            .with_member(MemberInfo::new("Password", TypeRef::scalar("System.String")).write_only());

        let names: Vec<_> = ty.visible_members().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Name"]);
    }

    #[test]
    fn markers_are_queried_through_the_trait() {
        let member = MemberInfo::new("Notes", TypeRef::scalar("System.String"))
            .with_marker(MarkerKind::ScaffoldOptOut)
            .with_marker(MarkerKind::ScaffoldOptOut);

        assert!(member.has_marker(MarkerKind::ScaffoldOptOut));
        assert!(!member.has_marker(MarkerKind::ScaffoldOptIn));
        assert_eq!(member.markers.len(), 1);
    }

    #[test]
    fn nullable_enum_still_reports_enum_shape() {
        let status = TypeRef::enumeration("Shop.Status", true).nullable();
        assert_eq!(status.enum_flags(), Some(true));
        assert_eq!(TypeRef::scalar("System.String").enum_flags(), None);
    }
}
