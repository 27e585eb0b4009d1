//! Naming conventions for entities no context declares yet.
//!
//! When a model has to be added to a context (or a context is synthesized
//! around it) there is no descriptor to read keys and relationships from, so
//! one is derived from member names:
//!
//! - the key is `Id` or `{Type}Id` (case-insensitive)
//! - a `{Principal}Id` member is a foreign key to a catalog type named
//!   `Principal`, navigated through a member of that type if one exists
//! - integer and GUID keys are generated on add
//! - only scalar and enum members are mapped

use codemeta_core::domain::{
    DescriptorProperty, EntityDescriptor, ForeignKey, MemberInfo, ProjectType, TypeShape,
    ValueGenerated,
};
use tracing::debug;

const GENERATED_KEY_TYPES: &[&str] = &[
    "System.Int16",
    "System.Int32",
    "System.Int64",
    "System.Guid",
    "short",
    "int",
    "long",
    "Guid",
];

/// Derive a descriptor for `ty`, resolving relationships against `known`.
pub fn derive_entity(ty: &ProjectType, known: &[ProjectType]) -> EntityDescriptor {
    let mapped: Vec<&MemberInfo> = ty.visible_members().filter(|m| is_mapped(m)).collect();

    let key = mapped
        .iter()
        .find(|m| is_key_name(&m.name, ty.short_name()))
        .map(|m| m.name.clone());

    let mut descriptor =
        EntityDescriptor::new(ty.full_name()).with_entity_set(pluralize(ty.short_name()));

    for member in &mapped {
        let mut property = DescriptorProperty::new((*member).clone());
        if key.as_deref() == Some(member.name.as_str())
            && GENERATED_KEY_TYPES.contains(&member.declared_type.full_name.as_str())
        {
            property = property.generated(ValueGenerated::OnAdd);
        }
        descriptor = descriptor.with_property(property);
    }

    if let Some(key) = &key {
        descriptor = descriptor.with_key([key.clone()]);
    }

    for member in &mapped {
        if key.as_deref() == Some(member.name.as_str()) {
            continue;
        }
        if let Some(fk) = foreign_key_for(ty, member, known) {
            descriptor = descriptor.with_foreign_key(fk);
        }
    }

    debug!(
        entity = %descriptor.type_name,
        key = ?key,
        foreign_keys = descriptor.foreign_keys.len(),
        "Derived entity by convention"
    );

    descriptor
}

/// `Product` -> `Products`, `Category` -> `Categories`, `Box` -> `Boxes`.
pub fn pluralize(name: &str) -> String {
    let lower = name.to_ascii_lowercase();

    if lower.ends_with('y')
        && !lower.ends_with("ay")
        && !lower.ends_with("ey")
        && !lower.ends_with("oy")
        && !lower.ends_with("uy")
    {
        format!("{}ies", &name[..name.len() - 1])
    } else if ["s", "x", "z", "ch", "sh"].iter().any(|s| lower.ends_with(s)) {
        format!("{name}es")
    } else {
        format!("{name}s")
    }
}

fn is_mapped(member: &MemberInfo) -> bool {
    matches!(
        member.declared_type.shape,
        TypeShape::Scalar | TypeShape::Enum { .. }
    )
}

fn is_key_name(member: &str, type_name: &str) -> bool {
    member.eq_ignore_ascii_case("id") || member.eq_ignore_ascii_case(&format!("{type_name}Id"))
}

fn foreign_key_for(
    ty: &ProjectType,
    member: &MemberInfo,
    known: &[ProjectType],
) -> Option<ForeignKey> {
    let stem = strip_suffix_ignore_case(&member.name, "Id")?;
    if stem.is_empty() {
        return None;
    }

    let principal = known
        .iter()
        .filter(|t| matches!(t.shape, TypeShape::Complex))
        .find(|t| t.short_name().eq_ignore_ascii_case(stem))?;
    let principal_name = principal.full_name();

    let fk = ForeignKey::new([member.name.clone()], principal_name.clone());
    let navigation = ty
        .visible_members()
        .find(|m| m.declared_type.full_name == principal_name);

    Some(match navigation {
        Some(nav) => fk.with_navigation(nav.name.clone()),
        None => fk,
    })
}

fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let split = s.len().checked_sub(suffix.len())?;
    if !s.is_char_boundary(split) {
        return None;
    }
    let (head, tail) = s.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}
