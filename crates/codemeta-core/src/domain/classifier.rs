//! Member classification: turns a metadata source into [`ModelMetadata`].
//!
//! There is one classification function for both sources. Only the identity
//! flags (key, relationship, generation, read-only) depend on which source
//! is available; enumeration shape and scaffold visibility are computed the
//! same way for every member.

use tracing::debug;

use crate::domain::entities::metadata::PropertyFlags;
use crate::domain::entities::{
    EntityDescriptor, MemberInfo, MemberMarkers, MetadataOrigin, ModelMetadata,
    NavigationMetadata, ProjectType, PropertyMetadata,
};
use crate::domain::value_objects::{MarkerKind, SaveBehavior, ValueGenerated};

/// Where metadata comes from.
#[derive(Debug, Clone, Copy)]
pub enum MetadataSource<'a> {
    /// A persistence descriptor with authoritative key and relationship data.
    Rich(&'a EntityDescriptor),
    /// Only the bare type is known.
    Fallback(&'a ProjectType),
}

/// Classify every member of `source`, in declaration order.
pub fn classify(source: MetadataSource<'_>) -> ModelMetadata {
    match source {
        MetadataSource::Rich(descriptor) => {
            let properties = descriptor
                .properties
                .iter()
                .map(|property| {
                    let name = property.name();
                    let identity = Identity {
                        primary_key: descriptor.is_key_member(name),
                        foreign_key: descriptor.is_foreign_key_member(name),
                        auto_generated: property.value_generated != ValueGenerated::Never,
                        read_only: property.after_save != SaveBehavior::Save,
                    };
                    classify_member(&property.member, identity)
                })
                .collect();

            let model = descriptor.resolved();
            debug!(model = %model, "Classified model from descriptor");

            ModelMetadata::new(
                model,
                MetadataOrigin::Descriptor,
                descriptor.entity_set_name.clone(),
                properties,
                navigations(descriptor),
            )
        }
        MetadataSource::Fallback(ty) => {
            let properties = ty
                .visible_members()
                .map(|member| classify_member(member, Identity::default()))
                .collect();

            let model = ty.resolved();
            debug!(model = %model, "Classified model from bare type");

            ModelMetadata::new(
                model,
                MetadataOrigin::Reflection,
                None,
                properties,
                Vec::new(),
            )
        }
    }
}

/// Scaffold visibility: opt-in always wins, then opt-out, otherwise visible.
pub fn scaffold_visibility(member: &impl MemberMarkers) -> bool {
    member.has_marker(MarkerKind::ScaffoldOptIn) || !member.has_marker(MarkerKind::ScaffoldOptOut)
}

/// Flags only a descriptor can vouch for.
#[derive(Debug, Clone, Copy, Default)]
struct Identity {
    primary_key: bool,
    foreign_key: bool,
    auto_generated: bool,
    read_only: bool,
}

fn classify_member(member: &MemberInfo, identity: Identity) -> PropertyMetadata {
    PropertyMetadata::new(
        &member.name,
        &member.declared_type,
        PropertyFlags {
            primary_key: identity.primary_key,
            foreign_key: identity.foreign_key,
            enum_flags: member.declared_type.enum_flags(),
            auto_generated: identity.auto_generated,
            read_only: identity.read_only,
            scaffold: scaffold_visibility(member),
        },
    )
}

fn navigations(descriptor: &EntityDescriptor) -> Vec<NavigationMetadata> {
    descriptor
        .foreign_keys
        .iter()
        .map(|fk| NavigationMetadata {
            association_name: fk
                .navigation
                .clone()
                .unwrap_or_else(|| fk.principal_short_name().to_string()),
            type_name: fk.principal.clone(),
            short_type_name: fk.principal_short_name().to_string(),
            foreign_key_property_names: fk.properties.clone(),
        })
        .collect()
}
