//! Classified model metadata: the contract every generator consumes.

use serde::{Deserialize, Serialize};

use crate::domain::entities::project_type::{ResolvedType, TypeRef};
use crate::domain::value_objects::ContextProcessingStatus;

/// Per-member classification record.
///
/// Fields are private so the two flag invariants hold for every record:
/// a primary key is never also reported as a foreign key, and a flags
/// enumeration is always an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyMetadata {
    property_name: String,
    type_name: String,
    short_type_name: String,
    is_primary_key: bool,
    is_foreign_key: bool,
    is_enum: bool,
    is_enum_flags: bool,
    is_auto_generated: bool,
    is_read_only: bool,
    scaffold: bool,
}

/// Raw flags computed by the classifier before invariants are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct PropertyFlags {
    pub primary_key: bool,
    pub foreign_key: bool,
    pub enum_flags: Option<bool>,
    pub auto_generated: bool,
    pub read_only: bool,
    pub scaffold: bool,
}

impl PropertyMetadata {
    pub(crate) fn new(name: &str, declared_type: &TypeRef, flags: PropertyFlags) -> Self {
        Self {
            property_name: name.to_string(),
            type_name: declared_type.full_name.clone(),
            short_type_name: declared_type.short_name().to_string(),
            is_primary_key: flags.primary_key,
            is_foreign_key: flags.foreign_key && !flags.primary_key,
            is_enum: flags.enum_flags.is_some(),
            is_enum_flags: flags.enum_flags.unwrap_or(false),
            is_auto_generated: flags.auto_generated,
            is_read_only: flags.read_only,
            scaffold: flags.scaffold,
        }
    }

    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    /// Fully-qualified declared type name.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn short_type_name(&self) -> &str {
        &self.short_type_name
    }

    pub fn is_primary_key(&self) -> bool {
        self.is_primary_key
    }

    pub fn is_foreign_key(&self) -> bool {
        self.is_foreign_key
    }

    pub fn is_enum(&self) -> bool {
        self.is_enum
    }

    pub fn is_enum_flags(&self) -> bool {
        self.is_enum_flags
    }

    pub fn is_auto_generated(&self) -> bool {
        self.is_auto_generated
    }

    pub fn is_read_only(&self) -> bool {
        self.is_read_only
    }

    pub fn scaffold(&self) -> bool {
        self.scaffold
    }
}

/// A relationship from the model to a principal entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationMetadata {
    /// Navigation member name, or the principal's short name when the
    /// relationship has no navigation.
    pub association_name: String,
    pub type_name: String,
    pub short_type_name: String,
    pub foreign_key_property_names: Vec<String>,
}

/// Which construction produced a [`ModelMetadata`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataOrigin {
    /// Built from a persistence descriptor.
    Descriptor,
    /// Built from bare type inspection.
    Reflection,
}

/// The classified shape of one model type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMetadata {
    model: ResolvedType,
    origin: MetadataOrigin,
    entity_set_name: Option<String>,
    properties: Vec<PropertyMetadata>,
    navigations: Vec<NavigationMetadata>,
}

impl ModelMetadata {
    pub(crate) fn new(
        model: ResolvedType,
        origin: MetadataOrigin,
        entity_set_name: Option<String>,
        properties: Vec<PropertyMetadata>,
        navigations: Vec<NavigationMetadata>,
    ) -> Self {
        Self {
            model,
            origin,
            entity_set_name,
            properties,
            navigations,
        }
    }

    pub fn model(&self) -> &ResolvedType {
        &self.model
    }

    pub fn origin(&self) -> MetadataOrigin {
        self.origin
    }

    pub fn entity_set_name(&self) -> Option<&str> {
        self.entity_set_name.as_deref()
    }

    /// All records in declaration order.
    pub fn properties(&self) -> &[PropertyMetadata] {
        &self.properties
    }

    pub fn navigations(&self) -> &[NavigationMetadata] {
        &self.navigations
    }

    pub fn property(&self, name: &str) -> Option<&PropertyMetadata> {
        self.properties.iter().find(|p| p.property_name == name)
    }

    pub fn primary_keys(&self) -> impl Iterator<Item = &PropertyMetadata> {
        self.properties.iter().filter(|p| p.is_primary_key)
    }
}

/// Status of context processing plus, on success, the model's metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextProcessingResult {
    pub status: ContextProcessingStatus,
    pub metadata: Option<ModelMetadata>,
}

impl ContextProcessingResult {
    /// Metadata is dropped for statuses that are not a success.
    pub fn new(status: ContextProcessingStatus, metadata: Option<ModelMetadata>) -> Self {
        Self {
            status,
            metadata: metadata.filter(|_| status.is_success()),
        }
    }

    pub fn with_metadata(status: ContextProcessingStatus, metadata: ModelMetadata) -> Self {
        Self::new(status, Some(metadata))
    }

    pub fn status_only(status: ContextProcessingStatus) -> Self {
        Self::new(status, None)
    }

    /// Result used when no context was requested.
    pub fn missing_context() -> Self {
        Self::status_only(ContextProcessingStatus::MissingContext)
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags() -> PropertyFlags {
        PropertyFlags {
            scaffold: true,
            ..PropertyFlags::default()
        }
    }

    #[test]
    fn primary_key_suppresses_foreign_key() {
        let record = PropertyMetadata::new(
            "OrderId",
            &TypeRef::scalar("System.Int32"),
            PropertyFlags {
                primary_key: true,
                foreign_key: true,
                ..flags()
            },
        );

        assert!(record.is_primary_key());
        assert!(!record.is_foreign_key());
    }

    #[test]
    fn flags_enum_is_an_enum() {
        let record = PropertyMetadata::new(
            "Access",
            &TypeRef::enumeration("Shop.Access", true),
            PropertyFlags {
                enum_flags: Some(true),
                ..flags()
            },
        );

        assert!(record.is_enum());
        assert!(record.is_enum_flags());
        assert_eq!(record.short_type_name(), "Access");
    }

    #[test]
    fn failure_status_drops_metadata() {
        let metadata = ModelMetadata::new(
            ResolvedType::from_full_name("Shop.Product"),
            MetadataOrigin::Reflection,
            None,
            Vec::new(),
            Vec::new(),
        );

        let result = ContextProcessingResult::new(
            ContextProcessingStatus::ContextNotFound,
            Some(metadata.clone()),
        );
        assert!(result.metadata.is_none());

        let result =
            ContextProcessingResult::with_metadata(ContextProcessingStatus::ModelOnly, metadata);
        assert!(result.metadata.is_some());
        assert!(result.is_success());
    }
}
