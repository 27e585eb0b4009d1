//! Persistence-layer descriptors: what a context knows about its entities.

use serde::{Deserialize, Serialize};

use crate::domain::entities::project_type::{MemberInfo, ResolvedType, short_name_of};
use crate::domain::value_objects::{ProviderKind, SaveBehavior, ValueGenerated};

/// A mapped property together with its store-side behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorProperty {
    #[serde(flatten)]
    pub member: MemberInfo,
    #[serde(default)]
    pub value_generated: ValueGenerated,
    #[serde(default)]
    pub after_save: SaveBehavior,
}

impl DescriptorProperty {
    pub fn new(member: MemberInfo) -> Self {
        Self {
            member,
            value_generated: ValueGenerated::Never,
            after_save: SaveBehavior::Save,
        }
    }

    pub fn generated(mut self, value_generated: ValueGenerated) -> Self {
        self.value_generated = value_generated;
        self
    }

    pub fn after_save(mut self, behavior: SaveBehavior) -> Self {
        self.after_save = behavior;
        self
    }

    pub fn name(&self) -> &str {
        &self.member.name
    }
}

/// A relationship constraint from dependent properties to a principal type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKey {
    /// Dependent property names, in key order.
    pub properties: Vec<String>,
    /// Fully-qualified name of the principal entity type.
    pub principal: String,
    /// Navigation member on the dependent pointing at the principal.
    #[serde(default)]
    pub navigation: Option<String>,
}

impl ForeignKey {
    pub fn new(
        properties: impl IntoIterator<Item = impl Into<String>>,
        principal: impl Into<String>,
    ) -> Self {
        Self {
            properties: properties.into_iter().map(Into::into).collect(),
            principal: principal.into(),
            navigation: None,
        }
    }

    pub fn with_navigation(mut self, navigation: impl Into<String>) -> Self {
        self.navigation = Some(navigation.into());
        self
    }

    pub fn principal_short_name(&self) -> &str {
        short_name_of(&self.principal)
    }
}

/// Rich metadata source for one entity type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDescriptor {
    /// Fully-qualified name of the entity's type.
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub entity_set_name: Option<String>,
    /// Mapped properties in declaration order.
    #[serde(default)]
    pub properties: Vec<DescriptorProperty>,
    /// Primary key members; more than one means a composite key.
    #[serde(default)]
    pub primary_key: Vec<String>,
    #[serde(default)]
    pub foreign_keys: Vec<ForeignKey>,
}

impl EntityDescriptor {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            entity_set_name: None,
            properties: Vec::new(),
            primary_key: Vec::new(),
            foreign_keys: Vec::new(),
        }
    }

    pub fn with_property(mut self, property: DescriptorProperty) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_key(mut self, members: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.primary_key = members.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_foreign_key(mut self, foreign_key: ForeignKey) -> Self {
        self.foreign_keys.push(foreign_key);
        self
    }

    pub fn with_entity_set(mut self, name: impl Into<String>) -> Self {
        self.entity_set_name = Some(name.into());
        self
    }

    pub fn resolved(&self) -> ResolvedType {
        ResolvedType::from_full_name(self.type_name.clone())
    }

    pub fn is_key_member(&self, name: &str) -> bool {
        self.primary_key.iter().any(|k| k == name)
    }

    pub fn is_foreign_key_member(&self, name: &str) -> bool {
        self.foreign_keys
            .iter()
            .any(|fk| fk.properties.iter().any(|p| p == name))
    }
}

/// A persistence context and the entities it maps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextDefinition {
    pub full_name: String,
    #[serde(default = "default_provider")]
    pub provider: ProviderKind,
    #[serde(default)]
    pub entities: Vec<EntityDescriptor>,
}

fn default_provider() -> ProviderKind {
    ProviderKind::DEFAULT
}

impl ContextDefinition {
    pub fn new(full_name: impl Into<String>, provider: ProviderKind) -> Self {
        Self {
            full_name: full_name.into(),
            provider,
            entities: Vec::new(),
        }
    }

    pub fn with_entity(mut self, entity: EntityDescriptor) -> Self {
        self.entities.push(entity);
        self
    }

    pub fn entity(&self, type_full_name: &str) -> Option<&EntityDescriptor> {
        self.entities.iter().find(|e| e.type_name == type_full_name)
    }

    pub fn short_name(&self) -> &str {
        short_name_of(&self.full_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::project_type::TypeRef;

    fn order_descriptor() -> EntityDescriptor {
        EntityDescriptor::new("Shop.OrderLine")
            .with_property(DescriptorProperty::new(MemberInfo::new(
                "OrderId",
                TypeRef::scalar("System.Int32"),
            )))
            .with_property(DescriptorProperty::new(MemberInfo::new(
                "LineNo",
                TypeRef::scalar("System.Int32"),
            )))
            .with_key(["OrderId", "LineNo"])
            .with_foreign_key(ForeignKey::new(["OrderId"], "Shop.Order").with_navigation("Order"))
    }

    #[test]
    fn composite_key_members_are_all_keys() {
        let descriptor = order_descriptor();
        assert!(descriptor.is_key_member("OrderId"));
        assert!(descriptor.is_key_member("LineNo"));
        assert!(!descriptor.is_key_member("Quantity"));
    }

    #[test]
    fn foreign_key_lookup_by_member() {
        let descriptor = order_descriptor();
        assert!(descriptor.is_foreign_key_member("OrderId"));
        assert!(!descriptor.is_foreign_key_member("LineNo"));
        assert_eq!(descriptor.foreign_keys[0].principal_short_name(), "Order");
    }

    #[test]
    fn context_finds_entity_by_full_name() {
        let context = ContextDefinition::new("Shop.Data.ShopContext", ProviderKind::Sqlite)
            .with_entity(order_descriptor());

        assert!(context.entity("Shop.OrderLine").is_some());
        assert!(context.entity("OrderLine").is_none());
        assert_eq!(context.short_name(), "ShopContext");
    }
}
