// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for codemeta.
//!
//! This module contains pure resolution and classification logic.
//! Type catalogs, persistence metadata and reflection are reached through
//! ports defined in the application layer.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: candidates and descriptors are handed in by the caller
//! - **Immutable values**: every domain object is Clone + PartialEq

pub mod classifier;
pub mod entities;
pub mod error;
pub mod format;
pub mod provider;
pub mod resolver;
pub mod value_objects;

pub use classifier::{MetadataSource, classify, scaffold_visibility};
pub use entities::{
    ContextDefinition, ContextProcessingResult, DescriptorProperty, EntityDescriptor, ForeignKey,
    MemberInfo, MemberMarkers, MetadataOrigin, ModelMetadata, NavigationMetadata, ProjectType,
    PropertyMetadata, ResolvedType, TypeRef, TypeShape,
};
pub use error::DomainError;
pub use format::format_quoted_list;
pub use provider::ProviderValidator;
pub use resolver::{TypeMatch, TypeRole, find_type, resolve_type};
pub use value_objects::{
    ContextProcessingStatus, MarkerKind, ProviderKind, SaveBehavior, ValueGenerated, Visibility,
};
