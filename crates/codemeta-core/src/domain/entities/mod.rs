pub mod descriptor;
pub mod metadata;
pub mod project_type;

pub use descriptor::{ContextDefinition, DescriptorProperty, EntityDescriptor, ForeignKey};
pub use metadata::{
    ContextProcessingResult, MetadataOrigin, ModelMetadata, NavigationMetadata, PropertyMetadata,
};
pub use project_type::{MemberInfo, MemberMarkers, ProjectType, ResolvedType, TypeRef, TypeShape};
