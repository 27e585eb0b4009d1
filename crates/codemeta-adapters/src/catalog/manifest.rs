//! Project manifest: a file describing the target project's types and
//! persistence contexts.
//!
//! The manifest stands in for compiling and inspecting the project. It is
//! read once, normalized, and turned into the in-memory adapters.
//!
//! # Format
//!
//! JSON or TOML, chosen by file extension:
//!
//! ```toml
//! [[types]]
//! namespace = "Shop.Models"
//! name      = "Product"
//!
//! [[types.members]]
//! name = "Id"
//! type = { full_name = "System.Int32" }
//!
//! [[types.members]]
//! name    = "Status"
//! type    = { full_name = "Shop.Models.Status" }  # shape taken from the enum below
//! markers = ["scaffold-opt-out"]
//!
//! [[types]]
//! namespace = "Shop.Models"
//! name      = "Status"
//! shape     = { kind = "enum", flags = false }
//!
//! [[contexts]]
//! full_name = "Shop.Data.ShopContext"
//! provider  = "SQLite"
//!
//! [[contexts.entities]]
//! type        = "Shop.Models.Product"
//! primary_key = ["Id"]
//! ```

use std::{
    collections::{HashMap, HashSet},
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use codemeta_core::{
    application::{ApplicationError, ValidationService},
    domain::{ContextDefinition, MarkerKind, MemberInfo, ProjectType, TypeShape},
    error::CodemetaResult,
};

use crate::{
    catalog::InMemoryCatalog,
    metadata::{InMemoryMetadataService, ReflectionCodeModelService},
};

/// On-disk manifest encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Json,
    Toml,
}

impl ManifestFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else if ext.eq_ignore_ascii_case("toml") {
            Some(Self::Toml)
        } else {
            None
        }
    }
}

/// The target project's candidate pool and persistence contexts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectManifest {
    #[serde(default)]
    pub types: Vec<ProjectType>,
    #[serde(default)]
    pub contexts: Vec<ContextDefinition>,
}

/// Adapters built from one manifest, sharing a single catalog.
#[derive(Clone)]
pub struct ProjectAdapters {
    pub catalog: InMemoryCatalog,
    pub metadata: InMemoryMetadataService,
    pub code_model: ReflectionCodeModelService,
}

impl ProjectAdapters {
    /// Wire the adapters into a validation service.
    pub fn into_service(self) -> ValidationService {
        ValidationService::new(
            Box::new(self.catalog),
            Box::new(self.metadata),
            Box::new(self.code_model),
        )
    }
}

impl ProjectManifest {
    /// Read and normalize a manifest file.
    #[instrument(fields(path = %path.display()))]
    pub fn load(path: &Path) -> CodemetaResult<Self> {
        let format = ManifestFormat::from_path(path).ok_or_else(|| {
            invalid(
                path,
                "unsupported manifest extension (expected .json or .toml)",
            )
        })?;

        let raw = fs::read_to_string(path)
            .map_err(|e| invalid(path, format!("failed to read file: {e}")))?;

        let manifest = Self::parse(&raw, format, path)?;
        info!(
            types = manifest.types.len(),
            contexts = manifest.contexts.len(),
            "Loaded project manifest"
        );
        Ok(manifest)
    }

    pub fn from_json_str(raw: &str) -> CodemetaResult<Self> {
        Self::parse(raw, ManifestFormat::Json, Path::new("<inline>"))
    }

    pub fn from_toml_str(raw: &str) -> CodemetaResult<Self> {
        Self::parse(raw, ManifestFormat::Toml, Path::new("<inline>"))
    }

    fn parse(raw: &str, format: ManifestFormat, path: &Path) -> CodemetaResult<Self> {
        let manifest: Self = match format {
            ManifestFormat::Json => {
                serde_json::from_str(raw).map_err(|e| invalid(path, e.to_string()))?
            }
            ManifestFormat::Toml => toml::from_str(raw).map_err(|e| invalid(path, e.to_string()))?,
        };

        Ok(manifest.normalized())
    }

    /// Fill in what the file leaves implicit.
    ///
    /// Member types naming a declared enum take that enum's shape. Entity
    /// properties pick up the markers their type declares on the same
    /// member. Context types declared only under `contexts` join the
    /// candidate pool.
    pub fn normalized(mut self) -> Self {
        let enums: HashMap<String, TypeShape> = self
            .types
            .iter()
            .filter(|t| matches!(t.shape, TypeShape::Enum { .. }))
            .map(|t| (t.full_name(), t.shape))
            .collect();

        let hydrate = |member: &mut MemberInfo| {
            if matches!(member.declared_type.shape, TypeShape::Scalar) {
                if let Some(shape) = enums.get(&member.declared_type.full_name) {
                    member.declared_type.shape = *shape;
                }
            }
        };

        for ty in &mut self.types {
            ty.members.iter_mut().for_each(hydrate);
        }

        let declared_markers: HashMap<(String, String), Vec<MarkerKind>> = self
            .types
            .iter()
            .flat_map(|t| {
                let owner = t.full_name();
                t.members
                    .iter()
                    .filter(|m| !m.markers.is_empty())
                    .map(move |m| ((owner.clone(), m.name.clone()), m.markers.clone()))
            })
            .collect();

        for context in &mut self.contexts {
            for entity in &mut context.entities {
                for property in &mut entity.properties {
                    hydrate(&mut property.member);

                    let key = (entity.type_name.clone(), property.member.name.clone());
                    if let Some(markers) = declared_markers.get(&key) {
                        for marker in markers {
                            if !property.member.markers.contains(marker) {
                                property.member.markers.push(*marker);
                            }
                        }
                    }
                }
            }
        }

        let declared: HashSet<String> = self.types.iter().map(ProjectType::full_name).collect();
        let missing: Vec<ProjectType> = self
            .contexts
            .iter()
            .filter(|c| !declared.contains(&c.full_name))
            .map(|c| context_type(&c.full_name))
            .collect();

        if !missing.is_empty() {
            debug!(count = missing.len(), "Adding context types to candidate pool");
            self.types.extend(missing);
        }

        self
    }

    /// Build the catalog and both metadata services over it.
    pub fn into_adapters(self) -> ProjectAdapters {
        let catalog = InMemoryCatalog::from_types(self.types);
        let metadata = InMemoryMetadataService::new(catalog.clone(), self.contexts);
        let code_model = ReflectionCodeModelService::new(catalog.clone());

        ProjectAdapters {
            catalog,
            metadata,
            code_model,
        }
    }
}

fn context_type(full_name: &str) -> ProjectType {
    match full_name.rsplit_once('.') {
        Some((namespace, name)) => ProjectType::new(namespace, name),
        None => ProjectType::new("", full_name),
    }
}

fn invalid(path: &Path, reason: impl Into<String>) -> codemeta_core::error::CodemetaError {
    ApplicationError::ManifestInvalid {
        path: PathBuf::from(path),
        reason: reason.into(),
    }
    .into()
}
