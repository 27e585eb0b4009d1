//! Generator command models and the outcome handed back to generators.

use serde::{Deserialize, Serialize};

use crate::domain::{ContextProcessingResult, ModelMetadata, ProviderKind, ResolvedType};

/// The part of a generator's command line that selects what to scaffold.
///
/// Every generator variant implements this so they all share one
/// validation path in [`ValidationService`](super::ValidationService).
pub trait ModelSelection {
    /// Model type name; short or fully-qualified.
    fn model_class(&self) -> &str;

    /// Persistence context type name, if one was given.
    fn data_context_class(&self) -> Option<&str>;

    /// Provider to use if a new context has to be generated.
    fn database_provider(&self) -> Option<&str>;
}

/// Options shared by the controller, view and Razor page generators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonCommandLineModel {
    pub model_class: String,
    pub data_context_class: Option<String>,
    pub database_provider: Option<String>,
    pub relative_folder_path: Option<String>,
    pub use_default_layout: bool,
}

impl CommonCommandLineModel {
    pub fn new(model_class: impl Into<String>) -> Self {
        Self {
            model_class: model_class.into(),
            use_default_layout: true,
            ..Self::default()
        }
    }

    pub fn with_data_context(mut self, name: impl Into<String>) -> Self {
        self.data_context_class = Some(name.into());
        self
    }

    pub fn with_database_provider(mut self, provider: impl Into<String>) -> Self {
        self.database_provider = Some(provider.into());
        self
    }
}

impl ModelSelection for CommonCommandLineModel {
    fn model_class(&self) -> &str {
        &self.model_class
    }

    fn data_context_class(&self) -> Option<&str> {
        self.data_context_class.as_deref()
    }

    fn database_provider(&self) -> Option<&str> {
        self.database_provider.as_deref()
    }
}

/// Options of the Blazor CRUD generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlazorCrudCommandLineModel {
    pub model_class: String,
    pub data_context_class: Option<String>,
    pub database_provider: Option<String>,
    /// `CRUD` for every page, or a single page kind such as `Create`.
    pub page_type: Option<String>,
}

impl BlazorCrudCommandLineModel {
    pub fn new(model_class: impl Into<String>) -> Self {
        Self {
            model_class: model_class.into(),
            ..Self::default()
        }
    }
}

impl ModelSelection for BlazorCrudCommandLineModel {
    fn model_class(&self) -> &str {
        &self.model_class
    }

    fn data_context_class(&self) -> Option<&str> {
        self.data_context_class.as_deref()
    }

    fn database_provider(&self) -> Option<&str> {
        self.database_provider.as_deref()
    }
}

/// Options of the minimal API endpoints generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimalApiCommandLineModel {
    pub model_class: String,
    pub data_context_class: Option<String>,
    pub database_provider: Option<String>,
    pub endpoints_class: Option<String>,
    pub open_api: bool,
}

impl MinimalApiCommandLineModel {
    pub fn new(model_class: impl Into<String>) -> Self {
        Self {
            model_class: model_class.into(),
            open_api: true,
            ..Self::default()
        }
    }
}

impl ModelSelection for MinimalApiCommandLineModel {
    fn model_class(&self) -> &str {
        &self.model_class
    }

    fn data_context_class(&self) -> Option<&str> {
        self.data_context_class.as_deref()
    }

    fn database_provider(&self) -> Option<&str> {
        self.database_provider.as_deref()
    }
}

/// Everything a generator needs after validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub model_type: ResolvedType,
    /// Resolved context name, the raw requested name when the context is
    /// to be generated, or empty when no context was requested.
    pub context_full_name: String,
    pub processing_result: ContextProcessingResult,
    pub provider: ProviderKind,
}

impl ValidationOutcome {
    pub fn metadata(&self) -> Option<&ModelMetadata> {
        self.processing_result.metadata.as_ref()
    }

    pub fn has_context(&self) -> bool {
        !self.context_full_name.is_empty()
    }
}
