//! In-memory metadata service backed by declared contexts.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use async_trait::async_trait;
use tracing::{debug, instrument};

use codemeta_core::{
    application::{
        ApplicationError,
        ports::{MetadataService, ModelTypesLocator},
    },
    domain::{
        ContextDefinition, ContextProcessingResult, ContextProcessingStatus, MetadataSource,
        ProviderKind, ResolvedType, classify,
    },
    error::CodemetaResult,
};

use crate::{catalog::InMemoryCatalog, conventions};

/// Serves model metadata from the contexts a project declares.
///
/// | context   | entity   | status                  |
/// |-----------|----------|-------------------------|
/// | declared  | declared | `ContextAndModelFound`  |
/// | declared  | missing  | `ModelAddedToContext`   |
/// | missing   | -        | `ContextAdded` if the provider is supported, else `ContextNotFound` |
///
/// Entities that are not declared are derived by [`conventions`]. When the
/// model type itself is not in the catalog the status is `ContextAddFailed`.
/// Contexts synthesized for a request are not remembered.
#[derive(Clone)]
pub struct InMemoryMetadataService {
    catalog: InMemoryCatalog,
    contexts: Arc<RwLock<HashMap<String, ContextDefinition>>>,
}

impl InMemoryMetadataService {
    pub fn new(
        catalog: InMemoryCatalog,
        contexts: impl IntoIterator<Item = ContextDefinition>,
    ) -> Self {
        let contexts = contexts
            .into_iter()
            .map(|c| (c.full_name.clone(), c))
            .collect();

        Self {
            catalog,
            contexts: Arc::new(RwLock::new(contexts)),
        }
    }

    /// Declare (or replace) a context.
    pub fn register_context(&self, context: ContextDefinition) -> CodemetaResult<()> {
        let mut contexts = self.contexts.write().map_err(|_| lock_poisoned())?;
        contexts.insert(context.full_name.clone(), context);
        Ok(())
    }

    fn context(&self, full_name: &str) -> CodemetaResult<Option<ContextDefinition>> {
        let contexts = self.contexts.read().map_err(|_| lock_poisoned())?;
        Ok(contexts.get(full_name).cloned())
    }

    /// Derive an entity for `model` and classify it, or report why not.
    fn derive(
        &self,
        model: &ResolvedType,
        success: ContextProcessingStatus,
    ) -> CodemetaResult<ContextProcessingResult> {
        let Some(ty) = self.catalog.find(model.full_name())? else {
            debug!(model = %model, "Model type not in catalog");
            return Ok(ContextProcessingResult::status_only(
                ContextProcessingStatus::ContextAddFailed,
            ));
        };

        let known = self.catalog.all_types()?;
        let entity = conventions::derive_entity(&ty, &known);

        Ok(ContextProcessingResult::with_metadata(
            success,
            classify(MetadataSource::Rich(&entity)),
        ))
    }
}

fn lock_poisoned() -> codemeta_core::error::CodemetaError {
    ApplicationError::CatalogUnavailable {
        reason: "context registry lock poisoned".into(),
    }
    .into()
}

#[async_trait]
impl MetadataService for InMemoryMetadataService {
    #[instrument(skip(self, model), fields(model = %model))]
    async fn get_model_metadata(
        &self,
        context_full_name: &str,
        model: &ResolvedType,
        area_name: &str,
        provider: ProviderKind,
    ) -> CodemetaResult<ContextProcessingResult> {
        match self.context(context_full_name)? {
            Some(context) => match context.entity(model.full_name()) {
                Some(entity) => Ok(ContextProcessingResult::with_metadata(
                    ContextProcessingStatus::ContextAndModelFound,
                    classify(MetadataSource::Rich(entity)),
                )),
                None => self.derive(model, ContextProcessingStatus::ModelAddedToContext),
            },
            None if provider.is_supported() => {
                debug!(%provider, "Synthesizing context for this request");
                self.derive(model, ContextProcessingStatus::ContextAdded)
            }
            None => Ok(ContextProcessingResult::status_only(
                ContextProcessingStatus::ContextNotFound,
            )),
        }
    }
}
