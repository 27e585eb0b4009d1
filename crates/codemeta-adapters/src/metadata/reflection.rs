//! Code-model metadata from bare type inspection.

use async_trait::async_trait;
use tracing::instrument;

use codemeta_core::{
    application::{ApplicationError, ports::CodeModelService},
    domain::{
        ContextProcessingResult, ContextProcessingStatus, MetadataSource, ResolvedType, classify,
    },
    error::CodemetaResult,
};

use crate::catalog::InMemoryCatalog;

/// Classifies a model from its catalog entry alone; no identity flags.
#[derive(Clone)]
pub struct ReflectionCodeModelService {
    catalog: InMemoryCatalog,
}

impl ReflectionCodeModelService {
    pub fn new(catalog: InMemoryCatalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl CodeModelService for ReflectionCodeModelService {
    #[instrument(skip(self), fields(model = %model))]
    async fn get_model_metadata(
        &self,
        model: &ResolvedType,
    ) -> CodemetaResult<ContextProcessingResult> {
        let ty = self
            .catalog
            .find(model.full_name())?
            .ok_or_else(|| ApplicationError::MetadataServiceFailed {
                model: model.full_name().to_string(),
                reason: "type is not in the project catalog".into(),
            })?;

        Ok(ContextProcessingResult::with_metadata(
            ContextProcessingStatus::ModelOnly,
            classify(MetadataSource::Fallback(&ty)),
        ))
    }
}
