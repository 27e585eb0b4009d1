//! Validation Service - the orchestrator every generator goes through.
//!
//! This service coordinates one validation request:
//! 1. Resolve the model type (required)
//! 2. Resolve the context type (optional) and pick a provider
//! 3. Ask the metadata service for the model's metadata
//!
//! Steps 1 and 2 are synchronous and fail fast; step 3 is the only await.

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ModelSelection, ValidationOutcome,
        ports::{CodeModelService, MetadataService, ModelTypesLocator},
    },
    domain::{
        ContextProcessingResult, DomainError, ProjectType, ProviderKind, ProviderValidator,
        ResolvedType, TypeRole, resolve_type,
    },
    error::CodemetaResult,
};

/// Context name, provider and processing result for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextResolution {
    pub context_full_name: String,
    pub provider: ProviderKind,
    pub processing_result: ContextProcessingResult,
}

impl ContextResolution {
    fn not_requested() -> Self {
        Self {
            context_full_name: String::new(),
            provider: ProviderKind::None,
            processing_result: ContextProcessingResult::missing_context(),
        }
    }
}

/// What to ask the metadata service for, decided before any await.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ContextPlan {
    NotRequested,
    Existing(ResolvedType),
    Generate { name: String, provider: ProviderKind },
}

/// Model/context validation orchestrator.
pub struct ValidationService {
    locator: Box<dyn ModelTypesLocator>,
    metadata: Box<dyn MetadataService>,
    code_model: Box<dyn CodeModelService>,
    providers: ProviderValidator,
}

impl ValidationService {
    /// Create a new validation service with the given adapters and the
    /// built-in default provider.
    pub fn new(
        locator: Box<dyn ModelTypesLocator>,
        metadata: Box<dyn MetadataService>,
        code_model: Box<dyn CodeModelService>,
    ) -> Self {
        Self {
            locator,
            metadata,
            code_model,
            providers: ProviderValidator::default(),
        }
    }

    /// Replace the provider validator (e.g. with a configured default).
    pub fn with_provider_validator(mut self, providers: ProviderValidator) -> Self {
        self.providers = providers;
        self
    }

    pub fn provider_validator(&self) -> &ProviderValidator {
        &self.providers
    }

    /// Validate `selection` against the project's current types and fetch
    /// the model's metadata.
    ///
    /// This is the entry point for every generator variant.
    #[instrument(skip_all, fields(model = %selection.model_class(), area = %area_name))]
    pub async fn validate_and_resolve<S>(
        &self,
        selection: &S,
        area_name: &str,
    ) -> CodemetaResult<ValidationOutcome>
    where
        S: ModelSelection + Sync + ?Sized,
    {
        let candidates = self.locator.all_types()?;
        debug!(candidates = candidates.len(), "Loaded candidate types");

        self.validate_and_resolve_with(selection, area_name, &candidates)
            .await
    }

    /// Same as [`Self::validate_and_resolve`] against a caller-supplied
    /// candidate snapshot.
    pub async fn validate_and_resolve_with<S>(
        &self,
        selection: &S,
        area_name: &str,
        candidates: &[ProjectType],
    ) -> CodemetaResult<ValidationOutcome>
    where
        S: ModelSelection + Sync + ?Sized,
    {
        let model = resolve_model(selection.model_class(), candidates)?;

        let context = self
            .resolve_context(
                &model,
                selection.data_context_class(),
                selection.database_provider(),
                area_name,
                candidates,
            )
            .await?;

        info!(
            model = %model,
            context = %context.context_full_name,
            provider = %context.provider,
            status = %context.processing_result.status,
            "Model validated"
        );

        Ok(ValidationOutcome {
            model_type: model,
            context_full_name: context.context_full_name,
            processing_result: context.processing_result,
            provider: context.provider,
        })
    }

    /// Decide what to do about the context and, if one is involved, fetch
    /// the model's metadata through it.
    ///
    /// Provider validation happens before the metadata service is called, so
    /// an unsupported provider never reaches it.
    pub async fn resolve_context(
        &self,
        model: &ResolvedType,
        context_name: Option<&str>,
        provider: Option<&str>,
        area_name: &str,
        candidates: &[ProjectType],
    ) -> CodemetaResult<ContextResolution> {
        let (context_full_name, provider) =
            match self.plan_context(context_name, provider, candidates)? {
                ContextPlan::NotRequested => {
                    debug!("No data context requested");
                    return Ok(ContextResolution::not_requested());
                }
                ContextPlan::Existing(context) => {
                    (context.full_name().to_string(), ProviderKind::Existing)
                }
                ContextPlan::Generate { name, provider } => (name, provider),
            };

        let processing_result = self
            .metadata
            .get_model_metadata(&context_full_name, model, area_name, provider)
            .await?;

        if !processing_result.is_success() {
            warn!(
                context = %context_full_name,
                status = %processing_result.status,
                "Metadata unavailable for model"
            );
        }

        Ok(ContextResolution {
            context_full_name,
            provider,
            processing_result,
        })
    }

    /// Validate the model and fetch metadata from bare type inspection.
    ///
    /// Used by generators that never touch a persistence context.
    #[instrument(skip_all, fields(model = %selection.model_class()))]
    pub async fn validate_model_and_get_code_model_metadata<S>(
        &self,
        selection: &S,
    ) -> CodemetaResult<ValidationOutcome>
    where
        S: ModelSelection + Sync + ?Sized,
    {
        let candidates = self.locator.all_types()?;
        let model = resolve_model(selection.model_class(), &candidates)?;

        let processing_result = self.code_model.get_model_metadata(&model).await?;

        Ok(ValidationOutcome {
            model_type: model,
            context_full_name: String::new(),
            processing_result,
            provider: ProviderKind::None,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn plan_context(
        &self,
        context_name: Option<&str>,
        provider: Option<&str>,
        candidates: &[ProjectType],
    ) -> Result<ContextPlan, DomainError> {
        let Some(raw) = context_name.filter(|n| !n.trim().is_empty()) else {
            return Ok(ContextPlan::NotRequested);
        };
        let name = raw.trim();

        match resolve_type(name, candidates, TypeRole::DataContext, false)? {
            Some(existing) => {
                debug!(context = %existing, "Reusing existing data context");
                Ok(ContextPlan::Existing(existing))
            }
            None => {
                let provider = self.providers.validate(provider)?;
                debug!(context = name, %provider, "Data context will be generated");
                Ok(ContextPlan::Generate {
                    name: raw.to_string(),
                    provider,
                })
            }
        }
    }
}

fn resolve_model(name: &str, candidates: &[ProjectType]) -> Result<ResolvedType, DomainError> {
    resolve_type(name, candidates, TypeRole::Model, true)?.ok_or_else(|| {
        DomainError::TypeNotFound {
            role: TypeRole::Model,
            name: name.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::{
            ApplicationError, BlazorCrudCommandLineModel, CommonCommandLineModel,
            MinimalApiCommandLineModel,
            ports::{MockCodeModelService, MockMetadataService, MockModelTypesLocator},
        },
        domain::{
            ContextProcessingStatus, MemberInfo, MetadataSource, ModelMetadata, TypeRef, classify,
        },
        error::CodemetaError,
    };

    fn product() -> ProjectType {
        ProjectType::new("Shop.Models", "Product")
            .with_member(MemberInfo::new("Id", TypeRef::scalar("System.Int32")))
            .with_member(MemberInfo::new("Name", TypeRef::scalar("System.String")))
    }

    fn candidates() -> Vec<ProjectType> {
        vec![
            product(),
            ProjectType::new("Shop.Models", "Order"),
            ProjectType::new("Legacy.Models", "Order"),
            ProjectType::new("Shop.Data", "ShopContext"),
        ]
    }

    fn product_metadata() -> ModelMetadata {
        classify(MetadataSource::Fallback(&product()))
    }

    fn locator() -> Box<MockModelTypesLocator> {
        let mut locator = MockModelTypesLocator::new();
        locator
            .expect_all_types()
            .returning(|| Ok(candidates()));
        Box::new(locator)
    }

    fn unused_code_model() -> Box<MockCodeModelService> {
        let mut code_model = MockCodeModelService::new();
        code_model.expect_get_model_metadata().never();
        Box::new(code_model)
    }

    fn service(metadata: MockMetadataService) -> ValidationService {
        ValidationService::new(locator(), Box::new(metadata), unused_code_model())
    }

    fn found(status: ContextProcessingStatus) -> CodemetaResult<ContextProcessingResult> {
        Ok(ContextProcessingResult::with_metadata(
            status,
            product_metadata(),
        ))
    }

    #[tokio::test]
    async fn no_context_yields_missing_context() {
        let mut metadata = MockMetadataService::new();
        metadata.expect_get_model_metadata().never();

        let outcome = service(metadata)
            .validate_and_resolve(&CommonCommandLineModel::new("Product"), "")
            .await
            .unwrap();

        assert_eq!(outcome.model_type.full_name(), "Shop.Models.Product");
        assert_eq!(outcome.context_full_name, "");
        assert_eq!(outcome.provider, ProviderKind::None);
        assert_eq!(
            outcome.processing_result.status,
            ContextProcessingStatus::MissingContext
        );
        assert!(outcome.metadata().is_none());
        assert!(!outcome.has_context());
    }

    #[tokio::test]
    async fn blank_context_name_counts_as_not_requested() {
        let mut metadata = MockMetadataService::new();
        metadata.expect_get_model_metadata().never();

        let command = CommonCommandLineModel::new("Product").with_data_context("  ");
        let outcome = service(metadata)
            .validate_and_resolve(&command, "")
            .await
            .unwrap();

        assert_eq!(outcome.provider, ProviderKind::None);
    }

    #[tokio::test]
    async fn existing_context_forces_existing_provider_without_validation() {
        let mut metadata = MockMetadataService::new();
        metadata
            .expect_get_model_metadata()
            .withf(|context, model, area, provider| {
                context.to_string() == "Shop.Data.ShopContext"
                    && model.full_name() == "Shop.Models.Product"
                    && area.to_string() == "Admin"
                    && *provider == ProviderKind::Existing
            })
            .times(1)
            .returning(|_, _, _, _| found(ContextProcessingStatus::ContextAndModelFound));

        // "oracle" would be rejected if it were validated
        let command = CommonCommandLineModel::new("product")
            .with_data_context("shopcontext")
            .with_database_provider("oracle");

        let outcome = service(metadata)
            .validate_and_resolve(&command, "Admin")
            .await
            .unwrap();

        assert_eq!(outcome.provider, ProviderKind::Existing);
        assert_eq!(outcome.context_full_name, "Shop.Data.ShopContext");
        assert!(outcome.metadata().is_some());
    }

    #[tokio::test]
    async fn unknown_context_uses_raw_name_and_default_provider() {
        let mut metadata = MockMetadataService::new();
        metadata
            .expect_get_model_metadata()
            .withf(|context, _, _, provider| {
                context.to_string() == "Shop.Data.NewContext" && *provider == ProviderKind::SqlServer
            })
            .times(1)
            .returning(|_, _, _, _| found(ContextProcessingStatus::ContextAdded));

        let command = CommonCommandLineModel::new("Product").with_data_context("Shop.Data.NewContext");
        let outcome = service(metadata)
            .validate_and_resolve(&command, "")
            .await
            .unwrap();

        assert_eq!(outcome.context_full_name, "Shop.Data.NewContext");
        assert_eq!(outcome.provider, ProviderKind::SqlServer);
        assert_eq!(
            outcome.processing_result.status,
            ContextProcessingStatus::ContextAdded
        );
    }

    #[tokio::test]
    async fn unknown_context_name_is_passed_through_untrimmed() {
        let mut metadata = MockMetadataService::new();
        metadata
            .expect_get_model_metadata()
            .withf(|context, _, _, _| context.to_string() == " NewContext ")
            .times(1)
            .returning(|_, _, _, _| found(ContextProcessingStatus::ContextAdded));

        let command = CommonCommandLineModel::new("Product").with_data_context(" NewContext ");
        let outcome = service(metadata)
            .validate_and_resolve(&command, "")
            .await
            .unwrap();

        assert_eq!(outcome.context_full_name, " NewContext ");
    }

    #[tokio::test]
    async fn unknown_context_validates_requested_provider() {
        let mut metadata = MockMetadataService::new();
        metadata
            .expect_get_model_metadata()
            .withf(|_, _, _, provider| *provider == ProviderKind::Sqlite)
            .times(1)
            .returning(|_, _, _, _| found(ContextProcessingStatus::ContextAdded));

        let command = CommonCommandLineModel::new("Product")
            .with_data_context("NewContext")
            .with_database_provider("SQLITE");

        let outcome = service(metadata)
            .validate_and_resolve(&command, "")
            .await
            .unwrap();

        assert_eq!(outcome.provider, ProviderKind::Sqlite);
    }

    #[tokio::test]
    async fn unsupported_provider_fails_before_metadata_call() {
        let mut metadata = MockMetadataService::new();
        metadata.expect_get_model_metadata().never();

        let command = CommonCommandLineModel::new("Product")
            .with_data_context("NewContext")
            .with_database_provider("oracle");

        let err = service(metadata)
            .validate_and_resolve(&command, "")
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid database provider 'oracle'.\n\
             Supported database providers include : 'SqlServer', 'SQLite', 'CosmosDb' and 'Postgres'"
        );
    }

    #[tokio::test]
    async fn configured_default_provider_is_used() {
        let mut metadata = MockMetadataService::new();
        metadata
            .expect_get_model_metadata()
            .withf(|_, _, _, provider| *provider == ProviderKind::Postgres)
            .times(1)
            .returning(|_, _, _, _| found(ContextProcessingStatus::ContextAdded));

        let service = service(metadata)
            .with_provider_validator(ProviderValidator::new(ProviderKind::Postgres).unwrap());

        let command = CommonCommandLineModel::new("Product").with_data_context("NewContext");
        let outcome = service.validate_and_resolve(&command, "").await.unwrap();

        assert_eq!(outcome.provider, ProviderKind::Postgres);
    }

    #[tokio::test]
    async fn ambiguous_context_is_treated_as_new() {
        let mut metadata = MockMetadataService::new();
        metadata
            .expect_get_model_metadata()
            .withf(|context, _, _, provider| {
                context.to_string() == "Order" && *provider == ProviderKind::SqlServer
            })
            .times(1)
            .returning(|_, _, _, _| found(ContextProcessingStatus::ContextAdded));

        let command = CommonCommandLineModel::new("Product").with_data_context("Order");
        let outcome = service(metadata)
            .validate_and_resolve(&command, "")
            .await
            .unwrap();

        assert_eq!(outcome.context_full_name, "Order");
    }

    #[tokio::test]
    async fn missing_model_is_fatal() {
        let mut metadata = MockMetadataService::new();
        metadata.expect_get_model_metadata().never();

        let command = CommonCommandLineModel::new("Widget").with_data_context("ShopContext");
        let err = service(metadata)
            .validate_and_resolve(&command, "")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CodemetaError::Domain(DomainError::TypeNotFound {
                role: TypeRole::Model,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn ambiguous_model_is_fatal() {
        let mut metadata = MockMetadataService::new();
        metadata.expect_get_model_metadata().never();

        let err = service(metadata)
            .validate_and_resolve(&CommonCommandLineModel::new("Order"), "")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CodemetaError::Domain(DomainError::TypeAmbiguous { .. })
        ));
    }

    #[tokio::test]
    async fn non_success_status_is_returned_as_data() {
        let mut metadata = MockMetadataService::new();
        metadata
            .expect_get_model_metadata()
            .returning(|_, _, _, _| {
                Ok(ContextProcessingResult::status_only(
                    ContextProcessingStatus::ContextNotFound,
                ))
            });

        let command = CommonCommandLineModel::new("Product").with_data_context("ShopContext");
        let outcome = service(metadata)
            .validate_and_resolve(&command, "")
            .await
            .unwrap();

        assert_eq!(
            outcome.processing_result.status,
            ContextProcessingStatus::ContextNotFound
        );
        assert!(outcome.metadata().is_none());
    }

    #[tokio::test]
    async fn metadata_service_failure_propagates() {
        let mut metadata = MockMetadataService::new();
        metadata
            .expect_get_model_metadata()
            .returning(|_, model, _, _| {
                Err(ApplicationError::MetadataServiceFailed {
                    model: model.full_name().to_string(),
                    reason: "context does not compile".into(),
                }
                .into())
            });

        let command = CommonCommandLineModel::new("Product").with_data_context("ShopContext");
        let err = service(metadata)
            .validate_and_resolve(&command, "")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CodemetaError::Application(ApplicationError::MetadataServiceFailed { .. })
        ));
    }

    #[tokio::test]
    async fn every_generator_variant_shares_one_path() {
        let mut metadata = MockMetadataService::new();
        metadata
            .expect_get_model_metadata()
            .times(3)
            .returning(|_, _, _, _| found(ContextProcessingStatus::ContextAndModelFound));
        let service = service(metadata);

        let common = CommonCommandLineModel::new("Product").with_data_context("ShopContext");
        let blazor = BlazorCrudCommandLineModel {
            data_context_class: Some("ShopContext".into()),
            page_type: Some("CRUD".into()),
            ..BlazorCrudCommandLineModel::new("Product")
        };
        let minimal = MinimalApiCommandLineModel {
            data_context_class: Some("ShopContext".into()),
            ..MinimalApiCommandLineModel::new("Product")
        };

        let a = service.validate_and_resolve(&common, "").await.unwrap();
        let b = service.validate_and_resolve(&blazor, "").await.unwrap();
        let c = service.validate_and_resolve(&minimal, "").await.unwrap();

        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[tokio::test]
    async fn caller_supplied_candidates_bypass_the_locator() {
        let mut locator = MockModelTypesLocator::new();
        locator.expect_all_types().never();
        let mut metadata = MockMetadataService::new();
        metadata.expect_get_model_metadata().never();

        let service =
            ValidationService::new(Box::new(locator), Box::new(metadata), unused_code_model());
        let pool = vec![product()];

        let outcome = service
            .validate_and_resolve_with(&CommonCommandLineModel::new("Product"), "", &pool)
            .await
            .unwrap();

        assert_eq!(outcome.model_type.short_name(), "Product");
    }

    #[tokio::test]
    async fn code_model_path_skips_context_handling() {
        let mut metadata = MockMetadataService::new();
        metadata.expect_get_model_metadata().never();

        let mut code_model = MockCodeModelService::new();
        code_model
            .expect_get_model_metadata()
            .withf(|model| model.full_name() == "Shop.Models.Product")
            .times(1)
            .returning(|_| {
                Ok(ContextProcessingResult::with_metadata(
                    ContextProcessingStatus::ModelOnly,
                    product_metadata(),
                ))
            });

        let service = ValidationService::new(locator(), Box::new(metadata), Box::new(code_model));
        let command = CommonCommandLineModel::new("Product").with_data_context("ShopContext");

        let outcome = service
            .validate_model_and_get_code_model_metadata(&command)
            .await
            .unwrap();

        assert_eq!(outcome.provider, ProviderKind::None);
        assert_eq!(outcome.context_full_name, "");
        let metadata = outcome.metadata().unwrap();
        assert!(!metadata.property("Id").unwrap().is_primary_key());
    }

    #[tokio::test]
    async fn locator_failure_propagates() {
        let mut locator = MockModelTypesLocator::new();
        locator.expect_all_types().returning(|| {
            Err(ApplicationError::CatalogUnavailable {
                reason: "lock poisoned".into(),
            }
            .into())
        });
        let mut metadata = MockMetadataService::new();
        metadata.expect_get_model_metadata().never();

        let service =
            ValidationService::new(Box::new(locator), Box::new(metadata), unused_code_model());
        let err = service
            .validate_and_resolve(&CommonCommandLineModel::new("Product"), "")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CodemetaError::Application(ApplicationError::CatalogUnavailable { .. })
        ));
    }
}
