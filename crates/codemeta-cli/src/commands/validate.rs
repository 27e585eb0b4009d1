//! Implementation of the `codemeta validate` command.
//!
//! Responsibility: build the generator's command model, run it through the
//! validation service, and display the outcome. No business logic lives here.

use tracing::{info, instrument};

use codemeta_core::application::{
    BlazorCrudCommandLineModel, CommonCommandLineModel, MinimalApiCommandLineModel, ModelSelection,
};

use crate::{
    cli::{Generator, ValidateArgs},
    commands::{build_service, render_outcome, resolve_manifest, runtime},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `codemeta validate` command.
#[instrument(skip_all, fields(model = %args.model, generator = %args.generator))]
pub fn execute(args: ValidateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let cwd = std::env::current_dir()?;
    let manifest = resolve_manifest(&args.project, &config, &cwd)?;
    let service = build_service(&manifest, &config)?;

    let area = args
        .area
        .clone()
        .or_else(|| config.defaults.area.clone())
        .unwrap_or_default();
    let command = command_model(&args);

    let outcome = runtime()?.block_on(service.validate_and_resolve(command.as_ref(), &area))?;

    info!(
        model = %outcome.model_type,
        status = %outcome.processing_result.status,
        "Validation finished"
    );

    render_outcome(&outcome, &output)
}

/// The command model the selected generator would hand to validation.
pub fn command_model(args: &ValidateArgs) -> Box<dyn ModelSelection + Send + Sync> {
    match args.generator {
        Generator::Controller | Generator::RazorPage | Generator::View => {
            Box::new(CommonCommandLineModel {
                data_context_class: args.context.clone(),
                database_provider: args.provider.clone(),
                ..CommonCommandLineModel::new(&args.model)
            })
        }
        Generator::Blazor => Box::new(BlazorCrudCommandLineModel {
            data_context_class: args.context.clone(),
            database_provider: args.provider.clone(),
            page_type: Some("CRUD".into()),
            ..BlazorCrudCommandLineModel::new(&args.model)
        }),
        Generator::MinimalApi => Box::new(MinimalApiCommandLineModel {
            data_context_class: args.context.clone(),
            database_provider: args.provider.clone(),
            ..MinimalApiCommandLineModel::new(&args.model)
        }),
    }
}
