//! Implementation of the `codemeta reflect` command.

use tracing::instrument;

use codemeta_core::application::CommonCommandLineModel;

use crate::{
    cli::ReflectArgs,
    commands::{build_service, render_outcome, resolve_manifest, runtime},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Validate the model and classify it from its members alone.
#[instrument(skip_all, fields(model = %args.model))]
pub fn execute(args: ReflectArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let cwd = std::env::current_dir()?;
    let manifest = resolve_manifest(&args.project, &config, &cwd)?;
    let service = build_service(&manifest, &config)?;

    let command = CommonCommandLineModel::new(args.model);
    let outcome =
        runtime()?.block_on(service.validate_model_and_get_code_model_metadata(&command))?;

    render_outcome(&outcome, &output)
}
