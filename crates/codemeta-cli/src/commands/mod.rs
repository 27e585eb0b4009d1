//! Command handlers.
//!
//! Each handler translates parsed arguments into core requests and renders
//! the result. Helpers shared by `validate` and `reflect` live here.

pub mod completions;
pub mod config;
pub mod providers;
pub mod reflect;
pub mod validate;

use std::path::{Path, PathBuf};

use tracing::debug;

use codemeta_adapters::ProjectManifest;
use codemeta_core::{
    application::{ValidationOutcome, ValidationService},
    domain::{ModelMetadata, ProviderValidator},
};

use crate::{
    cli::{OutputFormat, ProjectArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// File names looked up in the working directory when no manifest is given.
const MANIFEST_CANDIDATES: &[&str] = &["codemeta.json", "codemeta.toml"];

/// Pick the manifest: flag, then config, then the working directory.
pub fn resolve_manifest(args: &ProjectArgs, config: &AppConfig, cwd: &Path) -> CliResult<PathBuf> {
    if let Some(path) = args.manifest.as_ref().or(config.project.manifest.as_ref()) {
        return Ok(path.clone());
    }

    let searched: Vec<PathBuf> = MANIFEST_CANDIDATES.iter().map(|n| cwd.join(n)).collect();
    match searched.iter().find(|p| p.is_file()) {
        Some(found) => Ok(found.clone()),
        None => Err(CliError::ManifestMissing { searched }),
    }
}

/// Load the manifest and wire a validation service with the configured
/// default provider.
pub fn build_service(manifest: &Path, config: &AppConfig) -> CliResult<ValidationService> {
    let adapters = ProjectManifest::load(manifest)?.into_adapters();
    let types = adapters.catalog.len()?;
    debug!(types, "Project catalog ready");

    Ok(adapters
        .into_service()
        .with_provider_validator(provider_validator(config)?))
}

/// Provider validator honouring `defaults.provider`.
pub fn provider_validator(config: &AppConfig) -> CliResult<ProviderValidator> {
    match config.defaults.provider.as_deref() {
        Some(name) => {
            ProviderValidator::from_default_name(name).map_err(|e| CliError::ConfigError {
                message: format!("defaults.provider: {e}"),
                source: Some(Box::new(e)),
            })
        }
        None => Ok(ProviderValidator::default()),
    }
}

/// Single-threaded runtime for the async metadata services.
pub fn runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::IoError {
            message: "Failed to create async runtime".into(),
            source: e,
        })
}

/// Render a validation outcome in the selected format.
pub fn render_outcome(outcome: &ValidationOutcome, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        return output.json(outcome);
    }

    let status = outcome.processing_result.status;
    output.header(&format!("Model {}", outcome.model_type))?;

    const WIDTH: usize = 10;
    let context = if outcome.has_context() {
        outcome.context_full_name.as_str()
    } else {
        "(none)"
    };
    output.field("Context", context, WIDTH)?;
    output.field("Provider", outcome.provider.as_str(), WIDTH)?;
    output.field("Status", status.as_str(), WIDTH)?;

    match outcome.metadata() {
        Some(metadata) => {
            render_metadata(metadata, output, WIDTH)?;
            output.print("")?;
            output.success("Model validated")?;
        }
        None if status.is_success() || !outcome.has_context() => {
            output.print("")?;
            output.success("Model validated")?;
        }
        None => {
            output.print("")?;
            output.warning(&format!("No metadata available ({status})"))?;
        }
    }

    Ok(())
}

fn render_metadata(metadata: &ModelMetadata, output: &OutputManager, width: usize) -> CliResult<()> {
    if let Some(set) = metadata.entity_set_name() {
        output.field("Entity set", set, width)?;
    }

    let keys: Vec<&str> = metadata.primary_keys().map(|p| p.property_name()).collect();
    if !keys.is_empty() {
        output.field("Key", &keys.join(", "), width)?;
    }

    output.print("")?;
    let rows: Vec<Vec<String>> = metadata
        .properties()
        .iter()
        .map(|p| {
            vec![
                p.property_name().to_string(),
                p.short_type_name().to_string(),
                flags(&[
                    (p.is_primary_key(), "key"),
                    (p.is_foreign_key(), "fk"),
                    (p.is_enum_flags(), "flags"),
                    (p.is_enum() && !p.is_enum_flags(), "enum"),
                    (p.is_auto_generated(), "generated"),
                    (p.is_read_only(), "read-only"),
                ]),
                if p.scaffold() { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect();
    output.table(&["PROPERTY", "TYPE", "TRAITS", "SCAFFOLD"], &rows)?;

    if !metadata.navigations().is_empty() {
        output.print("")?;
        let rows: Vec<Vec<String>> = metadata
            .navigations()
            .iter()
            .map(|n| {
                vec![
                    n.association_name.clone(),
                    n.short_type_name.clone(),
                    n.foreign_key_property_names.join(", "),
                ]
            })
            .collect();
        output.table(&["NAVIGATION", "TARGET", "FOREIGN KEY"], &rows)?;
    }

    Ok(())
}

fn flags(set: &[(bool, &str)]) -> String {
    let names: Vec<&str> = set.iter().filter(|(on, _)| *on).map(|(_, n)| *n).collect();
    if names.is_empty() {
        "-".into()
    } else {
        names.join(",")
    }
}
