//! `codemeta providers`: supported database providers.

use serde::Serialize;

use codemeta_core::domain::ProviderKind;

use crate::{
    cli::OutputFormat,
    commands::provider_validator,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct ProviderListing {
    supported: Vec<&'static str>,
    default: ProviderKind,
}

pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    let listing = listing(&config)?;

    if output.format() == OutputFormat::Json {
        return output.json(&listing);
    }

    output.header("Supported database providers:")?;
    for name in &listing.supported {
        let marker = if *name == listing.default.as_str() {
            "  (default)"
        } else {
            ""
        };
        output.print(&format!("  {name}{marker}"))?;
    }
    Ok(())
}

fn listing(config: &AppConfig) -> CliResult<ProviderListing> {
    let validator = provider_validator(config)?;

    Ok(ProviderListing {
        supported: ProviderKind::supported_names(),
        default: validator.default_provider(),
    })
}
