//! `codemeta` checks what a code generator was asked to scaffold.
//!
//! Given a model name, and optionally a data context and database provider,
//! it resolves both against the project manifest and prints the property
//! metadata the generator's templates would receive:
//!
//! ```text
//! codemeta validate Product --context ShopContext
//! codemeta validate Product --context NewContext --provider sqlite
//! codemeta reflect Shop.Models.Product --output-format json
//! ```
//!
//! Failures are printed to stderr with suggestions. The process exit code
//! follows [`CliError::exit_code`]: 2 for bad input, 3 when a type is
//! missing, 4 for configuration problems and 1 for anything else.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

/// Exit code for a configuration file or environment that cannot be loaded.
const CONFIG_LOAD_FAILED: u8 = 4;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version land here too
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{}", e.render().ansi());
            return ExitCode::from(2);
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::FAILURE;
    }

    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e:#}");
            eprintln!("Configuration error: {e:#}");
            return ExitCode::from(CONFIG_LOAD_FAILED);
        }
    };
    debug!(
        format = ?cli.global.output_format,
        manifest = ?config.project.manifest,
        default_provider = ?config.defaults.provider,
        "Configuration loaded"
    );

    let output = OutputManager::new(&cli.global, &config);
    let verbose = cli.global.verbose > 0;

    match dispatch(cli.command, config, output) {
        Ok(()) => {
            info!("Done");
            ExitCode::SUCCESS
        }
        Err(err) => report(&err, verbose),
    }
}

#[instrument(skip_all)]
fn dispatch(command: Commands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match command {
        Commands::Validate(args) => commands::validate::execute(args, config, output),
        Commands::Reflect(args) => commands::reflect::execute(args, config, output),
        Commands::Providers => commands::providers::execute(config, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
    }
}

/// Log `err`, print it to stderr and pick the exit code.
fn report(err: &CliError, verbose: bool) -> ExitCode {
    err.log();

    let message = if std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{message}");

    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn version_comes_from_the_package() {
        assert_eq!(Cli::command().get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn validate_parses_generator_options() {
        let cli = Cli::try_parse_from([
            "codemeta",
            "validate",
            "Product",
            "-d",
            "ShopContext",
            "-p",
            "sqlite",
            "--generator",
            "blazor",
        ])
        .unwrap();

        match cli.command {
            Commands::Validate(args) => {
                assert_eq!(args.model, "Product");
                assert_eq!(args.context.as_deref(), Some("ShopContext"));
                assert_eq!(args.provider.as_deref(), Some("sqlite"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
