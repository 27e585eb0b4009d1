//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "codemeta",
    bin_name = "codemeta",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Resolve models and persistence contexts for code generators",
    long_about = "codemeta validates the model and data context a generator was asked \
                  to scaffold, picks the database provider, and reports the model's \
                  property metadata.",
    after_help = "EXAMPLES:\n\
        \x20 codemeta validate Product --context ShopContext\n\
        \x20 codemeta validate Product --context NewContext --provider sqlite\n\
        \x20 codemeta reflect Shop.Models.Product --output-format json\n\
        \x20 codemeta completions bash > /usr/share/bash-completion/completions/codemeta",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a model (and optional data context) and print its metadata.
    #[command(
        visible_alias = "check",
        about = "Validate a model and resolve its data context",
        after_help = "EXAMPLES:\n\
            \x20 codemeta validate Product\n\
            \x20 codemeta validate Product --context Shop.Data.ShopContext\n\
            \x20 codemeta validate Product --context NewContext --provider postgres --generator blazor"
    )]
    Validate(ValidateArgs),

    /// Validate a model and inspect its members without any data context.
    #[command(
        about = "Inspect a model without a data context",
        after_help = "EXAMPLES:\n\
            \x20 codemeta reflect Product\n\
            \x20 codemeta reflect Shop.Models.Product --manifest project.toml"
    )]
    Reflect(ReflectArgs),

    /// List the database providers a new context can target.
    #[command(about = "List supported database providers")]
    Providers,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 codemeta completions bash > ~/.local/share/bash-completion/completions/codemeta\n\
            \x20 codemeta completions zsh  > ~/.zfunc/_codemeta\n\
            \x20 codemeta completions fish > ~/.config/fish/completions/codemeta.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the loaded configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 codemeta config get defaults.provider\n\
            \x20 codemeta config list\n\
            \x20 codemeta config path"
    )]
    Config(ConfigCommands),
}

// ── validate / reflect ────────────────────────────────────────────────────────

/// Where the project's types and contexts come from.
#[derive(Debug, Args)]
pub struct ProjectArgs {
    /// Project manifest (JSON or TOML) describing types and contexts.
    #[arg(
        short = 'm',
        long = "manifest",
        value_name = "FILE",
        env = "CODEMETA_MANIFEST",
        help = "Project manifest (.json or .toml)"
    )]
    pub manifest: Option<PathBuf>,
}

/// Arguments for `codemeta validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Model type name, short or fully qualified.
    #[arg(value_name = "MODEL", help = "Model type name")]
    pub model: String,

    /// Data context type; generated if it does not exist.
    #[arg(
        short = 'd',
        long = "context",
        value_name = "CONTEXT",
        help = "Data context type name"
    )]
    pub context: Option<String>,

    /// Provider for a generated context. Ignored when the context exists.
    #[arg(
        short = 'p',
        long = "provider",
        value_name = "PROVIDER",
        help = "Database provider for a new context"
    )]
    pub provider: Option<String>,

    #[arg(
        short = 'a',
        long = "area",
        value_name = "AREA",
        help = "Area the generated code belongs to"
    )]
    pub area: Option<String>,

    /// Generator whose command model is validated.
    #[arg(
        short = 'g',
        long = "generator",
        value_enum,
        default_value = "controller",
        help = "Generator to validate for"
    )]
    pub generator: Generator,

    #[command(flatten)]
    pub project: ProjectArgs,
}

/// Arguments for `codemeta reflect`.
#[derive(Debug, Args)]
pub struct ReflectArgs {
    #[arg(value_name = "MODEL", help = "Model type name")]
    pub model: String,

    #[command(flatten)]
    pub project: ProjectArgs,
}

/// Generator variants; each validates through its own command model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Generator {
    Controller,
    RazorPage,
    View,
    Blazor,
    MinimalApi,
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Controller => write!(f, "controller"),
            Self::RazorPage => write!(f, "razor-page"),
            Self::View => write!(f, "view"),
            Self::Blazor => write!(f, "blazor"),
            Self::MinimalApi => write!(f, "minimal-api"),
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `codemeta completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `codemeta config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.provider`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
