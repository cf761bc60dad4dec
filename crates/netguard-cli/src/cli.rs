//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API.

use clap::{Parser, Subcommand, ValueEnum};
use netguard_validation::Operation;
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Netguard admission CLI - validate netguard.sgroups.io manifests offline
///
/// Runs the same create, update and delete checks the admission webhook
/// applies, so manifests can be rejected before they reach the cluster.
#[derive(Parser, Debug)]
#[command(
    name = "netguard-admit",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "NETGUARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results [default: human]
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate resource manifests as an admission request would
    Validate(ValidateArgs),

    /// Inspect the effective configuration
    Config(ConfigArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Manifest file (YAML, possibly multi-document, or JSON); `-` reads stdin
    #[arg(value_name = "FILE")]
    pub manifests: PathBuf,

    /// Operation to validate the manifests for
    #[arg(long, value_enum, default_value = "create")]
    pub operation: OperationArg,

    /// Currently persisted versions of the objects, required for updates
    #[arg(long, value_name = "FILE", required_if_eq("operation", "update"))]
    pub old: Option<PathBuf>,

    /// Override the schema identifier references must carry
    #[arg(long)]
    pub api_version: Option<String>,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show(ConfigShowArgs),

    /// List the locations searched for a configuration file
    Paths,
}

/// Arguments for config show
#[derive(Parser, Debug)]
pub struct ConfigShowArgs {
    /// Show configuration in specified format
    #[arg(short, long, value_enum, default_value = "yaml")]
    pub format: ConfigFormat,
}

/// Configuration file formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// Pretty-printed JSON output
    JsonPretty,
    /// YAML output
    Yaml,
}

/// Admission operation selector
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OperationArg {
    Create,
    Update,
    Delete,
}

impl From<OperationArg> for Operation {
    fn from(arg: OperationArg) -> Self {
        match arg {
            OperationArg::Create => Operation::Create,
            OperationArg::Update => Operation::Update,
            OperationArg::Delete => Operation::Delete,
        }
    }
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_validate_defaults_to_create() {
        let cli = Cli::parse_from(["netguard-admit", "validate", "ag.yaml"]);
        match cli.command {
            Commands::Validate(args) => {
                assert_eq!(args.operation, OperationArg::Create);
                assert!(args.old.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.output, None);
    }

    #[test]
    fn test_update_requires_old() {
        let result = Cli::try_parse_from(["netguard-admit", "validate", "ag.yaml", "--operation", "update"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from([
            "netguard-admit",
            "validate",
            "ag.yaml",
            "--operation",
            "update",
            "--old",
            "ag-old.yaml",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Validate(ValidateArgs { old: Some(_), .. })));
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["netguard-admit", "-vv", "validate", "ag.yaml", "-o", "json-pretty"]);
        assert_eq!(cli.verbosity_level(), 2);
        assert_eq!(cli.output, Some(OutputFormat::JsonPretty));

        let cli = Cli::parse_from(["netguard-admit", "--quiet", "config", "show"]);
        assert_eq!(cli.verbosity_level(), 0);
    }

    #[test]
    fn test_operation_conversion() {
        assert_eq!(Operation::from(OperationArg::Delete), Operation::Delete);
    }
}
