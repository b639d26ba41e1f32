//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::generate::ArtifactKind;
use crate::lint::OutputFormat;

/// envdoctor - Validate .env files and generate deployment artifacts.
#[derive(Debug, Parser)]
#[command(name = "envdoctor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides .envdoctor.yml discovery)
    #[arg(short, long, global = true, env = "ENVDOCTOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a .env file (default if no command specified)
    Check(CheckArgs),

    /// Generate .env.example, DEPLOYMENT.md, docker-compose.yml and vercel.json
    Generate(GenerateArgs),

    /// Print the parsed structure of a .env file as JSON
    Parse(ParseArgs),

    /// List or print the built-in sample .env files
    Sample(SampleArgs),

    /// Show resolved configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// File to check (`-` reads stdin) [default: .env]
    pub file: Option<PathBuf>,

    /// Output format (defaults to settings.default_format)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `generate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GenerateArgs {
    /// File to generate from (`-` reads stdin) [default: .env]
    pub file: Option<PathBuf>,

    /// Generate only these artifacts (comma-separated)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub only: Vec<ArtifactKind>,

    /// Write artifacts into this directory instead of printing them
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

/// Arguments for the `parse` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ParseArgs {
    /// File to parse (`-` reads stdin) [default: .env]
    pub file: Option<PathBuf>,
}

/// Arguments for the `sample` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SampleArgs {
    /// Sample to print; lists all samples when omitted
    pub name: Option<String>,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Print the JSON Schema for .envdoctor.yml instead
    #[arg(long)]
    pub schema: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
