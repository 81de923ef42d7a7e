//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use std::path::PathBuf;

/// Tokenaudit CLI - design token readiness auditing
///
/// Audits a two-layer design token corpus (primitive + semantic JSON
/// documents) for value-shape violations, broken references, structural
/// problems, completeness gaps, and weak documentation.
#[derive(Parser, Debug)]
#[command(
    name = "tokenaudit",
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

    /// Output format for results
    #[arg(short, long, value_enum, global = true, default_value = "human")]
    pub output: OutputFormat,

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
    /// Audit a primitive and a semantic token document
    Audit(AuditArgs),
}

/// Arguments for the audit command
#[derive(Parser, Debug)]
pub struct AuditArgs {
    /// Path to the primitive token document (JSON)
    #[arg(value_name = "PRIMITIVES")]
    pub primitives: PathBuf,

    /// Path to the semantic token document (JSON)
    #[arg(value_name = "SEMANTICS")]
    pub semantics: PathBuf,

    /// Maximum token path depth guideline
    #[arg(long, default_value = "4")]
    pub max_depth: usize,

    /// Warn on max-depth+1 paths even when they end in an interactive state
    #[arg(long)]
    pub warn_state_depth: bool,

    /// Skip the corpus completeness and contrast-metadata expectations
    ///
    /// Useful when auditing a partial corpus that is not expected to carry
    /// full scales, anchors, or the required interactive states yet.
    #[arg(long)]
    pub minimal: bool,

    /// List passing checks in the human report, not just problems
    #[arg(long)]
    pub show_passes: bool,
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output with sections and colors
    Human,
    /// Compact JSON
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Whether colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color
            && std::env::var_os("NO_COLOR").is_none()
            && std::io::stdout().is_terminal()
    }

    /// Effective verbosity level
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}
