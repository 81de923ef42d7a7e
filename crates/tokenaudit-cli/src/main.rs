//! Tokenaudit CLI - design token readiness auditing
//!
//! This is the main entry point for the tokenaudit binary, which audits a
//! primitive + semantic pair of design token documents and reports their
//! readiness for downstream build tooling.

mod cli;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands};
use colored::control;
use error::Result;
use output::OutputWriter;
use std::process;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Set up colored output
    control::set_override(cli.use_color());

    // Initialize logging
    if let Err(e) = logging::init(cli.verbosity_level(), cli.quiet, cli.use_color()) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    // Run the application
    match run(cli) {
        Ok(()) => {
            process::exit(0);
        }
        Err(e) => {
            // the not-ready verdict was already rendered inside the report
            if !e.report_was_rendered() {
                eprintln!(
                    "{}",
                    error::format_error(&e, control::SHOULD_COLORIZE.should_colorize())
                );
            }
            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
fn run(cli: Cli) -> Result<()> {
    let mut output = OutputWriter::new(cli.output, cli.use_color(), cli.quiet);

    tracing::info!(
        command = ?cli.command,
        verbosity = cli.verbosity_level(),
        "Executing command"
    );

    match cli.command {
        Commands::Audit(args) => handlers::handle_audit(args, &mut output),
    }
}
