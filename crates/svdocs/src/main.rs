//! svdocs CLI - navigation tooling for the Servactory documentation site.
//!
//! Provides commands for:
//! - `check`: Validate navigation for every locale against the docs directory
//! - `export`: Print the site manifest (or one locale's config) as JSON
//! - `sidebar`: Show which sidebar a page resolves to

mod commands;
mod error;
mod output;
mod settings;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ExportArgs, SidebarArgs};
use output::Output;

/// svdocs - Servactory documentation navigation tooling.
#[derive(Parser)]
#[command(name = "svdocs", version, about)]
struct Cli {
    /// Enable verbose output (info-level logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate navigation for every locale.
    Check(CheckArgs),
    /// Export the site manifest as JSON.
    Export(ExportArgs),
    /// Show the sidebar a page resolves to.
    Sidebar(SidebarArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Export(args) => args.execute(),
        Commands::Sidebar(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
