//! ctxconf CLI
//!
//! Resolves context-aware configuration for content items in a tree
//! document.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::Source;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let Some(command) = cli.command else {
        // No command provided - show help hint
        println!("{} context-aware configuration resolver", "ctxconf".green().bold());
        println!();
        println!("Run {} for available commands.", "ctxconf --help".cyan());
        return Ok(());
    };

    let tree = cli
        .tree
        .as_deref()
        .ok_or_else(|| CliError::user("No tree document given. Pass --tree <FILE> or set CTXCONF_TREE"))?;
    let source = Source {
        tree,
        settings: cli.settings.as_deref(),
        ref_property: &cli.ref_property,
    };

    execute_command(source, command)
}

fn execute_command(source: Source<'_>, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Resolve { lookup, json } => commands::run_resolve(source, &lookup, json),
        Commands::Collection {
            lookup,
            exclude,
            block,
            json,
        } => commands::run_collection(source, &lookup, &exclude, &block, json),
        Commands::Path { lookup } => commands::run_path(source, &lookup),
        Commands::CollectionPath { lookup } => commands::run_collection_path(source, &lookup),
        Commands::Roots { content, bucket, json } => commands::run_roots(source, &content, &bucket, json),
    }
}

/// Debug output on stderr with `--verbose`, otherwise `RUST_LOG` (default
/// `warn`) in compact form.
fn init_logging(verbose: bool) -> Result<()> {
    if verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber).map_err(|e| CliError::Logging {
            message: e.to_string(),
        })?;
        tracing::debug!("Verbose mode enabled");
        return Ok(());
    }

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .map_err(|e| CliError::Logging {
            message: e.to_string(),
        })?;
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| CliError::Logging {
            message: e.to_string(),
        })
}
