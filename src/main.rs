//! Midnight toolsets operator CLI - main entry point.
//!
//! Inspect the built-in catalog and check toolset lists before deploying them:
//! - help: toolsets grouped by category, aliases first
//! - resolve: resolved toolsets and required scopes as JSON
//! - validate: fail if any identifier is unknown
//! - categories: category summaries as JSON
//! - tools: toolsets and tools of one category as JSON

use clap::{Parser, Subcommand};
use midnight_toolsets::toolsets::{
    generate_toolsets_help, list_categories, parse_toolsets, tools_in_category, validate_toolsets,
    ToolsetCategory,
};
use midnight_toolsets::{builtin_catalog, Config, ToolsetResolver};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(
    name = "midnight-toolsets",
    version,
    about = "Inspect and resolve Midnight MCP toolsets",
    disable_help_subcommand = true
)]
struct Cli {
    /// JSON config file; environment variables override it.
    #[arg(long, env = "MIDNIGHT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print available toolsets grouped by category.
    Help,
    /// Resolve a toolset list (defaults to the configured one).
    Resolve {
        /// Comma-separated toolset IDs.
        #[arg(long)]
        toolsets: Option<String>,
        /// Fail on unknown toolsets instead of skipping them.
        #[arg(long)]
        strict: bool,
    },
    /// Check that every identifier in a toolset list is known.
    Validate {
        /// Comma-separated toolset IDs (defaults to the configured list).
        #[arg(long)]
        toolsets: Option<String>,
    },
    /// Print category summaries.
    Categories,
    /// Print the toolsets and tools of one category.
    Tools {
        /// Category name, e.g. `wallet`.
        #[arg(long)]
        category: String,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => {
            Config::from_json_file(path)?.with_overrides(|key| std::env::var(key).ok())?
        }
        None => Config::from_env()?,
    };

    // Initialize observability
    midnight_toolsets::observability::init_tracing(&config.observability);

    let catalog = Arc::new(builtin_catalog()?);

    match cli.command {
        Command::Help => {
            println!("{}", generate_toolsets_help(&catalog));
        }
        Command::Resolve { toolsets, strict } => {
            let mut options = config.toolsets.resolver_options();
            options.strict |= strict;
            let raw = toolsets.unwrap_or_else(|| config.toolsets.raw().to_string());

            let resolver = ToolsetResolver::new(Arc::clone(&catalog), options);
            let resolution = resolver.resolve(&raw)?;
            println!("{}", serde_json::to_string_pretty(&*resolution)?);
        }
        Command::Validate { toolsets } => {
            let raw = toolsets.unwrap_or_else(|| config.toolsets.raw().to_string());
            validate_toolsets(&catalog, &parse_toolsets(&raw))?;
            println!("ok");
        }
        Command::Categories => {
            println!("{}", serde_json::to_string_pretty(&list_categories(&catalog))?);
        }
        Command::Tools { category } => {
            let category: ToolsetCategory = category.parse()?;
            println!(
                "{}",
                serde_json::to_string_pretty(&tools_in_category(&catalog, category))?
            );
        }
    }

    Ok(())
}
