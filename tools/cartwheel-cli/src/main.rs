//! Cartwheel CLI - price shopping carts from the command line.
//!
//! Commands:
//! - `cartwheel quote` - Price a cart file through the checkout engine
//! - `cartwheel validate` - Check a cart's shipping address
//! - `cartwheel rates` - Show zone rates and method multipliers
//! - `cartwheel config` - Manage configuration

mod cart_file;
mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, QuoteArgs, RatesArgs, ValidateArgs};

/// Cartwheel CLI - checkout pricing for shopping carts
#[derive(Parser)]
#[command(name = "cartwheel")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a cart through the checkout engine
    Quote(QuoteArgs),

    /// Check whether a cart's shipping address is usable
    Validate(ValidateArgs),

    /// Show zone rates, method multipliers, and tier rules
    Rates(RatesArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Quote(args) => commands::quote::run(args, &ctx),
        Commands::Validate(args) => commands::validate::run(args, &ctx),
        Commands::Rates(args) => commands::rates::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Route pricing diagnostics to stderr, keeping stdout parseable.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "cartwheel_pricing=debug"
    } else {
        "cartwheel_pricing=warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
