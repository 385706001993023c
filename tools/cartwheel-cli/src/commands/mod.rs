//! CLI command implementations.

pub mod config;
pub mod quote;
pub mod rates;
pub mod validate;

use clap::{Args, Subcommand};

/// Arguments for the quote command.
#[derive(Args)]
pub struct QuoteArgs {
    /// Path to the cart JSON file, or "-" for stdin.
    pub cart: String,
}

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Path to the cart JSON file, or "-" for stdin.
    pub cart: String,
}

/// Arguments for the rates command.
#[derive(Args)]
pub struct RatesArgs {
    /// Currency to display rates in (default: the configured store currency).
    #[arg(short, long)]
    pub currency: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
