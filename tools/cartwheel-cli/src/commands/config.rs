//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use cartwheel_pricing::prelude::*;

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Current Configuration");

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.info("");
    ctx.output.kv("currency", &ctx.config.currency);

    ctx.output.info("");
    ctx.output.info("[origin]");
    ctx.output.kv("country", &ctx.config.origin.country);
    ctx.output.kv("city", &ctx.config.origin.city);
    ctx.output.kv("street", &ctx.config.origin.street);

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("cartwheel.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors: Vec<String> = Vec::new();

    // The quote command refuses to price until the origin is complete
    if ctx.config.origin.country.is_empty() {
        errors.push("origin.country is required".to_string());
    }
    if ctx.config.origin.city.is_empty() {
        errors.push("origin.city is required".to_string());
    }
    if ctx.config.origin.street.is_empty() {
        errors.push("origin.street is required".to_string());
    }

    if Currency::from_code(&ctx.config.currency).is_none() {
        errors.push(format!("currency '{}' is not recognized", ctx.config.currency));
    }

    if errors.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    bail!("Configuration has {} error(s)", errors.len());
}
