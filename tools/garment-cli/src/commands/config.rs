//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Current Configuration");

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "none (defaults)"),
    }

    let config = &ctx.config;

    ctx.output.info("[store]");
    ctx.output.kv("name", &config.store.name);
    ctx.output.kv(
        "catalog",
        config.store.catalog.as_deref().unwrap_or("bundled"),
    );
    if let Some(currency) = &config.store.currency {
        ctx.output.kv("currency", currency);
    }

    ctx.output.info("[session]");
    ctx.output.kv("path", &ctx.session_path().display().to_string());

    ctx.output.info("[checkout]");
    ctx.output
        .kv("shipping_fee", &config.checkout.shipping_fee.to_string());
    ctx.output.kv(
        "payment_delay_ms",
        &config.checkout.payment_delay_ms.to_string(),
    );

    ctx.output.info("[account]");
    ctx.output
        .kv("login_delay_ms", &config.account.login_delay_ms.to_string());

    ctx.output.info("[log]");
    ctx.output.kv("level", &config.log.level.to_string());
    ctx.output.kv("format", &config.log.format.to_string());

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let content = generate_default_config(&ctx.config.store.name);
    std::fs::write(&config_path, content)?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors = ctx.config.errors(&ctx.base_dir());
    if let Err(e) = ctx.catalog() {
        errors.push(format!("{:#}", e));
    }

    let mut warnings: Vec<String> = Vec::new();
    if ctx.config_path.is_none() {
        warnings.push("no config file found; using defaults".to_string());
    }
    if ctx.config.checkout.payment_delay_ms > 10_000 {
        warnings.push("checkout.payment_delay_ms is over ten seconds".to_string());
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
