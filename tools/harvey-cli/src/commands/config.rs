//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
        ConfigCommand::Path => show_path(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    let config = &ctx.config;

    ctx.output.info("[shop]");
    ctx.output.kv("name", &config.shop.name);

    ctx.output.info("[order]");
    ctx.output.kv("base_url", &config.order.base_url);
    ctx.output.kv("phone", &config.order.phone);

    ctx.output.info("[carousel]");
    ctx.output.kv("interval_ms", &config.carousel.interval_ms.to_string());
    ctx.output.kv("autoplay", &config.carousel.autoplay.to_string());

    ctx.output.info("[contact]");
    ctx.output.kv("email", &config.contact.email);
    ctx.output.kv("phone", &config.contact.phone);
    ctx.output.kv("address", &config.contact.address);

    ctx.output.info("[log]");
    ctx.output.kv("level", &config.log.level);
    ctx.output.kv("format", &config.log.format);

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.default_config_path();

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    // Loading already rejects invalid values; these only warn.
    let mut warnings: Vec<String> = Vec::new();

    if ctx.config.carousel.interval_ms < 1000 {
        warnings.push(format!(
            "carousel.interval_ms is {} ms; slides will change faster than shoppers can read them",
            ctx.config.carousel.interval_ms
        ));
    }

    if !ctx.config.contact.email.contains('@') {
        warnings.push("contact.email does not look like an e-mail address".to_string());
    }

    if ctx.config.log.level.parse::<harvey_observability::LogLevel>().is_err() {
        warnings.push(format!("log.level '{}' is not recognised", ctx.config.log.level));
    }

    if ctx.config.log.format.parse::<harvey_observability::LogFormat>().is_err() {
        warnings.push(format!("log.format '{}' is not recognised", ctx.config.log.format));
    }

    if warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

async fn show_path(ctx: &Context) -> Result<()> {
    match &ctx.config_path {
        Some(path) if ctx.output.is_json() => {
            ctx.output.json(&serde_json::json!({ "path": path }))
        }
        Some(path) => println!("{}", path.display()),
        None => ctx
            .output
            .info("No config file found. Run `harvey config init` to create one."),
    }
    Ok(())
}
