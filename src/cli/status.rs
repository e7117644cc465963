//! Status command implementation

use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "reqinspect Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    match Config::load_at(opts.config_ref()) {
        Ok(_) => println!("Config file: {}", config_path.display().to_string().cyan()),
        Err(Error::Config(ConfigError::NotFound)) => {
            println!(
                "Config file: {} {}",
                config_path.display().to_string().cyan(),
                "(not created, using defaults)".dimmed()
            );
            println!("  → Run 'reqinspect init' to create one");
        }
        Err(err) => return Err(err),
    }

    let ctx = CommandContext::new(opts)?;
    let platform = ctx.transport.platform();

    println!();
    println!("Platform default transport: {}", platform.default_kind.to_string().bold());
    println!("Agent transport: {}", platform.agent_transport_id);

    match ctx.transport.current_id() {
        Some(id) => {
            let source = if opts.transport_ref().is_some() {
                "(via --transport flag)"
            } else if ctx.config.transport.current.is_some() {
                "(from config)"
            } else {
                "(platform default)"
            };
            println!("{} Active transport: {} {}", "✓".green(), id.bold(), source.dimmed());

            if ctx.transport.is_unsupported_for_digest(&id) {
                println!(
                    "{} Digest authorization unavailable until '{}' is selected",
                    "⚠".yellow(),
                    platform.agent_transport_id
                );
            } else {
                println!("{} Digest authorization supported", "✓".green());
            }
        }
        None => println!("{} No active transport", "○".dimmed()),
    }

    match &ctx.config.locale_file {
        Some(path) => println!("{} Message overrides: {}", "✓".green(), path.display()),
        None => println!("{} Built-in English messages", "○".dimmed()),
    }

    if ctx.registry.is_empty() {
        println!("{} No inspectors registered", "○".dimmed());
    } else {
        println!(
            "{} {} inspector(s) registered",
            "✓".green(),
            ctx.registry.len()
        );
    }

    Ok(())
}
