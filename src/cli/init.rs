//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::config::{Config, PlatformConfig};
use crate::error::Result;
use crate::transport::{AGENT_TRANSPORT_ID, DefaultTransportKind, builtin_transports};

/// Run the init command
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to reqinspect!".bold().green());
    println!("Let's describe where your requests are sent from.\n");

    let theme = ColorfulTheme::default();

    let kinds = [DefaultTransportKind::Browser, DefaultTransportKind::Native];
    let kind_labels = [
        "Browser (web app, requests limited by the browser)",
        "Native (desktop app, no browser limits)",
    ];
    let kind_idx = Select::with_theme(&theme)
        .with_prompt("Platform")
        .items(&kind_labels)
        .default(0)
        .interact()?;

    let agent_transport: String = Input::with_theme(&theme)
        .with_prompt("Agent transport ID")
        .default(AGENT_TRANSPORT_ID.to_string())
        .interact_text()?;

    let platform = PlatformConfig {
        default_transport: kinds[kind_idx],
        agent_transport,
    };

    let transports = builtin_transports(&platform.to_platform());
    let transport_labels: Vec<String> = transports
        .iter()
        .map(|t| format!("{} ({})", t.name, t.id))
        .collect();
    let transport_idx = Select::with_theme(&theme)
        .with_prompt("Active transport")
        .items(&transport_labels)
        .default(0)
        .interact()?;

    // Keep unrelated settings from an existing file
    let mut config = Config::load_or_default(opts.config_ref())?;
    config.platform = platform;
    config.transport.current = Some(transports[transport_idx].id.clone());
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "reqinspect status".cyan());
    println!(
        "  {} - Inspect a request",
        "reqinspect inspect request.yaml".cyan()
    );

    Ok(())
}
