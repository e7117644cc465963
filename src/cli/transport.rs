//! Transport commands

use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;
use crate::models::TransportDisplay;
use crate::output::Formattable;
use crate::transport::TransportService;

/// Run the transport list command
pub fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let rows: Vec<TransportDisplay> = ctx
        .transport
        .available()
        .iter()
        .map(|t| TransportDisplay::new(t, &ctx.transport))
        .collect();

    rows.print(ctx.format)
}

/// Run the transport set command
pub fn set(opts: &GlobalOptions, id: &str) -> Result<()> {
    let mut config = Config::load_or_default(opts.config_ref())?;

    // Validate against the transports the configured platform offers
    let service = TransportService::new(config.platform.to_platform());
    service.set_current(id)?;

    config.transport.current = Some(id.to_string());
    config.save_at(opts.config_ref())?;

    println!("{} Active transport set to: {}", "✓".green(), id.bold());

    if service.is_unsupported_for_digest(id) {
        println!(
            "  {} Digest authorization needs the '{}' transport on this platform",
            "⚠".yellow(),
            service.platform().agent_transport_id
        );
    }

    Ok(())
}
