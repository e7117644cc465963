//! Inspect command implementation

use std::path::Path;

use colored::Colorize;
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat, SeverityArg};
use crate::error::{Error, Result};
use crate::inspection::{InspectionResult, Severity, highest_severity};
use crate::models::{InspectionDisplay, RequestDocument};
use crate::output::{json, table};
use crate::reactive::Signal;

/// Run the inspect command against a request file
pub fn run(opts: &GlobalOptions, file: &str, fail_on: Option<SeverityArg>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let document = RequestDocument::load_from(Path::new(file))?;

    debug!(
        "Inspecting {} {} ({:?})",
        document.request.method, document.request.endpoint, document.kind
    );

    let request = Signal::new(document.request.clone());
    ctx.tabs.open(document);

    let results = ctx.registry.get_inspections(&request).get();
    for result in &results {
        debug!(
            "{} at {} (level {})",
            result.id,
            result.locations,
            result.severity.level()
        );
    }

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&results)?),
        OutputFormat::Table => {
            let rows: Vec<InspectionDisplay> = results.iter().map(InspectionDisplay::from).collect();
            println!("{}", table::format_table_or(&rows, &ctx.i18n.t("inspections.none")));
        }
        OutputFormat::Pretty => print_pretty(&ctx, file, &results),
    }

    check_threshold(&results, fail_on.map(Severity::from))
}

fn print_pretty(ctx: &CommandContext, file: &str, results: &[InspectionResult]) {
    let transport = ctx
        .transport
        .current_id()
        .unwrap_or_else(|| "none".to_string());
    println!(
        "{} {}",
        file.bold(),
        format!("(transport: {}, auth: {})", transport, effective_auth(ctx)).dimmed()
    );
    println!();

    if results.is_empty() {
        println!("{} {}", "✓".green(), ctx.i18n.t("inspections.none"));
        return;
    }

    for result in results {
        println!(
            "{} {} {}",
            severity_marker(result.severity),
            format!("[{}]", result.locations).cyan(),
            result.text
        );
        if let Some(doc) = &result.doc {
            println!("  → {}: {}", doc.text, doc.link.dimmed());
        }
    }

    if let Some(highest) = highest_severity(results) {
        println!();
        println!("{} finding(s), highest severity: {}", results.len(), highest);
    }
}

/// Auth scheme the request is sent with, following `inherit` through the open tab.
fn effective_auth(ctx: &CommandContext) -> String {
    let auth = ctx.tabs.current_document().with(|doc| doc.request.auth.clone());
    match ctx.authorization.resolve_auth_type(&auth) {
        Some(auth_type) if auth.auth_type.is_inherit() => format!("{} (inherited)", auth_type),
        Some(auth_type) => auth_type.to_string(),
        None => "unresolved".to_string(),
    }
}

fn severity_marker(severity: Severity) -> String {
    match severity {
        Severity::Info => "ℹ info".blue().to_string(),
        Severity::Warning => "⚠ warning".yellow().to_string(),
        Severity::Error => "✗ error".red().bold().to_string(),
    }
}

/// Fail when any finding reaches `threshold`.
fn check_threshold(results: &[InspectionResult], threshold: Option<Severity>) -> Result<()> {
    let Some(threshold) = threshold else {
        return Ok(());
    };

    let count = results.iter().filter(|r| r.severity >= threshold).count();
    if count > 0 {
        return Err(Error::FindingsAtOrAbove {
            count,
            threshold: threshold.to_string(),
        });
    }

    Ok(())
}
