//! Inspector listing command

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::error::Result;
use crate::models::InspectorDisplay;
use crate::output::Formattable;

/// Run the inspector list command
pub fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let rows: Vec<InspectorDisplay> = ctx
        .registry
        .inspectors()
        .iter()
        .enumerate()
        .map(|(i, inspector)| InspectorDisplay::new(i + 1, inspector.as_ref()))
        .collect();

    rows.print(ctx.format)
}
