//! Show command implementation.
//!
//! Fetches holdings once and prints the sector-grouped dashboard.

use anyhow::Result;

use folio_feed::refresh_once;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_snapshot, print_warning};

/// Execute the show command.
pub async fn execute(ctx: &Context) -> Result<()> {
    let source = ctx.source()?;
    let snapshot = refresh_once(source.as_ref()).await?;

    print_snapshot(&snapshot, ctx.format, ctx.colorize)?;

    if ctx.format == OutputFormat::Table && !ctx.quiet && !snapshot.warnings.is_empty() {
        print_warning(&format!(
            "{} data consistency warning(s); run `folio check` for details",
            snapshot.warnings.len()
        ));
    }

    Ok(())
}
