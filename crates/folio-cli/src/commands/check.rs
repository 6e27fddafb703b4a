//! Check command implementation.
//!
//! Reports holdings whose figures do not add up. Warnings never fail the command.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use folio_portfolio::{check_consistency_with, ConsistencyWarning};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::error::CliError;
use crate::output::{print_output, print_success};

/// Arguments for the check command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Largest difference (in rupees) accepted between reported and derived figures
    #[arg(short, long, default_value = "0.01")]
    pub tolerance: Decimal,
}

/// One reported issue.
#[derive(Debug, Serialize, Tabled)]
pub struct WarningRow {
    #[tabled(rename = "Holding")]
    pub holding_id: String,
    #[tabled(rename = "Issue")]
    pub issue: String,
}

impl From<&ConsistencyWarning> for WarningRow {
    fn from(warning: &ConsistencyWarning) -> Self {
        Self {
            holding_id: warning.holding_id.clone(),
            issue: warning.issue.to_string(),
        }
    }
}

/// Execute the check command.
pub async fn execute(args: CheckArgs, ctx: &Context) -> Result<()> {
    if args.tolerance.is_sign_negative() {
        return Err(CliError::InvalidTolerance(args.tolerance).into());
    }

    let source = ctx.source()?;
    let holdings = source.fetch_holdings().await?;
    let warnings = check_consistency_with(&holdings, args.tolerance);

    if warnings.is_empty() && ctx.format == OutputFormat::Table {
        if !ctx.quiet {
            print_success(&format!(
                "No consistency issues in {} holdings",
                holdings.len()
            ));
        }
        return Ok(());
    }

    let rows: Vec<WarningRow> = warnings.iter().map(WarningRow::from).collect();
    print_output(&rows, ctx.format)
}
