//! Output formatting utilities.

use std::io::Write;

use colored::Colorize;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use folio_core::money::{
    format_currency, format_percent, format_ratio, format_signed_currency, round_currency,
};
use folio_core::{GainDirection, Holding};
use folio_feed::{DashboardState, PortfolioSnapshot};
use folio_portfolio::SectorGroup;

use crate::cli::OutputFormat;

/// Shown until the first snapshot arrives.
pub const LOADING_MESSAGE: &str = "Fetching live market data...";

const PLACEHOLDER: &str = "-";
const NO_PRICE: &str = "N/A";

/// Formats and prints a list of records based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => write_csv(data, std::io::stdout()),
    }
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

/// Prints data as JSON.
fn print_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Writes records as CSV with a header row.
pub fn write_csv<T: Serialize, W: Write>(data: &[T], writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints a snapshot in the requested format.
pub fn print_snapshot(
    snapshot: &PortfolioSnapshot,
    format: OutputFormat,
    colorize: bool,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            println!("{}", render_dashboard(snapshot, colorize));
            Ok(())
        }
        OutputFormat::Json => print_json(snapshot),
        OutputFormat::Csv => write_csv(&holding_records(snapshot), std::io::stdout()),
    }
}

// =============================================================================
// DASHBOARD TABLE
// =============================================================================

/// One line of the dashboard table: a sector header, a holding, or a sector total.
#[derive(Debug, Clone, Default, Tabled)]
pub struct DashboardRow {
    #[tabled(rename = "Stock Name")]
    pub stock: String,
    #[tabled(rename = "Qty")]
    pub quantity: String,
    #[tabled(rename = "Avg. Cost")]
    pub avg_cost: String,
    #[tabled(rename = "Invested")]
    pub invested: String,
    #[tabled(rename = "CMP")]
    pub cmp: String,
    #[tabled(rename = "Present Value")]
    pub present_value: String,
    #[tabled(rename = "Gain/Loss")]
    pub gain_loss: String,
    #[tabled(rename = "Weight (%)")]
    pub weight: String,
    #[tabled(rename = "P/E")]
    pub pe: String,
}

impl DashboardRow {
    fn sector_header(group: &SectorGroup, colorize: bool) -> Self {
        let label = format!("{} Sector", group.sector_name());
        Self {
            stock: if colorize {
                label.bold().blue().to_string()
            } else {
                label
            },
            ..Self::default()
        }
    }

    fn holding(holding: &Holding, colorize: bool) -> Self {
        let mut stock = holding.name.clone();
        if !holding.ticker.is_empty() || !holding.exchange.is_empty() {
            stock.push('\n');
            stock.push_str(&format!("{} • {}", holding.ticker, holding.exchange));
        }

        Self {
            stock,
            quantity: holding.quantity.to_string(),
            avg_cost: currency_or_placeholder(holding.purchase_price),
            invested: currency_or_placeholder(holding.investment),
            cmp: holding
                .market_price()
                .map_or_else(|| NO_PRICE.to_string(), format_currency),
            present_value: currency_or_placeholder(holding.present_value),
            gain_loss: holding
                .gain_loss
                .map_or_else(|| PLACEHOLDER.to_string(), |g| paint_gain_loss(g, colorize)),
            weight: holding
                .portfolio_weight
                .map_or_else(|| PLACEHOLDER.to_string(), format_percent),
            pe: holding
                .pe_value()
                .map_or_else(|| PLACEHOLDER.to_string(), format_ratio),
        }
    }

    fn sector_total(group: &SectorGroup, colorize: bool) -> Self {
        Self {
            stock: format!("Total {}:", group.sector_name()),
            invested: format_currency(group.total_investment()),
            present_value: format_currency(group.total_present_value()),
            gain_loss: paint_gain_loss(group.total_gain_loss(), colorize),
            ..Self::default()
        }
    }
}

fn displayed_direction(amount: Decimal) -> GainDirection {
    GainDirection::of(round_currency(amount))
}

fn currency_or_placeholder(value: Option<Decimal>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), format_currency)
}

/// `▲ ₹…` in green for gains (including zero), `▼ -₹…` in red for losses.
///
/// Direction follows the displayed (rounded) amount, so `-0.001` is a gain.
pub fn paint_gain_loss(amount: Decimal, colorize: bool) -> String {
    let gain = displayed_direction(amount).is_gain();
    let text = if gain {
        format!("▲ {}", format_currency(amount))
    } else {
        format!("▼ {}", format_currency(amount))
    };

    match (colorize, gain) {
        (false, _) => text,
        (true, true) => text.green().to_string(),
        (true, false) => text.red().to_string(),
    }
}

/// Builds the table rows for every sector group, in group order.
pub fn dashboard_rows(groups: &[SectorGroup], colorize: bool) -> Vec<DashboardRow> {
    let mut rows = Vec::new();
    for group in groups {
        rows.push(DashboardRow::sector_header(group, colorize));
        rows.extend(
            group
                .holdings()
                .iter()
                .map(|h| DashboardRow::holding(h, colorize)),
        );
        rows.push(DashboardRow::sector_total(group, colorize));
    }
    rows
}

/// Renders the title line, the grouped holdings table and the portfolio summary.
pub fn render_dashboard(snapshot: &PortfolioSnapshot, colorize: bool) -> String {
    let title = if colorize {
        "My Portfolio".bold().to_string()
    } else {
        "My Portfolio".to_string()
    };
    let mut out = format!(
        "{}    Last Updated: {}\n",
        title,
        snapshot.last_updated_label()
    );

    if snapshot.groups.is_empty() {
        out.push_str("No holdings.\n");
        return out;
    }

    let table = Table::new(dashboard_rows(&snapshot.groups, colorize))
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..7)).with(Alignment::right()))
        .to_string();
    out.push_str(&table);
    out.push('\n');

    let summary = &snapshot.summary;
    let mut gain = format_signed_currency(summary.total_gain_loss);
    if let Some(pct) = summary.gain_loss_pct() {
        gain.push_str(&format!(" ({})", format_percent(pct)));
    }
    if colorize {
        gain = if displayed_direction(summary.total_gain_loss).is_gain() {
            gain.green().to_string()
        } else {
            gain.red().to_string()
        };
    }
    out.push_str(&format!(
        "Invested {}  Present Value {}  Gain/Loss {}  ({} holdings in {} sectors)",
        format_currency(summary.total_investment),
        format_currency(summary.total_present_value),
        gain,
        summary.holding_count,
        summary.sector_count,
    ));
    out
}

/// Renders whatever the dashboard currently has to show.
pub fn render_state(state: &DashboardState, colorize: bool) -> String {
    let mut out = match &state.snapshot {
        Some(snapshot) => render_dashboard(snapshot, colorize),
        None => LOADING_MESSAGE.to_string(),
    };

    if let Some(error) = &state.last_error {
        let line = match &state.snapshot {
            Some(snapshot) => format!(
                "⚠ Refresh failed ({} in a row): {}. Showing data from {}.",
                state.consecutive_failures,
                error,
                snapshot.last_updated_label()
            ),
            None => format!("⚠ Refresh failed: {}", error),
        };
        out.push('\n');
        if colorize {
            out.push_str(&line.yellow().to_string());
        } else {
            out.push_str(&line);
        }
    }
    out
}

// =============================================================================
// CSV RECORDS
// =============================================================================

/// One CSV row per holding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldingRecord {
    pub sector: String,
    pub id: String,
    pub name: String,
    pub ticker: String,
    pub exchange: String,
    pub quantity: u64,
    pub purchase_price: String,
    pub investment: String,
    pub cmp: String,
    pub present_value: String,
    pub gain_loss: String,
    pub portfolio_weight: String,
    pub pe_ratio: String,
}

fn decimal_text(value: Option<Decimal>) -> String {
    value.map(|d| d.to_string()).unwrap_or_default()
}

/// Flattens the snapshot into CSV rows, sector by sector.
pub fn holding_records(snapshot: &PortfolioSnapshot) -> Vec<HoldingRecord> {
    snapshot
        .groups
        .iter()
        .flat_map(|group| {
            group.holdings().iter().map(move |h| HoldingRecord {
                sector: group.sector_name().to_string(),
                id: h.id.clone(),
                name: h.name.clone(),
                ticker: h.ticker.clone(),
                exchange: h.exchange.clone(),
                quantity: h.quantity,
                purchase_price: decimal_text(h.purchase_price),
                investment: decimal_text(h.investment),
                cmp: decimal_text(h.cmp),
                present_value: decimal_text(h.present_value),
                gain_loss: decimal_text(h.gain_loss),
                portfolio_weight: decimal_text(h.portfolio_weight),
                pe_ratio: h.pe_ratio.map(|pe| pe.to_string()).unwrap_or_default(),
            })
        })
        .collect()
}

// =============================================================================
// MESSAGES
// =============================================================================

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}
