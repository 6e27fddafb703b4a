//! Holding representation as supplied by the data source.

use super::PeRatio;
use crate::error::{CoreError, CoreResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Grouping key for holdings without a sector.
pub const OTHER_SECTOR: &str = "Other";

/// A single portfolio line item (a stock position).
///
/// Cost and market figures are taken as given by the data source; nothing
/// here re-derives `investment` or `present_value`. Every figure the source
/// may omit is optional:
///
/// | Field | Fallback |
/// |-------|----------|
/// | `sector` | grouped under [`OTHER_SECTOR`] |
/// | `investment`, `present_value`, `gain_loss` | zero in aggregation |
/// | `cmp` | missing or `<= 0` means the price is unavailable |
/// | `pe_ratio` | displayed as a placeholder |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "HoldingRecord")]
pub struct Holding {
    /// Unique identifier for this position (`_id` or `id` on the wire).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Exchange ticker (display only).
    pub ticker: String,

    /// Listing exchange (display only).
    pub exchange: String,

    /// Industry classification used as the grouping key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,

    /// Number of shares held.
    pub quantity: u64,

    /// Average purchase price per share.
    pub purchase_price: Option<Decimal>,

    /// Amount invested (`quantity * purchase_price`).
    pub investment: Option<Decimal>,

    /// Current market price per share.
    pub cmp: Option<Decimal>,

    /// Value at the current market price (`quantity * cmp`).
    pub present_value: Option<Decimal>,

    /// `present_value - investment`.
    pub gain_loss: Option<Decimal>,

    /// Share of total portfolio value, in percent (0-100).
    pub portfolio_weight: Option<Decimal>,

    /// Price/earnings ratio.
    pub pe_ratio: Option<PeRatio>,
}

/// Wire shape of a holding.
///
/// Document stores send `_id`, some also mirror it as `id`; either or both
/// are accepted. A non-blank `_id` wins when both are present.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HoldingRecord {
    #[serde(rename = "_id", default)]
    object_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    ticker: String,
    #[serde(default)]
    exchange: String,
    #[serde(default)]
    sector: Option<String>,
    #[serde(default)]
    quantity: u64,
    #[serde(default)]
    purchase_price: Option<Decimal>,
    #[serde(default)]
    investment: Option<Decimal>,
    #[serde(default)]
    cmp: Option<Decimal>,
    #[serde(default)]
    present_value: Option<Decimal>,
    #[serde(default)]
    gain_loss: Option<Decimal>,
    #[serde(default)]
    portfolio_weight: Option<Decimal>,
    #[serde(default)]
    pe_ratio: Option<PeRatio>,
}

impl TryFrom<HoldingRecord> for Holding {
    type Error = CoreError;

    fn try_from(record: HoldingRecord) -> CoreResult<Self> {
        let id = record
            .object_id
            .filter(|id| !id.trim().is_empty())
            .or(record.id)
            .ok_or_else(|| CoreError::missing_field("id"))?;

        Ok(Holding {
            id,
            name: record.name,
            ticker: record.ticker,
            exchange: record.exchange,
            sector: record.sector,
            quantity: record.quantity,
            purchase_price: record.purchase_price,
            investment: record.investment,
            cmp: record.cmp,
            present_value: record.present_value,
            gain_loss: record.gain_loss,
            portfolio_weight: record.portfolio_weight,
            pe_ratio: record.pe_ratio,
        })
    }
}

impl Holding {
    /// Creates a new holding builder.
    #[must_use]
    pub fn builder() -> HoldingBuilder {
        HoldingBuilder::new()
    }

    /// Returns the effective grouping key.
    ///
    /// The sector exactly as supplied, or [`OTHER_SECTOR`] when it is absent
    /// or empty. Whitespace is significant: `" Tech"` is its own key.
    #[must_use]
    pub fn sector_key(&self) -> &str {
        match self.sector.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => OTHER_SECTOR,
        }
    }

    /// Amount invested, zero when missing.
    #[must_use]
    pub fn investment_or_zero(&self) -> Decimal {
        self.investment.unwrap_or(Decimal::ZERO)
    }

    /// Present value, zero when missing.
    #[must_use]
    pub fn present_value_or_zero(&self) -> Decimal {
        self.present_value.unwrap_or(Decimal::ZERO)
    }

    /// Gain/loss, zero when missing.
    #[must_use]
    pub fn gain_loss_or_zero(&self) -> Decimal {
        self.gain_loss.unwrap_or(Decimal::ZERO)
    }

    /// Current market price, if one is available (`cmp > 0`).
    #[must_use]
    pub fn market_price(&self) -> Option<Decimal> {
        self.cmp.filter(|p| p.is_sign_positive() && !p.is_zero())
    }

    /// Returns true when the source supplied a usable market price.
    #[must_use]
    pub fn has_market_price(&self) -> bool {
        self.market_price().is_some()
    }

    /// Reported P/E, if any.
    #[must_use]
    pub fn pe_value(&self) -> Option<Decimal> {
        self.pe_ratio.and_then(|pe| pe.value())
    }

    /// Visual direction of this holding's gain/loss.
    #[must_use]
    pub fn direction(&self) -> GainDirection {
        GainDirection::of(self.gain_loss_or_zero())
    }

    /// Checks the identity contract: a non-blank `id`.
    pub fn validate(&self) -> CoreResult<()> {
        if self.id.trim().is_empty() {
            return Err(CoreError::invalid_holding(
                self.id.clone(),
                "identifier must not be blank",
            ));
        }
        Ok(())
    }
}

/// Display direction of a gain/loss figure.
///
/// Zero counts as a gain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GainDirection {
    /// Amount is zero or positive.
    Gain,
    /// Amount is negative.
    Loss,
}

impl GainDirection {
    /// Classifies an amount.
    #[must_use]
    pub fn of(amount: Decimal) -> Self {
        if amount.is_sign_negative() && !amount.is_zero() {
            GainDirection::Loss
        } else {
            GainDirection::Gain
        }
    }

    /// Returns true for [`GainDirection::Gain`].
    #[must_use]
    pub fn is_gain(self) -> bool {
        self == GainDirection::Gain
    }
}

/// Builder for [`Holding`].
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct HoldingBuilder {
    id: Option<String>,
    name: String,
    ticker: String,
    exchange: String,
    sector: Option<String>,
    quantity: u64,
    purchase_price: Option<Decimal>,
    investment: Option<Decimal>,
    cmp: Option<Decimal>,
    present_value: Option<Decimal>,
    gain_loss: Option<Decimal>,
    portfolio_weight: Option<Decimal>,
    pe_ratio: Option<PeRatio>,
}

impl HoldingBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identifier.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the ticker.
    pub fn ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = ticker.into();
        self
    }

    /// Sets the exchange.
    pub fn exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = exchange.into();
        self
    }

    /// Sets the sector.
    pub fn sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    /// Sets the share count.
    pub fn quantity(mut self, quantity: u64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the average purchase price.
    pub fn purchase_price(mut self, price: Decimal) -> Self {
        self.purchase_price = Some(price);
        self
    }

    /// Sets the invested amount.
    pub fn investment(mut self, investment: Decimal) -> Self {
        self.investment = Some(investment);
        self
    }

    /// Sets the current market price.
    pub fn cmp(mut self, cmp: Decimal) -> Self {
        self.cmp = Some(cmp);
        self
    }

    /// Sets the present value.
    pub fn present_value(mut self, value: Decimal) -> Self {
        self.present_value = Some(value);
        self
    }

    /// Sets the gain/loss.
    pub fn gain_loss(mut self, value: Decimal) -> Self {
        self.gain_loss = Some(value);
        self
    }

    /// Sets the portfolio weight (percent).
    pub fn portfolio_weight(mut self, weight: Decimal) -> Self {
        self.portfolio_weight = Some(weight);
        self
    }

    /// Sets the P/E ratio.
    pub fn pe_ratio(mut self, pe: PeRatio) -> Self {
        self.pe_ratio = Some(pe);
        self
    }

    /// Builds the holding.
    pub fn build(self) -> CoreResult<Holding> {
        let id = self.id.ok_or_else(|| CoreError::missing_field("id"))?;

        let holding = Holding {
            id,
            name: self.name,
            ticker: self.ticker,
            exchange: self.exchange,
            sector: self.sector,
            quantity: self.quantity,
            purchase_price: self.purchase_price,
            investment: self.investment,
            cmp: self.cmp,
            present_value: self.present_value,
            gain_loss: self.gain_loss,
            portfolio_weight: self.portfolio_weight,
            pe_ratio: self.pe_ratio,
        };
        holding.validate()?;

        Ok(holding)
    }
}
