//! Valuation view models.
//!
//! Every amount is reported in the base currency (THB).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::fx::Currency;
use crate::holdings::AssetType;

/// Aggregated totals for a single portfolio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub portfolio_id: String,
    /// Currency the amounts are expressed in.
    pub currency: Currency,
    pub holdings_count: usize,
    /// Σ shares · current price, converted.
    pub market_value: Decimal,
    /// Σ shares · average cost, converted.
    pub cost_basis: Decimal,
    /// market_value − cost_basis.
    pub gain_loss: Decimal,
    /// gain_loss / cost_basis as a ratio; zero when there is no cost
    /// basis to divide by.
    pub gain_loss_pct: Decimal,
}

/// Market value share of one asset type within a portfolio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSlice {
    pub asset_type: AssetType,
    /// Display name of the asset type.
    pub label: String,
    /// Total value in base currency.
    pub market_value: Decimal,
    /// Percentage of total portfolio value (0-100), two decimals.
    pub weight_pct: Decimal,
}

/// Allocation breakdown of a portfolio by asset type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAllocation {
    pub portfolio_id: String,
    pub currency: Currency,
    pub total_value: Decimal,
    /// Slices sorted by value descending; empty for an empty portfolio.
    pub slices: Vec<AllocationSlice>,
}
