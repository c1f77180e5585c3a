//! Holding domain models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_NAME_LEN;
use crate::fx::Currency;
use crate::{errors::ValidationError, Error, Result};

/// The kinds of instruments a holding can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    #[default]
    Stock,
    Etf,
    MutualFund,
    Bond,
}

impl AssetType {
    /// Wire representation, also used as the database value.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Stock => "stock",
            AssetType::Etf => "etf",
            AssetType::MutualFund => "mutual_fund",
            AssetType::Bond => "bond",
        }
    }

    /// Human-readable label for display surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            AssetType::Stock => "Stock",
            AssetType::Etf => "ETF",
            AssetType::MutualFund => "Mutual Fund",
            AssetType::Bond => "Bond / Fixed Income",
        }
    }

    /// All variants, in display order.
    pub fn all() -> [AssetType; 4] {
        [
            AssetType::Stock,
            AssetType::Etf,
            AssetType::MutualFund,
            AssetType::Bond,
        ]
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "stock" => Ok(AssetType::Stock),
            "etf" => Ok(AssetType::Etf),
            "mutual_fund" => Ok(AssetType::MutualFund),
            "bond" => Ok(AssetType::Bond),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown asset type '{}'",
                other
            )))),
        }
    }
}

/// A position inside a portfolio.
///
/// Cost and price carry their own currencies: a SET-listed stock
/// bought in THB can be quoted in USD and vice versa.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub portfolio_id: String,
    pub name: String,
    pub ticker: Option<String>,
    pub asset_type: AssetType,
    pub shares: Decimal,
    pub average_cost: Decimal,
    pub average_cost_currency: Currency,
    pub current_price: Decimal,
    pub current_price_currency: Currency,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new holding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHolding {
    /// Repository mints a UUID when absent.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,
    /// May be filled in from the request path instead of the body.
    #[serde(default)]
    pub portfolio_id: String,
    pub name: String,
    #[serde(default)]
    pub ticker: Option<String>,
    pub asset_type: AssetType,
    pub shares: Decimal,
    pub average_cost: Decimal,
    #[serde(default)]
    pub average_cost_currency: Currency,
    pub current_price: Decimal,
    #[serde(default)]
    pub current_price_currency: Currency,
}

impl NewHolding {
    /// Validates the new holding data.
    pub fn validate(&self) -> Result<()> {
        if self.portfolio_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "portfolioId".to_string(),
            )));
        }
        validate_fields(&self.name, self.shares, self.average_cost, self.current_price)
    }

    /// Trims the name and normalizes the ticker to uppercase.
    ///
    /// A blank ticker becomes `None`.
    pub fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        self.ticker = normalize_ticker(self.ticker.take());
    }
}

/// Input model for updating an existing holding.
///
/// Carries the full editable field set; the portfolio a holding
/// belongs to never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingUpdate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub ticker: Option<String>,
    pub asset_type: AssetType,
    pub shares: Decimal,
    pub average_cost: Decimal,
    #[serde(default)]
    pub average_cost_currency: Currency,
    pub current_price: Decimal,
    #[serde(default)]
    pub current_price_currency: Currency,
}

impl HoldingUpdate {
    /// Validates the holding update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        validate_fields(&self.name, self.shares, self.average_cost, self.current_price)
    }

    /// Trims the name and normalizes the ticker to uppercase.
    pub fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        self.ticker = normalize_ticker(self.ticker.take());
    }
}

fn normalize_ticker(ticker: Option<String>) -> Option<String> {
    ticker
        .map(|t| t.trim().to_ascii_uppercase())
        .filter(|t| !t.is_empty())
}

fn validate_fields(
    name: &str,
    shares: Decimal,
    average_cost: Decimal,
    current_price: Decimal,
) -> Result<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Holding name cannot be empty".to_string(),
        )));
    }
    if trimmed.len() > MAX_NAME_LEN {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Holding name cannot exceed {} characters",
            MAX_NAME_LEN
        ))));
    }
    if shares < Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Shares cannot be negative".to_string(),
        )));
    }
    if average_cost < Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Average cost cannot be negative".to_string(),
        )));
    }
    if current_price < Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Current price cannot be negative".to_string(),
        )));
    }
    Ok(())
}
