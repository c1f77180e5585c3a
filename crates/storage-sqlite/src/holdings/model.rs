//! Database model for holdings.
//!
//! Decimals are stored as TEXT so no precision is lost in SQLite's
//! numeric affinity; they are parsed back on load.

use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;

use investfolio_core::errors::{DatabaseError, Error, Result};
use investfolio_core::fx::Currency;
use investfolio_core::holdings::{AssetType, Holding, NewHolding};

/// Database model for holdings.
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::holdings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct HoldingDB {
    pub id: String,
    pub portfolio_id: String,
    pub name: String,
    pub ticker: Option<String>,
    pub asset_type: String,
    pub shares: String,
    pub average_cost: String,
    pub average_cost_currency: String,
    pub current_price: String,
    pub current_price_currency: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

fn parse_decimal(row_id: &str, field: &str, value: &str) -> Result<Decimal> {
    Decimal::from_str(value).map_err(|e| {
        Error::Database(DatabaseError::Internal(format!(
            "holding {}: bad {} value '{}': {}",
            row_id, field, value, e
        )))
    })
}

fn parse_currency(row_id: &str, field: &str, value: &str) -> Result<Currency> {
    Currency::from_str(value).map_err(|e| {
        Error::Database(DatabaseError::Internal(format!(
            "holding {}: bad {} value '{}': {}",
            row_id, field, value, e
        )))
    })
}

impl TryFrom<HoldingDB> for Holding {
    type Error = Error;

    fn try_from(db: HoldingDB) -> Result<Self> {
        let asset_type = AssetType::from_str(&db.asset_type).map_err(|e| {
            Error::Database(DatabaseError::Internal(format!(
                "holding {}: bad asset type '{}': {}",
                db.id, db.asset_type, e
            )))
        })?;

        Ok(Self {
            shares: parse_decimal(&db.id, "shares", &db.shares)?,
            average_cost: parse_decimal(&db.id, "average_cost", &db.average_cost)?,
            average_cost_currency: parse_currency(
                &db.id,
                "average_cost_currency",
                &db.average_cost_currency,
            )?,
            current_price: parse_decimal(&db.id, "current_price", &db.current_price)?,
            current_price_currency: parse_currency(
                &db.id,
                "current_price_currency",
                &db.current_price_currency,
            )?,
            asset_type,
            id: db.id,
            portfolio_id: db.portfolio_id,
            name: db.name,
            ticker: db.ticker,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl From<NewHolding> for HoldingDB {
    fn from(domain: NewHolding) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            portfolio_id: domain.portfolio_id,
            name: domain.name,
            ticker: domain.ticker,
            asset_type: domain.asset_type.as_str().to_string(),
            shares: domain.shares.to_string(),
            average_cost: domain.average_cost.to_string(),
            average_cost_currency: domain.average_cost_currency.code().to_string(),
            current_price: domain.current_price.to_string(),
            current_price_currency: domain.current_price_currency.code().to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}
