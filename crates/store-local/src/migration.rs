//! Upgrade from the legacy single-portfolio schema.
//!
//! The first release kept one flat list of holdings with no portfolio
//! entity and THB-only amounts. Upgrading creates a single default
//! portfolio and attaches every legacy holding to it; amounts are
//! carried over digit-for-digit.

use chrono::Utc;
use uuid::Uuid;

use investfolio_core::constants::MIGRATED_PORTFOLIO_NAME;
use investfolio_core::fx::Currency;
use investfolio_core::holdings::Holding;
use investfolio_core::portfolios::Portfolio;

use crate::document::{LegacyHolding, StoreDocument, SCHEMA_VERSION};

/// Builds a v2 document from a legacy holdings list.
pub(crate) fn upgrade_legacy(legacy: Vec<LegacyHolding>) -> StoreDocument {
    let now = Utc::now().naive_utc();

    let portfolio = Portfolio {
        id: Uuid::new_v4().to_string(),
        name: MIGRATED_PORTFOLIO_NAME.to_string(),
        created_at: now,
        updated_at: now,
    };

    let holdings = legacy
        .into_iter()
        .map(|h| Holding {
            id: h.id,
            portfolio_id: portfolio.id.clone(),
            name: h.name,
            ticker: h.ticker,
            asset_type: h.asset_type,
            shares: h.shares,
            average_cost: h.average_cost,
            average_cost_currency: Currency::Thb,
            current_price: h.current_price,
            current_price_currency: Currency::Thb,
            created_at: now,
            updated_at: now,
        })
        .collect();

    StoreDocument {
        version: SCHEMA_VERSION,
        portfolios: vec![portfolio],
        holdings,
    }
}
