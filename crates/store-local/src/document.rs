//! On-disk document schema.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use investfolio_core::holdings::{AssetType, Holding};
use investfolio_core::portfolios::Portfolio;

/// Current schema version.
pub(crate) const SCHEMA_VERSION: u32 = 2;

/// File holding the current multi-portfolio document.
pub(crate) const STORE_FILE: &str = "portfolios.json";

/// File the single-portfolio era kept its flat holdings list in.
pub(crate) const LEGACY_FILE: &str = "holdings.json";

/// The whole store, serialized as one document.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StoreDocument {
    pub version: u32,
    pub portfolios: Vec<Portfolio>,
    pub holdings: Vec<Holding>,
}

impl StoreDocument {
    pub(crate) fn empty() -> Self {
        Self {
            version: SCHEMA_VERSION,
            portfolios: Vec::new(),
            holdings: Vec::new(),
        }
    }
}

/// A holding as the legacy schema stored it: no portfolio, THB only.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LegacyHolding {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub ticker: Option<String>,
    pub asset_type: AssetType,
    pub shares: Decimal,
    pub average_cost: Decimal,
    pub current_price: Decimal,
}
