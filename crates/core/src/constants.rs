//! Application-wide constants.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Display currency for every aggregated amount.
pub const BASE_CURRENCY_CODE: &str = "THB";

/// Fixed THB per USD conversion rate used when none is configured.
pub const DEFAULT_THB_PER_USD: Decimal = dec!(36.5);

/// Name given to the portfolio created when a legacy single-portfolio
/// store is upgraded to the multi-portfolio schema.
pub const MIGRATED_PORTFOLIO_NAME: &str = "My Portfolio";

/// Maximum accepted length for portfolio and holding names.
pub const MAX_NAME_LEN: usize = 100;
