//! Currency domain model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::fx_errors::FxError;

/// The two currencies a holding can be priced in.
///
/// Every aggregate (summary, allocation) is reported in THB; USD
/// amounts are converted at the fixed configured rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Thb,
    Usd,
}

impl Currency {
    /// ISO 4217 code, also the wire representation.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Thb => "THB",
            Currency::Usd => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = FxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "THB" => Ok(Currency::Thb),
            "USD" => Ok(Currency::Usd),
            other => Err(FxError::UnsupportedCurrency(other.to_string())),
        }
    }
}
