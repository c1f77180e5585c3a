use rust_decimal::Decimal;

use super::fx_errors::FxError;
use super::fx_model::Currency;
use super::fx_traits::FxServiceTrait;
use crate::constants::DEFAULT_THB_PER_USD;
use crate::errors::Result;

/// Fixed-rate converter between THB and USD.
///
/// The rate is set once at construction and never refreshed; THB->USD
/// uses the reciprocal.
#[derive(Debug, Clone)]
pub struct FxConverter {
    thb_per_usd: Decimal,
}

impl FxConverter {
    /// Creates a converter with an explicit THB-per-USD rate.
    ///
    /// The rate must be strictly positive.
    pub fn new(thb_per_usd: Decimal) -> std::result::Result<Self, FxError> {
        if thb_per_usd <= Decimal::ZERO {
            return Err(FxError::InvalidRate(format!(
                "THB per USD rate must be positive, got {}",
                thb_per_usd
            )));
        }
        Ok(Self { thb_per_usd })
    }

    /// Creates a converter with the built-in default rate.
    pub fn with_default_rate() -> Self {
        Self {
            thb_per_usd: DEFAULT_THB_PER_USD,
        }
    }

    /// The configured THB-per-USD rate.
    pub fn thb_per_usd(&self) -> Decimal {
        self.thb_per_usd
    }
}

impl Default for FxConverter {
    fn default() -> Self {
        Self::with_default_rate()
    }
}

impl FxServiceTrait for FxConverter {
    fn base_currency(&self) -> Currency {
        Currency::Thb
    }

    fn rate(&self, from: Currency, to: Currency) -> Decimal {
        match (from, to) {
            (Currency::Usd, Currency::Thb) => self.thb_per_usd,
            (Currency::Thb, Currency::Usd) => Decimal::ONE / self.thb_per_usd,
            _ => Decimal::ONE,
        }
    }

    fn convert(&self, amount: Decimal, from: Currency, to: Currency) -> Result<Decimal> {
        if from == to {
            return Ok(amount);
        }
        Ok(amount * self.rate(from, to))
    }
}
