//! FX service trait.
//!
//! The trait carries no storage dependency: the product uses one fixed
//! configured THB/USD rate, so there is no rate repository behind it.

use rust_decimal::Decimal;

use super::fx_model::Currency;
use crate::errors::Result;

/// Contract for currency conversion.
pub trait FxServiceTrait: Send + Sync {
    /// The currency every aggregate is reported in.
    fn base_currency(&self) -> Currency;

    /// Units of `to` per one unit of `from`.
    fn rate(&self, from: Currency, to: Currency) -> Decimal;

    /// Converts an amount between the supported currencies.
    fn convert(&self, amount: Decimal, from: Currency, to: Currency) -> Result<Decimal>;

    /// Converts an amount into the base currency.
    fn to_base(&self, amount: Decimal, from: Currency) -> Result<Decimal> {
        self.convert(amount, from, self.base_currency())
    }
}
