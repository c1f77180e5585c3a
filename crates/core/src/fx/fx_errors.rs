use thiserror::Error;

/// Errors raised by currency conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FxError {
    #[error("Currency '{0}' is not supported")]
    UnsupportedCurrency(String),

    #[error("Invalid exchange rate: {0}")]
    InvalidRate(String),
}
