//! Command-line interface definition.

pub mod holding;
pub mod portfolio;
pub mod views;

use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;

use investfolio_core::fx::Currency;
use investfolio_core::holdings::AssetType;

/// Track investment portfolios from the terminal
#[derive(clap::Parser, Debug)]
#[clap(name = "investfolio", version, about)]
pub struct Command {
    /// Subcommand call
    #[clap(subcommand)]
    pub subcmd: SubCommand,

    /// Data directory holding the portfolio store, default ~/.investfolio
    #[clap(short = 'd', long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// THB per USD conversion rate used for aggregates
    #[clap(long = "thb-per-usd", global = true, value_parser = parse_decimal)]
    pub thb_per_usd: Option<Decimal>,

    /// Verbosity level, also controlled by environment variable INVESTFOLIO_LOG when no flag is set
    #[clap(short = 'v', long = "verbosity", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(clap::Parser, Debug)]
pub enum SubCommand {
    /// Manage portfolios
    #[clap(subcommand)]
    Portfolio(portfolio::Command),
    /// Manage holdings
    #[clap(subcommand)]
    Holding(holding::Command),
    /// Show aggregated totals for one portfolio, or for all
    Summary(views::SummaryArgs),
    /// Show a portfolio's market value split by asset type
    Allocation(views::AllocationArgs),
    /// Show every portfolio with its totals
    Overview,
}

/// Convert the number of -v flags to a log::Level
pub fn verbosity2level(level: u8) -> Option<log::Level> {
    match level {
        0 => None,
        1 => Some(log::Level::Error),
        2 => Some(log::Level::Warn),
        3 => Some(log::Level::Info),
        4 => Some(log::Level::Debug),
        5..=u8::MAX => Some(log::Level::Trace),
    }
}

pub(crate) fn parse_decimal(raw: &str) -> Result<Decimal, String> {
    Decimal::from_str(raw).map_err(|e| format!("'{}' is not a decimal number: {}", raw, e))
}

pub(crate) fn parse_asset_type(raw: &str) -> Result<AssetType, String> {
    AssetType::from_str(raw)
        .map_err(|_| format!("'{}' is not one of stock, etf, mutual_fund, bond", raw))
}

pub(crate) fn parse_currency(raw: &str) -> Result<Currency, String> {
    Currency::from_str(raw).map_err(|_| format!("'{}' is not one of THB, USD", raw))
}

#[cfg(test)]
mod t {
    use super::*;

    #[test]
    fn loglevel() {
        assert_eq!(verbosity2level(0), None);
        assert_eq!(verbosity2level(1), Some(log::Level::Error));
        assert_eq!(verbosity2level(2), Some(log::Level::Warn));
        assert_eq!(verbosity2level(3), Some(log::Level::Info));
        assert_eq!(verbosity2level(4), Some(log::Level::Debug));
        assert_eq!(verbosity2level(u8::MAX), Some(log::Level::Trace));
    }

    #[test]
    fn parsers() {
        assert!(parse_decimal("36.5").is_ok());
        assert!(parse_decimal("abc").is_err());
        assert_eq!(parse_asset_type("mutual_fund").unwrap(), AssetType::MutualFund);
        assert!(parse_asset_type("crypto").is_err());
        assert_eq!(parse_currency("usd").unwrap(), Currency::Usd);
        assert!(parse_currency("EUR").is_err());
    }
}
