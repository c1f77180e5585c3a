//! Holding subcommands.

use anyhow::Result;
use rust_decimal::Decimal;

use investfolio_core::fx::Currency;
use investfolio_core::holdings::{AssetType, HoldingServiceTrait, HoldingUpdate, NewHolding};

use crate::cli::{parse_asset_type, parse_currency, parse_decimal};
use crate::context::Context;
use crate::format;

#[derive(clap::Parser, Debug)]
pub enum Command {
    /// Add a holding to a portfolio
    Add {
        /// Portfolio id
        #[clap(short = 'p', long = "portfolio")]
        portfolio: String,
        /// Instrument name, e.g. "Bangkok Bank"
        #[clap(short = 'n', long = "name")]
        name: String,
        /// Ticker symbol, e.g. BBL
        #[clap(long = "ticker")]
        ticker: Option<String>,
        /// Asset type: stock, etf, mutual_fund or bond
        #[clap(short = 't', long = "type", value_parser = parse_asset_type, default_value = "stock")]
        asset_type: AssetType,
        /// Number of shares or units
        #[clap(short = 's', long = "shares", value_parser = parse_decimal)]
        shares: Decimal,
        /// Average cost per unit
        #[clap(short = 'c', long = "cost", value_parser = parse_decimal)]
        cost: Decimal,
        /// Currency of the average cost
        #[clap(long = "cost-currency", value_parser = parse_currency, default_value = "THB")]
        cost_currency: Currency,
        /// Current price per unit
        #[clap(long = "price", value_parser = parse_decimal)]
        price: Decimal,
        /// Currency of the current price
        #[clap(long = "price-currency", value_parser = parse_currency, default_value = "THB")]
        price_currency: Currency,
    },
    /// List the holdings of a portfolio
    List {
        /// Portfolio id
        portfolio: String,
    },
    /// Update a holding; omitted fields keep their current value
    Update {
        /// Holding id
        id: String,
        #[clap(short = 'n', long = "name")]
        name: Option<String>,
        #[clap(long = "ticker")]
        ticker: Option<String>,
        #[clap(short = 't', long = "type", value_parser = parse_asset_type)]
        asset_type: Option<AssetType>,
        #[clap(short = 's', long = "shares", value_parser = parse_decimal)]
        shares: Option<Decimal>,
        #[clap(short = 'c', long = "cost", value_parser = parse_decimal)]
        cost: Option<Decimal>,
        #[clap(long = "cost-currency", value_parser = parse_currency)]
        cost_currency: Option<Currency>,
        #[clap(long = "price", value_parser = parse_decimal)]
        price: Option<Decimal>,
        #[clap(long = "price-currency", value_parser = parse_currency)]
        price_currency: Option<Currency>,
    },
    /// Delete a holding
    Delete {
        /// Holding id
        id: String,
    },
}

pub async fn run(ctx: &Context, subcmd: Command) -> Result<()> {
    match subcmd {
        Command::Add {
            portfolio,
            name,
            ticker,
            asset_type,
            shares,
            cost,
            cost_currency,
            price,
            price_currency,
        } => {
            let holding = ctx
                .holdings
                .create_holding(NewHolding {
                    id: None,
                    portfolio_id: portfolio,
                    name,
                    ticker,
                    asset_type,
                    shares,
                    average_cost: cost,
                    average_cost_currency: cost_currency,
                    current_price: price,
                    current_price_currency: price_currency,
                })
                .await?;
            println!("Added holding '{}' ({})", holding.name, holding.id);
        }
        Command::List { portfolio } => {
            let holdings = ctx.holdings.list_holdings(&portfolio)?;
            if holdings.is_empty() {
                println!("This portfolio is empty.");
                return Ok(());
            }
            println!(
                "{:<38} {:<24} {:<8} {:<18} {:>12} {:>16} {:>16}",
                "ID", "NAME", "TICKER", "TYPE", "SHARES", "AVG COST", "PRICE"
            );
            for h in holdings {
                println!(
                    "{:<38} {:<24} {:<8} {:<18} {:>12} {:>16} {:>16}",
                    h.id,
                    h.name,
                    h.ticker.as_deref().unwrap_or("-"),
                    h.asset_type.label(),
                    format::format_quantity(h.shares),
                    format::format_amount(h.average_cost, h.average_cost_currency),
                    format::format_amount(h.current_price, h.current_price_currency),
                );
            }
        }
        Command::Update {
            id,
            name,
            ticker,
            asset_type,
            shares,
            cost,
            cost_currency,
            price,
            price_currency,
        } => {
            // Merge over the stored holding so partial edits work
            let current = ctx.holdings.get_holding(&id)?;
            let holding = ctx
                .holdings
                .update_holding(HoldingUpdate {
                    id,
                    name: name.unwrap_or(current.name),
                    ticker: ticker.or(current.ticker),
                    asset_type: asset_type.unwrap_or(current.asset_type),
                    shares: shares.unwrap_or(current.shares),
                    average_cost: cost.unwrap_or(current.average_cost),
                    average_cost_currency: cost_currency.unwrap_or(current.average_cost_currency),
                    current_price: price.unwrap_or(current.current_price),
                    current_price_currency: price_currency
                        .unwrap_or(current.current_price_currency),
                })
                .await?;
            println!("Updated holding '{}' ({})", holding.name, holding.id);
        }
        Command::Delete { id } => {
            ctx.holdings.delete_holding(&id).await?;
            println!("Deleted holding {}", id);
        }
    }
    Ok(())
}
