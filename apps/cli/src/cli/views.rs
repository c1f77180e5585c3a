//! Read-only views: summary, allocation, overview.

use anyhow::Result;

use investfolio_core::portfolios::PortfolioServiceTrait;
use investfolio_core::valuation::ValuationServiceTrait;

use crate::context::Context;
use crate::format::{format_allocation, format_percent, format_thb};

#[derive(clap::Parser, Debug)]
pub struct SummaryArgs {
    /// Portfolio id; all portfolios when omitted
    pub portfolio: Option<String>,
}

#[derive(clap::Parser, Debug)]
pub struct AllocationArgs {
    /// Portfolio id
    pub portfolio: String,
}

pub fn summary(ctx: &Context, args: SummaryArgs) -> Result<()> {
    match args.portfolio {
        Some(portfolio_id) => {
            let portfolio = ctx.portfolios.get_portfolio(&portfolio_id)?;
            let summary = ctx.valuation.summarize(&portfolio_id)?;

            println!("{}", portfolio.name);
            println!(
                "{} {}",
                summary.holdings_count,
                if summary.holdings_count == 1 { "holding" } else { "holdings" }
            );
            println!();
            println!("Market Value  {:>18}", format_thb(summary.market_value));
            println!("Total Cost    {:>18}", format_thb(summary.cost_basis));
            println!("Gain / Loss   {:>18}", format_thb(summary.gain_loss));
            println!("Return        {:>18}", format_percent(summary.gain_loss_pct));
        }
        None => overview(ctx)?,
    }
    Ok(())
}

pub fn overview(ctx: &Context) -> Result<()> {
    let portfolios = ctx.portfolios.list_portfolios()?;
    if portfolios.is_empty() {
        println!("No portfolios yet. Create one with 'investfolio portfolio add <NAME>'.");
        return Ok(());
    }

    let summaries = ctx.valuation.summarize_all()?;

    println!(
        "{:<30} {:>9} {:>18} {:>18} {:>10}",
        "PORTFOLIO", "HOLDINGS", "MARKET VALUE", "GAIN/LOSS", "RETURN"
    );
    for (portfolio, summary) in portfolios.iter().zip(summaries.iter()) {
        println!(
            "{:<30} {:>9} {:>18} {:>18} {:>10}",
            portfolio.name,
            summary.holdings_count,
            format_thb(summary.market_value),
            format_thb(summary.gain_loss),
            format_percent(summary.gain_loss_pct),
        );
    }
    Ok(())
}

pub fn allocation(ctx: &Context, args: AllocationArgs) -> Result<()> {
    let portfolio = ctx.portfolios.get_portfolio(&args.portfolio)?;
    let allocation = ctx.valuation.allocation(&args.portfolio)?;

    println!("{}", portfolio.name);
    println!("Total {}", format_thb(allocation.total_value));
    println!();

    if allocation.slices.is_empty() {
        println!("This portfolio is empty.");
        return Ok(());
    }

    println!("{:<22} {:>18} {:>9}", "ASSET TYPE", "MARKET VALUE", "WEIGHT");
    for slice in &allocation.slices {
        println!(
            "{:<22} {:>18} {:>9}",
            slice.label,
            format_thb(slice.market_value),
            format_allocation(slice.weight_pct),
        );
    }
    Ok(())
}
