//! Portfolio subcommands.

use anyhow::Result;

use investfolio_core::portfolios::{NewPortfolio, PortfolioServiceTrait, PortfolioUpdate};

use crate::context::Context;

#[derive(clap::Parser, Debug)]
pub enum Command {
    /// Create a portfolio
    Add {
        /// Portfolio name
        name: String,
    },
    /// List portfolios
    List,
    /// Rename a portfolio
    Rename {
        /// Portfolio id
        id: String,
        /// New name
        name: String,
    },
    /// Delete a portfolio and all of its holdings
    Delete {
        /// Portfolio id
        id: String,
    },
}

pub async fn run(ctx: &Context, subcmd: Command) -> Result<()> {
    match subcmd {
        Command::Add { name } => {
            let portfolio = ctx
                .portfolios
                .create_portfolio(NewPortfolio { id: None, name })
                .await?;
            println!("Created portfolio '{}' ({})", portfolio.name, portfolio.id);
        }
        Command::List => {
            let portfolios = ctx.portfolios.list_portfolios()?;
            if portfolios.is_empty() {
                println!("No portfolios yet. Create one with 'investfolio portfolio add <NAME>'.");
                return Ok(());
            }
            println!("{:<38} {:<30} {}", "ID", "NAME", "CREATED");
            for p in portfolios {
                println!(
                    "{:<38} {:<30} {}",
                    p.id,
                    p.name,
                    p.created_at.format("%Y-%m-%d")
                );
            }
        }
        Command::Rename { id, name } => {
            let portfolio = ctx
                .portfolios
                .update_portfolio(PortfolioUpdate { id, name })
                .await?;
            println!("Renamed portfolio {} to '{}'", portfolio.id, portfolio.name);
        }
        Command::Delete { id } => {
            ctx.portfolios.delete_portfolio(&id).await?;
            println!("Deleted portfolio {}", id);
        }
    }
    Ok(())
}
