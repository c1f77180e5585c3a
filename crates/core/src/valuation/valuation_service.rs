//! Service computing portfolio summaries and allocations.

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::valuation_model::{AllocationSlice, PortfolioAllocation, PortfolioSummary};
use crate::errors::Result;
use crate::fx::FxServiceTrait;
use crate::holdings::{AssetType, Holding, HoldingRepositoryTrait};
use crate::portfolios::PortfolioRepositoryTrait;

/// Contract for valuation queries.
pub trait ValuationServiceTrait: Send + Sync {
    /// Aggregated totals for one portfolio.
    fn summarize(&self, portfolio_id: &str) -> Result<PortfolioSummary>;

    /// Totals for every portfolio, in portfolio list order. Loads all
    /// holdings once so an overview needs a single pass.
    fn summarize_all(&self) -> Result<Vec<PortfolioSummary>>;

    /// Market-value breakdown of one portfolio by asset type.
    fn allocation(&self, portfolio_id: &str) -> Result<PortfolioAllocation>;
}

/// Service computing valuations in the base currency.
pub struct ValuationService {
    portfolio_repository: Arc<dyn PortfolioRepositoryTrait>,
    holding_repository: Arc<dyn HoldingRepositoryTrait>,
    fx: Arc<dyn FxServiceTrait>,
}

impl ValuationService {
    pub fn new(
        portfolio_repository: Arc<dyn PortfolioRepositoryTrait>,
        holding_repository: Arc<dyn HoldingRepositoryTrait>,
        fx: Arc<dyn FxServiceTrait>,
    ) -> Self {
        Self {
            portfolio_repository,
            holding_repository,
            fx,
        }
    }

    /// Market value of one holding in base currency.
    fn market_value(&self, holding: &Holding) -> Result<Decimal> {
        let price = self
            .fx
            .to_base(holding.current_price, holding.current_price_currency)?;
        Ok(holding.shares * price)
    }

    /// Cost basis of one holding in base currency.
    fn cost_basis(&self, holding: &Holding) -> Result<Decimal> {
        let cost = self
            .fx
            .to_base(holding.average_cost, holding.average_cost_currency)?;
        Ok(holding.shares * cost)
    }

    fn summarize_holdings(&self, portfolio_id: &str, holdings: &[Holding]) -> Result<PortfolioSummary> {
        let mut market_value = Decimal::ZERO;
        let mut cost_basis = Decimal::ZERO;

        for holding in holdings {
            market_value += self.market_value(holding)?;
            cost_basis += self.cost_basis(holding)?;
        }

        let gain_loss = market_value - cost_basis;
        let gain_loss_pct = if cost_basis > Decimal::ZERO {
            gain_loss / cost_basis
        } else {
            Decimal::ZERO
        };

        Ok(PortfolioSummary {
            portfolio_id: portfolio_id.to_string(),
            currency: self.fx.base_currency(),
            holdings_count: holdings.len(),
            market_value,
            cost_basis,
            gain_loss,
            gain_loss_pct,
        })
    }
}

impl ValuationServiceTrait for ValuationService {
    fn summarize(&self, portfolio_id: &str) -> Result<PortfolioSummary> {
        // Surface NotFound for a dangling id
        self.portfolio_repository.get_by_id(portfolio_id)?;
        let holdings = self.holding_repository.list_by_portfolio(portfolio_id)?;
        self.summarize_holdings(portfolio_id, &holdings)
    }

    fn summarize_all(&self) -> Result<Vec<PortfolioSummary>> {
        let portfolios = self.portfolio_repository.list()?;
        let all_holdings = self.holding_repository.list_all()?;

        let mut by_portfolio: HashMap<&str, Vec<&Holding>> = HashMap::new();
        for holding in &all_holdings {
            by_portfolio
                .entry(holding.portfolio_id.as_str())
                .or_default()
                .push(holding);
        }

        portfolios
            .iter()
            .map(|portfolio| {
                let holdings: Vec<Holding> = by_portfolio
                    .get(portfolio.id.as_str())
                    .map(|hs| hs.iter().map(|&h| h.clone()).collect())
                    .unwrap_or_default();
                self.summarize_holdings(&portfolio.id, &holdings)
            })
            .collect()
    }

    fn allocation(&self, portfolio_id: &str) -> Result<PortfolioAllocation> {
        self.portfolio_repository.get_by_id(portfolio_id)?;
        let holdings = self.holding_repository.list_by_portfolio(portfolio_id)?;

        // Aggregate market value per asset type
        let mut by_type: HashMap<AssetType, Decimal> = HashMap::new();
        let mut total_value = Decimal::ZERO;
        for holding in &holdings {
            let value = self.market_value(holding)?;
            *by_type.entry(holding.asset_type).or_insert(Decimal::ZERO) += value;
            total_value += value;
        }

        let mut slices: Vec<AllocationSlice> = by_type
            .into_iter()
            .map(|(asset_type, market_value)| {
                let weight_pct = if total_value > Decimal::ZERO {
                    (market_value / total_value * dec!(100)).round_dp(2)
                } else {
                    Decimal::ZERO
                };
                AllocationSlice {
                    asset_type,
                    label: asset_type.label().to_string(),
                    market_value,
                    weight_pct,
                }
            })
            .collect();

        // Largest slice first; tie-break on label for stable output
        slices.sort_by(|a, b| {
            b.market_value
                .cmp(&a.market_value)
                .then_with(|| a.label.cmp(&b.label))
        });

        Ok(PortfolioAllocation {
            portfolio_id: portfolio_id.to_string(),
            currency: self.fx.base_currency(),
            total_value,
            slices,
        })
    }
}
