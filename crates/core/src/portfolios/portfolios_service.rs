use log::debug;
use std::sync::Arc;

use super::portfolios_model::{NewPortfolio, Portfolio, PortfolioUpdate};
use super::portfolios_traits::{PortfolioRepositoryTrait, PortfolioServiceTrait};
use crate::errors::Result;
use crate::holdings::HoldingRepositoryTrait;

/// Service for managing portfolios.
pub struct PortfolioService {
    repository: Arc<dyn PortfolioRepositoryTrait>,
    holding_repository: Arc<dyn HoldingRepositoryTrait>,
}

impl PortfolioService {
    /// Creates a new PortfolioService instance.
    pub fn new(
        repository: Arc<dyn PortfolioRepositoryTrait>,
        holding_repository: Arc<dyn HoldingRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            holding_repository,
        }
    }
}

#[async_trait::async_trait]
impl PortfolioServiceTrait for PortfolioService {
    async fn create_portfolio(&self, new_portfolio: NewPortfolio) -> Result<Portfolio> {
        new_portfolio.validate()?;
        self.repository.create(new_portfolio).await
    }

    async fn update_portfolio(&self, update: PortfolioUpdate) -> Result<Portfolio> {
        update.validate()?;
        self.repository.update(update).await
    }

    /// Deletes a portfolio and every holding attached to it.
    ///
    /// Holdings go first so a storage backend without cascading
    /// deletes never strands orphaned rows.
    async fn delete_portfolio(&self, portfolio_id: &str) -> Result<()> {
        // Surface NotFound before touching holdings
        self.repository.get_by_id(portfolio_id)?;

        let removed = self.holding_repository.delete_by_portfolio(portfolio_id).await?;
        debug!("Removed {} holdings from portfolio {}", removed, portfolio_id);

        self.repository.delete(portfolio_id).await?;
        Ok(())
    }

    fn get_portfolio(&self, portfolio_id: &str) -> Result<Portfolio> {
        self.repository.get_by_id(portfolio_id)
    }

    fn list_portfolios(&self) -> Result<Vec<Portfolio>> {
        self.repository.list()
    }
}
