use std::sync::Arc;

use super::holdings_model::{Holding, HoldingUpdate, NewHolding};
use super::holdings_traits::{HoldingRepositoryTrait, HoldingServiceTrait};
use crate::errors::Result;
use crate::portfolios::PortfolioRepositoryTrait;

/// Service for managing holdings.
pub struct HoldingService {
    repository: Arc<dyn HoldingRepositoryTrait>,
    portfolio_repository: Arc<dyn PortfolioRepositoryTrait>,
}

impl HoldingService {
    /// Creates a new HoldingService instance.
    pub fn new(
        repository: Arc<dyn HoldingRepositoryTrait>,
        portfolio_repository: Arc<dyn PortfolioRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            portfolio_repository,
        }
    }
}

#[async_trait::async_trait]
impl HoldingServiceTrait for HoldingService {
    async fn create_holding(&self, mut new_holding: NewHolding) -> Result<Holding> {
        new_holding.normalize();
        new_holding.validate()?;

        // A holding must land in an existing portfolio
        self.portfolio_repository.get_by_id(&new_holding.portfolio_id)?;

        self.repository.create(new_holding).await
    }

    async fn update_holding(&self, mut update: HoldingUpdate) -> Result<Holding> {
        update.normalize();
        update.validate()?;
        self.repository.update(update).await
    }

    async fn delete_holding(&self, holding_id: &str) -> Result<()> {
        self.repository.delete(holding_id).await?;
        Ok(())
    }

    fn get_holding(&self, holding_id: &str) -> Result<Holding> {
        self.repository.get_by_id(holding_id)
    }

    fn list_holdings(&self, portfolio_id: &str) -> Result<Vec<Holding>> {
        self.repository.list_by_portfolio(portfolio_id)
    }
}
