//! Portfolio repository and service traits.
//!
//! These traits define the contract for portfolio operations without
//! any storage-specific types, allowing both the SQLite backend and
//! the local JSON store to implement them.

use async_trait::async_trait;

use super::portfolios_model::{NewPortfolio, Portfolio, PortfolioUpdate};
use crate::errors::Result;

/// Contract for portfolio persistence.
#[async_trait]
pub trait PortfolioRepositoryTrait: Send + Sync {
    /// Creates a new portfolio, minting an id when the input has none.
    async fn create(&self, new_portfolio: NewPortfolio) -> Result<Portfolio>;

    /// Renames an existing portfolio.
    async fn update(&self, update: PortfolioUpdate) -> Result<Portfolio>;

    /// Deletes a portfolio by id. Returns the number of deleted records.
    async fn delete(&self, portfolio_id: &str) -> Result<usize>;

    /// Retrieves a portfolio by id.
    fn get_by_id(&self, portfolio_id: &str) -> Result<Portfolio>;

    /// Lists portfolios ordered by creation time ascending.
    fn list(&self) -> Result<Vec<Portfolio>>;
}

/// Contract for portfolio business operations.
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    /// Creates a new portfolio with validation applied.
    async fn create_portfolio(&self, new_portfolio: NewPortfolio) -> Result<Portfolio>;

    /// Renames a portfolio with validation applied.
    async fn update_portfolio(&self, update: PortfolioUpdate) -> Result<Portfolio>;

    /// Deletes a portfolio together with its holdings.
    async fn delete_portfolio(&self, portfolio_id: &str) -> Result<()>;

    /// Retrieves a portfolio by id.
    fn get_portfolio(&self, portfolio_id: &str) -> Result<Portfolio>;

    /// Lists all portfolios.
    fn list_portfolios(&self) -> Result<Vec<Portfolio>>;
}
