//! Holding repository and service traits.

use async_trait::async_trait;

use super::holdings_model::{Holding, HoldingUpdate, NewHolding};
use crate::errors::Result;

/// Contract for holding persistence.
#[async_trait]
pub trait HoldingRepositoryTrait: Send + Sync {
    /// Creates a new holding, minting an id when the input has none.
    async fn create(&self, new_holding: NewHolding) -> Result<Holding>;

    /// Updates an existing holding.
    async fn update(&self, update: HoldingUpdate) -> Result<Holding>;

    /// Deletes a holding by id. Returns the number of deleted records.
    async fn delete(&self, holding_id: &str) -> Result<usize>;

    /// Deletes every holding of a portfolio. Returns the number deleted.
    async fn delete_by_portfolio(&self, portfolio_id: &str) -> Result<usize>;

    /// Retrieves a holding by id.
    fn get_by_id(&self, holding_id: &str) -> Result<Holding>;

    /// Lists a portfolio's holdings ordered by creation time ascending.
    fn list_by_portfolio(&self, portfolio_id: &str) -> Result<Vec<Holding>>;

    /// Lists every holding across all portfolios.
    fn list_all(&self) -> Result<Vec<Holding>>;
}

/// Contract for holding business operations.
#[async_trait]
pub trait HoldingServiceTrait: Send + Sync {
    /// Creates a holding after validating it and checking the target
    /// portfolio exists.
    async fn create_holding(&self, new_holding: NewHolding) -> Result<Holding>;

    /// Updates a holding with validation applied.
    async fn update_holding(&self, update: HoldingUpdate) -> Result<Holding>;

    /// Deletes a holding by id.
    async fn delete_holding(&self, holding_id: &str) -> Result<()>;

    /// Retrieves a holding by id.
    fn get_holding(&self, holding_id: &str) -> Result<Holding>;

    /// Lists a portfolio's holdings.
    fn list_holdings(&self, portfolio_id: &str) -> Result<Vec<Holding>>;
}
