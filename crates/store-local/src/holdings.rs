//! Holding repository over the local document store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use investfolio_core::errors::{DatabaseError, Error, Result};
use investfolio_core::holdings::{Holding, HoldingRepositoryTrait, HoldingUpdate, NewHolding};

use crate::store::LocalStore;

pub struct LocalHoldingRepository {
    store: Arc<LocalStore>,
}

impl LocalHoldingRepository {
    pub fn new(store: Arc<LocalStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl HoldingRepositoryTrait for LocalHoldingRepository {
    async fn create(&self, new_holding: NewHolding) -> Result<Holding> {
        new_holding.validate()?;

        self.store.mutate(move |doc| {
            let id = new_holding
                .id
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string());
            if doc.holdings.iter().any(|h| h.id == id) {
                return Err(Error::Database(DatabaseError::UniqueViolation(format!(
                    "holding {} already exists",
                    id
                ))));
            }

            let now = Utc::now().naive_utc();
            let holding = Holding {
                id,
                portfolio_id: new_holding.portfolio_id.clone(),
                name: new_holding.name.clone(),
                ticker: new_holding.ticker.clone(),
                asset_type: new_holding.asset_type,
                shares: new_holding.shares,
                average_cost: new_holding.average_cost,
                average_cost_currency: new_holding.average_cost_currency,
                current_price: new_holding.current_price,
                current_price_currency: new_holding.current_price_currency,
                created_at: now,
                updated_at: now,
            };
            doc.holdings.push(holding.clone());
            Ok(holding)
        })
    }

    async fn update(&self, update: HoldingUpdate) -> Result<Holding> {
        update.validate()?;

        self.store.mutate(move |doc| {
            let holding = doc
                .holdings
                .iter_mut()
                .find(|h| h.id == update.id)
                .ok_or_else(|| Error::Database(DatabaseError::NotFound(update.id.clone())))?;

            // portfolio_id and created_at never change on update
            holding.name = update.name.clone();
            holding.ticker = update.ticker.clone();
            holding.asset_type = update.asset_type;
            holding.shares = update.shares;
            holding.average_cost = update.average_cost;
            holding.average_cost_currency = update.average_cost_currency;
            holding.current_price = update.current_price;
            holding.current_price_currency = update.current_price_currency;
            holding.updated_at = Utc::now().naive_utc();
            Ok(holding.clone())
        })
    }

    async fn delete(&self, holding_id: &str) -> Result<usize> {
        let id = holding_id.to_string();
        self.store.mutate(move |doc| {
            let before = doc.holdings.len();
            doc.holdings.retain(|h| h.id != id);
            Ok(before - doc.holdings.len())
        })
    }

    async fn delete_by_portfolio(&self, portfolio_id: &str) -> Result<usize> {
        let id = portfolio_id.to_string();
        self.store.mutate(move |doc| {
            let before = doc.holdings.len();
            doc.holdings.retain(|h| h.portfolio_id != id);
            Ok(before - doc.holdings.len())
        })
    }

    fn get_by_id(&self, holding_id: &str) -> Result<Holding> {
        self.store.read(|doc| {
            doc.holdings
                .iter()
                .find(|h| h.id == holding_id)
                .cloned()
                .ok_or_else(|| Error::Database(DatabaseError::NotFound(holding_id.to_string())))
        })?
    }

    fn list_by_portfolio(&self, portfolio_id: &str) -> Result<Vec<Holding>> {
        self.store.read(|doc| {
            let mut holdings: Vec<Holding> = doc
                .holdings
                .iter()
                .filter(|h| h.portfolio_id == portfolio_id)
                .cloned()
                .collect();
            holdings.sort_by(|a, b| {
                a.created_at
                    .cmp(&b.created_at)
                    .then_with(|| a.id.cmp(&b.id))
            });
            holdings
        })
    }

    fn list_all(&self) -> Result<Vec<Holding>> {
        self.store.read(|doc| doc.holdings.clone())
    }
}
