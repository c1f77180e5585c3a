//! Portfolio repository over the local document store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use investfolio_core::errors::{DatabaseError, Error, Result};
use investfolio_core::portfolios::{
    NewPortfolio, Portfolio, PortfolioRepositoryTrait, PortfolioUpdate,
};

use crate::store::LocalStore;

pub struct LocalPortfolioRepository {
    store: Arc<LocalStore>,
}

impl LocalPortfolioRepository {
    pub fn new(store: Arc<LocalStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PortfolioRepositoryTrait for LocalPortfolioRepository {
    async fn create(&self, new_portfolio: NewPortfolio) -> Result<Portfolio> {
        new_portfolio.validate()?;

        self.store.mutate(move |doc| {
            let id = new_portfolio
                .id
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string());
            if doc.portfolios.iter().any(|p| p.id == id) {
                return Err(Error::Database(DatabaseError::UniqueViolation(format!(
                    "portfolio {} already exists",
                    id
                ))));
            }

            let now = Utc::now().naive_utc();
            let portfolio = Portfolio {
                id,
                name: new_portfolio.name.trim().to_string(),
                created_at: now,
                updated_at: now,
            };
            doc.portfolios.push(portfolio.clone());
            Ok(portfolio)
        })
    }

    async fn update(&self, update: PortfolioUpdate) -> Result<Portfolio> {
        update.validate()?;

        self.store.mutate(move |doc| {
            let portfolio = doc
                .portfolios
                .iter_mut()
                .find(|p| p.id == update.id)
                .ok_or_else(|| Error::Database(DatabaseError::NotFound(update.id.clone())))?;
            portfolio.name = update.name.trim().to_string();
            portfolio.updated_at = Utc::now().naive_utc();
            Ok(portfolio.clone())
        })
    }

    async fn delete(&self, portfolio_id: &str) -> Result<usize> {
        let id = portfolio_id.to_string();
        self.store.mutate(move |doc| {
            let before = doc.portfolios.len();
            doc.portfolios.retain(|p| p.id != id);
            Ok(before - doc.portfolios.len())
        })
    }

    fn get_by_id(&self, portfolio_id: &str) -> Result<Portfolio> {
        self.store.read(|doc| {
            doc.portfolios
                .iter()
                .find(|p| p.id == portfolio_id)
                .cloned()
                .ok_or_else(|| Error::Database(DatabaseError::NotFound(portfolio_id.to_string())))
        })?
    }

    fn list(&self) -> Result<Vec<Portfolio>> {
        self.store.read(|doc| {
            let mut portfolios = doc.portfolios.clone();
            portfolios.sort_by(|a, b| {
                a.created_at
                    .cmp(&b.created_at)
                    .then_with(|| a.id.cmp(&b.id))
            });
            portfolios
        })
    }
}
