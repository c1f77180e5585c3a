use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::portfolios::dsl::*;

use investfolio_core::errors::Result;
use investfolio_core::portfolios::{
    NewPortfolio, Portfolio, PortfolioRepositoryTrait, PortfolioUpdate,
};

use super::model::PortfolioDB;

/// Repository for managing portfolio data in the database.
pub struct PortfolioRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl PortfolioRepository {
    /// Creates a new PortfolioRepository instance.
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl PortfolioRepositoryTrait for PortfolioRepository {
    async fn create(&self, new_portfolio: NewPortfolio) -> Result<Portfolio> {
        new_portfolio.validate()?;

        self.writer
            .exec(move |conn| {
                let mut portfolio_db: PortfolioDB = new_portfolio.into();
                if portfolio_db.id.is_empty() {
                    portfolio_db.id = uuid::Uuid::new_v4().to_string();
                }

                diesel::insert_into(crate::schema::portfolios::table)
                    .values(&portfolio_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                Ok(portfolio_db.into())
            })
            .await
    }

    async fn update(&self, update: PortfolioUpdate) -> Result<Portfolio> {
        update.validate()?;

        self.writer
            .exec(move |conn| {
                let existing = portfolios
                    .select(PortfolioDB::as_select())
                    .find(&update.id)
                    .first::<PortfolioDB>(conn)
                    .map_err(StorageError::from)?;

                let portfolio_db = PortfolioDB {
                    id: existing.id,
                    name: update.name.trim().to_string(),
                    created_at: existing.created_at,
                    updated_at: chrono::Utc::now().naive_utc(),
                };

                diesel::update(portfolios.find(&portfolio_db.id))
                    .set(&portfolio_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                Ok(portfolio_db.into())
            })
            .await
    }

    async fn delete(&self, portfolio_id_param: &str) -> Result<usize> {
        let id_to_delete = portfolio_id_param.to_string();
        self.writer
            .exec(move |conn| {
                let affected_rows = diesel::delete(portfolios.find(id_to_delete))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(affected_rows)
            })
            .await
    }

    fn get_by_id(&self, portfolio_id_param: &str) -> Result<Portfolio> {
        let mut conn = get_connection(&self.pool)?;

        let portfolio = portfolios
            .select(PortfolioDB::as_select())
            .find(portfolio_id_param)
            .first::<PortfolioDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(portfolio.into())
    }

    fn list(&self) -> Result<Vec<Portfolio>> {
        let mut conn = get_connection(&self.pool)?;

        let results = portfolios
            .select(PortfolioDB::as_select())
            .order((created_at.asc(), id.asc()))
            .load::<PortfolioDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(results.into_iter().map(Portfolio::from).collect())
    }
}
