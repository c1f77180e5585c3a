use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::holdings::dsl::*;

use investfolio_core::errors::Result;
use investfolio_core::holdings::{Holding, HoldingRepositoryTrait, HoldingUpdate, NewHolding};

use super::model::HoldingDB;

/// Repository for managing holding data in the database.
pub struct HoldingRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl HoldingRepository {
    /// Creates a new HoldingRepository instance.
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl HoldingRepositoryTrait for HoldingRepository {
    async fn create(&self, new_holding: NewHolding) -> Result<Holding> {
        new_holding.validate()?;

        self.writer
            .exec(move |conn| {
                let mut holding_db: HoldingDB = new_holding.into();
                if holding_db.id.is_empty() {
                    holding_db.id = uuid::Uuid::new_v4().to_string();
                }

                diesel::insert_into(crate::schema::holdings::table)
                    .values(&holding_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                holding_db.try_into()
            })
            .await
    }

    async fn update(&self, update: HoldingUpdate) -> Result<Holding> {
        update.validate()?;

        self.writer
            .exec(move |conn| {
                let existing = holdings
                    .select(HoldingDB::as_select())
                    .find(&update.id)
                    .first::<HoldingDB>(conn)
                    .map_err(StorageError::from)?;

                // portfolio_id and created_at never change on update
                let holding_db = HoldingDB {
                    id: existing.id,
                    portfolio_id: existing.portfolio_id,
                    name: update.name,
                    ticker: update.ticker,
                    asset_type: update.asset_type.as_str().to_string(),
                    shares: update.shares.to_string(),
                    average_cost: update.average_cost.to_string(),
                    average_cost_currency: update.average_cost_currency.code().to_string(),
                    current_price: update.current_price.to_string(),
                    current_price_currency: update.current_price_currency.code().to_string(),
                    created_at: existing.created_at,
                    updated_at: chrono::Utc::now().naive_utc(),
                };

                diesel::update(holdings.find(&holding_db.id))
                    .set(&holding_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                holding_db.try_into()
            })
            .await
    }

    async fn delete(&self, holding_id_param: &str) -> Result<usize> {
        let id_to_delete = holding_id_param.to_string();
        self.writer
            .exec(move |conn| {
                let affected_rows = diesel::delete(holdings.find(id_to_delete))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(affected_rows)
            })
            .await
    }

    async fn delete_by_portfolio(&self, portfolio_id_param: &str) -> Result<usize> {
        let target = portfolio_id_param.to_string();
        self.writer
            .exec(move |conn| {
                let affected_rows = diesel::delete(holdings.filter(portfolio_id.eq(target)))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(affected_rows)
            })
            .await
    }

    fn get_by_id(&self, holding_id_param: &str) -> Result<Holding> {
        let mut conn = get_connection(&self.pool)?;

        let holding = holdings
            .select(HoldingDB::as_select())
            .find(holding_id_param)
            .first::<HoldingDB>(&mut conn)
            .map_err(StorageError::from)?;

        holding.try_into()
    }

    fn list_by_portfolio(&self, portfolio_id_param: &str) -> Result<Vec<Holding>> {
        let mut conn = get_connection(&self.pool)?;

        let results = holdings
            .filter(portfolio_id.eq(portfolio_id_param))
            .select(HoldingDB::as_select())
            .order((created_at.asc(), id.asc()))
            .load::<HoldingDB>(&mut conn)
            .map_err(StorageError::from)?;

        results.into_iter().map(Holding::try_from).collect()
    }

    fn list_all(&self) -> Result<Vec<Holding>> {
        let mut conn = get_connection(&self.pool)?;

        let results = holdings
            .select(HoldingDB::as_select())
            .order((created_at.asc(), id.asc()))
            .load::<HoldingDB>(&mut conn)
            .map_err(StorageError::from)?;

        results.into_iter().map(Holding::try_from).collect()
    }
}
