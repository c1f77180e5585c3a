use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};

use investfolio_core::holdings::{Holding, HoldingUpdate, NewHolding};

use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn list_holdings(
    Path(portfolio_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Holding>>> {
    let holdings = state.holding_service.list_holdings(&portfolio_id)?;
    Ok(Json(holdings))
}

async fn create_holding(
    Path(portfolio_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut new_holding): Json<NewHolding>,
) -> ApiResult<Json<Holding>> {
    // The path owns the portfolio binding
    new_holding.portfolio_id = portfolio_id;
    let holding = state.holding_service.create_holding(new_holding).await?;
    Ok(Json(holding))
}

async fn get_holding(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Holding>> {
    let holding = state.holding_service.get_holding(&id)?;
    Ok(Json(holding))
}

async fn update_holding(
    State(state): State<Arc<AppState>>,
    Json(update): Json<HoldingUpdate>,
) -> ApiResult<Json<Holding>> {
    let holding = state.holding_service.update_holding(update).await?;
    Ok(Json(holding))
}

async fn delete_holding(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.holding_service.delete_holding(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/portfolios/{id}/holdings",
            get(list_holdings).post(create_holding),
        )
        .route("/holdings", put(update_holding))
        .route("/holdings/{id}", get(get_holding).delete(delete_holding))
}
