use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use investfolio_core::portfolios::{NewPortfolio, Portfolio, PortfolioUpdate};

use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn list_portfolios(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Portfolio>>> {
    let portfolios = state.portfolio_service.list_portfolios()?;
    Ok(Json(portfolios))
}

async fn get_portfolio(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Portfolio>> {
    let portfolio = state.portfolio_service.get_portfolio(&id)?;
    Ok(Json(portfolio))
}

async fn create_portfolio(
    State(state): State<Arc<AppState>>,
    Json(new_portfolio): Json<NewPortfolio>,
) -> ApiResult<Json<Portfolio>> {
    let portfolio = state.portfolio_service.create_portfolio(new_portfolio).await?;
    Ok(Json(portfolio))
}

async fn update_portfolio(
    State(state): State<Arc<AppState>>,
    Json(update): Json<PortfolioUpdate>,
) -> ApiResult<Json<Portfolio>> {
    let portfolio = state.portfolio_service.update_portfolio(update).await?;
    Ok(Json(portfolio))
}

async fn delete_portfolio(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.portfolio_service.delete_portfolio(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/portfolios",
            get(list_portfolios)
                .post(create_portfolio)
                .put(update_portfolio),
        )
        .route("/portfolios/{id}", get(get_portfolio).delete(delete_portfolio))
}
