use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use investfolio_core::valuation::{PortfolioAllocation, PortfolioSummary};

use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn portfolio_summary(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PortfolioSummary>> {
    let summary = state.valuation_service.summarize(&id)?;
    Ok(Json(summary))
}

async fn all_summaries(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<PortfolioSummary>>> {
    let summaries = state.valuation_service.summarize_all()?;
    Ok(Json(summaries))
}

async fn portfolio_allocation(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PortfolioAllocation>> {
    let allocation = state.valuation_service.allocation(&id)?;
    Ok(Json(allocation))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolios/summaries", get(all_summaries))
        .route("/portfolios/{id}/summary", get(portfolio_summary))
        .route("/portfolios/{id}/allocation", get(portfolio_allocation))
}
