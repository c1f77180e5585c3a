//! Route assembly.

use std::sync::Arc;

use axum::middleware;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_bearer;
use crate::main_lib::AppState;

mod auth;
mod holdings;
mod portfolios;
mod valuation;

pub fn app_router(state: Arc<AppState>) -> Router {
    let protected = Router::new()
        .merge(portfolios::router())
        .merge(holdings::router())
        .merge(valuation::router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer));

    Router::new()
        .nest("/api/v1", auth::router().merge(protected))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
