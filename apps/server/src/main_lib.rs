//! Application state wiring and tracing setup.

use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use investfolio_core::fx::FxConverter;
use investfolio_core::holdings::{HoldingService, HoldingServiceTrait};
use investfolio_core::portfolios::{PortfolioService, PortfolioServiceTrait};
use investfolio_core::valuation::{ValuationService, ValuationServiceTrait};
use investfolio_storage_sqlite::holdings::HoldingRepository;
use investfolio_storage_sqlite::portfolios::PortfolioRepository;
use investfolio_storage_sqlite::{create_pool, db, run_migrations};

use crate::auth::AuthManager;
use crate::config::Config;

pub struct AppState {
    pub portfolio_service: Arc<dyn PortfolioServiceTrait>,
    pub holding_service: Arc<dyn HoldingServiceTrait>,
    pub valuation_service: Arc<dyn ValuationServiceTrait>,
    /// Present only when a password hash is configured.
    pub auth: Option<Arc<AuthManager>>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("IV_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = create_pool(&db_path)?;
    run_migrations(&pool)?;
    let writer = db::spawn_writer(pool.clone());

    let portfolio_repository = Arc::new(PortfolioRepository::new(pool.clone(), writer.clone()));
    let holding_repository = Arc::new(HoldingRepository::new(pool, writer));

    let fx = Arc::new(FxConverter::new(config.thb_per_usd).map_err(anyhow::Error::new)?);

    let portfolio_service = Arc::new(PortfolioService::new(
        portfolio_repository.clone(),
        holding_repository.clone(),
    ));
    let holding_service = Arc::new(HoldingService::new(
        holding_repository.clone(),
        portfolio_repository.clone(),
    ));
    let valuation_service = Arc::new(ValuationService::new(
        portfolio_repository,
        holding_repository,
        fx,
    ));

    let auth = config
        .password_hash
        .as_ref()
        .map(|hash| Arc::new(AuthManager::new(hash.clone(), &config.secret_key)));
    if auth.is_none() {
        tracing::warn!("IV_AUTH_PASSWORD_HASH is not set; the API runs without authentication");
    }

    Ok(Arc::new(AppState {
        portfolio_service,
        holding_service,
        valuation_service,
        auth,
        db_path,
    }))
}
