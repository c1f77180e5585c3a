//! Service wiring for the local client.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};

use investfolio_core::fx::FxConverter;
use investfolio_core::holdings::HoldingService;
use investfolio_core::portfolios::PortfolioService;
use investfolio_core::valuation::ValuationService;
use investfolio_store_local::{LocalHoldingRepository, LocalPortfolioRepository, LocalStore};

use crate::cli::Command;

/// Everything a subcommand needs, wired over the local store.
pub struct Context {
    pub portfolios: PortfolioService,
    pub holdings: HoldingService,
    pub valuation: ValuationService,
}

impl Context {
    /// Opens the local store (running the legacy upgrade when needed)
    /// and builds the services on top of it.
    pub fn open(params: &Command) -> Result<Self> {
        let data_dir = match &params.data_dir {
            Some(dir) => dir.clone(),
            None => default_data_dir()?,
        };
        log::debug!("Using data directory {}", data_dir.display());

        let store = Arc::new(
            LocalStore::open(&data_dir)
                .with_context(|| format!("could not open store in {}", data_dir.display()))?,
        );
        let portfolio_repository = Arc::new(LocalPortfolioRepository::new(store.clone()));
        let holding_repository = Arc::new(LocalHoldingRepository::new(store));

        let fx = match params.thb_per_usd {
            Some(rate) => FxConverter::new(rate)?,
            None => FxConverter::with_default_rate(),
        };

        Ok(Self {
            portfolios: PortfolioService::new(
                portfolio_repository.clone(),
                holding_repository.clone(),
            ),
            holdings: HoldingService::new(
                holding_repository.clone(),
                portfolio_repository.clone(),
            ),
            valuation: ValuationService::new(
                portfolio_repository,
                holding_repository,
                Arc::new(fx),
            ),
        })
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let home = std::env::var_os("HOME")
        .map(PathBuf::from)
        .context("HOME is not set; pass --data-dir")?;
    Ok(home.join(".investfolio"))
}
