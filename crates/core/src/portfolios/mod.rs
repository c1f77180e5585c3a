//! Portfolios module - domain models, services, and traits.

mod portfolios_model;
mod portfolios_model_tests;
mod portfolios_service;
mod portfolios_traits;

// Re-export the public interface
pub use portfolios_model::{NewPortfolio, Portfolio, PortfolioUpdate};
pub use portfolios_service::PortfolioService;
pub use portfolios_traits::{PortfolioRepositoryTrait, PortfolioServiceTrait};
