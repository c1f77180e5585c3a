//! Valuation module - portfolio summaries and allocation breakdowns.

mod valuation_model;
mod valuation_service;
mod valuation_service_tests;

pub use valuation_model::{AllocationSlice, PortfolioAllocation, PortfolioSummary};
pub use valuation_service::ValuationService;
pub use valuation_service::ValuationServiceTrait;
