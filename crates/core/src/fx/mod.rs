//! FX module - fixed-rate currency conversion between THB and USD.

mod fx_errors;
mod fx_model;
mod fx_service;
mod fx_traits;

pub use fx_errors::FxError;
pub use fx_model::Currency;
pub use fx_service::FxConverter;
pub use fx_traits::FxServiceTrait;
