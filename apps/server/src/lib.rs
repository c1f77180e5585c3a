//! Investfolio hosted backend.
//!
//! A small axum API over the SQLite store: portfolio and holding CRUD
//! plus summary/allocation queries, optionally guarded by a password
//! login that issues bearer tokens.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod main_lib;

pub use main_lib::{build_state, init_tracing, AppState};
