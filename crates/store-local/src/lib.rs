//! Local JSON-document store for Investfolio.
//!
//! This crate is the anonymous-mode persistence layer: a single
//! versioned JSON document on disk. It implements the repository
//! traits defined in `investfolio-core` and contains:
//! - The versioned document schema (v2: portfolios + holdings)
//! - The upgrade path from the legacy single-portfolio schema (v1)
//! - Repository implementations over the in-memory document
//!
//! Reads are lenient: a missing or unreadable document starts the
//! store empty with a logged warning instead of failing, so a damaged
//! file never locks the user out of their tracker. Writes are atomic
//! (temp file + rename) and do fail loudly.

mod document;
mod holdings;
mod migration;
mod portfolios;
mod store;

pub use holdings::LocalHoldingRepository;
pub use portfolios::LocalPortfolioRepository;
pub use store::LocalStore;

// Re-export from investfolio-core for convenience
pub use investfolio_core::errors::{Error, Result};
