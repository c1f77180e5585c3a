//! SQLite storage implementation for Investfolio.
//!
//! This crate provides all database-related functionality using Diesel
//! ORM with SQLite. It implements the repository traits defined in
//! `investfolio-core` and contains:
//! - Connection pooling and management
//! - Embedded Diesel migrations
//! - Repository implementations for portfolios and holdings
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel
//! dependencies exist. Everything else works with the core traits.
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!   storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod holdings;
pub mod portfolios;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool, WriteHandle};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from investfolio-core for convenience
pub use investfolio_core::errors::{DatabaseError, Error, Result};
