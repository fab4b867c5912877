//! # Byline Infrastructure
//!
//! Concrete implementations of the ports defined in `byline-core`.
//! This crate contains the database-backed and in-memory persistence contexts.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory repositories only
//! - `postgres` - PostgreSQL database support via SeaORM

pub mod database;

// Re-exports - In-Memory
pub use database::{InMemoryAuthorRepository, InMemoryPostRepository};

pub use database::DatabaseConfig;

// Re-exports - Postgres
#[cfg(feature = "postgres")]
pub use database::{PostgresAuthorRepository, PostgresPostRepository};
