//! plinth-db: async PostgreSQL foundation layer
//!
//! Thin, reusable scaffolding around sqlx for services that need a
//! PostgreSQL backend:
//! - connection pool construction from environment configuration
//! - idempotent schema bootstrap on startup
//! - scoped transactions with commit-on-success / rollback-on-failure
//! - an example `Item` record and repository to copy from
//!
//! The heavy lifting (pooling, query planning, transaction isolation)
//! belongs to sqlx and PostgreSQL; this crate only standardizes how a
//! service wires them together.

pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use config::DbConfig;
pub use db::pool::Database;
pub use db::repos::ItemRepo;
pub use db::schema::{init_schema, init_schema_in};
pub use error::{DbError, Result};
pub use models::{Item, NewItem, Pagination};
