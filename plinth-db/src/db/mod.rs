//! Database layer - pool lifecycle, schema bootstrap, and repositories
//!
//! # Design Principles
//!
//! - One shared `PgPool`, cloned cheaply - no Arc<Mutex<Connection>>
//! - Schema bootstrap is idempotent and safe to run on every startup
//! - Transactions wrap multi-step operations; a dropped transaction rolls back

pub mod pool;
pub mod repos;
pub mod schema;
pub mod session;

pub use pool::Database;
pub use repos::*;
