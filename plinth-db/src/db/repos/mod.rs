//! Repositories over the connection pool
//!
//! One repository per table. Each exposes pool-scoped methods for the
//! common case and `*_in` variants over a raw connection so multi-step
//! operations can share a transaction.

pub mod items;

pub use items::ItemRepo;
