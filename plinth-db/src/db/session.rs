//! Scoped units of work
//!
//! Two acquisition styles, mirroring how the pool is meant to be used:
//!
//! - [`Database::begin`] hands back a raw [`Transaction`]; dropping it
//!   without an explicit commit rolls back, so release at scope exit is
//!   guaranteed even on early returns and panics.
//! - [`Database::with_transaction`] wraps a closure with a
//!   commit-on-success / rollback-on-failure policy, for callers that
//!   want the policy spelled out rather than relying on drop order.

use futures::future::BoxFuture;
use sqlx::{Postgres, Transaction};

use crate::db::pool::Database;
use crate::error::Result;

impl Database {
    /// Begin a transaction scoped to the caller.
    ///
    /// Commit explicitly with [`Transaction::commit`]; anything else
    /// (drop, early `?` return) rolls back.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>> {
        Ok(self.pool().begin().await?)
    }

    /// Run `op` inside a transaction, committing on `Ok` and rolling
    /// back on `Err`.
    ///
    /// The rollback is issued explicitly so its outcome can be logged;
    /// a rollback failure never masks the operation's own error.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let item = db
    ///     .with_transaction(|tx| {
    ///         Box::pin(async move {
    ///             let item = ItemRepo::create_in(&mut **tx, &NewItem::new("widget")).await?;
    ///             ItemRepo::delete_in(&mut **tx, stale_id).await?;
    ///             Ok(item)
    ///         })
    ///     })
    ///     .await?;
    /// ```
    pub async fn with_transaction<T, F>(&self, op: F) -> Result<T>
    where
        F: for<'t> FnOnce(&'t mut Transaction<'static, Postgres>) -> BoxFuture<'t, Result<T>>,
    {
        let mut tx = self.pool().begin().await?;

        match op(&mut tx).await {
            Ok(value) => {
                tx.commit().await?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::warn!(error = %rollback_err, "transaction rollback failed");
                }
                Err(err)
            }
        }
    }
}
