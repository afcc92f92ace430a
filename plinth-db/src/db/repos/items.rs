//! Item repository
//!
//! CRUD over the example `items` table. `updated_at` is refreshed by the
//! server (`NOW()`) inside the UPDATE statement, never by the client.

use sqlx::{PgConnection, PgPool};

use crate::error::{DbError, Result};
use crate::models::{Item, NewItem, Pagination};

/// Item repository
pub struct ItemRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ItemRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert an item, returning the stored row with server-assigned
    /// id and timestamps.
    pub async fn create(&self, input: &NewItem) -> Result<Item> {
        let mut conn = self.pool.acquire().await?;
        Self::create_in(&mut conn, input).await
    }

    /// Fetch a single item by id.
    pub async fn get(&self, id: i64) -> Result<Item> {
        sqlx::query_as::<_, Item>(
            "SELECT id, name, description, created_at, updated_at FROM items WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("item", id))
    }

    /// List items, newest first.
    pub async fn list(&self, page: Pagination) -> Result<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM items
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// Update name and description; `updated_at` is set server-side.
    pub async fn update(&self, id: i64, input: &NewItem) -> Result<Item> {
        sqlx::query_as::<_, Item>(
            r#"
            UPDATE items
            SET name = $2, description = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.description)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("item", id))
    }

    /// Delete an item, erroring if it did not exist.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let mut conn = self.pool.acquire().await?;
        Self::delete_in(&mut conn, id).await
    }

    /// Insert on an explicit connection, for use inside transactions.
    pub async fn create_in(conn: &mut PgConnection, input: &NewItem) -> Result<Item> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .fetch_one(conn)
        .await?;

        tracing::debug!(id = item.id, name = %item.name, "created item");
        Ok(item)
    }

    /// Delete on an explicit connection, for use inside transactions.
    pub async fn delete_in(conn: &mut PgConnection, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("item", id));
        }
        Ok(())
    }
}
