//! Schema bootstrap
//!
//! Creates the example tables on startup with `CREATE TABLE IF NOT
//! EXISTS`, so running it on every boot is safe. Timestamps are
//! server-assigned: `created_at`/`updated_at` default to `NOW()` and
//! update statements refresh `updated_at` in SQL.
//!
//! When a schema name is configured, the schema itself is created first
//! and the table/index are qualified with it. The pool pins
//! `search_path` to the same schema (see `db::pool`), so repositories
//! keep using unqualified names either way.

use sqlx::PgPool;

use crate::error::{translate_startup_error, DbError, Result};

/// Initialize the schema in the connection's default search_path.
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    init_schema_in(pool, None).await
}

/// Initialize the schema, creating tables that do not yet exist,
/// optionally inside a named schema.
///
/// A connection-level failure here is translated into a diagnostic
/// [`DbError::Unavailable`](crate::DbError::Unavailable), the most
/// common startup failure being an unreachable database or a
/// misconfigured `DATABASE_URL`.
pub async fn init_schema_in(pool: &PgPool, schema: Option<&str>) -> Result<()> {
    let table = qualified_table(schema)?;
    tracing::info!(table = %table, "initializing database schema");

    if let Some(name) = schema {
        sqlx::query(&format!(r#"CREATE SCHEMA IF NOT EXISTS "{name}""#))
            .execute(pool)
            .await
            .map_err(translate_startup_error)?;
    }

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table} (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            description TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#
    ))
    .execute(pool)
    .await
    .map_err(translate_startup_error)?;

    sqlx::query(&format!(
        "CREATE INDEX IF NOT EXISTS idx_items_name ON {table} (name)"
    ))
    .execute(pool)
    .await
    .map_err(translate_startup_error)?;

    Ok(())
}

/// Qualify the table name with the schema, if any.
///
/// The name is interpolated into DDL, so only plain identifiers
/// (letters, digits, underscore, not digit-leading) are accepted.
fn qualified_table(schema: Option<&str>) -> Result<String> {
    match schema {
        None => Ok("items".to_string()),
        Some(name) if is_plain_identifier(name) => Ok(format!(r#""{name}".items"#)),
        Some(name) => Err(DbError::config(format!(
            "invalid schema name '{name}': expected letters, digits, and underscores"
        ))),
    }
}

fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DbConfig;
    use crate::db::pool::create_pool;

    #[test]
    fn qualified_table_accepts_plain_identifiers() {
        assert_eq!(qualified_table(None).unwrap(), "items");
        assert_eq!(
            qualified_table(Some("app_schema")).unwrap(),
            r#""app_schema".items"#
        );
    }

    #[test]
    fn qualified_table_rejects_hostile_names() {
        for bad in ["", "1app", r#"app"; DROP TABLE items; --"#, "app schema"] {
            let err = qualified_table(Some(bad)).unwrap_err();
            assert!(matches!(err, DbError::Config { .. }), "accepted '{bad}'");
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn init_schema_is_idempotent() {
        let config = DbConfig::from_env().expect("DATABASE_URL required");
        let pool = create_pool(&config).await.expect("pool creation failed");

        init_schema_in(&pool, config.schema.as_deref())
            .await
            .expect("first init failed");
        init_schema_in(&pool, config.schema.as_deref())
            .await
            .expect("second init failed");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn init_schema_creates_named_schema() {
        let config = DbConfig::from_env()
            .expect("DATABASE_URL required")
            .with_schema("plinth_bootstrap_check");
        let pool = create_pool(&config).await.expect("pool creation failed");

        init_schema_in(&pool, config.schema.as_deref())
            .await
            .expect("schema init failed");

        // search_path is pinned to the named schema, so the unqualified
        // name must resolve there
        let resolved: (String,) = sqlx::query_as(
            r#"
            SELECT n.nspname
            FROM pg_class c
            JOIN pg_namespace n ON n.oid = c.relnamespace
            WHERE c.oid = to_regclass('items')
            "#,
        )
        .fetch_one(&pool)
        .await
        .expect("lookup failed");
        assert_eq!(resolved.0, "plinth_bootstrap_check");

        sqlx::query("DROP SCHEMA plinth_bootstrap_check CASCADE")
            .execute(&pool)
            .await
            .expect("cleanup failed");
    }
}
