//! Record types
//!
//! `Item` is the example entity the scaffolding ships with: replace it
//! (and its repository) with real domain records when building on this
//! crate. It carries no domain logic beyond a unique identifier and
//! server-assigned timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Example record, as stored in the `items` table
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating or updating an item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Limit/offset window for list queries
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    #[serde(default = "Pagination::default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

impl Pagination {
    const MAX_LIMIT: i64 = 100;

    fn default_limit() -> i64 {
        20
    }

    /// Limit clamped to `1..=100`.
    pub fn limit(&self) -> i64 {
        self.limit.clamp(1, Self::MAX_LIMIT)
    }

    /// Offset clamped to be non-negative.
    pub fn offset(&self) -> i64 {
        self.offset.max(0)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: Self::default_limit(),
            offset: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_clamps() {
        let page = Pagination {
            limit: 5000,
            offset: -3,
        };
        assert_eq!(page.limit(), 100);
        assert_eq!(page.offset(), 0);

        let page = Pagination { limit: 0, offset: 7 };
        assert_eq!(page.limit(), 1);
        assert_eq!(page.offset(), 7);
    }

    #[test]
    fn test_new_item_builder() {
        let input = NewItem::new("widget").with_description("a widget");
        assert_eq!(input.name, "widget");
        assert_eq!(input.description.as_deref(), Some("a widget"));
    }

    #[test]
    fn test_item_serializes_timestamps() {
        let item = Item {
            id: 1,
            name: "widget".into(),
            description: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&item).expect("serialize");
        assert_eq!(json["id"], 1);
        assert!(json["created_at"].is_string());
    }
}
