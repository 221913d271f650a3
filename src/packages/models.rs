//! Membership package data model

use chrono::Utc;
use serde::Serialize;
use sqlx::FromRow;

/// A membership package clients can subscribe to
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    /// Unique identifier for the package
    pub id: String,
    /// Display name of the package
    pub name: String,
    /// Package price
    pub price: f64,
    /// Membership duration in days
    pub duration_days: i64,
    /// When the package was created (Unix timestamp)
    pub created_at: i64,
    /// When the package was last updated (Unix timestamp)
    pub updated_at: i64,
}

impl Package {
    /// Create a new package
    pub fn new(id: String, name: String, price: f64, duration_days: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            id,
            name,
            price,
            duration_days,
            created_at: now,
            updated_at: now,
        }
    }
}
