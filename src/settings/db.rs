//! Pricing settings store
//!
//! Handles all database interactions for the pricing settings singleton.
//! The record lives under a fixed well-known id, and both read and write
//! paths are single atomic upserts, so concurrent first calls cannot create
//! duplicate rows.

use crate::error::AppError;
use crate::settings::PricingSettings;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

/// Well-known id of the singleton settings row
const SINGLETON_ID: &str = "global";

/// Store for the pricing settings singleton
pub struct SettingsDb {
    pool: SqlitePool,
}

impl SettingsDb {
    /// Create a store backed by the shared connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch the settings record, creating it with zero tariffs if absent
    pub async fn fetch(&self) -> Result<PricingSettings, AppError> {
        let now = Utc::now().timestamp();
        sqlx::query(
            "INSERT INTO pricing_settings (id, price_per_client, restaurant_price, created_at, updated_at) \
             VALUES (?, 0, 0, ?, ?) \
             ON CONFLICT(id) DO NOTHING",
        )
        .bind(SINGLETON_ID)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to initialize settings: {}", e)))?;

        self.get().await
    }

    /// Apply a partial update to the settings record
    ///
    /// A field bound as `None` becomes SQL NULL and coalesces back to the
    /// stored value, so only fields that were actually provided change; an
    /// explicit 0 is applied like any other value. When the record does not
    /// exist yet, it is created with the provided values and 0 for anything
    /// omitted.
    pub async fn update(
        &self,
        price_per_client: Option<f64>,
        restaurant_price: Option<f64>,
    ) -> Result<PricingSettings, AppError> {
        let now = Utc::now().timestamp();
        sqlx::query(
            "INSERT INTO pricing_settings (id, price_per_client, restaurant_price, created_at, updated_at) \
             VALUES (?1, COALESCE(?2, 0), COALESCE(?3, 0), ?4, ?4) \
             ON CONFLICT(id) DO UPDATE SET \
                 price_per_client = COALESCE(?2, price_per_client), \
                 restaurant_price = COALESCE(?3, restaurant_price), \
                 updated_at = ?4",
        )
        .bind(SINGLETON_ID)
        .bind(price_per_client)
        .bind(restaurant_price)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to update settings: {}", e)))?;

        debug!(
            price_per_client = ?price_per_client,
            restaurant_price = ?restaurant_price,
            "Updated pricing settings"
        );

        self.get().await
    }

    /// Read the singleton row back
    async fn get(&self) -> Result<PricingSettings, AppError> {
        let settings = sqlx::query_as::<_, PricingSettings>(
            "SELECT price_per_client, restaurant_price, created_at, updated_at \
             FROM pricing_settings WHERE id = ?",
        )
        .bind(SINGLETON_ID)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to fetch settings: {}", e)))?;

        Ok(settings)
    }
}
