//! Pricing settings data model

use serde::Serialize;
use sqlx::FromRow;

/// The global pricing configuration record
///
/// Exactly one of these exists in the store, keyed internally by a
/// well-known id. Both tariffs default to 0 until an admin sets them.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PricingSettings {
    /// Per-client gym tariff
    pub price_per_client: f64,
    /// Per-client restaurant add-on tariff
    pub restaurant_price: f64,
    /// When the record was created (Unix timestamp)
    pub created_at: i64,
    /// When the record was last updated (Unix timestamp)
    pub updated_at: i64,
}
