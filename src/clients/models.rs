//! Client data model

use chrono::Utc;
use serde::Serialize;
use sqlx::FromRow;

/// A gym client
///
/// The client's id doubles as the payload of their check-in QR code.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Unique identifier for the client
    pub id: String,
    /// Client's display name
    pub name: String,
    /// Contact phone number, if known
    pub phone: Option<String>,
    /// Membership package the client is subscribed to, if any
    pub package_id: Option<String>,
    /// When the client was registered (Unix timestamp)
    pub created_at: i64,
    /// When the client was last updated (Unix timestamp)
    pub updated_at: i64,
}

impl Client {
    /// Create a new client
    pub fn new(
        id: String,
        name: String,
        phone: Option<String>,
        package_id: Option<String>,
    ) -> Self {
        let now = Utc::now().timestamp();
        Self {
            id,
            name,
            phone,
            package_id,
            created_at: now,
            updated_at: now,
        }
    }
}
