//! Check-in data model

use chrono::Utc;
use serde::Serialize;
use sqlx::FromRow;

/// A single attendance event for a client
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Checkin {
    /// Unique identifier for the check-in
    pub id: String,
    /// ID of the client who checked in
    pub client_id: String,
    /// When the client checked in (Unix timestamp)
    pub checked_in_at: i64,
}

impl Checkin {
    /// Create a new check-in stamped with the current time
    pub fn new(id: String, client_id: String) -> Self {
        Self {
            id,
            client_id,
            checked_in_at: Utc::now().timestamp(),
        }
    }
}
