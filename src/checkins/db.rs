//! Check-in store
//!
//! Handles all database interactions for attendance events.

use crate::checkins::Checkin;
use crate::error::AppError;
use sqlx::SqlitePool;
use tracing::debug;

/// Store for client check-ins
pub struct CheckinDb {
    pool: SqlitePool,
}

impl CheckinDb {
    /// Create a store backed by the shared connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Record a check-in
    pub async fn create(&self, checkin: &Checkin) -> Result<(), AppError> {
        sqlx::query("INSERT INTO checkins (id, client_id, checked_in_at) VALUES (?, ?, ?)")
            .bind(&checkin.id)
            .bind(&checkin.client_id)
            .bind(checkin.checked_in_at)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to record check-in: {}", e)))?;

        debug!(
            "Recorded check-in {} for client {}",
            checkin.id, checkin.client_id
        );
        Ok(())
    }

    /// Get all check-ins for a client, newest first
    pub async fn list_for_client(&self, client_id: &str) -> Result<Vec<Checkin>, AppError> {
        let checkins = sqlx::query_as::<_, Checkin>(
            "SELECT id, client_id, checked_in_at FROM checkins \
             WHERE client_id = ? ORDER BY checked_in_at DESC",
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to fetch check-ins: {}", e)))?;

        Ok(checkins)
    }
}
