//! Client roster store
//!
//! Handles all database interactions for gym clients.

use crate::clients::Client;
use crate::error::AppError;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

/// Store for gym clients
pub struct ClientDb {
    pool: SqlitePool,
}

impl ClientDb {
    /// Create a store backed by the shared connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get all clients, ordered by registration time
    pub async fn list(&self) -> Result<Vec<Client>, AppError> {
        let clients = sqlx::query_as::<_, Client>(
            "SELECT id, name, phone, package_id, created_at, updated_at \
             FROM clients ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to fetch clients: {}", e)))?;

        Ok(clients)
    }

    /// Get a client by ID
    pub async fn get(&self, id: &str) -> Result<Option<Client>, AppError> {
        let client = sqlx::query_as::<_, Client>(
            "SELECT id, name, phone, package_id, created_at, updated_at \
             FROM clients WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to fetch client: {}", e)))?;

        Ok(client)
    }

    /// Register a new client
    pub async fn create(&self, client: &Client) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO clients (id, name, phone, package_id, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&client.id)
        .bind(&client.name)
        .bind(&client.phone)
        .bind(&client.package_id)
        .bind(client.created_at)
        .bind(client.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to create client: {}", e)))?;

        debug!("Created client: {}", client.id);
        Ok(())
    }

    /// Persist new field values for an existing client
    pub async fn update(&self, client: &Client) -> Result<(), AppError> {
        let updated_at = Utc::now().timestamp();
        sqlx::query(
            "UPDATE clients SET name = ?, phone = ?, package_id = ?, updated_at = ? \
             WHERE id = ?",
        )
        .bind(&client.name)
        .bind(&client.phone)
        .bind(&client.package_id)
        .bind(updated_at)
        .bind(&client.id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to update client: {}", e)))?;

        debug!("Updated client: {}", client.id);
        Ok(())
    }

    /// Delete a client (cascades to their check-ins)
    ///
    /// Returns `true` if a client was deleted.
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to delete client: {}", e)))?;

        debug!("Deleted client: {}", id);
        Ok(result.rows_affected() > 0)
    }
}
