//! Membership package store
//!
//! Handles all database interactions for membership packages.

use crate::error::AppError;
use crate::packages::Package;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

/// Store for membership packages
pub struct PackageDb {
    pool: SqlitePool,
}

impl PackageDb {
    /// Create a store backed by the shared connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get all packages, ordered by creation time
    pub async fn list(&self) -> Result<Vec<Package>, AppError> {
        let packages = sqlx::query_as::<_, Package>(
            "SELECT id, name, price, duration_days, created_at, updated_at \
             FROM packages ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to fetch packages: {}", e)))?;

        Ok(packages)
    }

    /// Get a package by ID
    pub async fn get(&self, id: &str) -> Result<Option<Package>, AppError> {
        let package = sqlx::query_as::<_, Package>(
            "SELECT id, name, price, duration_days, created_at, updated_at \
             FROM packages WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to fetch package: {}", e)))?;

        Ok(package)
    }

    /// Create a new package
    pub async fn create(&self, package: &Package) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO packages (id, name, price, duration_days, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&package.id)
        .bind(&package.name)
        .bind(package.price)
        .bind(package.duration_days)
        .bind(package.created_at)
        .bind(package.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to create package: {}", e)))?;

        debug!("Created package: {}", package.id);
        Ok(())
    }

    /// Persist new field values for an existing package
    pub async fn update(&self, package: &Package) -> Result<(), AppError> {
        let updated_at = Utc::now().timestamp();
        sqlx::query(
            "UPDATE packages SET name = ?, price = ?, duration_days = ?, updated_at = ? \
             WHERE id = ?",
        )
        .bind(&package.name)
        .bind(package.price)
        .bind(package.duration_days)
        .bind(updated_at)
        .bind(&package.id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to update package: {}", e)))?;

        debug!("Updated package: {}", package.id);
        Ok(())
    }

    /// Delete a package, detaching it from any clients
    ///
    /// Returns `true` if a package was deleted. Clients referencing the
    /// package keep their row with `package_id` cleared (FK ON DELETE SET NULL).
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM packages WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to delete package: {}", e)))?;

        debug!("Deleted package: {}", id);
        Ok(result.rows_affected() > 0)
    }
}
