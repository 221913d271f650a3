//! Membership package API endpoints
//!
//! Handles HTTP requests for package CRUD operations.

use crate::api::utils::{validate_name, validate_price, RouterState};
use crate::error::AppError;
use crate::packages::Package;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to create a new package
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePackageRequest {
    /// Display name of the package
    pub name: String,
    /// Package price
    pub price: f64,
    /// Membership duration in days
    pub duration_days: i64,
}

/// Request to update a package
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePackageRequest {
    /// New display name (optional)
    pub name: Option<String>,
    /// New price (optional)
    pub price: Option<f64>,
    /// New duration in days (optional)
    pub duration_days: Option<i64>,
}

/// Message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable message
    pub message: String,
    /// Status indicator (e.g., "ok", "error")
    pub status: String,
}

/// GET /api/packages - List all packages
pub async fn list_packages(
    State((_, _, package_db, _)): State<RouterState>,
) -> Result<Json<Vec<Package>>, AppError> {
    let packages = package_db.list().await?;
    Ok(Json(packages))
}

/// GET /api/packages/:id - Get a specific package
pub async fn get_package(
    State((_, _, package_db, _)): State<RouterState>,
    Path(id): Path<String>,
) -> Result<Json<Package>, AppError> {
    let package = package_db
        .get(&id)
        .await?
        .ok_or(AppError::PackageNotFound(id))?;

    Ok(Json(package))
}

/// POST /api/packages - Create a new package
pub async fn create_package(
    State((_, _, package_db, _)): State<RouterState>,
    Json(request): Json<CreatePackageRequest>,
) -> Result<(StatusCode, Json<Package>), AppError> {
    let name = validate_name(&request.name)?;
    validate_price("price", request.price)?;
    if request.duration_days <= 0 {
        return Err(AppError::InvalidRequest(
            "durationDays must be positive".to_string(),
        ));
    }

    let package = Package::new(
        Uuid::new_v4().to_string(),
        name,
        request.price,
        request.duration_days,
    );
    package_db.create(&package).await?;

    Ok((StatusCode::CREATED, Json(package)))
}

/// PUT /api/packages/:id - Update a package
pub async fn update_package(
    State((_, _, package_db, _)): State<RouterState>,
    Path(id): Path<String>,
    Json(request): Json<UpdatePackageRequest>,
) -> Result<Json<Package>, AppError> {
    let mut package = package_db
        .get(&id)
        .await?
        .ok_or_else(|| AppError::PackageNotFound(id.clone()))?;

    if let Some(name) = request.name {
        package.name = validate_name(&name)?;
    }

    if let Some(price) = request.price {
        validate_price("price", price)?;
        package.price = price;
    }

    if let Some(duration_days) = request.duration_days {
        if duration_days <= 0 {
            return Err(AppError::InvalidRequest(
                "durationDays must be positive".to_string(),
            ));
        }
        package.duration_days = duration_days;
    }

    package_db.update(&package).await?;

    let package = package_db
        .get(&id)
        .await?
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Package not found after update")))?;

    Ok(Json(package))
}

/// DELETE /api/packages/:id - Delete a package
pub async fn delete_package(
    State((_, _, package_db, _)): State<RouterState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    if !package_db.delete(&id).await? {
        return Err(AppError::PackageNotFound(id));
    }

    Ok(Json(MessageResponse {
        message: "Package deleted successfully".to_string(),
        status: "ok".to_string(),
    }))
}
