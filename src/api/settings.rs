//! Pricing settings API endpoints
//!
//! Serves the global pricing configuration: a lazy-initialized singleton
//! record holding the per-client gym tariff and the restaurant add-on tariff.

use crate::api::utils::{validate_price, RouterState};
use crate::error::AppError;
use crate::settings::PricingSettings;
use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};

/// Confirmation message returned by the update endpoint
///
/// Kept verbatim for the admin frontend, which displays it as-is.
pub const SETTINGS_UPDATED_MESSAGE: &str = "Configuración de precios actualizada exitosamente.";

/// Request to update pricing settings
///
/// Both fields are optional: a field left out of the JSON body is left
/// unchanged, while an explicit value (including 0) is applied.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    /// New per-client gym tariff
    pub price_per_client: Option<f64>,
    /// New per-client restaurant add-on tariff
    pub restaurant_price: Option<f64>,
}

/// Update settings response
#[derive(Debug, Serialize)]
pub struct UpdateSettingsResponse {
    /// Human-readable confirmation message
    pub message: String,
    /// The settings record after the update
    pub settings: PricingSettings,
}

/// GET /api/settings - Fetch the pricing settings singleton
///
/// Creates the record with zero tariffs on first call.
pub async fn get_settings(
    State((settings_db, _, _, _)): State<RouterState>,
) -> Result<Json<PricingSettings>, AppError> {
    let settings = settings_db.fetch().await?;
    Ok(Json(settings))
}

/// PUT /api/settings - Partially update the pricing settings singleton
pub async fn update_settings(
    State((settings_db, _, _, _)): State<RouterState>,
    Json(request): Json<UpdateSettingsRequest>,
) -> Result<Json<UpdateSettingsResponse>, AppError> {
    if let Some(price) = request.price_per_client {
        validate_price("pricePerClient", price)?;
    }
    if let Some(price) = request.restaurant_price {
        validate_price("restaurantPrice", price)?;
    }

    let settings = settings_db
        .update(request.price_per_client, request.restaurant_price)
        .await?;

    Ok(Json(UpdateSettingsResponse {
        message: SETTINGS_UPDATED_MESSAGE.to_string(),
        settings,
    }))
}
