//! API utility functions
//!
//! Contains the shared router state and validation helpers used by the
//! request handlers.

use crate::checkins::CheckinDb;
use crate::clients::ClientDb;
use crate::error::AppError;
use crate::packages::PackageDb;
use crate::settings::SettingsDb;
use std::sync::Arc;

/// Shared state passed to every request handler
///
/// The stores are injected here rather than reached through globals, so
/// handlers and tests always say which repository they talk to.
pub type RouterState = (
    Arc<SettingsDb>,
    Arc<ClientDb>,
    Arc<PackageDb>,
    Arc<CheckinDb>,
);

/// Validate that a price field is a usable tariff
///
/// # Arguments
/// * `field` - Wire name of the field, used in the error message
/// * `value` - Value received in the request
///
/// # Returns
/// * `Ok(())` - Price is valid
/// * `Err(AppError)` - Price is negative or not a finite number
pub fn validate_price(field: &str, value: f64) -> Result<(), AppError> {
    if !value.is_finite() {
        return Err(AppError::InvalidPrice(format!(
            "{} must be a finite number",
            field
        )));
    }
    if value < 0.0 {
        return Err(AppError::InvalidPrice(format!(
            "{} cannot be negative",
            field
        )));
    }
    Ok(())
}

/// Validate a display name, returning it trimmed
pub fn validate_name(name: &str) -> Result<String, AppError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidRequest("Name cannot be empty".to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_price_accepts_zero() {
        assert!(validate_price("price", 0.0).is_ok());
    }

    #[test]
    fn test_validate_price_rejects_negative() {
        assert!(validate_price("price", -1.0).is_err());
    }

    #[test]
    fn test_validate_price_rejects_nan() {
        assert!(validate_price("price", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_name_trims() {
        assert_eq!(validate_name("  Ana  ").unwrap(), "Ana");
    }

    #[test]
    fn test_validate_name_rejects_blank() {
        assert!(validate_name("   ").is_err());
    }
}
