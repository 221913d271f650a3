//! Pricing settings module
//!
//! Maintains the single global pricing configuration record: the per-client
//! gym tariff and the per-client restaurant add-on tariff.

pub mod db;
pub mod models;

pub use db::SettingsDb;
pub use models::PricingSettings;
