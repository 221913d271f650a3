//! Check-in module
//!
//! Records attendance events for clients scanning their QR code at the desk.

pub mod db;
pub mod models;

pub use db::CheckinDb;
pub use models::Checkin;
