//! API module
//!
//! Contains HTTP request handlers for gym management endpoints

pub mod checkins;
pub mod clients;
pub mod packages;
pub mod settings;
pub mod utils;
