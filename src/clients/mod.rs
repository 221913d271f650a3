//! Client roster module
//!
//! CRUD over the gym's clients and their package assignments.

pub mod db;
pub mod models;

pub use db::ClientDb;
pub use models::Client;
