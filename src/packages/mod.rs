//! Membership packages module
//!
//! CRUD over the gym's membership packages (name, price, duration).

pub mod db;
pub mod models;

pub use db::PackageDb;
pub use models::Package;
