//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod analytics_repo;
pub mod customer_repo;
pub mod fabric_repo;
pub mod garment_repo;
pub mod order_repo;
pub mod user_repo;

pub use analytics_repo::AnalyticsRepo;
pub use customer_repo::CustomerRepo;
pub use fabric_repo::FabricRepo;
pub use garment_repo::GarmentRepo;
pub use order_repo::{OrderRepo, PlaceOrderError};
pub use user_repo::UserRepo;
