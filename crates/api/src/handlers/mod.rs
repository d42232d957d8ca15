//! HTTP request handlers, grouped by resource.

pub mod analytics;
pub mod auth;
pub mod customer;
pub mod fabric;
pub mod garment;
pub mod order;
