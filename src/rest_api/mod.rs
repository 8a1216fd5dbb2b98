//! # REST API Module
//!
//! HTTP surface of the catalog: CRUD endpoints for products, the storage
//! health probe, and the router/server assembly around them.

pub mod errors;
pub mod handlers;
pub mod health;
pub mod pagination;
pub mod server;

pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use pagination::Pagination;
pub use server::RestServer;
