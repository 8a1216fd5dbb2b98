//! # Product Store
//!
//! File-backed persistence for the product collection. One flat JSON file
//! holds every product; a process-wide lock serializes the load-modify-save
//! cycle so concurrent writers cannot lose each other's updates.

pub mod backend;
pub mod errors;
pub mod local;
pub mod repository;

pub use backend::FileStore;
pub use errors::{StoreError, StoreResult};
pub use local::LocalFileStore;
pub use repository::{next_id, ProductStore};
