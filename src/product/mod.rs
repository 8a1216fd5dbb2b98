//! Product domain model
//!
//! The catalog entry type, its partial-update form, and the reference
//! catalog used to seed fresh data files.

mod model;

pub use model::{seed_products, Product, ProductPatch};
