//! catalogd - a small, self-hostable product catalog REST service
//!
//! Products live in a single flat JSON file. Every request reads the whole
//! collection; every mutation rewrites it under one process-wide lock.

pub mod cli;
pub mod config;
pub mod product;
pub mod rest_api;
pub mod store;
