//! # List Pagination
//!
//! Parses `limit`/`offset` query parameters and windows the product list.

use std::collections::HashMap;

use super::errors::{ApiError, ApiResult};

/// Page size used when no limit is given
pub const DEFAULT_LIMIT: usize = 10;

/// Parsed pagination parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    /// Maximum number of items to return
    pub limit: usize,
    /// Number of items to skip
    pub offset: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl Pagination {
    /// Parse pagination from the raw query map.
    ///
    /// Absent keys take defaults. Values that are not non-negative integers
    /// are rejected, each with its own error kind.
    pub fn from_query(params: &HashMap<String, String>) -> ApiResult<Self> {
        let mut page = Self::default();
        if let Some(raw) = params.get("limit") {
            page.limit = raw.parse().map_err(|_| ApiError::InvalidLimit)?;
        }
        if let Some(raw) = params.get("offset") {
            page.offset = raw.parse().map_err(|_| ApiError::InvalidOffset)?;
        }
        Ok(page)
    }

    /// Apply this window to a list.
    ///
    /// An offset past the end yields an empty page, never an error.
    pub fn window<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset)
            .take(self.limit)
            .collect()
    }
}
