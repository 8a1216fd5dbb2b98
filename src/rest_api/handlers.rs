//! # Product Handlers
//!
//! One handler per endpoint. Reads load the collection and work on the
//! copy; mutations run as a single store transaction so the load-modify-save
//! cycle cannot interleave with another writer.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::product::{Product, ProductPatch};
use crate::store::{FileStore, ProductStore};

use super::errors::{ApiError, ApiResult};
use super::pagination::Pagination;

/// Shared handler state
pub type Store<B> = Arc<ProductStore<B>>;

fn parse_id(raw: &str) -> ApiResult<u64> {
    raw.parse().map_err(|_| ApiError::InvalidId)
}

fn decode_body<T>(body: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    body.map(|Json(value)| value).map_err(|_| ApiError::InvalidBody)
}

/// GET /products
pub async fn list_products<B: FileStore + 'static>(
    State(store): State<Store<B>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<Vec<Product>>> {
    let page = Pagination::from_query(&params)?;
    let products = store.load()?;
    Ok(Json(page.window(products)))
}

/// GET /products/:id
pub async fn get_product<B: FileStore + 'static>(
    State(store): State<Store<B>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Product>> {
    let id = parse_id(&raw_id)?;
    let products = store.load()?;
    products
        .into_iter()
        .find(|p| p.id == id)
        .map(Json)
        .ok_or(ApiError::ProductNotFound)
}

/// POST /products
pub async fn create_product<B: FileStore + 'static>(
    State(store): State<Store<B>>,
    body: Result<Json<Product>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let product = decode_body(body)?;
    let created = store.insert(product)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /products/:id
pub async fn update_product<B: FileStore + 'static>(
    State(store): State<Store<B>>,
    Path(raw_id): Path<String>,
    body: Result<Json<Product>, JsonRejection>,
) -> ApiResult<Json<Product>> {
    let id = parse_id(&raw_id)?;
    let mut replacement = decode_body(body)?;
    // The path id wins over whatever the body carries
    replacement.id = id;

    let updated = store
        .with_products(|products| {
            let slot = products.iter_mut().find(|p| p.id == id)?;
            *slot = replacement.clone();
            Some(replacement)
        })?
        .ok_or(ApiError::ProductNotFound)?;
    Ok(Json(updated))
}

/// PATCH /products/:id
pub async fn patch_product<B: FileStore + 'static>(
    State(store): State<Store<B>>,
    Path(raw_id): Path<String>,
    body: Result<Json<ProductPatch>, JsonRejection>,
) -> ApiResult<Json<Product>> {
    let id = parse_id(&raw_id)?;
    let patch = decode_body(body)?;

    let updated = store
        .with_products(|products| {
            let product = products.iter_mut().find(|p| p.id == id)?;
            patch.apply_to(product);
            Some(product.clone())
        })?
        .ok_or(ApiError::ProductNotFound)?;
    Ok(Json(updated))
}

/// DELETE /products/:id
pub async fn delete_product<B: FileStore + 'static>(
    State(store): State<Store<B>>,
    Path(raw_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&raw_id)?;
    store
        .with_products(|products| {
            let idx = products.iter().position(|p| p.id == id)?;
            // Vec::remove keeps the relative order of the rest
            products.remove(idx);
            Some(())
        })?
        .ok_or(ApiError::ProductNotFound)?;
    Ok(StatusCode::NO_CONTENT)
}
