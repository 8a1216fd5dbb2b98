//! # REST API HTTP Server
//!
//! Axum-based HTTP server for the product endpoints.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::store::{FileStore, ProductStore};

use super::errors::ApiError;
use super::handlers;
use super::health;

/// REST API server for the product catalog
pub struct RestServer<B: FileStore> {
    config: AppConfig,
    store: Arc<ProductStore<B>>,
}

impl<B: FileStore + 'static> RestServer<B> {
    /// Create a new server over the given store
    pub fn new(config: AppConfig, store: ProductStore<B>) -> Self {
        Self {
            config,
            store: Arc::new(store),
        }
    }

    /// Build the router with all routes and middleware (public for tests)
    pub fn router(&self) -> Router {
        // Configure CORS from config
        let cors = if self.config.cors_origins.is_empty() {
            // If no origins configured, use permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            // Use configured origins for production
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = self
                .config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route(
                "/products",
                get(handlers::list_products::<B>).post(handlers::create_product::<B>),
            )
            .route(
                "/products/:id",
                get(handlers::get_product::<B>)
                    .put(handlers::update_product::<B>)
                    .patch(handlers::patch_product::<B>)
                    .delete(handlers::delete_product::<B>),
            )
            .route("/health", get(health::health::<B>))
            .fallback(route_not_found)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(self.store.clone())
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let router = self.router();

        tracing::info!(
            addr = %self.config.bind_addr,
            data_file = %self.store.path().display(),
            "starting catalogd"
        );

        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}

/// Fallback for requests that match no route
async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}
