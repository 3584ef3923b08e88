//! Router assembly: product routes, API docs, health probe, CORS, tracing.

use axum::{
    Json, Router,
    http::{Method, header},
    routing::get,
};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde_json::json;
use std::env;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_scalar::{Scalar, Servable};

use crate::products::handlers;

#[derive(OpenApi)]
#[openapi()]
struct ApiDoc;

fn products_router(db: &DatabaseConnection) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(handlers::get_products))
        .routes(routes!(handlers::search_products))
        .routes(routes!(handlers::create_product))
        .routes(routes!(handlers::update_product))
        .routes(routes!(handlers::delete_product))
        .with_state(db.clone())
}

/// Full application router.
///
/// Product routes live under `/api/products`; a second mount at `/products`
/// is kept for older clients. Only the `/api` mount is documented.
#[must_use]
pub fn app(db: &DatabaseConnection) -> Router {
    let (api_router, api_docs) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api/products", products_router(db))
        .split_for_parts();
    let (legacy_router, _) = OpenApiRouter::new()
        .nest("/products", products_router(db))
        .split_for_parts();

    api_router
        .merge(legacy_router)
        .merge(Scalar::with_url("/docs", api_docs))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
}

/// Liveness probe.
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "message": "Server is running",
        "timestamp": Utc::now(),
        "environment": env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
    }))
}
