//! HTTP handlers for the product routes.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DatabaseConnection;

use super::{Product, ProductInput, queries};
use crate::errors::ApiError;
use crate::filtering::{ListProductsParams, Pagination, ProductFilters, SearchParams};
use crate::response::ApiResponse;

/// Listing endpoint, three shapes behind one route: `?id=` single lookup,
/// `?all=1` unpaginated filtered listing, otherwise a paginated listing.
#[utoipa::path(
    get,
    path = "/",
    params(ListProductsParams),
    responses(
        (status = axum::http::StatusCode::OK, description = "Product listing with pagination metadata", body = ApiResponse<Vec<Product>>),
        (status = axum::http::StatusCode::BAD_REQUEST, description = "Malformed id parameter"),
        (status = axum::http::StatusCode::NOT_FOUND, description = "Unknown product id"),
        (status = axum::http::StatusCode::INTERNAL_SERVER_ERROR, description = "Query execution failed")
    )
)]
pub async fn get_products(
    State(db): State<DatabaseConnection>,
    Query(params): Query<ListProductsParams>,
) -> Result<Response, ApiError> {
    if let Some(raw) = params.id.as_deref() {
        return get_by_id(&db, raw).await;
    }

    let filters = ProductFilters::from_params(&params);

    if params.wants_all() {
        let products = queries::list_all(&db, &filters).await?;
        return Ok(Json(ApiResponse::new(
            products,
            "All products retrieved successfully",
        ))
        .into_response());
    }

    let (products, total) = queries::list(&db, &filters).await?;
    let pagination = Pagination::assemble(filters.window.page, filters.window.limit, total);
    Ok(Json(ApiResponse::paginated(
        products,
        pagination,
        "Products retrieved successfully",
    ))
    .into_response())
}

async fn get_by_id(db: &DatabaseConnection, raw: &str) -> Result<Response, ApiError> {
    let id = raw
        .trim()
        .parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::bad_request("ID must be a positive integer"))?;
    let product = queries::get(db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product", Some(id.to_string())))?;
    Ok(Json(ApiResponse::new(product, "Product retrieved successfully")).into_response())
}

/// Legacy name-search endpoint; `q` is required here, unlike the listing.
#[utoipa::path(
    get,
    path = "/search",
    params(SearchParams),
    responses(
        (status = axum::http::StatusCode::OK, description = "Matching products, newest first", body = ApiResponse<Vec<Product>>),
        (status = axum::http::StatusCode::BAD_REQUEST, description = "Missing search term")
    )
)]
pub async fn search_products(
    State(db): State<DatabaseConnection>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<Vec<Product>>>, ApiError> {
    let term = params.q.as_deref().map(str::trim).unwrap_or_default();
    if term.is_empty() {
        return Err(ApiError::bad_request("Search term is required"));
    }
    let products = queries::search(&db, term).await?;
    Ok(Json(ApiResponse::new(
        products,
        "Search completed successfully",
    )))
}

/// Create a product.
#[utoipa::path(
    post,
    path = "/",
    request_body = ProductInput,
    responses(
        (status = axum::http::StatusCode::CREATED, description = "Product created", body = ApiResponse<Product>),
        (status = axum::http::StatusCode::BAD_REQUEST, description = "Validation failed")
    )
)]
pub async fn create_product(
    State(db): State<DatabaseConnection>,
    Json(input): Json<ProductInput>,
) -> Result<(StatusCode, Json<ApiResponse<Product>>), ApiError> {
    let fields = input.validate()?;
    let product = queries::insert(&db, fields).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(product, "Product created successfully")),
    ))
}

/// Update a product's name, price, and stock.
#[utoipa::path(
    put,
    path = "/{id}",
    request_body = ProductInput,
    responses(
        (status = axum::http::StatusCode::OK, description = "Product updated", body = ApiResponse<Product>),
        (status = axum::http::StatusCode::BAD_REQUEST, description = "Validation failed"),
        (status = axum::http::StatusCode::NOT_FOUND, description = "Unknown product id")
    )
)]
pub async fn update_product(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
    Json(input): Json<ProductInput>,
) -> Result<Json<ApiResponse<Product>>, ApiError> {
    let fields = input.validate()?;
    let product = queries::update(&db, id, fields).await?;
    Ok(Json(ApiResponse::new(
        product,
        "Product updated successfully",
    )))
}

/// Delete a product and return the removed row.
#[utoipa::path(
    delete,
    path = "/{id}",
    responses(
        (status = axum::http::StatusCode::OK, description = "Product deleted", body = ApiResponse<Product>),
        (status = axum::http::StatusCode::NOT_FOUND, description = "Unknown product id")
    )
)]
pub async fn delete_product(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Product>>, ApiError> {
    let product = queries::delete(&db, id).await?;
    Ok(Json(ApiResponse::new(
        product,
        "Product deleted successfully",
    )))
}
