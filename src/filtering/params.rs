use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters accepted by the product listing endpoint.
///
/// Every field arrives as an optional string and is coerced leniently by
/// [`super::ProductFilters::from_params`]: values that fail to parse are
/// dropped (bounds) or replaced with their defaults (sort, page, limit)
/// rather than rejected.
///
/// # Examples
///
/// ```text
/// GET /api/products?page=2&limit=10&q=cable&sortBy=price&sortOrder=asc
/// GET /api/products?priceMin=10&priceMax=20&stockMin=1
/// GET /api/products?dateFrom=2024-01-01&dateTo=2024-06-30T23:59:59Z
/// GET /api/products?all=1&q=cable
/// GET /api/products?id=42
/// ```
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct ListProductsParams {
    /// Look up a single product by its identifier instead of listing.
    #[param(example = "42")]
    pub id: Option<String>,
    /// Set to `1` to return the full filtered listing without pagination.
    #[param(example = "1")]
    pub all: Option<String>,
    /// Free-text search over the product name (case-insensitive substring).
    #[param(example = "usb cable")]
    pub q: Option<String>,
    /// 1-based page number. Default 1.
    #[param(example = "1")]
    pub page: Option<String>,
    /// Page size. Default 5, maximum 200.
    #[param(example = "5")]
    pub limit: Option<String>,
    /// Sort column: `id`, `name`, `price`, `stock`, or `created_at`.
    /// Default `id`.
    #[param(example = "price")]
    pub sort_by: Option<String>,
    /// Sort direction: `asc` or `desc`. Default `desc`.
    #[param(example = "desc")]
    pub sort_order: Option<String>,
    /// Lower price bound (inclusive).
    #[param(example = "9.99")]
    pub price_min: Option<String>,
    /// Upper price bound (inclusive).
    #[param(example = "199.99")]
    pub price_max: Option<String>,
    /// Lower stock bound (inclusive).
    #[param(example = "1")]
    pub stock_min: Option<String>,
    /// Upper stock bound (inclusive).
    #[param(example = "500")]
    pub stock_max: Option<String>,
    /// Lower creation-date bound (RFC 3339 or `YYYY-MM-DD`).
    #[param(example = "2024-01-01")]
    pub date_from: Option<String>,
    /// Upper creation-date bound (RFC 3339 or `YYYY-MM-DD`).
    #[param(example = "2024-12-31")]
    pub date_to: Option<String>,
}

impl ListProductsParams {
    /// Whether the caller asked for the unpaginated listing (`all=1`).
    #[must_use]
    pub fn wants_all(&self) -> bool {
        self.all
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            == Some(1)
    }
}

/// Query parameters for the legacy name-search endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Search term, required.
    #[param(example = "usb cable")]
    pub q: Option<String>,
}
