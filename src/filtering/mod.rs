//! Query-parameter handling for product listings.
//!
//! Three stages, composed per request:
//!
//! - [`params::ListProductsParams`]: the raw, all-optional query parameters.
//! - [`filters::ProductFilters`]: the canonical filter set after lenient
//!   coercion, plus the shared WHERE condition both listing statements use.
//! - [`pagination::Pagination`]: metadata assembled from page, page size,
//!   and the count statement's total.
//!
//! Coercion is deliberately lenient: a bound that fails to parse is dropped,
//! an unknown sort token falls back to its default. Malformed filter input
//! never fails a request.

pub mod filters;
pub mod pagination;
pub mod params;
pub mod sort;

pub use filters::ProductFilters;
pub use pagination::{PageWindow, Pagination};
pub use params::{ListProductsParams, SearchParams};
pub use sort::{SortColumn, SortDirection};
