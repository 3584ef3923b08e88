//! Product catalog HTTP API.
//!
//! Exposes a `products` table over HTTP with free-text search, range
//! filtering, whitelisted sorting, and offset pagination. Every listing
//! request builds one shared WHERE condition that feeds both the windowed
//! data statement and the total-count statement, so page contents and
//! pagination metadata can never disagree about which rows match.

pub mod errors;
pub mod filtering;
pub mod products;
pub mod response;
pub mod routes;
pub mod schema;

pub use errors::ApiError;
