//! Database operations for products.
//!
//! The listing path is the interesting part: [`list`] derives a windowed
//! data statement and an aggregate count statement from one shared
//! condition, so the rows returned and the total reported always agree on
//! which products match. Everything else is a plain single-statement call.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use tracing::debug;

use super::entity::{ActiveModel, Column, Entity, Model};
use super::payload::ValidProduct;
use crate::errors::{ApiError, QueryKind};
use crate::filtering::ProductFilters;

/// One filtered, ordered page of products plus the matching total.
///
/// Both statements are built from the same [`ProductFilters::condition`]
/// call and run sequentially on the caller's task; dropping the future
/// cancels whichever statement is in flight, so a cancelled request never
/// pairs rows with a total from a different filter view. Store errors are
/// surfaced tagged with the statement that failed, never retried here.
///
/// # Errors
///
/// [`ApiError::Query`] when either statement fails.
pub async fn list(
    db: &DatabaseConnection,
    filters: &ProductFilters,
) -> Result<(Vec<Model>, u64), ApiError> {
    let condition = filters.condition();

    let rows = Entity::find()
        .filter(condition.clone())
        .order_by(filters.sort_column.column(), filters.sort_direction.order())
        .offset(filters.window.offset())
        .limit(filters.window.limit)
        .all(db)
        .await
        .map_err(|err| ApiError::query(QueryKind::Data, err))?;

    let total = Entity::find()
        .filter(condition)
        .count(db)
        .await
        .map_err(|err| ApiError::query(QueryKind::Count, err))?;

    debug!(rows = rows.len(), total, "listed products");
    Ok((rows, total))
}

/// Full filtered listing without a pagination window.
///
/// Same predicate routine and ordering as [`list`]; no offset, no limit,
/// no count.
///
/// # Errors
///
/// [`ApiError::Query`] when the statement fails.
pub async fn list_all(
    db: &DatabaseConnection,
    filters: &ProductFilters,
) -> Result<Vec<Model>, ApiError> {
    Entity::find()
        .filter(filters.condition())
        .order_by(filters.sort_column.column(), filters.sort_direction.order())
        .all(db)
        .await
        .map_err(|err| ApiError::query(QueryKind::Data, err))
}

/// Look up one product; zero rows is a normal empty result, not an error.
///
/// # Errors
///
/// [`ApiError::Database`] when the statement fails.
pub async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ApiError> {
    Entity::find_by_id(id).one(db).await.map_err(ApiError::database)
}

/// Insert a product; the store assigns the identifier.
///
/// # Errors
///
/// [`ApiError::Database`] when the insert fails.
pub async fn insert(db: &DatabaseConnection, fields: ValidProduct) -> Result<Model, ApiError> {
    debug!(name = %fields.name, "inserting product");
    ActiveModel {
        name: Set(fields.name),
        price: Set(fields.price),
        stock: Set(fields.stock),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(ApiError::database)
}

/// Replace the mutable fields of a product. `created_at` is left untouched.
///
/// # Errors
///
/// [`ApiError::NotFound`] when the id does not exist,
/// [`ApiError::Database`] when a statement fails.
pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    fields: ValidProduct,
) -> Result<Model, ApiError> {
    let existing = get(db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product", Some(id.to_string())))?;

    let mut active: ActiveModel = existing.into_active_model();
    active.name = Set(fields.name);
    active.price = Set(fields.price);
    active.stock = Set(fields.stock);
    active.update(db).await.map_err(ApiError::database)
}

/// Fetch-then-delete so the caller can return the removed row.
///
/// # Errors
///
/// [`ApiError::NotFound`] when the id does not exist,
/// [`ApiError::Database`] when a statement fails.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<Model, ApiError> {
    let existing = get(db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product", Some(id.to_string())))?;

    Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(ApiError::database)?;
    Ok(existing)
}

/// Name-contains search ordered by newest id first.
///
/// Reuses the listing predicate routine so the match semantics cannot
/// diverge from the filtered listing's search.
///
/// # Errors
///
/// [`ApiError::Query`] when the statement fails.
pub async fn search(db: &DatabaseConnection, term: &str) -> Result<Vec<Model>, ApiError> {
    let filters = ProductFilters {
        search: Some(term.to_owned()),
        ..Default::default()
    };
    Entity::find()
        .filter(filters.condition())
        .order_by_desc(Column::Id)
        .all(db)
        .await
        .map_err(|err| ApiError::query(QueryKind::Data, err))
}
