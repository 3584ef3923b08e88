use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    Condition,
    sea_query::{Expr, ExprTrait, Func, LikeExpr, SimpleExpr},
};

use super::{PageWindow, SortColumn, SortDirection, params::ListProductsParams};
use crate::products::entity::Column;

/// Canonical, validated filter set for one listing request.
///
/// Built once per request by [`ProductFilters::from_params`] and never
/// mutated afterwards. Both the windowed data statement and the count
/// statement consume the condition produced by [`ProductFilters::condition`],
/// so their predicate lists cannot drift apart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilters {
    /// Name substring to match; `None` means no search predicate.
    pub search: Option<String>,
    /// Inclusive lower price bound.
    pub price_min: Option<Decimal>,
    /// Inclusive upper price bound.
    pub price_max: Option<Decimal>,
    /// Inclusive lower stock bound.
    pub stock_min: Option<i32>,
    /// Inclusive upper stock bound.
    pub stock_max: Option<i32>,
    /// Inclusive lower creation-date bound.
    pub date_from: Option<DateTime<Utc>>,
    /// Inclusive upper creation-date bound.
    pub date_to: Option<DateTime<Utc>>,
    /// Validated sort column.
    pub sort_column: SortColumn,
    /// Validated sort direction.
    pub sort_direction: SortDirection,
    /// Page and page size.
    pub window: PageWindow,
}

impl ProductFilters {
    /// Lenient coercion of raw query parameters.
    ///
    /// A bound that fails to parse is dropped rather than rejected, and the
    /// request proceeds with the remaining filters. Sort tokens outside
    /// their whitelists fall back to the defaults.
    #[must_use]
    pub fn from_params(params: &ListProductsParams) -> Self {
        Self {
            search: params
                .q
                .as_deref()
                .map(str::trim)
                .filter(|term| !term.is_empty())
                .map(ToOwned::to_owned),
            price_min: parse_decimal(params.price_min.as_deref()),
            price_max: parse_decimal(params.price_max.as_deref()),
            stock_min: parse_int(params.stock_min.as_deref()),
            stock_max: parse_int(params.stock_max.as_deref()),
            date_from: parse_timestamp(params.date_from.as_deref()),
            date_to: parse_timestamp(params.date_to.as_deref()),
            sort_column: SortColumn::parse(params.sort_by.as_deref()),
            sort_direction: SortDirection::parse(params.sort_order.as_deref()),
            window: PageWindow::from_raw(params.page.as_deref(), params.limit.as_deref()),
        }
    }

    /// Ordered predicate list, one entry per present bound.
    ///
    /// Every value is bound as a typed parameter; the only identifier-level
    /// substitution anywhere in the listing path is the whitelisted sort
    /// column applied by the caller's ORDER BY.
    fn predicates(&self) -> Vec<SimpleExpr> {
        let mut predicates = Vec::new();
        if let Some(term) = &self.search {
            predicates.push(name_contains(term));
        }
        if let Some(min) = self.price_min {
            predicates.push(Expr::col(Column::Price).gte(min));
        }
        if let Some(max) = self.price_max {
            predicates.push(Expr::col(Column::Price).lte(max));
        }
        if let Some(min) = self.stock_min {
            predicates.push(Expr::col(Column::Stock).gte(min));
        }
        if let Some(max) = self.stock_max {
            predicates.push(Expr::col(Column::Stock).lte(max));
        }
        if let Some(from) = self.date_from {
            predicates.push(Expr::col(Column::CreatedAt).gte(from));
        }
        if let Some(to) = self.date_to {
            predicates.push(Expr::col(Column::CreatedAt).lte(to));
        }
        predicates
    }

    /// Shared WHERE condition consumed by both listing statements.
    #[must_use]
    pub fn condition(&self) -> Condition {
        self.predicates()
            .into_iter()
            .fold(Condition::all(), Condition::add)
    }
}

/// Escape LIKE wildcards so a search term matches literally.
fn escape_like_wildcards(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Case-insensitive substring match on the product name.
fn name_contains(term: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like_wildcards(term).to_uppercase());
    Func::upper(Expr::col(Column::Name)).like(LikeExpr::new(pattern).escape('\\'))
}

fn parse_decimal(raw: Option<&str>) -> Option<Decimal> {
    raw.and_then(|value| value.trim().parse::<Decimal>().ok())
}

fn parse_int(raw: Option<&str>) -> Option<i32> {
    raw.and_then(|value| value.trim().parse::<i32>().ok())
}

/// RFC 3339 first, then a bare `YYYY-MM-DD` taken as midnight UTC.
fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if let Ok(timestamp) = raw.parse::<DateTime<Utc>>() {
        return Some(timestamp);
    }
    raw.parse::<NaiveDate>()
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}
