use sea_orm::Order;

use crate::products::entity::Column;

/// Whitelisted sort columns for product listings.
///
/// The sort column is the one token spliced into a statement as an
/// identifier rather than bound as a parameter, so it must come from this
/// closed set. Anything a caller sends that is not on the whitelist falls
/// back to [`SortColumn::Id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    /// Product identifier (the default).
    #[default]
    Id,
    /// Product name.
    Name,
    /// Unit price.
    Price,
    /// Units in stock.
    Stock,
    /// Creation timestamp.
    CreatedAt,
}

impl SortColumn {
    /// Case-insensitive parse against the whitelist.
    ///
    /// Accepts the legacy `productid`/`productname` spellings some clients
    /// still send.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("name" | "productname") => Self::Name,
            Some("price") => Self::Price,
            Some("stock") => Self::Stock,
            Some("created_at" | "createdat") => Self::CreatedAt,
            _ => Self::Id,
        }
    }

    /// The entity column this token resolves to.
    #[must_use]
    pub fn column(self) -> Column {
        match self {
            Self::Id => Column::Id,
            Self::Name => Column::Name,
            Self::Price => Column::Price,
            Self::Stock => Column::Stock,
            Self::CreatedAt => Column::CreatedAt,
        }
    }
}

/// Sort direction; anything that is not `asc` is treated as descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order (the default).
    #[default]
    Desc,
}

impl SortDirection {
    /// Case-insensitive parse; unknown tokens fall back to descending.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.trim().eq_ignore_ascii_case("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }

    /// The Sea-ORM ordering this direction resolves to.
    #[must_use]
    pub fn order(self) -> Order {
        match self {
            Self::Asc => Order::Asc,
            Self::Desc => Order::Desc,
        }
    }
}
