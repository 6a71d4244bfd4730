//! Query construction for the list endpoint.
//!
//! # Design
//! `ListQuery` is the transient client-side selection state: status filter,
//! free-text search, sort field, sort order. It is never persisted. The
//! cardinal rule is that an unset dimension is *omitted* from the request
//! entirely, so the server treats it as "match all" rather than filtering
//! down to nothing.

use crate::types::Status;

/// Field the server should order the listing by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    /// No sort requested; ordering is whatever the server returns.
    #[default]
    None,
    Title,
    Status,
}

impl SortField {
    /// Wire value, or `None` when no sort is requested.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            SortField::None => None,
            SortField::Title => Some("title"),
            SortField::Status => Some("status"),
        }
    }
}

/// Direction for a server-side sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

/// Filter, search, and sort selections for the list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub status: Option<Status>,
    pub search: String,
    pub sort: SortField,
    pub order: SortOrder,
}

impl ListQuery {
    /// Query-string pairs for the list request.
    ///
    /// An unset status contributes nothing. The search keyword is trimmed
    /// first and omitted when blank (some pickers hand back `" "` as their
    /// match-all sentinel). `order` only accompanies an explicit sort field;
    /// a direction with nothing to order is meaningless.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status".to_string(), status.as_str().to_string()));
        }
        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(("search".to_string(), search.to_string()));
        }
        if let Some(sort) = self.sort.as_str() {
            pairs.push(("sort".to_string(), sort.to_string()));
            pairs.push(("order".to_string(), self.order.as_str().to_string()));
        }
        pairs
    }
}
