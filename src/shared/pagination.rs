// src/shared/pagination.rs

use sea_orm::QuerySelect;
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

/// `-1` in both `currentPage` and `perPage` asks for every row.
pub const ALL_ROWS_SENTINEL: i64 = -1;

//
// ──────────────────────────────────────────────────────────
// Query string
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    pub current_page: i64,
    pub per_page: i64,
    /// Case-insensitive substring filter on the name column
    pub name: Option<String>,
}

impl ListQuery {
    pub fn page_request(&self) -> Result<PageRequest, PaginationError> {
        PageRequest::from_raw(self.current_page, self.per_page)
    }

    pub fn name_filter(&self) -> Option<String> {
        normalize_filter(self.name.as_deref())
    }
}

pub fn normalize_filter(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

//
// ──────────────────────────────────────────────────────────
// Page request
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    All,
    Page { page: u64, per_page: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    #[error("currentPage and perPage must both be positive, or both be -1")]
    InvalidRange,
    #[error("currentPage and perPage are too large")]
    OutOfRange,
}

impl PageRequest {
    pub fn from_raw(current_page: i64, per_page: i64) -> Result<Self, PaginationError> {
        match (current_page, per_page) {
            (ALL_ROWS_SENTINEL, ALL_ROWS_SENTINEL) => Ok(PageRequest::All),
            (page, per_page) if page > 0 && per_page > 0 => {
                // OFFSET is bound as a signed BIGINT
                (page - 1)
                    .checked_mul(per_page)
                    .ok_or(PaginationError::OutOfRange)?;
                Ok(PageRequest::Page {
                    page: page as u64,
                    per_page: per_page as u64,
                })
            }
            _ => Err(PaginationError::InvalidRange),
        }
    }

    pub fn offset(&self) -> Option<u64> {
        match self {
            PageRequest::All => None,
            PageRequest::Page { page, per_page } => {
                Some(page.saturating_sub(1).saturating_mul(*per_page))
            }
        }
    }

    pub fn limit(&self) -> Option<u64> {
        match self {
            PageRequest::All => None,
            PageRequest::Page { per_page, .. } => Some(*per_page),
        }
    }

    /// Adds OFFSET/LIMIT to a select, or leaves it untouched for `All`.
    pub fn apply<Q: QuerySelect>(&self, query: Q) -> Q {
        match self {
            PageRequest::All => query,
            PageRequest::Page { .. } => query.offset(self.offset()).limit(self.limit()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Page result
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> PageResult<T> {
    pub fn empty() -> Self {
        Self {
            items: vec![],
            total: 0,
        }
    }
}
