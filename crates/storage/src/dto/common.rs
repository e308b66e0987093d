use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_LIMIT: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, IntoParams, ToSchema)]
pub struct PaginationParams {
    /// Number of rows to skip
    #[serde(default)]
    pub skip: i64,
    /// Maximum number of rows to return
    #[serde(default = "default_limit")]
    pub limit: i64,
}

pub(crate) fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PaginationParams {
    pub fn new(skip: i64, limit: i64) -> Self {
        Self { skip, limit }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.skip < 0 {
            return Err("skip must be >= 0".to_string());
        }
        if self.limit < 1 {
            return Err("limit must be >= 1".to_string());
        }
        Ok(())
    }
}

/// Query string for the `/sorted` endpoints.
///
/// `order_by` is resolved per entity; an unknown or missing name selects
/// the entity's default sort column.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct SortParams {
    pub order_by: Option<String>,
    #[serde(default)]
    pub descending: bool,
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl SortParams {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.skip, self.limit)
    }

    pub fn order_by(&self) -> &str {
        self.order_by.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub detail: String,
}

impl MessageResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
