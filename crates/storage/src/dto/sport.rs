use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::common::{PaginationParams, default_limit};
use crate::query::SortField;

/// Response containing a sport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SportResponse {
    pub id: i32,
    pub name: String,
    pub unit: String,
    pub world_record: Option<f64>,
    pub olympic_record: Option<f64>,
}

/// Request payload for creating or fully replacing a sport
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSportRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(min = 1, max = 50, message = "Unit is required"))]
    pub unit: String,

    pub world_record: Option<f64>,

    pub olympic_record: Option<f64>,
}

/// Updates replace every mutable field, so they share the create payload.
pub type UpdateSportRequest = CreateSportRequest;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SportFilter {
    /// Substring of the sport name (case-insensitive)
    pub name: Option<String>,
    /// Substring of the measurement unit (case-insensitive)
    pub unit: Option<String>,
    #[serde(rename = "world_record[gt]")]
    pub world_record_gt: Option<f64>,
    #[serde(rename = "world_record[lt]")]
    pub world_record_lt: Option<f64>,
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl SportFilter {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.skip, self.limit)
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct WorldRecordUpdate {
    pub sport_name: String,
    pub new_record: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SportSortField {
    Id,
    Name,
    Unit,
    WorldRecord,
    OlympicRecord,
}

impl SortField for SportSortField {
    const DEFAULT: Self = Self::Name;

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "unit" => Some(Self::Unit),
            "world_record" => Some(Self::WorldRecord),
            "olympic_record" => Some(Self::OlympicRecord),
            _ => None,
        }
    }

    fn as_column(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Unit => "unit",
            Self::WorldRecord => "world_record",
            Self::OlympicRecord => "olympic_record",
        }
    }
}

impl From<crate::models::Sport> for SportResponse {
    fn from(sport: crate::models::Sport) -> Self {
        Self {
            id: sport.id,
            name: sport.name,
            unit: sport.unit,
            world_record: sport.world_record,
            olympic_record: sport.olympic_record,
        }
    }
}
