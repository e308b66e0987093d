use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::common::{PaginationParams, default_limit};
use crate::query::SortField;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResultResponse {
    pub id: i32,
    pub competition_name: String,
    pub performance: f64,
    pub event_date: NaiveDate,
    pub location: String,
    pub sport_id: i32,
    pub athlete_id: i32,
    #[schema(value_type = Object)]
    pub additional_info: Value,
}

/// Request payload for recording a competition result
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateResultRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Competition name must be between 1 and 255 characters"
    ))]
    pub competition_name: String,

    pub performance: f64,

    pub event_date: NaiveDate,

    #[validate(length(min = 1, max = 255, message = "Location is required"))]
    pub location: String,

    pub sport_id: i32,

    pub athlete_id: i32,

    #[validate(custom(function = "validate_additional_info"))]
    #[serde(default = "empty_object")]
    #[schema(value_type = Object)]
    pub additional_info: Value,
}

/// Full replacement of a result's mutable fields.
///
/// The sport and athlete a result belongs to are fixed at creation; any
/// `sport_id`/`athlete_id` in the body is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateResultRequest {
    #[validate(length(min = 1, max = 255))]
    pub competition_name: String,

    pub performance: f64,

    pub event_date: NaiveDate,

    #[validate(length(min = 1, max = 255))]
    pub location: String,

    #[validate(custom(function = "validate_additional_info"))]
    #[serde(default = "empty_object")]
    #[schema(value_type = Object)]
    pub additional_info: Value,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ResultFilter {
    pub athlete_id: Option<i32>,
    pub sport_id: Option<i32>,
    /// Performance strictly greater than
    #[serde(rename = "score[gt]")]
    pub score_gt: Option<f64>,
    /// Performance strictly less than
    #[serde(rename = "score[lt]")]
    pub score_lt: Option<f64>,
    /// Substring of the location (case-insensitive)
    pub location: Option<String>,
    /// Substring of the competition name (case-insensitive)
    pub competition: Option<String>,
    /// Substring of the sport name (case-insensitive)
    pub sport: Option<String>,
    /// JSON object that `additional_info` must contain
    pub info: Option<String>,
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl ResultFilter {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.skip, self.limit)
    }

    /// Parses the `info` containment filter. Blank means no constraint.
    pub fn info_object(&self) -> Result<Option<Value>, String> {
        let Some(raw) = self.info.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(None);
        };

        match serde_json::from_str::<Value>(raw) {
            Ok(value @ Value::Object(_)) => Ok(Some(value)),
            Ok(_) => Err("info must be a JSON object".to_string()),
            Err(e) => Err(format!("info is not valid JSON: {}", e)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSortField {
    Id,
    CompetitionName,
    Performance,
    EventDate,
    Location,
    SportId,
    AthleteId,
}

impl SortField for ResultSortField {
    const DEFAULT: Self = Self::Performance;

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "competition_name" => Some(Self::CompetitionName),
            "score" | "performance" => Some(Self::Performance),
            "event_date" | "date" => Some(Self::EventDate),
            "location" => Some(Self::Location),
            "sport_id" => Some(Self::SportId),
            "athlete_id" => Some(Self::AthleteId),
            _ => None,
        }
    }

    fn as_column(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::CompetitionName => "competition_name",
            Self::Performance => "performance",
            Self::EventDate => "event_date",
            Self::Location => "location",
            Self::SportId => "sport_id",
            Self::AthleteId => "athlete_id",
        }
    }
}

fn empty_object() -> Value {
    Value::Object(Default::default())
}

fn validate_additional_info(info: &Value) -> Result<(), validator::ValidationError> {
    if info.is_object() {
        Ok(())
    } else {
        Err(validator::ValidationError::new("additional_info_not_object")
            .with_message("additional_info must be a JSON object".into()))
    }
}

impl From<crate::models::CompetitionResult> for ResultResponse {
    fn from(result: crate::models::CompetitionResult) -> Self {
        Self {
            id: result.id,
            competition_name: result.competition_name,
            performance: result.performance,
            event_date: result.event_date,
            location: result.location,
            sport_id: result.sport_id,
            athlete_id: result.athlete_id,
            additional_info: result.additional_info.0,
        }
    }
}
