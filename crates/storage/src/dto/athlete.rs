use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::common::{PaginationParams, default_limit};
use crate::query::SortField;

/// Response containing basic athlete information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
    pub id: i32,
    pub full_name: String,
    pub country: String,
    pub birth_year: i32,
    pub victories: i32,
}

/// Request payload for creating or fully replacing an athlete
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAthleteRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Full name must be between 1 and 255 characters"
    ))]
    pub full_name: String,

    #[validate(length(min = 1, max = 255, message = "Country is required"))]
    pub country: String,

    #[validate(range(min = 1800, max = 2100, message = "Birth year is out of range"))]
    pub birth_year: i32,

    #[validate(range(min = 0, message = "Victories cannot be negative"))]
    #[serde(default)]
    pub victories: i32,
}

pub type UpdateAthleteRequest = CreateAthleteRequest;

#[derive(Debug, Deserialize, IntoParams)]
pub struct AthleteFilter {
    /// Substring of the athlete's full name (case-insensitive)
    pub name: Option<String>,
    /// Substring of the country (case-insensitive)
    pub country: Option<String>,
    /// Substring of the name of a sport the athlete has a result in
    pub sport: Option<String>,
    #[serde(rename = "age[gt]")]
    pub age_gt: Option<i32>,
    #[serde(rename = "age[lt]")]
    pub age_lt: Option<i32>,
    #[serde(rename = "victories[gt]")]
    pub victories_gt: Option<i32>,
    #[serde(rename = "victories[lt]")]
    pub victories_lt: Option<i32>,
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl AthleteFilter {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.skip, self.limit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AthleteSortField {
    Id,
    FullName,
    Country,
    BirthYear,
    Victories,
}

impl SortField for AthleteSortField {
    const DEFAULT: Self = Self::FullName;

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "name" | "full_name" => Some(Self::FullName),
            "country" => Some(Self::Country),
            "birth_year" => Some(Self::BirthYear),
            "victories" => Some(Self::Victories),
            _ => None,
        }
    }

    fn as_column(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::FullName => "full_name",
            Self::Country => "country",
            Self::BirthYear => "birth_year",
            Self::Victories => "victories",
        }
    }
}

impl From<crate::models::Athlete> for AthleteResponse {
    fn from(athlete: crate::models::Athlete) -> Self {
        Self {
            id: athlete.id,
            full_name: athlete.full_name,
            country: athlete.country,
            birth_year: athlete.birth_year,
            victories: athlete.victories,
        }
    }
}
