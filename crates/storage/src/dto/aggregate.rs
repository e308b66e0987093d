//! Row shapes returned by the grouped and joined read endpoints.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Number of results recorded for a sport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SportResultCount {
    pub name: String,
    pub result_count: i64,
}

/// Number of sports measured in a unit.
///
/// Serialized with named keys, `{"unit": "seconds", "count": 1}`, rather
/// than as a `{"seconds": 1}` map, like every other grouped count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UnitCount {
    pub unit: String,
    pub count: i64,
}

/// Number of results recorded for an athlete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AthleteResultCount {
    pub id: i32,
    pub full_name: String,
    pub country: String,
    pub result_count: i64,
}

/// Number of athletes representing a country
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CountryCount {
    pub country: String,
    pub count: i64,
}

/// Number of results per sport, keyed by sport name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ResultsPerSport {
    pub sport_name: String,
    pub result_count: i64,
}

/// Highest performance an athlete has recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BestScore {
    pub athlete_id: i32,
    pub best_score: f64,
}
