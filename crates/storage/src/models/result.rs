use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Json};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CompetitionResult {
    pub id: i32,
    pub competition_name: String,
    pub performance: f64,
    pub event_date: NaiveDate,
    pub location: String,
    pub sport_id: i32,
    pub athlete_id: i32,
    #[schema(value_type = Object)]
    pub additional_info: Json<serde_json::Value>,
}
