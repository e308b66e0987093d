use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Athlete {
    pub id: i32,
    pub full_name: String,
    pub country: String,
    pub birth_year: i32,
    pub victories: i32,
}
