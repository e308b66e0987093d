use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Sport {
    pub id: i32,
    pub name: String,
    pub unit: String,
    pub world_record: Option<f64>,
    pub olympic_record: Option<f64>,
}
