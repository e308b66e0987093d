use axum::{
    Router,
    routing::{get, put},
};
use storage::Database;

use super::handlers::{
    create_sport, delete_sport, filter_sports, get_sport, group_sports_by_unit, list_sports,
    sorted_sports, sports_with_result_counts, update_sport, update_world_record,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_sports).post(create_sport))
        .route("/filter", get(filter_sports))
        .route("/sorted", get(sorted_sports))
        .route("/detailed", get(sports_with_result_counts))
        .route("/grouped_by_unit", get(group_sports_by_unit))
        .route("/update_world_record", put(update_world_record))
        .route("/:id", get(get_sport).put(update_sport).delete(delete_sport))
}
