use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{
    athletes_with_result_counts, create_athlete, delete_athlete, filter_athletes, get_athlete,
    group_athletes_by_country, list_athletes, sorted_athletes, update_athlete,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_athletes).post(create_athlete))
        .route("/filter", get(filter_athletes))
        .route("/sorted", get(sorted_athletes))
        .route("/detailed", get(athletes_with_result_counts))
        .route("/grouped_by_country", get(group_athletes_by_country))
        .route(
            "/:id",
            get(get_athlete).put(update_athlete).delete(delete_athlete),
        )
}
