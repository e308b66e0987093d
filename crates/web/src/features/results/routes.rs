use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{
    best_scores, create_result, delete_result, filter_results, get_result,
    group_results_by_sport, list_results, sorted_results, update_result,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_results).post(create_result))
        .route("/filter", get(filter_results))
        .route("/sorted", get(sorted_results))
        .route("/grouped_by_sport", get(group_results_by_sport))
        .route("/best_scores", get(best_scores))
        .route("/:id", get(get_result).put(update_result).delete(delete_result))
}
