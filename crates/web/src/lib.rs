pub mod config;
pub mod error;
pub mod features;
pub mod openapi;

use axum::{Json, Router, response::IntoResponse, routing::get};
use serde_json::json;
use storage::Database;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use error::WebError;
use openapi::ApiDoc;

/// Builds the full HTTP surface around an already-connected database.
pub fn app(db: Database) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/sports", features::sports::routes::routes())
        .nest("/athletes", features::athletes::routes::routes())
        .nest("/results", features::results::routes::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Welcome to the Sports API!" }))
}

async fn not_found() -> WebError {
    WebError::NotFound
}
