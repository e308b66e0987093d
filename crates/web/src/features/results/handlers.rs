use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        aggregate::{BestScore, ResultsPerSport},
        common::{PaginationParams, SortParams},
        result::{CreateResultRequest, ResultFilter, ResultResponse, UpdateResultRequest},
    },
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/results",
    request_body = CreateResultRequest,
    responses(
        (status = 200, description = "Result recorded successfully", body = ResultResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Sport or athlete does not exist")
    ),
    tag = "results"
)]
pub async fn create_result(
    State(db): State<Database>,
    Json(req): Json<CreateResultRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let result = services::create_result(db.pool(), &req).await?;

    Ok(Json(ResultResponse::from(result)).into_response())
}

#[utoipa::path(
    get,
    path = "/results/{id}",
    params(
        ("id" = i32, Path, description = "Result ID")
    ),
    responses(
        (status = 200, description = "Result found", body = ResultResponse),
        (status = 404, description = "Result not found")
    ),
    tag = "results"
)]
pub async fn get_result(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let result = services::get_result(db.pool(), id).await?;

    Ok(Json(ResultResponse::from(result)).into_response())
}

#[utoipa::path(
    get,
    path = "/results",
    params(PaginationParams),
    responses(
        (status = 200, description = "List results", body = Vec<ResultResponse>),
        (status = 400, description = "Invalid pagination parameters")
    ),
    tag = "results"
)]
pub async fn list_results(
    State(db): State<Database>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Response, WebError> {
    pagination.validate().map_err(WebError::BadRequest)?;

    let results = services::list_results(db.pool(), &pagination).await?;

    let response: Vec<ResultResponse> = results.into_iter().map(ResultResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    put,
    path = "/results/{id}",
    params(
        ("id" = i32, Path, description = "Result ID")
    ),
    request_body = UpdateResultRequest,
    responses(
        (status = 200, description = "Result updated successfully", body = ResultResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Result not found")
    ),
    tag = "results"
)]
pub async fn update_result(
    State(db): State<Database>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateResultRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let updated = services::update_result(db.pool(), id, &req).await?;

    Ok(Json(ResultResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/results/{id}",
    params(
        ("id" = i32, Path, description = "Result ID")
    ),
    responses(
        (status = 204, description = "Result deleted successfully"),
        (status = 404, description = "Result not found")
    ),
    tag = "results"
)]
pub async fn delete_result(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    services::delete_result(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/results/filter",
    params(ResultFilter),
    responses(
        (status = 200, description = "Results matching every supplied criterion", body = Vec<ResultResponse>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "results"
)]
pub async fn filter_results(
    State(db): State<Database>,
    Query(filter): Query<ResultFilter>,
) -> Result<Response, WebError> {
    filter.pagination().validate().map_err(WebError::BadRequest)?;

    let results = services::filter_results(db.pool(), &filter).await?;

    let response: Vec<ResultResponse> = results.into_iter().map(ResultResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/results/sorted",
    params(SortParams),
    responses(
        (status = 200, description = "Results ordered by the requested field (performance when unknown)", body = Vec<ResultResponse>),
        (status = 400, description = "Invalid pagination parameters")
    ),
    tag = "results"
)]
pub async fn sorted_results(
    State(db): State<Database>,
    Query(params): Query<SortParams>,
) -> Result<Response, WebError> {
    params.pagination().validate().map_err(WebError::BadRequest)?;

    let results = services::sorted_results(db.pool(), &params).await?;

    let response: Vec<ResultResponse> = results.into_iter().map(ResultResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/results/grouped_by_sport",
    responses(
        (status = 200, description = "Number of results per sport", body = Vec<ResultsPerSport>)
    ),
    tag = "results"
)]
pub async fn group_results_by_sport(State(db): State<Database>) -> Result<Response, WebError> {
    let groups = services::group_results_by_sport(db.pool()).await?;

    Ok(Json(groups).into_response())
}

#[utoipa::path(
    get,
    path = "/results/best_scores",
    responses(
        (status = 200, description = "Highest performance per athlete", body = Vec<BestScore>)
    ),
    tag = "results"
)]
pub async fn best_scores(State(db): State<Database>) -> Result<Response, WebError> {
    let scores = services::best_scores(db.pool()).await?;

    Ok(Json(scores).into_response())
}
