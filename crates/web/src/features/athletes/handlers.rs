use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        aggregate::{AthleteResultCount, CountryCount},
        athlete::{AthleteFilter, AthleteResponse, CreateAthleteRequest},
        common::{PaginationParams, SortParams},
    },
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/athletes",
    params(PaginationParams),
    responses(
        (status = 200, description = "List athletes successfully", body = Vec<AthleteResponse>),
        (status = 400, description = "Invalid pagination parameters")
    ),
    tag = "athletes"
)]
pub async fn list_athletes(
    State(db): State<Database>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Response, WebError> {
    pagination.validate().map_err(WebError::BadRequest)?;

    let athletes = services::list_athletes(db.pool(), &pagination).await?;

    let response: Vec<AthleteResponse> = athletes.into_iter().map(AthleteResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/athletes/{id}",
    params(
        ("id" = i32, Path, description = "Athlete ID")
    ),
    responses(
        (status = 200, description = "Athlete found", body = AthleteResponse),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn get_athlete(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let athlete = services::get_athlete(db.pool(), id).await?;

    Ok(Json(AthleteResponse::from(athlete)).into_response())
}

#[utoipa::path(
    post,
    path = "/athletes",
    request_body = CreateAthleteRequest,
    responses(
        (status = 200, description = "Athlete created successfully", body = AthleteResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "athletes"
)]
pub async fn create_athlete(
    State(db): State<Database>,
    Json(req): Json<CreateAthleteRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let athlete = services::create_athlete(db.pool(), &req).await?;

    Ok(Json(AthleteResponse::from(athlete)).into_response())
}

#[utoipa::path(
    put,
    path = "/athletes/{id}",
    params(
        ("id" = i32, Path, description = "Athlete ID")
    ),
    request_body = CreateAthleteRequest,
    responses(
        (status = 200, description = "Athlete updated successfully", body = AthleteResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn update_athlete(
    State(db): State<Database>,
    Path(id): Path<i32>,
    Json(update_req): Json<CreateAthleteRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_athlete(db.pool(), id, &update_req).await?;

    Ok(Json(AthleteResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/athletes/{id}",
    params(
        ("id" = i32, Path, description = "Athlete ID")
    ),
    responses(
        (status = 204, description = "Athlete deleted successfully"),
        (status = 404, description = "Athlete not found"),
        (status = 409, description = "Athlete still has results")
    ),
    tag = "athletes"
)]
pub async fn delete_athlete(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    services::delete_athlete(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/athletes/filter",
    params(AthleteFilter),
    responses(
        (status = 200, description = "Athletes matching every supplied criterion", body = Vec<AthleteResponse>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "athletes"
)]
pub async fn filter_athletes(
    State(db): State<Database>,
    Query(filter): Query<AthleteFilter>,
) -> Result<Response, WebError> {
    filter.pagination().validate().map_err(WebError::BadRequest)?;

    let athletes = services::filter_athletes(db.pool(), &filter).await?;

    let response: Vec<AthleteResponse> = athletes.into_iter().map(AthleteResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/athletes/sorted",
    params(SortParams),
    responses(
        (status = 200, description = "Athletes ordered by the requested field (full name when unknown)", body = Vec<AthleteResponse>),
        (status = 400, description = "Invalid pagination parameters")
    ),
    tag = "athletes"
)]
pub async fn sorted_athletes(
    State(db): State<Database>,
    Query(params): Query<SortParams>,
) -> Result<Response, WebError> {
    params.pagination().validate().map_err(WebError::BadRequest)?;

    let athletes = services::sorted_athletes(db.pool(), &params).await?;

    let response: Vec<AthleteResponse> = athletes.into_iter().map(AthleteResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/athletes/detailed",
    responses(
        (status = 200, description = "Athletes with the number of results they recorded", body = Vec<AthleteResultCount>)
    ),
    tag = "athletes"
)]
pub async fn athletes_with_result_counts(
    State(db): State<Database>,
) -> Result<Response, WebError> {
    let counts = services::athletes_with_result_counts(db.pool()).await?;

    Ok(Json(counts).into_response())
}

#[utoipa::path(
    get,
    path = "/athletes/grouped_by_country",
    responses(
        (status = 200, description = "Number of athletes per country", body = Vec<CountryCount>)
    ),
    tag = "athletes"
)]
pub async fn group_athletes_by_country(State(db): State<Database>) -> Result<Response, WebError> {
    let groups = services::group_athletes_by_country(db.pool()).await?;

    Ok(Json(groups).into_response())
}
