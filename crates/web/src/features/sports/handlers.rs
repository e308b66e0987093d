use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        aggregate::{SportResultCount, UnitCount},
        common::{MessageResponse, PaginationParams, SortParams},
        sport::{CreateSportRequest, SportFilter, SportResponse, WorldRecordUpdate},
    },
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/sports",
    request_body = CreateSportRequest,
    responses(
        (status = 200, description = "Sport created successfully", body = SportResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "A sport with this name already exists")
    ),
    tag = "sports"
)]
pub async fn create_sport(
    State(db): State<Database>,
    Json(req): Json<CreateSportRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let sport = services::create_sport(db.pool(), &req).await?;

    Ok(Json(SportResponse::from(sport)).into_response())
}

#[utoipa::path(
    get,
    path = "/sports/{id}",
    params(
        ("id" = i32, Path, description = "Sport ID")
    ),
    responses(
        (status = 200, description = "Sport found", body = SportResponse),
        (status = 404, description = "Sport not found")
    ),
    tag = "sports"
)]
pub async fn get_sport(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let sport = services::get_sport(db.pool(), id).await?;

    Ok(Json(SportResponse::from(sport)).into_response())
}

#[utoipa::path(
    get,
    path = "/sports",
    params(PaginationParams),
    responses(
        (status = 200, description = "List sports", body = Vec<SportResponse>),
        (status = 400, description = "Invalid pagination parameters")
    ),
    tag = "sports"
)]
pub async fn list_sports(
    State(db): State<Database>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Response, WebError> {
    pagination.validate().map_err(WebError::BadRequest)?;

    let sports = services::list_sports(db.pool(), &pagination).await?;

    let response: Vec<SportResponse> = sports.into_iter().map(SportResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    put,
    path = "/sports/{id}",
    params(
        ("id" = i32, Path, description = "Sport ID")
    ),
    request_body = CreateSportRequest,
    responses(
        (status = 200, description = "Sport updated successfully", body = SportResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Sport not found")
    ),
    tag = "sports"
)]
pub async fn update_sport(
    State(db): State<Database>,
    Path(id): Path<i32>,
    Json(req): Json<CreateSportRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let updated = services::update_sport(db.pool(), id, &req).await?;

    Ok(Json(SportResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/sports/{id}",
    params(
        ("id" = i32, Path, description = "Sport ID")
    ),
    responses(
        (status = 204, description = "Sport deleted successfully"),
        (status = 404, description = "Sport not found"),
        (status = 409, description = "Sport still has results")
    ),
    tag = "sports"
)]
pub async fn delete_sport(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    services::delete_sport(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/sports/filter",
    params(SportFilter),
    responses(
        (status = 200, description = "Sports matching every supplied criterion", body = Vec<SportResponse>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "sports"
)]
pub async fn filter_sports(
    State(db): State<Database>,
    Query(filter): Query<SportFilter>,
) -> Result<Response, WebError> {
    filter.pagination().validate().map_err(WebError::BadRequest)?;

    let sports = services::filter_sports(db.pool(), &filter).await?;

    let response: Vec<SportResponse> = sports.into_iter().map(SportResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/sports/sorted",
    params(SortParams),
    responses(
        (status = 200, description = "Sports ordered by the requested field (name when unknown)", body = Vec<SportResponse>),
        (status = 400, description = "Invalid pagination parameters")
    ),
    tag = "sports"
)]
pub async fn sorted_sports(
    State(db): State<Database>,
    Query(params): Query<SortParams>,
) -> Result<Response, WebError> {
    params.pagination().validate().map_err(WebError::BadRequest)?;

    let sports = services::sorted_sports(db.pool(), &params).await?;

    let response: Vec<SportResponse> = sports.into_iter().map(SportResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/sports/detailed",
    responses(
        (status = 200, description = "Number of results per sport", body = Vec<SportResultCount>)
    ),
    tag = "sports"
)]
pub async fn sports_with_result_counts(State(db): State<Database>) -> Result<Response, WebError> {
    let counts = services::sports_with_result_counts(db.pool()).await?;

    Ok(Json(counts).into_response())
}

#[utoipa::path(
    get,
    path = "/sports/grouped_by_unit",
    responses(
        (status = 200, description = "Number of sports per measurement unit", body = Vec<UnitCount>)
    ),
    tag = "sports"
)]
pub async fn group_sports_by_unit(State(db): State<Database>) -> Result<Response, WebError> {
    let groups = services::group_sports_by_unit(db.pool()).await?;

    Ok(Json(groups).into_response())
}

#[utoipa::path(
    put,
    path = "/sports/update_world_record",
    params(WorldRecordUpdate),
    responses(
        (status = 200, description = "World record updated", body = MessageResponse),
        (status = 404, description = "No sport with that name")
    ),
    tag = "sports"
)]
pub async fn update_world_record(
    State(db): State<Database>,
    Query(update): Query<WorldRecordUpdate>,
) -> Result<Response, WebError> {
    services::update_world_record(db.pool(), &update.sport_name, update.new_record).await?;

    Ok(Json(MessageResponse::new("World record updated successfully")).into_response())
}
