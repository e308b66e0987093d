use sqlx::PgPool;
use storage::{
    dto::{
        aggregate::{AthleteResultCount, CountryCount},
        athlete::{AthleteFilter, CreateAthleteRequest, UpdateAthleteRequest},
        common::{PaginationParams, SortParams},
    },
    error::{Result, StorageError},
    models::Athlete,
    repository::athlete::AthleteRepository,
};

/// List athletes page by page
pub async fn list_athletes(pool: &PgPool, pagination: &PaginationParams) -> Result<Vec<Athlete>> {
    let repo = AthleteRepository::new(pool);
    repo.list(pagination).await
}

/// Get athlete by ID
pub async fn get_athlete(pool: &PgPool, id: i32) -> Result<Athlete> {
    let repo = AthleteRepository::new(pool);
    repo.find_by_id(id).await?.ok_or(StorageError::NotFound)
}

/// Create a new athlete
pub async fn create_athlete(pool: &PgPool, request: &CreateAthleteRequest) -> Result<Athlete> {
    let repo = AthleteRepository::new(pool);
    let athlete = repo.create(request).await?;
    tracing::info!(athlete_id = athlete.id, "Created athlete");
    Ok(athlete)
}

/// Update an athlete
pub async fn update_athlete(
    pool: &PgPool,
    id: i32,
    request: &UpdateAthleteRequest,
) -> Result<Athlete> {
    let repo = AthleteRepository::new(pool);
    let athlete = repo.update(id, request).await?.ok_or(StorageError::NotFound)?;
    tracing::info!(athlete_id = id, "Updated athlete");
    Ok(athlete)
}

/// Delete an athlete
pub async fn delete_athlete(pool: &PgPool, id: i32) -> Result<()> {
    let repo = AthleteRepository::new(pool);
    if !repo.delete(id).await? {
        return Err(StorageError::NotFound);
    }
    tracing::info!(athlete_id = id, "Deleted athlete");
    Ok(())
}

pub async fn filter_athletes(pool: &PgPool, filter: &AthleteFilter) -> Result<Vec<Athlete>> {
    AthleteRepository::new(pool).filter(filter).await
}

pub async fn sorted_athletes(pool: &PgPool, params: &SortParams) -> Result<Vec<Athlete>> {
    AthleteRepository::new(pool).sorted(params).await
}

pub async fn athletes_with_result_counts(pool: &PgPool) -> Result<Vec<AthleteResultCount>> {
    AthleteRepository::new(pool).result_counts().await
}

pub async fn group_athletes_by_country(pool: &PgPool) -> Result<Vec<CountryCount>> {
    AthleteRepository::new(pool).group_by_country().await
}
