use sqlx::PgPool;
use storage::{
    dto::{
        aggregate::{SportResultCount, UnitCount},
        common::{PaginationParams, SortParams},
        sport::{CreateSportRequest, SportFilter, UpdateSportRequest},
    },
    error::{Result, StorageError},
    models::Sport,
    repository::sport::SportRepository,
};

/// Create a new sport
pub async fn create_sport(pool: &PgPool, request: &CreateSportRequest) -> Result<Sport> {
    let sport = SportRepository::new(pool).create(request).await?;
    tracing::info!(sport_id = sport.id, name = %sport.name, "Created sport");
    Ok(sport)
}

/// Get sport by ID
pub async fn get_sport(pool: &PgPool, id: i32) -> Result<Sport> {
    SportRepository::new(pool)
        .find_by_id(id)
        .await?
        .ok_or(StorageError::NotFound)
}

/// List sports page by page
pub async fn list_sports(pool: &PgPool, pagination: &PaginationParams) -> Result<Vec<Sport>> {
    SportRepository::new(pool).list(pagination).await
}

/// Replace a sport's fields
pub async fn update_sport(pool: &PgPool, id: i32, request: &UpdateSportRequest) -> Result<Sport> {
    let sport = SportRepository::new(pool)
        .update(id, request)
        .await?
        .ok_or(StorageError::NotFound)?;
    tracing::info!(sport_id = id, "Updated sport");
    Ok(sport)
}

/// Delete a sport
pub async fn delete_sport(pool: &PgPool, id: i32) -> Result<()> {
    if !SportRepository::new(pool).delete(id).await? {
        return Err(StorageError::NotFound);
    }
    tracing::info!(sport_id = id, "Deleted sport");
    Ok(())
}

pub async fn update_world_record(pool: &PgPool, sport_name: &str, new_record: f64) -> Result<()> {
    if !SportRepository::new(pool)
        .update_world_record(sport_name, new_record)
        .await?
    {
        return Err(StorageError::NotFound);
    }
    tracing::info!(sport = sport_name, new_record, "Updated world record");
    Ok(())
}

pub async fn filter_sports(pool: &PgPool, filter: &SportFilter) -> Result<Vec<Sport>> {
    SportRepository::new(pool).filter(filter).await
}

pub async fn sorted_sports(pool: &PgPool, params: &SortParams) -> Result<Vec<Sport>> {
    SportRepository::new(pool).sorted(params).await
}

pub async fn sports_with_result_counts(pool: &PgPool) -> Result<Vec<SportResultCount>> {
    SportRepository::new(pool).result_counts().await
}

pub async fn group_sports_by_unit(pool: &PgPool) -> Result<Vec<UnitCount>> {
    SportRepository::new(pool).group_by_unit().await
}
