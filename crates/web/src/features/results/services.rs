use sqlx::PgPool;
use storage::{
    dto::{
        aggregate::{BestScore, ResultsPerSport},
        common::{PaginationParams, SortParams},
        result::{CreateResultRequest, ResultFilter, UpdateResultRequest},
    },
    error::{Result, StorageError},
    models::CompetitionResult,
    repository::result::ResultRepository,
};

/// Record a new competition result
pub async fn create_result(
    pool: &PgPool,
    request: &CreateResultRequest,
) -> Result<CompetitionResult> {
    let result = ResultRepository::new(pool).create(request).await?;
    tracing::info!(
        result_id = result.id,
        sport_id = result.sport_id,
        athlete_id = result.athlete_id,
        "Recorded result"
    );
    Ok(result)
}

pub async fn get_result(pool: &PgPool, id: i32) -> Result<CompetitionResult> {
    ResultRepository::new(pool)
        .find_by_id(id)
        .await?
        .ok_or(StorageError::NotFound)
}

pub async fn list_results(
    pool: &PgPool,
    pagination: &PaginationParams,
) -> Result<Vec<CompetitionResult>> {
    ResultRepository::new(pool).list(pagination).await
}

pub async fn update_result(
    pool: &PgPool,
    id: i32,
    request: &UpdateResultRequest,
) -> Result<CompetitionResult> {
    let result = ResultRepository::new(pool)
        .update(id, request)
        .await?
        .ok_or(StorageError::NotFound)?;
    tracing::info!(result_id = id, "Updated result");
    Ok(result)
}

pub async fn delete_result(pool: &PgPool, id: i32) -> Result<()> {
    if !ResultRepository::new(pool).delete(id).await? {
        return Err(StorageError::NotFound);
    }
    tracing::info!(result_id = id, "Deleted result");
    Ok(())
}

pub async fn filter_results(pool: &PgPool, filter: &ResultFilter) -> Result<Vec<CompetitionResult>> {
    ResultRepository::new(pool).filter(filter).await
}

pub async fn sorted_results(pool: &PgPool, params: &SortParams) -> Result<Vec<CompetitionResult>> {
    ResultRepository::new(pool).sorted(params).await
}

pub async fn group_results_by_sport(pool: &PgPool) -> Result<Vec<ResultsPerSport>> {
    ResultRepository::new(pool).group_by_sport().await
}

pub async fn best_scores(pool: &PgPool) -> Result<Vec<BestScore>> {
    ResultRepository::new(pool).best_scores().await
}
