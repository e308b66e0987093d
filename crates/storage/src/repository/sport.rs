use sqlx::PgPool;

use crate::dto::aggregate::{SportResultCount, UnitCount};
use crate::dto::common::{PaginationParams, SortParams};
use crate::dto::sport::{CreateSportRequest, SportFilter, SportSortField, UpdateSportRequest};
use crate::error::{Result, StorageError};
use crate::models::Sport;
use crate::query::{Criteria, SortField, SortOrder};

const SELECT_SPORTS: &str = "SELECT id, name, unit, world_record, olympic_record FROM sports";

const DUPLICATE_NAME: &str = "A sport with this name already exists";
const HAS_RESULTS: &str = "Sport still has results recorded against it";

/// Repository for Sport database operations
pub struct SportRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SportRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a new sport
    pub async fn create(&self, req: &CreateSportRequest) -> Result<Sport> {
        sqlx::query_as::<_, Sport>(
            r#"
            INSERT INTO sports (name, unit, world_record, olympic_record)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, unit, world_record, olympic_record
            "#,
        )
        .bind(&req.name)
        .bind(&req.unit)
        .bind(req.world_record)
        .bind(req.olympic_record)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).with_unique_message(DUPLICATE_NAME))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Sport>> {
        let sport = sqlx::query_as::<_, Sport>(
            "SELECT id, name, unit, world_record, olympic_record FROM sports WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(sport)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Sport>> {
        let sport = sqlx::query_as::<_, Sport>(
            "SELECT id, name, unit, world_record, olympic_record FROM sports WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(self.pool)
        .await?;

        Ok(sport)
    }

    /// List sports in id order
    pub async fn list(&self, pagination: &PaginationParams) -> Result<Vec<Sport>> {
        let mut criteria = Criteria::new(SELECT_SPORTS);
        criteria.order_by_column("id").paginate(pagination);
        criteria.fetch_all(self.pool).await
    }

    /// Overwrite every mutable field of an existing sport
    pub async fn update(&self, id: i32, req: &UpdateSportRequest) -> Result<Option<Sport>> {
        sqlx::query_as::<_, Sport>(
            r#"
            UPDATE sports
            SET name = $2,
                unit = $3,
                world_record = $4,
                olympic_record = $5
            WHERE id = $1
            RETURNING id, name, unit, world_record, olympic_record
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(&req.unit)
        .bind(req.world_record)
        .bind(req.olympic_record)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| StorageError::from(e).with_unique_message(DUPLICATE_NAME))
    }

    /// Set the world record of the sport with exactly this name
    pub async fn update_world_record(&self, name: &str, new_record: f64) -> Result<bool> {
        let result = sqlx::query("UPDATE sports SET world_record = $2 WHERE name = $1")
            .bind(name)
            .bind(new_record)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a sport by ID. Sports with results are kept and reported as a
    /// constraint violation.
    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM sports WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| StorageError::from(e).with_foreign_key_message(HAS_RESULTS))?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn filter(&self, filter: &SportFilter) -> Result<Vec<Sport>> {
        let mut criteria = Criteria::new(SELECT_SPORTS);
        criteria
            .contains("name", filter.name.as_deref())
            .contains("unit", filter.unit.as_deref())
            .greater_than("world_record", filter.world_record_gt)
            .less_than("world_record", filter.world_record_lt)
            .order_by_column("id")
            .paginate(&filter.pagination());
        criteria.fetch_all(self.pool).await
    }

    pub async fn sorted(&self, params: &SortParams) -> Result<Vec<Sport>> {
        let mut criteria = Criteria::new(SELECT_SPORTS);
        criteria
            .order_by(
                SportSortField::resolve(params.order_by()),
                SortOrder::from_descending(params.descending),
                "id",
            )
            .paginate(&params.pagination());
        criteria.fetch_all(self.pool).await
    }

    /// Sports joined with their results, counted per sport
    pub async fn result_counts(&self) -> Result<Vec<SportResultCount>> {
        let rows = sqlx::query_as::<_, SportResultCount>(
            r#"
            SELECT s.name, COUNT(r.id) AS result_count
            FROM sports s
            INNER JOIN results r ON r.sport_id = s.id
            GROUP BY s.name
            ORDER BY s.name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn group_by_unit(&self) -> Result<Vec<UnitCount>> {
        let rows = sqlx::query_as::<_, UnitCount>(
            r#"
            SELECT unit, COUNT(*) AS count
            FROM sports
            GROUP BY unit
            ORDER BY unit
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
