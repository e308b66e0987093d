use sqlx::PgPool;

use crate::dto::aggregate::{AthleteResultCount, CountryCount};
use crate::dto::athlete::{
    AthleteFilter, AthleteSortField, CreateAthleteRequest, UpdateAthleteRequest,
};
use crate::dto::common::{PaginationParams, SortParams};
use crate::error::{Result, StorageError};
use crate::models::Athlete;
use crate::query::{Criteria, SortField, SortOrder};

const SELECT_ATHLETES: &str =
    "SELECT id, full_name, country, birth_year, victories FROM athletes";

/// Age in whole years as of the current calendar year.
const AGE_EXPR: &str = "(EXTRACT(YEAR FROM CURRENT_DATE)::int - birth_year)";

const PRACTISES_SPORT: &str = "SELECT 1 FROM results r \
     INNER JOIN sports s ON s.id = r.sport_id \
     WHERE r.athlete_id = athletes.id AND s.name";

const HAS_RESULTS: &str = "Athlete still has results recorded against them";

pub struct AthleteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a new athlete
    pub async fn create(&self, req: &CreateAthleteRequest) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            INSERT INTO athletes (full_name, country, birth_year, victories)
            VALUES ($1, $2, $3, $4)
            RETURNING id, full_name, country, birth_year, victories
            "#,
        )
        .bind(&req.full_name)
        .bind(&req.country)
        .bind(req.birth_year)
        .bind(req.victories)
        .fetch_one(self.pool)
        .await?;

        Ok(athlete)
    }

    /// Find athlete by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Athlete>> {
        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            SELECT id, full_name, country, birth_year, victories
            FROM athletes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(athlete)
    }

    pub async fn list(&self, pagination: &PaginationParams) -> Result<Vec<Athlete>> {
        let mut criteria = Criteria::new(SELECT_ATHLETES);
        criteria.order_by_column("id").paginate(pagination);
        criteria.fetch_all(self.pool).await
    }

    /// Update an existing athlete
    pub async fn update(&self, id: i32, req: &UpdateAthleteRequest) -> Result<Option<Athlete>> {
        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            UPDATE athletes
            SET full_name = $2,
                country = $3,
                birth_year = $4,
                victories = $5
            WHERE id = $1
            RETURNING id, full_name, country, birth_year, victories
            "#,
        )
        .bind(id)
        .bind(&req.full_name)
        .bind(&req.country)
        .bind(req.birth_year)
        .bind(req.victories)
        .fetch_optional(self.pool)
        .await?;

        Ok(athlete)
    }

    /// Delete an athlete by ID
    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM athletes WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| StorageError::from(e).with_foreign_key_message(HAS_RESULTS))?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn filter(&self, filter: &AthleteFilter) -> Result<Vec<Athlete>> {
        let mut criteria = Criteria::new(SELECT_ATHLETES);
        criteria
            .contains("full_name", filter.name.as_deref())
            .contains("country", filter.country.as_deref())
            .exists_containing(PRACTISES_SPORT, filter.sport.as_deref())
            .greater_than(AGE_EXPR, filter.age_gt)
            .less_than(AGE_EXPR, filter.age_lt)
            .greater_than("victories", filter.victories_gt)
            .less_than("victories", filter.victories_lt)
            .order_by_column("id")
            .paginate(&filter.pagination());
        criteria.fetch_all(self.pool).await
    }

    pub async fn sorted(&self, params: &SortParams) -> Result<Vec<Athlete>> {
        let mut criteria = Criteria::new(SELECT_ATHLETES);
        criteria
            .order_by(
                AthleteSortField::resolve(params.order_by()),
                SortOrder::from_descending(params.descending),
                "id",
            )
            .paginate(&params.pagination());
        criteria.fetch_all(self.pool).await
    }

    /// Athletes joined with their results, counted per athlete
    pub async fn result_counts(&self) -> Result<Vec<AthleteResultCount>> {
        let rows = sqlx::query_as::<_, AthleteResultCount>(
            r#"
            SELECT a.id, a.full_name, a.country, COUNT(r.id) AS result_count
            FROM athletes a
            INNER JOIN results r ON r.athlete_id = a.id
            GROUP BY a.id, a.full_name, a.country
            ORDER BY a.id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn group_by_country(&self) -> Result<Vec<CountryCount>> {
        let rows = sqlx::query_as::<_, CountryCount>(
            r#"
            SELECT country, COUNT(*) AS count
            FROM athletes
            GROUP BY country
            ORDER BY country
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
