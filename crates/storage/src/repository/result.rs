use sqlx::{PgPool, types::Json};

use crate::dto::aggregate::{BestScore, ResultsPerSport};
use crate::dto::common::{PaginationParams, SortParams};
use crate::dto::result::{CreateResultRequest, ResultFilter, ResultSortField, UpdateResultRequest};
use crate::error::{Result, StorageError};
use crate::models::CompetitionResult;
use crate::query::{Criteria, SortField, SortOrder};

const SELECT_RESULTS: &str = "SELECT r.id, r.competition_name, r.performance, r.event_date, \
     r.location, r.sport_id, r.athlete_id, r.additional_info FROM results r";

const RESULT_COLUMNS: &str = "id, competition_name, performance, event_date, location, \
     sport_id, athlete_id, additional_info";

const UNKNOWN_REFERENCE: &str = "Referenced sport or athlete does not exist";

pub struct ResultRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ResultRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Record a new result. The sport and athlete must already exist.
    pub async fn create(&self, req: &CreateResultRequest) -> Result<CompetitionResult> {
        let sql = format!(
            r#"
            INSERT INTO results (competition_name, performance, event_date, location,
                                 sport_id, athlete_id, additional_info)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {RESULT_COLUMNS}
            "#
        );

        sqlx::query_as::<_, CompetitionResult>(&sql)
            .bind(&req.competition_name)
            .bind(req.performance)
            .bind(req.event_date)
            .bind(&req.location)
            .bind(req.sport_id)
            .bind(req.athlete_id)
            .bind(Json(&req.additional_info))
            .fetch_one(self.pool)
            .await
            .map_err(|e| StorageError::from(e).with_foreign_key_message(UNKNOWN_REFERENCE))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<CompetitionResult>> {
        let sql = format!("SELECT {RESULT_COLUMNS} FROM results WHERE id = $1");

        let result = sqlx::query_as::<_, CompetitionResult>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(result)
    }

    pub async fn list(&self, pagination: &PaginationParams) -> Result<Vec<CompetitionResult>> {
        let mut criteria = Criteria::new(SELECT_RESULTS);
        criteria.order_by_column("r.id").paginate(pagination);
        criteria.fetch_all(self.pool).await
    }

    /// Replace the measured fields of a result; its sport and athlete stay.
    pub async fn update(
        &self,
        id: i32,
        req: &UpdateResultRequest,
    ) -> Result<Option<CompetitionResult>> {
        let sql = format!(
            r#"
            UPDATE results
            SET competition_name = $2,
                performance = $3,
                event_date = $4,
                location = $5,
                additional_info = $6
            WHERE id = $1
            RETURNING {RESULT_COLUMNS}
            "#
        );

        let result = sqlx::query_as::<_, CompetitionResult>(&sql)
            .bind(id)
            .bind(&req.competition_name)
            .bind(req.performance)
            .bind(req.event_date)
            .bind(&req.location)
            .bind(Json(&req.additional_info))
            .fetch_optional(self.pool)
            .await?;

        Ok(result)
    }

    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM results WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn filter(&self, filter: &ResultFilter) -> Result<Vec<CompetitionResult>> {
        let info = filter.info_object().map_err(StorageError::InvalidInput)?;
        let criteria = filter_criteria(filter, info);
        criteria.fetch_all(self.pool).await
    }

    pub async fn sorted(&self, params: &SortParams) -> Result<Vec<CompetitionResult>> {
        let mut criteria = Criteria::new(SELECT_RESULTS);
        criteria
            .order_by(
                ResultSortField::resolve(params.order_by()),
                SortOrder::from_descending(params.descending),
                "id",
            )
            .paginate(&params.pagination());
        criteria.fetch_all(self.pool).await
    }

    /// Results joined with their sport, counted per sport name
    pub async fn group_by_sport(&self) -> Result<Vec<ResultsPerSport>> {
        let rows = sqlx::query_as::<_, ResultsPerSport>(
            r#"
            SELECT s.name AS sport_name, COUNT(r.id) AS result_count
            FROM results r
            INNER JOIN sports s ON s.id = r.sport_id
            GROUP BY s.name
            ORDER BY s.name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Best (highest) performance per athlete
    pub async fn best_scores(&self) -> Result<Vec<BestScore>> {
        let rows = sqlx::query_as::<_, BestScore>(
            r#"
            SELECT athlete_id, MAX(performance) AS best_score
            FROM results
            GROUP BY athlete_id
            ORDER BY athlete_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}

fn filter_criteria(filter: &ResultFilter, info: Option<serde_json::Value>) -> Criteria<'static> {
    let by_sport = filter
        .sport
        .as_deref()
        .is_some_and(|s| !s.trim().is_empty());

    let mut criteria = if by_sport {
        Criteria::new(&format!(
            "{SELECT_RESULTS} INNER JOIN sports s ON s.id = r.sport_id"
        ))
    } else {
        Criteria::new(SELECT_RESULTS)
    };

    criteria
        .equals("r.athlete_id", filter.athlete_id)
        .equals("r.sport_id", filter.sport_id)
        .greater_than("r.performance", filter.score_gt)
        .less_than("r.performance", filter.score_lt)
        .contains("r.location", filter.location.as_deref())
        .contains("r.competition_name", filter.competition.as_deref())
        .contains("s.name", filter.sport.as_deref())
        .push_predicate("r.additional_info @> ", info.map(Json))
        .order_by_column("r.id")
        .paginate(&filter.pagination());

    criteria
}
