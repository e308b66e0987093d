//! Repository behaviour against a real database.
//!
//! Run with `DATABASE_URL=postgres://... cargo test -- --ignored`.

use chrono::{Datelike, NaiveDate, Utc};
use serde_json::json;
use sqlx::PgPool;
use storage::{
    dto::{
        athlete::{AthleteFilter, CreateAthleteRequest},
        common::{PaginationParams, SortParams},
        result::{CreateResultRequest, ResultFilter, UpdateResultRequest},
        sport::{CreateSportRequest, SportFilter},
    },
    error::StorageError,
    repository::{athlete::AthleteRepository, result::ResultRepository, sport::SportRepository},
};

fn sport(name: &str, unit: &str, world_record: Option<f64>) -> CreateSportRequest {
    CreateSportRequest {
        name: name.to_string(),
        unit: unit.to_string(),
        world_record,
        olympic_record: None,
    }
}

fn athlete(full_name: &str, country: &str, birth_year: i32) -> CreateAthleteRequest {
    CreateAthleteRequest {
        full_name: full_name.to_string(),
        country: country.to_string(),
        birth_year,
        victories: 0,
    }
}

fn result(sport_id: i32, athlete_id: i32, performance: f64) -> CreateResultRequest {
    CreateResultRequest {
        competition_name: "Indoor Classic".to_string(),
        performance,
        event_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        location: "Tokyo".to_string(),
        sport_id,
        athlete_id,
        additional_info: json!({ "weather": "Sunny", "audience_size": 12000 }),
    }
}

fn sport_filter() -> SportFilter {
    SportFilter {
        name: None,
        unit: None,
        world_record_gt: None,
        world_record_lt: None,
        skip: 0,
        limit: 100,
    }
}

fn result_filter() -> ResultFilter {
    ResultFilter {
        athlete_id: None,
        sport_id: None,
        score_gt: None,
        score_lt: None,
        location: None,
        competition: None,
        sport: None,
        info: None,
        skip: 0,
        limit: 100,
    }
}

fn athlete_filter() -> AthleteFilter {
    AthleteFilter {
        name: None,
        country: None,
        sport: None,
        age_gt: None,
        age_lt: None,
        victories_gt: None,
        victories_lt: None,
        skip: 0,
        limit: 100,
    }
}

fn names(athletes: &[storage::models::Athlete]) -> Vec<&str> {
    athletes.iter().map(|a| a.full_name.as_str()).collect()
}

fn sorted(order_by: &str, descending: bool) -> SortParams {
    SortParams {
        order_by: Some(order_by.to_string()),
        descending,
        skip: 0,
        limit: 100,
    }
}

#[sqlx::test]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn create_then_get_round_trips(pool: PgPool) {
    let repo = AthleteRepository::new(&pool);
    let created = repo.create(&athlete("A. Runner", "USA", 1995)).await.unwrap();

    let fetched = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.full_name, "A. Runner");
    assert_eq!(fetched.victories, 0);
}

#[sqlx::test]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn delete_is_true_once_then_false(pool: PgPool) {
    let repo = SportRepository::new(&pool);
    assert!(!repo.delete(9999).await.unwrap());

    let created = repo.create(&sport("Marathon", "seconds", None)).await.unwrap();
    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn duplicate_sport_name_is_a_constraint_violation(pool: PgPool) {
    let repo = SportRepository::new(&pool);
    repo.create(&sport("Pole Vault", "meters", None)).await.unwrap();

    let err = repo.create(&sport("Pole Vault", "meters", None)).await.unwrap_err();
    assert!(matches!(err, StorageError::ConstraintViolation(_)));
}

#[sqlx::test]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn list_respects_limit_and_matches_empty_filter(pool: PgPool) {
    let repo = SportRepository::new(&pool);
    for (name, record) in [("A", 1.0), ("B", 2.0), ("C", 3.0)] {
        repo.create(&sport(name, "meters", Some(record))).await.unwrap();
    }

    let page = repo.list(&PaginationParams::new(1, 2)).await.unwrap();
    assert_eq!(page.len(), 2);

    let filtered = repo
        .filter(&SportFilter {
            skip: 1,
            limit: 2,
            ..sport_filter()
        })
        .await
        .unwrap();
    assert_eq!(filtered, page);
}

#[sqlx::test]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn range_filters_are_strict(pool: PgPool) {
    let repo = SportRepository::new(&pool);
    for (name, record) in [("A", 9.0), ("B", 10.0), ("C", 11.0)] {
        repo.create(&sport(name, "seconds", Some(record))).await.unwrap();
    }

    let above = repo
        .filter(&SportFilter {
            world_record_gt: Some(10.0),
            ..sport_filter()
        })
        .await
        .unwrap();
    assert_eq!(above.len(), 1);
    assert_eq!(above[0].name, "C");

    let between = repo
        .filter(&SportFilter {
            world_record_gt: Some(9.0),
            world_record_lt: Some(11.0),
            ..sport_filter()
        })
        .await
        .unwrap();
    assert_eq!(between.len(), 1);
    assert_eq!(between[0].name, "B");
}

#[sqlx::test]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn unknown_sort_field_uses_default_order(pool: PgPool) {
    let repo = SportRepository::new(&pool);
    for name in ["Shot Put", "Discus Throw", "Javelin Throw"] {
        repo.create(&sport(name, "meters", None)).await.unwrap();
    }

    let by_name = repo.sorted(&sorted("name", false)).await.unwrap();
    let fallback = repo.sorted(&sorted("popularity", false)).await.unwrap();
    assert_eq!(fallback, by_name);
    assert_eq!(by_name[0].name, "Discus Throw");

    let descending = repo.sorted(&sorted("name", true)).await.unwrap();
    assert_eq!(descending[0].name, "Shot Put");
}

#[sqlx::test]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn athletes_filter_by_sport_name_through_results(pool: PgPool) {
    let sports = SportRepository::new(&pool);
    let athletes = AthleteRepository::new(&pool);
    let results = ResultRepository::new(&pool);

    let dash = sports.create(&sport("100m Dash", "seconds", None)).await.unwrap();
    let runner = athletes.create(&athlete("A. Runner", "USA", 1995)).await.unwrap();
    athletes.create(&athlete("B. Idle", "USA", 1995)).await.unwrap();
    results.create(&result(dash.id, runner.id, 9.81)).await.unwrap();
    results.create(&result(dash.id, runner.id, 9.90)).await.unwrap();

    let found = athletes
        .filter(&AthleteFilter {
            name: None,
            country: Some("us".to_string()),
            sport: Some("DASH".to_string()),
            age_gt: None,
            age_lt: None,
            victories_gt: None,
            victories_lt: None,
            skip: 0,
            limit: 100,
        })
        .await
        .unwrap();
    assert_eq!(found, vec![runner]);
}

#[sqlx::test]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn result_filters_and_aggregates(pool: PgPool) {
    let sports = SportRepository::new(&pool);
    let athletes = AthleteRepository::new(&pool);
    let results = ResultRepository::new(&pool);

    let dash = sports.create(&sport("100m Dash", "seconds", None)).await.unwrap();
    let runner = athletes.create(&athlete("A. Runner", "USA", 1995)).await.unwrap();
    let fast = results.create(&result(dash.id, runner.id, 9.81)).await.unwrap();
    let mut rainy = result(dash.id, runner.id, 10.2);
    rainy.additional_info = json!({ "weather": "Rainy" });
    results.create(&rainy).await.unwrap();

    let under_ten = results
        .filter(&ResultFilter {
            score_lt: Some(10.0),
            ..result_filter()
        })
        .await
        .unwrap();
    assert_eq!(under_ten, vec![fast.clone()]);

    let sunny = results
        .filter(&ResultFilter {
            info: Some(r#"{"weather":"Sunny"}"#.to_string()),
            sport: Some("100m".to_string()),
            ..result_filter()
        })
        .await
        .unwrap();
    assert_eq!(sunny, vec![fast]);

    let best = results.best_scores().await.unwrap();
    assert_eq!(best.len(), 1);
    assert_eq!(best[0].best_score, 10.2);

    let per_sport = results.group_by_sport().await.unwrap();
    assert_eq!(per_sport[0].sport_name, "100m Dash");
    assert_eq!(per_sport[0].result_count, 2);

    let units = sports.group_by_unit().await.unwrap();
    assert_eq!(units[0].unit, "seconds");
    assert_eq!(units[0].count, 1);

    let counts = athletes.result_counts().await.unwrap();
    assert_eq!(counts[0].result_count, 2);
}

#[sqlx::test]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn update_replaces_fields_but_keeps_relationships(pool: PgPool) {
    let sports = SportRepository::new(&pool);
    let athletes = AthleteRepository::new(&pool);
    let results = ResultRepository::new(&pool);

    let dash = sports.create(&sport("100m Dash", "seconds", None)).await.unwrap();
    let runner = athletes.create(&athlete("A. Runner", "USA", 1995)).await.unwrap();
    let created = results.create(&result(dash.id, runner.id, 9.81)).await.unwrap();

    let update = UpdateResultRequest {
        competition_name: "World Final".to_string(),
        performance: 9.79,
        event_date: NaiveDate::from_ymd_opt(2024, 8, 4).unwrap(),
        location: "Paris".to_string(),
        additional_info: json!({}),
    };
    let updated = results.update(created.id, &update).await.unwrap().unwrap();
    assert_eq!(updated.performance, 9.79);
    assert_eq!(updated.location, "Paris");
    assert_eq!(updated.sport_id, dash.id);
    assert_eq!(updated.athlete_id, runner.id);

    assert!(results.update(created.id + 100, &update).await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn result_with_unknown_sport_is_rejected(pool: PgPool) {
    let athletes = AthleteRepository::new(&pool);
    let runner = athletes.create(&athlete("A. Runner", "USA", 1995)).await.unwrap();

    let err = ResultRepository::new(&pool)
        .create(&result(4242, runner.id, 9.81))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::ConstraintViolation(_)));
}

#[sqlx::test]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn athlete_age_and_victories_bounds_are_strict(pool: PgPool) {
    let repo = AthleteRepository::new(&pool);
    let year = Utc::now().year();
    for (name, age, victories) in [("A. Young", 20, 1), ("B. Old", 41, 3), ("C. Forty", 40, 5)] {
        repo.create(&CreateAthleteRequest {
            victories,
            ..athlete(name, "KEN", year - age)
        })
        .await
        .unwrap();
    }

    let over_forty = repo
        .filter(&AthleteFilter {
            age_gt: Some(40),
            ..athlete_filter()
        })
        .await
        .unwrap();
    assert_eq!(names(&over_forty), vec!["B. Old"]);

    let under_forty = repo
        .filter(&AthleteFilter {
            age_lt: Some(40),
            ..athlete_filter()
        })
        .await
        .unwrap();
    assert_eq!(names(&under_forty), vec!["A. Young"]);

    let more_than_three = repo
        .filter(&AthleteFilter {
            victories_gt: Some(3),
            ..athlete_filter()
        })
        .await
        .unwrap();
    assert_eq!(names(&more_than_three), vec!["C. Forty"]);

    let between = repo
        .filter(&AthleteFilter {
            victories_gt: Some(1),
            victories_lt: Some(5),
            ..athlete_filter()
        })
        .await
        .unwrap();
    assert_eq!(names(&between), vec!["B. Old"]);
}

#[sqlx::test]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn sport_unit_filter_matches_substring_ignoring_case(pool: PgPool) {
    let repo = SportRepository::new(&pool);
    repo.create(&sport("100m Dash", "seconds", None)).await.unwrap();
    repo.create(&sport("Long_Jump", "meters", None)).await.unwrap();

    let timed = repo
        .filter(&SportFilter {
            unit: Some("SEC".to_string()),
            ..sport_filter()
        })
        .await
        .unwrap();
    assert_eq!(timed.len(), 1);
    assert_eq!(timed[0].name, "100m Dash");

    let underscore = repo
        .filter(&SportFilter {
            name: Some("_".to_string()),
            ..sport_filter()
        })
        .await
        .unwrap();
    assert_eq!(underscore.len(), 1);
    assert_eq!(underscore[0].name, "Long_Jump");
}

#[sqlx::test]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn result_filters_by_ids_location_and_competition(pool: PgPool) {
    let sports = SportRepository::new(&pool);
    let athletes = AthleteRepository::new(&pool);
    let results = ResultRepository::new(&pool);

    let dash = sports.create(&sport("100m Dash", "seconds", None)).await.unwrap();
    let jump = sports.create(&sport("Long Jump", "meters", None)).await.unwrap();
    let runner = athletes.create(&athlete("A. Runner", "USA", 1995)).await.unwrap();
    let jumper = athletes.create(&athlete("B. Jumper", "GBR", 1996)).await.unwrap();

    let indoor = results.create(&result(dash.id, runner.id, 9.81)).await.unwrap();
    let outdoor = results
        .create(&CreateResultRequest {
            competition_name: "Summer Open".to_string(),
            location: "Berlin".to_string(),
            ..result(jump.id, jumper.id, 8.10)
        })
        .await
        .unwrap();

    let by_athlete = results
        .filter(&ResultFilter {
            athlete_id: Some(jumper.id),
            ..result_filter()
        })
        .await
        .unwrap();
    assert_eq!(by_athlete, vec![outdoor.clone()]);

    let by_sport = results
        .filter(&ResultFilter {
            sport_id: Some(dash.id),
            ..result_filter()
        })
        .await
        .unwrap();
    assert_eq!(by_sport, vec![indoor.clone()]);

    let in_tokyo_indoors = results
        .filter(&ResultFilter {
            location: Some("tok".to_string()),
            competition: Some("INDOOR".to_string()),
            ..result_filter()
        })
        .await
        .unwrap();
    assert_eq!(in_tokyo_indoors, vec![indoor]);

    let nowhere = results
        .filter(&ResultFilter {
            location: Some("berlin".to_string()),
            competition: Some("indoor".to_string()),
            ..result_filter()
        })
        .await
        .unwrap();
    assert!(nowhere.is_empty());
}

#[sqlx::test]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn renaming_sport_to_taken_name_reports_duplicate(pool: PgPool) {
    let repo = SportRepository::new(&pool);
    repo.create(&sport("Pole Vault", "meters", None)).await.unwrap();
    let other = repo.create(&sport("High Jump", "meters", None)).await.unwrap();

    let err = repo
        .update(other.id, &sport("Pole Vault", "meters", None))
        .await
        .unwrap_err();
    match err {
        StorageError::ConstraintViolation(message) => {
            assert_eq!(message, "A sport with this name already exists")
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
