//! End-to-end scenarios against a real database.
//!
//! Run with `DATABASE_URL=postgres://... cargo test -- --ignored`.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::{Value, json};
use sqlx::PgPool;

use common::{get, router_for, send};

async fn create(router: &axum::Router, uri: &str, body: Value) -> Value {
    let (status, created) = send(router, Method::POST, uri, Some(body)).await;
    assert_eq!(status, StatusCode::OK, "POST {uri}: {created}");
    created
}

#[sqlx::test(migrations = "../storage/migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn sprint_result_shows_up_in_aggregates_and_filters(pool: PgPool) {
    let router = router_for(pool);

    let sport = create(
        &router,
        "/sports",
        json!({ "name": "100m Dash", "unit": "seconds" }),
    )
    .await;
    let athlete = create(
        &router,
        "/athletes",
        json!({ "full_name": "A. Runner", "country": "USA", "birth_year": 1995 }),
    )
    .await;
    assert_eq!(athlete["victories"], 0);

    let result = create(
        &router,
        "/results",
        json!({
            "competition_name": "Indoor Classic",
            "sport_id": sport["id"],
            "athlete_id": athlete["id"],
            "performance": 9.81,
            "event_date": "2024-01-01",
            "location": "Tokyo"
        }),
    )
    .await;
    assert_eq!(result["additional_info"], json!({}));

    let (status, units) = get(&router, "/sports/grouped_by_unit").await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        units
            .as_array()
            .unwrap()
            .contains(&json!({ "unit": "seconds", "count": 1 }))
    );

    let (status, filtered) = get(&router, "/results/filter?score%5Blt%5D=10").await;
    assert_eq!(status, StatusCode::OK);
    assert!(filtered.as_array().unwrap().contains(&result));

    let (_, strict) = get(&router, "/results/filter?score%5Bgt%5D=9.81").await;
    assert!(strict.as_array().unwrap().is_empty());

    let (_, by_sport) = get(&router, "/athletes/filter?sport=dash").await;
    assert_eq!(by_sport.as_array().unwrap().len(), 1);

    let (_, detailed) = get(&router, "/sports/detailed").await;
    assert_eq!(
        detailed,
        json!([{ "name": "100m Dash", "result_count": 1 }])
    );

    let (_, best) = get(&router, "/results/best_scores").await;
    assert_eq!(
        best,
        json!([{ "athlete_id": athlete["id"], "best_score": 9.81 }])
    );
}

#[sqlx::test(migrations = "../storage/migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn missing_athlete_is_not_found(pool: PgPool) {
    let router = router_for(pool);

    let (status, body) = get(&router, "/athletes/424242").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Resource not found");

    let (_, athletes) = get(&router, "/athletes").await;
    assert_eq!(athletes, json!([]));
}

#[sqlx::test(migrations = "../storage/migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn delete_reports_not_found_the_second_time(pool: PgPool) {
    let router = router_for(pool);

    let sport = create(
        &router,
        "/sports",
        json!({ "name": "Long Jump", "unit": "meters" }),
    )
    .await;
    let uri = format!("/sports/{}", sport["id"]);

    let (first, _) = send(&router, Method::DELETE, &uri, None).await;
    assert_eq!(first, StatusCode::NO_CONTENT);

    let (second, _) = send(&router, Method::DELETE, &uri, None).await;
    assert_eq!(second, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../storage/migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn sport_with_results_cannot_be_deleted(pool: PgPool) {
    let router = router_for(pool);

    let sport = create(
        &router,
        "/sports",
        json!({ "name": "Shot Put", "unit": "meters" }),
    )
    .await;
    let athlete = create(
        &router,
        "/athletes",
        json!({ "full_name": "B. Thrower", "country": "Germany", "birth_year": 1990 }),
    )
    .await;
    create(
        &router,
        "/results",
        json!({
            "competition_name": "Berlin Open",
            "sport_id": sport["id"],
            "athlete_id": athlete["id"],
            "performance": 21.3,
            "event_date": "2023-06-01",
            "location": "Berlin"
        }),
    )
    .await;

    let (status, _) = send(
        &router,
        Method::DELETE,
        &format!("/sports/{}", sport["id"]),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = get(&router, &format!("/sports/{}", sport["id"])).await;
    assert_eq!(status, StatusCode::OK);
}

#[sqlx::test(migrations = "../storage/migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn world_record_is_updated_by_name(pool: PgPool) {
    let router = router_for(pool);

    let sport = create(
        &router,
        "/sports",
        json!({ "name": "High Jump", "unit": "meters", "world_record": 2.40 }),
    )
    .await;

    let (status, _) = send(
        &router,
        Method::PUT,
        "/sports/update_world_record?sport_name=High%20Jump&new_record=2.45",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, fetched) = get(&router, &format!("/sports/{}", sport["id"])).await;
    assert_eq!(fetched["world_record"], 2.45);

    let (status, _) = send(
        &router,
        Method::PUT,
        "/sports/update_world_record?sport_name=Curling&new_record=1.0",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
