use utoipa::OpenApi;

use crate::features;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sports API",
        description = "A simple REST API for managing sports, athletes, and results.",
        version = "1.0.0"
    ),
    paths(
        features::sports::handlers::create_sport,
        features::sports::handlers::get_sport,
        features::sports::handlers::list_sports,
        features::sports::handlers::update_sport,
        features::sports::handlers::delete_sport,
        features::sports::handlers::filter_sports,
        features::sports::handlers::sorted_sports,
        features::sports::handlers::sports_with_result_counts,
        features::sports::handlers::group_sports_by_unit,
        features::sports::handlers::update_world_record,
        features::athletes::handlers::create_athlete,
        features::athletes::handlers::get_athlete,
        features::athletes::handlers::list_athletes,
        features::athletes::handlers::update_athlete,
        features::athletes::handlers::delete_athlete,
        features::athletes::handlers::filter_athletes,
        features::athletes::handlers::sorted_athletes,
        features::athletes::handlers::athletes_with_result_counts,
        features::athletes::handlers::group_athletes_by_country,
        features::results::handlers::create_result,
        features::results::handlers::get_result,
        features::results::handlers::list_results,
        features::results::handlers::update_result,
        features::results::handlers::delete_result,
        features::results::handlers::filter_results,
        features::results::handlers::sorted_results,
        features::results::handlers::group_results_by_sport,
        features::results::handlers::best_scores,
    ),
    components(
        schemas(
            storage::dto::sport::CreateSportRequest,
            storage::dto::sport::SportResponse,
            storage::dto::athlete::CreateAthleteRequest,
            storage::dto::athlete::AthleteResponse,
            storage::dto::result::CreateResultRequest,
            storage::dto::result::UpdateResultRequest,
            storage::dto::result::ResultResponse,
            storage::dto::aggregate::SportResultCount,
            storage::dto::aggregate::UnitCount,
            storage::dto::aggregate::AthleteResultCount,
            storage::dto::aggregate::CountryCount,
            storage::dto::aggregate::ResultsPerSport,
            storage::dto::aggregate::BestScore,
            storage::dto::common::MessageResponse,
        )
    ),
    tags(
        (name = "sports", description = "Sports and their records"),
        (name = "athletes", description = "Athletes"),
        (name = "results", description = "Competition results"),
    )
)]
pub struct ApiDoc;
