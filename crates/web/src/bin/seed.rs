use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use serde_json::json;
use storage::{
    Database,
    dto::{
        athlete::CreateAthleteRequest, result::CreateResultRequest, sport::CreateSportRequest,
    },
    repository::{athlete::AthleteRepository, result::ResultRepository, sport::SportRepository},
};

const SPORTS: &[(&str, &str, f64, f64)] = &[
    ("100m Dash", "seconds", 9.58, 9.63),
    ("Long Jump", "meters", 8.95, 8.90),
    ("High Jump", "meters", 2.45, 2.39),
    ("Shot Put", "meters", 23.56, 22.52),
    ("Pole Vault", "meters", 6.26, 6.10),
    ("400m Hurdles", "seconds", 45.94, 45.94),
    ("Javelin Throw", "meters", 98.48, 90.57),
    ("Discus Throw", "meters", 74.35, 70.00),
    ("Marathon", "seconds", 7235.0, 7574.0),
    ("Weight Lifting", "kilograms", 267.0, 263.0),
];

const FIRST_NAMES: &[&str] = &["Alex", "Maria", "Kenji", "Amara", "Lukas", "Sofia", "Diego"];
const LAST_NAMES: &[&str] = &["Runner", "Novak", "Tanaka", "Okafor", "Berg", "Rossi", "Silva"];
const COUNTRIES: &[&str] = &["USA", "Japan", "Kenya", "Germany", "Italy", "Brazil", "Norway"];
const CITIES: &[&str] = &["Tokyo", "Paris", "Nairobi", "Berlin", "Eugene", "Doha"];
const WEATHER: &[&str] = &["Sunny", "Rainy", "Windy"];

#[derive(Parser)]
#[command(name = "seed")]
#[command(about = "Fill the Sports API database with deterministic sample data", long_about = None)]
struct Cli {
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    #[arg(long, default_value_t = 50)]
    athletes: usize,

    #[arg(long, default_value_t = 100)]
    results: usize,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("seed={}", log_level).into()),
        )
        .init();

    let db = Database::new(&cli.database_url, 5)
        .await
        .context("Failed to connect to database")?;
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;

    let sport_ids = seed_sports(&db).await?;
    let athlete_ids = seed_athletes(&db, cli.athletes).await?;

    if sport_ids.is_empty() || athlete_ids.is_empty() {
        tracing::warn!("No sports or athletes available. Skipping result creation.");
        return Ok(());
    }

    seed_results(&db, &sport_ids, &athlete_ids, cli.results).await?;

    tracing::info!("Database population complete");
    Ok(())
}

async fn seed_sports(db: &Database) -> anyhow::Result<Vec<i32>> {
    tracing::info!("Creating sports...");
    let repo = SportRepository::new(db.pool());
    let mut ids = Vec::with_capacity(SPORTS.len());

    for &(name, unit, world_record, olympic_record) in SPORTS {
        if let Some(existing) = repo.find_by_name(name).await? {
            tracing::debug!("Sport {} already exists, skipping", name);
            ids.push(existing.id);
            continue;
        }

        let sport = repo
            .create(&CreateSportRequest {
                name: name.to_string(),
                unit: unit.to_string(),
                world_record: Some(world_record),
                olympic_record: Some(olympic_record),
            })
            .await
            .with_context(|| format!("Failed to create sport {}", name))?;
        ids.push(sport.id);
    }

    tracing::info!("{} sports available", ids.len());
    Ok(ids)
}

async fn seed_athletes(db: &Database, count: usize) -> anyhow::Result<Vec<i32>> {
    tracing::info!("Creating {} athletes...", count);
    let repo = AthleteRepository::new(db.pool());
    let mut ids = Vec::with_capacity(count);

    for i in 0..count {
        let athlete = repo
            .create(&CreateAthleteRequest {
                full_name: format!(
                    "{} {}",
                    FIRST_NAMES[i % FIRST_NAMES.len()],
                    LAST_NAMES[(i / FIRST_NAMES.len()) % LAST_NAMES.len()]
                ),
                country: COUNTRIES[i % COUNTRIES.len()].to_string(),
                birth_year: 1960 + (i % 46) as i32,
                victories: (i % 21) as i32,
            })
            .await?;
        ids.push(athlete.id);
    }

    Ok(ids)
}

async fn seed_results(
    db: &Database,
    sport_ids: &[i32],
    athlete_ids: &[i32],
    count: usize,
) -> anyhow::Result<()> {
    tracing::info!("Creating {} results...", count);
    let repo = ResultRepository::new(db.pool());
    let first_day = NaiveDate::from_ymd_opt(2000, 1, 1).context("invalid start date")?;

    for i in 0..count {
        let event_date = first_day
            .checked_add_days(chrono::Days::new((i as u64 * 97) % 9000))
            .context("event date out of range")?;

        repo.create(&CreateResultRequest {
            competition_name: format!("{} Open {}", CITIES[i % CITIES.len()], 2000 + i % 25),
            performance: 5.0 + ((i * 37) % 9500) as f64 / 100.0,
            event_date,
            location: CITIES[(i / 2) % CITIES.len()].to_string(),
            sport_id: sport_ids[i % sport_ids.len()],
            athlete_id: athlete_ids[(i * 7) % athlete_ids.len()],
            additional_info: json!({
                "weather": WEATHER[i % WEATHER.len()],
                "audience_size": 1000 + (i * 491) % 49000,
            }),
        })
        .await?;
    }

    Ok(())
}
