use std::sync::Arc;

use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clubhouse::{
    config::Settings,
    repository::{
        schema, SqliteAnnouncementRepository, SqliteEventRepository, SqliteMemberRepository,
    },
    web::{self, state::AppState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clubhouse=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let settings = Settings::new().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config: {}. Using defaults.", e);
        Settings::default()
    });

    tracing::info!(
        "Starting Clubhouse server on {}:{}",
        settings.server.host,
        settings.server.port
    );

    // Initialize database
    let db_pool = SqlitePoolOptions::new()
        .max_connections(settings.database.max_connections)
        .connect(&settings.database.url)
        .await?;

    // Ensure the three tables exist. Safe to run on every startup.
    schema::init_schema(&db_pool).await?;

    // Initialize repositories
    let announcement_repo = Arc::new(SqliteAnnouncementRepository::new(db_pool.clone()));
    let event_repo = Arc::new(SqliteEventRepository::new(db_pool.clone()));
    let member_repo = Arc::new(SqliteMemberRepository::new(db_pool));

    let state = AppState::new(
        announcement_repo,
        event_repo,
        member_repo,
        Arc::new(settings.clone()),
    );

    let app = web::create_web_routes(state);

    let listener = tokio::net::TcpListener::bind(format!(
        "{}:{}",
        settings.server.host, settings.server.port
    ))
    .await?;

    tracing::info!(
        "Server listening on http://{}:{}",
        settings.server.host,
        settings.server.port
    );

    axum::serve(listener, app).await?;

    Ok(())
}
