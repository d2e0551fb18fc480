use anyhow::{Context, Result};
use quizlink_core::AppConfig;
use quizlink_http::{AppState, LandingSettings, create_router};
use quizlink_service::IngestService;
use quizlink_storage::StorageBackend;
use std::sync::Arc;

pub(crate) async fn run(config: AppConfig) -> Result<()> {
    let database_configured = config.database_url.is_some();
    let storage = Arc::new(StorageBackend::new_postgres(config.database_url));
    let ingest_service = Arc::new(IngestService::new(storage));

    // Without a connection string the server still starts; every storage route answers 500.
    if database_configured {
        ingest_service.init_schema().await.context("database initialization failed")?;
        tracing::info!("Database table initialized successfully");
    } else {
        tracing::error!("DATABASE_URL environment variable not set, storage routes will fail");
    }

    let landing = LandingSettings {
        facebook_app_id: config.facebook_app_id,
        quiz_url: config.quiz_url,
    };
    let state = Arc::new(AppState::new(ingest_service, &landing));

    let router = create_router(state);
    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
