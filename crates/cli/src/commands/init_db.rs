//! One-shot schema creation.

use anyhow::{Context, Result};
use quizlink_core::AppConfig;
use quizlink_storage::{StorageBackend, UserResponseStore};

pub(crate) async fn run(config: AppConfig) -> Result<()> {
    let storage = StorageBackend::new_postgres(config.database_url);
    storage.init_schema().await.context("failed to initialize database table")?;
    tracing::info!("Database table initialized successfully");
    Ok(())
}
