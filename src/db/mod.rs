//! Database access layer
//!
//! SQLite via sqlx. The schema is created idempotently at startup; foreign
//! keys are enabled so match deletion cascades to rallies and shots.

use anyhow::{Context, Result};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

pub mod matches;
pub mod models;
pub mod rallies;
pub mod shots;

pub use models::{
    Match, MatchCategory, Outcome, Rally, RallyWithShots, Shot, ShotType, Side, Zone,
};

/// Initialize database connection and create tables if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    // mode=rwc creates the database file on first run
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await
        .with_context(|| format!("Failed to open database {}", db_path.display()))?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // Cascading deletes depend on this pragma
    sqlx::query("PRAGMA foreign_keys = ON").execute(&pool).await?;

    // WAL allows concurrent readers with one writer
    sqlx::query("PRAGMA journal_mode = WAL").execute(&pool).await?;

    sqlx::query("PRAGMA busy_timeout = 5000").execute(&pool).await?;

    create_schema(&pool).await?;

    Ok(pool)
}

/// Create tables and indexes (idempotent, safe to call multiple times)
async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS matches (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            video_path TEXT NOT NULL,
            duration_seconds INTEGER,
            date TEXT,
            opponent TEXT,
            result TEXT,
            notes TEXT,
            category TEXT NOT NULL DEFAULT 'Uncategorized',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS rallies (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            match_id INTEGER NOT NULL REFERENCES matches(id) ON DELETE CASCADE,
            rally_length INTEGER NOT NULL DEFAULT 0,
            won_by_me INTEGER,
            created_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS shots (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            match_id INTEGER NOT NULL REFERENCES matches(id) ON DELETE CASCADE,
            rally_id INTEGER NOT NULL REFERENCES rallies(id) ON DELETE CASCADE,
            shot_type TEXT NOT NULL,
            zone_from_side TEXT NOT NULL,
            zone_from TEXT NOT NULL,
            zone_to_side TEXT NOT NULL,
            zone_to TEXT NOT NULL,
            outcome TEXT NOT NULL,
            won_by_me INTEGER,
            is_last_shot_of_rally INTEGER NOT NULL DEFAULT 0,
            player TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_rallies_match ON rallies(match_id)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_shots_match ON shots(match_id)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_shots_rally ON shots(rally_id)")
        .execute(pool)
        .await?;

    Ok(())
}
