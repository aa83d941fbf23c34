//! Rally queries and the rally+shot join assembly

use chrono::Utc;
use sqlx::SqlitePool;
use std::collections::HashMap;

use super::models::{Rally, RallyWithShots, Shot};

/// Create an empty rally (length 0, no winner yet) under a match
pub async fn insert_rally(db: &SqlitePool, match_id: i64) -> sqlx::Result<Rally> {
    sqlx::query_as::<_, Rally>(
        "INSERT INTO rallies (match_id, rally_length, created_at)
         VALUES (?, 0, ?)
         RETURNING *",
    )
    .bind(match_id)
    .bind(Utc::now())
    .fetch_one(db)
    .await
}

/// Fetch one rally by id
pub async fn get_rally(db: &SqlitePool, id: i64) -> sqlx::Result<Option<Rally>> {
    sqlx::query_as::<_, Rally>("SELECT * FROM rallies WHERE id = ?")
        .bind(id)
        .fetch_optional(db)
        .await
}

/// Delete a rally belonging to the given match; its shots cascade.
///
/// Returns false when the rally does not exist under that match.
pub async fn delete_rally(db: &SqlitePool, match_id: i64, rally_id: i64) -> sqlx::Result<bool> {
    let result = sqlx::query("DELETE FROM rallies WHERE id = ? AND match_id = ?")
        .bind(rally_id)
        .bind(match_id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// All rallies for a match in creation order, each annotated with its shots
/// in insertion order. Two queries plus in-memory grouping.
pub async fn rallies_with_shots(
    db: &SqlitePool,
    match_id: i64,
) -> sqlx::Result<Vec<RallyWithShots>> {
    let rallies = sqlx::query_as::<_, Rally>(
        "SELECT * FROM rallies WHERE match_id = ? ORDER BY id ASC",
    )
    .bind(match_id)
    .fetch_all(db)
    .await?;

    let all_shots = sqlx::query_as::<_, Shot>(
        "SELECT * FROM shots WHERE match_id = ? ORDER BY id ASC",
    )
    .bind(match_id)
    .fetch_all(db)
    .await?;

    let mut shots_by_rally: HashMap<i64, Vec<Shot>> = HashMap::new();
    for shot in all_shots {
        shots_by_rally.entry(shot.rally_id).or_default().push(shot);
    }

    Ok(rallies
        .into_iter()
        .map(|rally| {
            let shots = shots_by_rally.remove(&rally.id).unwrap_or_default();
            RallyWithShots { rally, shots }
        })
        .collect())
}
