//! Shot queries and rally-length/winner bookkeeping
//!
//! Inserting or deleting a shot keeps the owning rally's `rally_length` and
//! `won_by_me` consistent: the length always equals the shot count and the
//! winner flag mirrors the highest-id remaining shot (NULL when empty).

use chrono::Utc;
use serde::Deserialize;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use super::models::{Outcome, Rally, Shot, ShotType, Side, Zone};
use super::rallies;

/// Client-supplied fields for shot creation; derived fields
/// (`isLastShotOfRally`, `wonByMe`) are computed server-side.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewShot {
    /// Append to this rally; absent means start a new rally
    pub rally_id: Option<i64>,
    pub shot_type: ShotType,
    pub zone_from_side: Side,
    pub zone_from: Zone,
    pub zone_to_side: Side,
    pub zone_to: Zone,
    pub outcome: Outcome,
    pub player: Side,
}

/// Result of a shot insert
#[derive(Debug)]
pub enum ShotInsert {
    /// Shot created; `new_rally` is set when no rally id was given
    Created { shot: Shot, new_rally: Option<Rally> },
    /// Given rally id is absent or belongs to another match
    RallyNotFound,
}

/// Insert a shot, creating a rally first if none was given.
///
/// Increments the owning rally's length and mirrors the new shot's
/// outcome-derived winner flag onto the rally.
pub async fn insert_shot(
    db: &SqlitePool,
    match_id: i64,
    new: NewShot,
) -> sqlx::Result<ShotInsert> {
    let (rally_id, new_rally) = match new.rally_id {
        Some(rally_id) => {
            match rallies::get_rally(db, rally_id).await? {
                Some(rally) if rally.match_id == match_id => (rally_id, None),
                _ => return Ok(ShotInsert::RallyNotFound),
            }
        }
        None => {
            let rally = rallies::insert_rally(db, match_id).await?;
            (rally.id, Some(rally))
        }
    };

    let is_last_shot = new.outcome.ends_rally();
    let won_by_me = new.outcome.won_by_me(new.player);

    let shot = sqlx::query_as::<_, Shot>(
        "INSERT INTO shots (match_id, rally_id, shot_type, zone_from_side, zone_from,
                            zone_to_side, zone_to, outcome, won_by_me,
                            is_last_shot_of_rally, player, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
         RETURNING *",
    )
    .bind(match_id)
    .bind(rally_id)
    .bind(new.shot_type)
    .bind(new.zone_from_side)
    .bind(new.zone_from)
    .bind(new.zone_to_side)
    .bind(new.zone_to)
    .bind(new.outcome)
    .bind(won_by_me)
    .bind(is_last_shot)
    .bind(new.player)
    .bind(Utc::now())
    .fetch_one(db)
    .await?;

    // The new shot is now the rally's last shot
    sqlx::query("UPDATE rallies SET rally_length = rally_length + 1, won_by_me = ? WHERE id = ?")
        .bind(won_by_me)
        .bind(rally_id)
        .execute(db)
        .await?;

    Ok(ShotInsert::Created { shot, new_rally })
}

/// Result of a shot delete
#[derive(Debug, PartialEq, Eq)]
pub enum ShotDelete {
    Deleted,
    /// Shot absent or belongs to another match
    NotFound,
}

/// Delete a shot and rebalance the owning rally: decrement the length
/// (never below 0) and recompute `won_by_me` from the remaining highest-id
/// shot, clearing it when the rally is now empty.
pub async fn delete_shot(
    db: &SqlitePool,
    match_id: i64,
    shot_id: i64,
) -> sqlx::Result<ShotDelete> {
    let existing = sqlx::query_as::<_, Shot>(
        "SELECT * FROM shots WHERE id = ? AND match_id = ?",
    )
    .bind(shot_id)
    .bind(match_id)
    .fetch_optional(db)
    .await?;

    let Some(shot) = existing else {
        return Ok(ShotDelete::NotFound);
    };

    sqlx::query("DELETE FROM shots WHERE id = ?")
        .bind(shot_id)
        .execute(db)
        .await?;

    if let Some(rally) = rallies::get_rally(db, shot.rally_id).await? {
        if rally.rally_length > 0 {
            let new_length = rally.rally_length - 1;
            let won_by_me: Option<bool> = if new_length > 0 {
                sqlx::query_scalar(
                    "SELECT won_by_me FROM shots WHERE rally_id = ? ORDER BY id DESC LIMIT 1",
                )
                .bind(shot.rally_id)
                .fetch_optional(db)
                .await?
                .flatten()
            } else {
                None
            };
            sqlx::query("UPDATE rallies SET rally_length = ?, won_by_me = ? WHERE id = ?")
                .bind(new_length)
                .bind(won_by_me)
                .bind(shot.rally_id)
                .execute(db)
                .await?;
        }
    }

    Ok(ShotDelete::Deleted)
}

/// Shots for one match in insertion order, optionally filtered to one rally
pub async fn shots_for_match(
    db: &SqlitePool,
    match_id: i64,
    rally_id: Option<i64>,
) -> sqlx::Result<Vec<Shot>> {
    match rally_id {
        Some(rally_id) => {
            sqlx::query_as::<_, Shot>(
                "SELECT * FROM shots WHERE match_id = ? AND rally_id = ? ORDER BY id ASC",
            )
            .bind(match_id)
            .bind(rally_id)
            .fetch_all(db)
            .await
        }
        None => {
            sqlx::query_as::<_, Shot>(
                "SELECT * FROM shots WHERE match_id = ? ORDER BY id ASC",
            )
            .bind(match_id)
            .fetch_all(db)
            .await
        }
    }
}

/// Flat shot list for the stats feed, ordered by (match, insertion).
///
/// `None` means all matches; an empty id list yields an empty result.
pub async fn shots_for_matches(
    db: &SqlitePool,
    match_ids: Option<&[i64]>,
) -> sqlx::Result<Vec<Shot>> {
    match match_ids {
        None => {
            sqlx::query_as::<_, Shot>("SELECT * FROM shots ORDER BY match_id ASC, id ASC")
                .fetch_all(db)
                .await
        }
        Some([]) => Ok(Vec::new()),
        Some(ids) => {
            let mut qb: QueryBuilder<Sqlite> =
                QueryBuilder::new("SELECT * FROM shots WHERE match_id IN (");
            let mut separated = qb.separated(", ");
            for id in ids {
                separated.push_bind(*id);
            }
            qb.push(") ORDER BY match_id ASC, id ASC");
            qb.build_query_as::<Shot>().fetch_all(db).await
        }
    }
}
