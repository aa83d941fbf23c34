//! Shot endpoints: listing, tagging, deletion
//!
//! Insert and delete go through the bookkeeping in `db::shots` so rally
//! length and winner flags stay consistent.

use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{require_json, require_match};
use crate::db::shots::{self, NewShot, ShotDelete, ShotInsert};
use crate::db::Shot;
use crate::{ApiError, ApiResult, AppState};

/// Query parameters for shot listing
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotsQuery {
    /// Restrict to one rally
    pub rally_id: Option<i64>,
}

/// GET /matches/:id/shots
pub async fn list_shots(
    State(state): State<AppState>,
    Path(match_id): Path<i64>,
    Query(query): Query<ShotsQuery>,
) -> ApiResult<Json<Vec<Shot>>> {
    require_match(&state.db, match_id).await?;
    let shots = shots::shots_for_match(&state.db, match_id, query.rally_id).await?;
    Ok(Json(shots))
}

/// Reference to a rally auto-created during shot insert
#[derive(Debug, Serialize)]
pub struct RallyRef {
    pub id: i64,
}

/// Response for shot creation; `rallyCreated` is present only when the
/// shot started a new rally, so the caller can keep appending to it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShotResponse {
    pub shot: Shot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rally_created: Option<RallyRef>,
}

/// POST /matches/:id/shots
pub async fn create_shot(
    State(state): State<AppState>,
    Path(match_id): Path<i64>,
    payload: Result<Json<NewShot>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreateShotResponse>)> {
    require_match(&state.db, match_id).await?;
    let new = require_json(payload)?;
    if new.rally_id.is_some_and(|id| id < 1) {
        return Err(ApiError::InvalidInput("rallyId must be positive".to_string()));
    }
    match shots::insert_shot(&state.db, match_id, new).await? {
        ShotInsert::Created { shot, new_rally } => Ok((
            StatusCode::CREATED,
            Json(CreateShotResponse {
                shot,
                rally_created: new_rally.map(|r| RallyRef { id: r.id }),
            }),
        )),
        ShotInsert::RallyNotFound => Err(ApiError::NotFound("Rally not found".to_string())),
    }
}

/// DELETE /matches/:id/shots/:shot_id
pub async fn delete_shot(
    State(state): State<AppState>,
    Path((match_id, shot_id)): Path<(i64, i64)>,
) -> ApiResult<Json<serde_json::Value>> {
    if shot_id < 1 {
        return Err(ApiError::InvalidInput(format!("Invalid shot id: {}", shot_id)));
    }
    require_match(&state.db, match_id).await?;
    match shots::delete_shot(&state.db, match_id, shot_id).await? {
        ShotDelete::Deleted => Ok(Json(json!({ "deleted": shot_id }))),
        ShotDelete::NotFound => Err(ApiError::NotFound(format!("Shot {} not found", shot_id))),
    }
}

/// Build shot routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/matches/:id/shots", get(list_shots).post(create_shot))
        .route("/matches/:id/shots/:shot_id", delete(delete_shot))
}
