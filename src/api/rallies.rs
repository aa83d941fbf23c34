//! Rally endpoints: listing with shots, explicit creation, deletion

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde_json::json;

use super::require_match;
use crate::db::rallies;
use crate::db::{Rally, RallyWithShots};
use crate::{ApiError, ApiResult, AppState};

/// GET /matches/:id/rallies
///
/// Rallies in creation order, each with its shots in insertion order.
pub async fn list_rallies(
    State(state): State<AppState>,
    Path(match_id): Path<i64>,
) -> ApiResult<Json<Vec<RallyWithShots>>> {
    require_match(&state.db, match_id).await?;
    let rallies = rallies::rallies_with_shots(&state.db, match_id).await?;
    Ok(Json(rallies))
}

/// POST /matches/:id/rallies ("start new rally")
pub async fn create_rally(
    State(state): State<AppState>,
    Path(match_id): Path<i64>,
) -> ApiResult<(StatusCode, Json<Rally>)> {
    require_match(&state.db, match_id).await?;
    let rally = rallies::insert_rally(&state.db, match_id).await?;
    Ok((StatusCode::CREATED, Json(rally)))
}

/// DELETE /matches/:id/rallies/:rally_id
pub async fn delete_rally(
    State(state): State<AppState>,
    Path((match_id, rally_id)): Path<(i64, i64)>,
) -> ApiResult<Json<serde_json::Value>> {
    if rally_id < 1 {
        return Err(ApiError::InvalidInput(format!("Invalid rally id: {}", rally_id)));
    }
    require_match(&state.db, match_id).await?;
    let deleted = rallies::delete_rally(&state.db, match_id, rally_id).await?;
    if !deleted {
        return Err(ApiError::NotFound(format!("Rally {} not found", rally_id)));
    }
    Ok(Json(json!({ "deleted": rally_id })))
}

/// Build rally routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/matches/:id/rallies",
            get(list_rallies).post(create_rally),
        )
        .route("/matches/:id/rallies/:rally_id", delete(delete_rally))
}
