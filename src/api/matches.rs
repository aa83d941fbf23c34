//! Match CRUD endpoints

use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::path::Path as FsPath;
use tracing::info;

use super::require_json;
use crate::db::matches::{self, MatchPatch, MatchSort, NewMatch};
use crate::db::{Match, MatchCategory};
use crate::{ApiError, ApiResult, AppState};

/// Query parameters for match listing
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub sort: Option<String>,
    pub category: Option<String>,
}

/// GET /matches
///
/// Unknown sort values fall back to creation order; a category of "All"
/// (or absent) applies no filter.
pub async fn list_matches(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Vec<Match>>> {
    let sort = MatchSort::parse(query.sort.as_deref());
    let category = query
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all"));
    let list = matches::list_matches(&state.db, sort, category).await?;
    Ok(Json(list))
}

/// Request body for match creation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchBody {
    pub title: Option<String>,
    pub video_path: String,
    pub duration_seconds: Option<i64>,
}

/// POST /matches
///
/// A blank title falls back to the video file name, then "Untitled".
pub async fn create_match(
    State(state): State<AppState>,
    payload: Result<Json<CreateMatchBody>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Match>)> {
    let body = require_json(payload)?;
    if body.video_path.trim().is_empty() {
        return Err(ApiError::InvalidInput("videoPath must not be empty".to_string()));
    }
    if body.duration_seconds.is_some_and(|d| d < 0) {
        return Err(ApiError::InvalidInput(
            "durationSeconds must be non-negative".to_string(),
        ));
    }
    let title = body
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .or_else(|| {
            FsPath::new(&body.video_path)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "Untitled".to_string());

    let created = matches::insert_match(
        &state.db,
        NewMatch {
            title,
            video_path: body.video_path,
            duration_seconds: body.duration_seconds,
        },
    )
    .await?;
    info!("Created match {} ({})", created.id, created.title);
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /matches/:id
///
/// Non-numeric and non-positive ids are indistinguishable from absent
/// matches: all are 404.
pub async fn get_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Match>> {
    let id: i64 = id
        .parse()
        .ok()
        .filter(|&n| n >= 1)
        .ok_or_else(|| ApiError::NotFound(format!("Match {} not found", id)))?;
    let found = matches::get_match(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Match {} not found", id)))?;
    Ok(Json(found))
}

/// Request body for partial match update
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMatchBody {
    pub title: Option<String>,
    pub duration_seconds: Option<i64>,
    pub date: Option<String>,
    pub opponent: Option<String>,
    pub result: Option<String>,
    pub notes: Option<String>,
    pub category: Option<MatchCategory>,
}

/// PATCH /matches/:id
pub async fn update_match(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateMatchBody>, JsonRejection>,
) -> ApiResult<Json<Match>> {
    let body = require_json(payload)?;
    if body.duration_seconds.is_some_and(|d| d < 0) {
        return Err(ApiError::InvalidInput(
            "durationSeconds must be non-negative".to_string(),
        ));
    }
    if body.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return Err(ApiError::InvalidInput("title must not be empty".to_string()));
    }
    let patch = MatchPatch {
        title: body.title,
        duration_seconds: body.duration_seconds,
        date: body.date,
        opponent: body.opponent,
        result: body.result,
        notes: body.notes,
        category: body.category,
    };
    let updated = matches::update_match(&state.db, id, patch)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Match {} not found", id)))?;
    Ok(Json(updated))
}

/// DELETE /matches/:id (cascades to rallies and shots)
pub async fn delete_match(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<serde_json::Value>> {
    let deleted = matches::delete_match(&state.db, id).await?;
    if !deleted {
        return Err(ApiError::NotFound(format!("Match {} not found", id)));
    }
    info!("Deleted match {}", id);
    Ok(Json(json!({ "deleted": id })))
}

/// Build match routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/matches", get(list_matches).post(create_match))
        .route(
            "/matches/:id",
            get(get_match).patch(update_match).delete(delete_match),
        )
}
