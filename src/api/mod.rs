//! HTTP API handlers

use axum::extract::rejection::JsonRejection;
use axum::Json;
use sqlx::SqlitePool;

use crate::db::{self, Match};
use crate::{ApiError, ApiResult};

pub mod health;
pub mod matches;
pub mod rallies;
pub mod shots;
pub mod stats;
pub mod video;

/// Unwrap a JSON body, mapping malformed JSON and schema violations to a
/// 400 with the rejection's field-level detail.
pub(crate) fn require_json<T>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(ApiError::InvalidInput(rejection.body_text())),
    }
}

/// Look up a match for a sub-resource route: non-positive ids are invalid
/// input, absent matches are not found.
pub(crate) async fn require_match(db: &SqlitePool, id: i64) -> ApiResult<Match> {
    if id < 1 {
        return Err(ApiError::InvalidInput(format!("Invalid match id: {}", id)));
    }
    db::matches::get_match(db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Match {} not found", id)))
}
