//! Video serving, inventory listing, and configuration report

use axum::{
    body::Body,
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio_util::io::ReaderStream;

use crate::video::{self, VideoPathError};
use crate::{ApiError, ApiResult, AppState};

/// Query parameters for video streaming
#[derive(Debug, Deserialize)]
pub struct VideoQuery {
    pub path: Option<String>,
}

/// GET /video?path=rel
///
/// Streams the file from disk without buffering it whole; Content-Type
/// comes from the extension, Content-Length from file metadata.
pub async fn stream_video(
    State(state): State<AppState>,
    Query(query): Query<VideoQuery>,
) -> ApiResult<Response> {
    let rel = query
        .path
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ApiError::InvalidInput("Missing or invalid path".to_string()))?;

    let full = video::resolve_video_path(state.video_root.as_deref(), rel).map_err(|e| match e {
        VideoPathError::RootNotSet => ApiError::RootNotSet,
        VideoPathError::PathInvalid => ApiError::PathInvalid(rel.to_string()),
        VideoPathError::NotFound => ApiError::NotFound(format!("Video not found: {}", rel)),
    })?;

    let content_type = video::mime_for_path(&full);
    let file = tokio::fs::File::open(&full).await?;
    let length = file.metadata().await?.len();
    let body = Body::from_stream(ReaderStream::new(file));

    Ok((
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (header::CONTENT_LENGTH, length.to_string()),
        ],
        body,
    )
        .into_response())
}

/// GET /video/files
///
/// Best-effort inventory of video files under the root; an unconfigured or
/// unreadable root degrades to an empty list.
pub async fn list_files(State(state): State<AppState>) -> Json<serde_json::Value> {
    let files = match &state.video_root {
        Some(root) => video::list_video_files(root),
        None => Vec::new(),
    };
    Json(json!({ "files": files }))
}

/// Configuration report for the front end
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub video_root: String,
    pub configured: bool,
}

/// GET /config
pub async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    let (video_root, configured) = match &state.video_root {
        Some(root) => (root.to_string_lossy().into_owned(), true),
        None => (String::new(), false),
    };
    Json(ConfigResponse {
        video_root,
        configured,
    })
}

/// Build video and config routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/video", get(stream_video))
        .route("/video/files", get(list_files))
        .route("/config", get(get_config))
}
