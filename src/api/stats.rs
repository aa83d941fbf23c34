//! Stats feed: flat shot lists for chart aggregation

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::db::shots;
use crate::db::Shot;
use crate::{ApiResult, AppState};

/// Query parameters for the stats shot feed
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsQuery {
    /// Comma-separated match ids; omitted means all matches
    pub match_ids: Option<String>,
}

/// Parse a comma-separated id list, keeping only positive integers
fn parse_match_ids(raw: &str) -> Vec<i64> {
    raw.split(',')
        .filter_map(|part| part.trim().parse::<i64>().ok())
        .filter(|&id| id >= 1)
        .collect()
}

/// GET /stats/shots?matchIds=1,2
///
/// An empty matchIds value yields an empty result; an omitted parameter
/// yields all shots.
pub async fn stats_shots(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> ApiResult<Json<Vec<Shot>>> {
    let ids = query.match_ids.as_deref().map(parse_match_ids);
    let shots = shots::shots_for_matches(&state.db, ids.as_deref()).await?;
    Ok(Json(shots))
}

/// Build stats routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/stats/shots", get(stats_shots))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_ids() {
        assert_eq!(parse_match_ids("1,2,3"), vec![1, 2, 3]);
        assert_eq!(parse_match_ids(" 1 , 2 "), vec![1, 2]);
    }

    #[test]
    fn drops_invalid_and_non_positive_ids() {
        assert_eq!(parse_match_ids("0,-1,abc,2"), vec![2]);
        assert_eq!(parse_match_ids(""), Vec::<i64>::new());
        assert_eq!(parse_match_ids(",,"), Vec::<i64>::new());
    }
}
