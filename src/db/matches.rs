//! Match queries: list with filter/sort, fetch, insert, patch, delete

use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use super::models::{Match, MatchCategory};

/// Sort order for match listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchSort {
    /// Match date, newest first
    Date,
    /// Opponent name, A-Z
    Opponent,
    /// Title, A-Z
    Title,
    /// Creation time, newest first
    #[default]
    CreatedAt,
}

impl MatchSort {
    /// Parse a query-string value; unknown values fall back to the default
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("date") => MatchSort::Date,
            Some("opponent") => MatchSort::Opponent,
            Some("title") => MatchSort::Title,
            _ => MatchSort::CreatedAt,
        }
    }

    fn order_clause(self) -> &'static str {
        match self {
            MatchSort::Date => "date DESC",
            MatchSort::Opponent => "opponent ASC",
            MatchSort::Title => "title ASC",
            MatchSort::CreatedAt => "created_at DESC",
        }
    }
}

/// List matches, optionally filtered to one category.
///
/// A filter of `None` (absent or "All") applies no filter; an unknown
/// category value matches nothing.
pub async fn list_matches(
    db: &SqlitePool,
    sort: MatchSort,
    category: Option<&str>,
) -> sqlx::Result<Vec<Match>> {
    let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM matches");
    if let Some(category) = category {
        qb.push(" WHERE category = ");
        qb.push_bind(category);
    }
    qb.push(" ORDER BY ");
    qb.push(sort.order_clause());
    qb.build_query_as::<Match>().fetch_all(db).await
}

/// Fetch one match by id
pub async fn get_match(db: &SqlitePool, id: i64) -> sqlx::Result<Option<Match>> {
    sqlx::query_as::<_, Match>("SELECT * FROM matches WHERE id = ?")
        .bind(id)
        .fetch_optional(db)
        .await
}

/// Fields for match creation
#[derive(Debug)]
pub struct NewMatch {
    pub title: String,
    pub video_path: String,
    pub duration_seconds: Option<i64>,
}

/// Insert a new match with default category and fresh timestamps
pub async fn insert_match(db: &SqlitePool, new: NewMatch) -> sqlx::Result<Match> {
    let now = Utc::now();
    sqlx::query_as::<_, Match>(
        "INSERT INTO matches (title, video_path, duration_seconds, category, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?)
         RETURNING *",
    )
    .bind(new.title)
    .bind(new.video_path)
    .bind(new.duration_seconds)
    .bind(MatchCategory::default())
    .bind(now)
    .bind(now)
    .fetch_one(db)
    .await
}

/// Partial update of match metadata; absent fields are left untouched
#[derive(Debug, Default)]
pub struct MatchPatch {
    pub title: Option<String>,
    pub duration_seconds: Option<i64>,
    pub date: Option<String>,
    pub opponent: Option<String>,
    pub result: Option<String>,
    pub notes: Option<String>,
    pub category: Option<MatchCategory>,
}

/// Apply a partial update, refreshing updated_at.
///
/// Returns `None` when no match with that id exists.
pub async fn update_match(
    db: &SqlitePool,
    id: i64,
    patch: MatchPatch,
) -> sqlx::Result<Option<Match>> {
    let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE matches SET updated_at = ");
    qb.push_bind(Utc::now());
    if let Some(title) = patch.title {
        qb.push(", title = ");
        qb.push_bind(title);
    }
    if let Some(duration) = patch.duration_seconds {
        qb.push(", duration_seconds = ");
        qb.push_bind(duration);
    }
    if let Some(date) = patch.date {
        qb.push(", date = ");
        qb.push_bind(date);
    }
    if let Some(opponent) = patch.opponent {
        qb.push(", opponent = ");
        qb.push_bind(opponent);
    }
    if let Some(result) = patch.result {
        qb.push(", result = ");
        qb.push_bind(result);
    }
    if let Some(notes) = patch.notes {
        qb.push(", notes = ");
        qb.push_bind(notes);
    }
    if let Some(category) = patch.category {
        qb.push(", category = ");
        qb.push_bind(category);
    }
    qb.push(" WHERE id = ");
    qb.push_bind(id);
    qb.push(" RETURNING *");
    qb.build_query_as::<Match>().fetch_optional(db).await
}

/// Delete a match; rallies and shots go with it via FK cascade.
///
/// Returns false when no match with that id exists.
pub async fn delete_match(db: &SqlitePool, id: i64) -> sqlx::Result<bool> {
    let result = sqlx::query("DELETE FROM matches WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_parse_falls_back_to_created_at() {
        assert_eq!(MatchSort::parse(Some("date")), MatchSort::Date);
        assert_eq!(MatchSort::parse(Some("opponent")), MatchSort::Opponent);
        assert_eq!(MatchSort::parse(Some("title")), MatchSort::Title);
        assert_eq!(MatchSort::parse(Some("createdAt")), MatchSort::CreatedAt);
        assert_eq!(MatchSort::parse(Some("bogus")), MatchSort::CreatedAt);
        assert_eq!(MatchSort::parse(None), MatchSort::CreatedAt);
    }
}
