//! Database models and closed enumerations
//!
//! String unions from the schema (categories, shot types, zones, sides,
//! outcomes) are Rust enums backed by TEXT columns. Validation happens at
//! the serde boundary; internal code trusts the types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Match category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
pub enum MatchCategory {
    #[default]
    Uncategorized,
    Singles,
    Doubles,
    Mixed,
}

/// Shot type (canonical order: serve first, block last)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ShotType {
    Serve,
    Clear,
    Smash,
    Drop,
    Drive,
    Lift,
    Net,
    Block,
}

impl ShotType {
    /// Display label for chart legends and tooltips
    pub fn label(self) -> &'static str {
        match self {
            ShotType::Serve => "Serve",
            ShotType::Clear => "Clear",
            ShotType::Smash => "Smash",
            ShotType::Drop => "Drop",
            ShotType::Drive => "Drive",
            ShotType::Lift => "Lift",
            ShotType::Net => "Net",
            ShotType::Block => "Block",
        }
    }
}

/// Court side relative to the tagging player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Side {
    Me,
    Opponent,
}

/// One of the 9 named zones of a court half (3 depth bands x 3 lateral bands)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum Zone {
    LeftFront,
    LeftMid,
    LeftBack,
    CenterFront,
    CenterMid,
    CenterBack,
    RightFront,
    RightMid,
    RightBack,
}

impl Zone {
    /// Position in the 3x3 aggregation grid.
    ///
    /// Row 0 = front, row 2 = back; col 0 = left, col 2 = right.
    pub fn grid_pos(self) -> (usize, usize) {
        let row = match self {
            Zone::LeftFront | Zone::CenterFront | Zone::RightFront => 0,
            Zone::LeftMid | Zone::CenterMid | Zone::RightMid => 1,
            Zone::LeftBack | Zone::CenterBack | Zone::RightBack => 2,
        };
        let col = match self {
            Zone::LeftFront | Zone::LeftMid | Zone::LeftBack => 0,
            Zone::CenterFront | Zone::CenterMid | Zone::CenterBack => 1,
            Zone::RightFront | Zone::RightMid | Zone::RightBack => 2,
        };
        (row, col)
    }
}

/// How a shot ended (or continued) the rally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Outcome {
    Winner,
    Error,
    Neither,
}

impl Outcome {
    /// A winner or error terminates the rally
    pub fn ends_rally(self) -> bool {
        matches!(self, Outcome::Winner | Outcome::Error)
    }

    /// Winner flag derived from outcome and striking player.
    ///
    /// A winner by me or an error by the opponent is a point for me;
    /// a continuing shot decides nothing.
    pub fn won_by_me(self, player: Side) -> Option<bool> {
        match self {
            Outcome::Winner => Some(player == Side::Me),
            Outcome::Error => Some(player == Side::Opponent),
            Outcome::Neither => None,
        }
    }

    /// Display label for chart legends
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Winner => "Winner",
            Outcome::Error => "Error",
            Outcome::Neither => "Neither",
        }
    }
}

/// A catalogued match video
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: i64,
    pub title: String,
    /// Relative to the configured video root
    pub video_path: String,
    pub duration_seconds: Option<i64>,
    pub date: Option<String>,
    pub opponent: Option<String>,
    pub result: Option<String>,
    pub notes: Option<String>,
    pub category: MatchCategory,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One continuous exchange of shots, terminated by a winner or error
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Rally {
    pub id: i64,
    pub match_id: i64,
    /// Count of shots in the rally; kept in sync on shot insert/delete
    pub rally_length: i64,
    /// Winner flag of the rally's current last shot; NULL while empty
    pub won_by_me: Option<bool>,
    pub created_at: DateTime<Utc>,
}

/// One recorded stroke event
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Shot {
    pub id: i64,
    pub match_id: i64,
    pub rally_id: i64,
    pub shot_type: ShotType,
    pub zone_from_side: Side,
    pub zone_from: Zone,
    pub zone_to_side: Side,
    pub zone_to: Zone,
    pub outcome: Outcome,
    pub won_by_me: Option<bool>,
    /// Derived: true iff outcome is winner or error
    pub is_last_shot_of_rally: bool,
    pub player: Side,
    pub created_at: DateTime<Utc>,
}

/// Rally annotated with its shots in insertion order
#[derive(Debug, Clone, Serialize)]
pub struct RallyWithShots {
    #[serde(flatten)]
    pub rally: Rally,
    pub shots: Vec<Shot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_ends_rally() {
        assert!(Outcome::Winner.ends_rally());
        assert!(Outcome::Error.ends_rally());
        assert!(!Outcome::Neither.ends_rally());
    }

    #[test]
    fn outcome_derives_winner_flag() {
        assert_eq!(Outcome::Winner.won_by_me(Side::Me), Some(true));
        assert_eq!(Outcome::Winner.won_by_me(Side::Opponent), Some(false));
        assert_eq!(Outcome::Error.won_by_me(Side::Me), Some(false));
        assert_eq!(Outcome::Error.won_by_me(Side::Opponent), Some(true));
        assert_eq!(Outcome::Neither.won_by_me(Side::Me), None);
        assert_eq!(Outcome::Neither.won_by_me(Side::Opponent), None);
    }

    #[test]
    fn zone_grid_positions() {
        assert_eq!(Zone::LeftFront.grid_pos(), (0, 0));
        assert_eq!(Zone::CenterMid.grid_pos(), (1, 1));
        assert_eq!(Zone::RightBack.grid_pos(), (2, 2));
        assert_eq!(Zone::CenterBack.grid_pos(), (2, 1));
        assert_eq!(Zone::RightFront.grid_pos(), (0, 2));
    }

    #[test]
    fn zone_serializes_snake_case() {
        let json = serde_json::to_string(&Zone::CenterFront).unwrap();
        assert_eq!(json, "\"center_front\"");
        let back: Zone = serde_json::from_str("\"left_back\"").unwrap();
        assert_eq!(back, Zone::LeftBack);
    }

    #[test]
    fn category_defaults_to_uncategorized() {
        assert_eq!(MatchCategory::default(), MatchCategory::Uncategorized);
    }
}
