//! Chart-ready aggregation over flat shot lists
//!
//! Pure functions, no I/O. All are total over any well-formed shot list,
//! including the empty list.

use serde::Serialize;

use crate::db::models::{Outcome, Shot, ShotType, Side};

/// Canonical shot-type order for legends and bar charts
pub const SHOT_TYPE_ORDER: [ShotType; 8] = [
    ShotType::Serve,
    ShotType::Clear,
    ShotType::Smash,
    ShotType::Drop,
    ShotType::Drive,
    ShotType::Lift,
    ShotType::Net,
    ShotType::Block,
];

/// Ordered outcomes for stacked bars
pub const OUTCOME_ORDER: [Outcome; 3] = [Outcome::Winner, Outcome::Error, Outcome::Neither];

/// 3x3 count grid: row 0 = front, row 2 = back; col 0 = left, col 2 = right
pub type ZoneGrid = [[u32; 3]; 3];

/// One slice of the shot-distribution donut
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotTypeCount {
    pub shot_type: ShotType,
    pub label: &'static str,
    pub count: u32,
}

/// Count of shots per shot type in canonical order; zero-count types are
/// omitted.
pub fn shot_distribution(shots: &[Shot]) -> Vec<ShotTypeCount> {
    SHOT_TYPE_ORDER
        .iter()
        .filter_map(|&shot_type| {
            let count = shots.iter().filter(|s| s.shot_type == shot_type).count() as u32;
            (count > 0).then_some(ShotTypeCount {
                shot_type,
                label: shot_type.label(),
                count,
            })
        })
        .collect()
}

/// One stacked-bar row: outcome counts for a shot type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeBreakdown {
    pub shot_type: ShotType,
    pub label: &'static str,
    pub winner: u32,
    pub error: u32,
    pub neither: u32,
}

/// (winner, error, neither) counts for every shot type, zero-count types
/// included, in canonical order.
pub fn outcomes_by_shot_type(shots: &[Shot]) -> Vec<OutcomeBreakdown> {
    SHOT_TYPE_ORDER
        .iter()
        .map(|&shot_type| {
            let mut row = OutcomeBreakdown {
                shot_type,
                label: shot_type.label(),
                winner: 0,
                error: 0,
                neither: 0,
            };
            for shot in shots.iter().filter(|s| s.shot_type == shot_type) {
                match shot.outcome {
                    Outcome::Winner => row.winner += 1,
                    Outcome::Error => row.error += 1,
                    Outcome::Neither => row.neither += 1,
                }
            }
            row
        })
        .collect()
}

/// Count shots landing in each zone on the given side (destination view)
pub fn zone_to_counts_by_side(shots: &[Shot], side: Side) -> ZoneGrid {
    let mut grid = ZoneGrid::default();
    for shot in shots.iter().filter(|s| s.zone_to_side == side) {
        let (row, col) = shot.zone_to.grid_pos();
        grid[row][col] += 1;
    }
    grid
}

/// Count shots struck from each zone on the given side (origin view)
pub fn zone_from_counts_by_side(shots: &[Shot], side: Side) -> ZoneGrid {
    let mut grid = ZoneGrid::default();
    for shot in shots.iter().filter(|s| s.zone_from_side == side) {
        let (row, col) = shot.zone_from.grid_pos();
        grid[row][col] += 1;
    }
    grid
}

/// Count shots struck by the given player, bucketed by origin zone
pub fn zone_counts_for_player(shots: &[Shot], player: Side) -> ZoneGrid {
    let mut grid = ZoneGrid::default();
    for shot in shots.iter().filter(|s| s.player == player) {
        let (row, col) = shot.zone_from.grid_pos();
        grid[row][col] += 1;
    }
    grid
}

/// Min and max count in a grid, used to scale the heatmap gradient.
/// An all-zero grid yields (0, 0).
pub fn zone_count_range(grid: &ZoneGrid) -> (u32, u32) {
    let mut min = u32::MAX;
    let mut max = 0;
    for row in grid {
        for &v in row {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if max == 0 {
        (0, 0)
    } else {
        (min, max)
    }
}
