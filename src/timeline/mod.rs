//! Timeline engine: weights → segments → boundaries → team occupancy.
//!
//! All operations are pure and synchronous. Each struct borrows an
//! [`ArchetypeCatalog`](crate::catalog::ArchetypeCatalog); the free
//! functions below use the built-in catalog.
//!
//! # Components
//!
//! - `SegmentComputer`: a player's weights and minutes → L contiguous
//!   segments covering `[0, 48]`.
//! - `BoundaryEditor`: segments ↔ the L−1 editable boundary times.
//! - `OccupancyAggregator`: many players' on-segments → players-on-court
//!   step series (sweep line).
//!
//! # Usage
//!
//! ```
//! use u_rotation::models::{Player, TeamSide};
//! use u_rotation::timeline::{apply_boundaries, compute_segments, default_boundaries};
//!
//! let mut player = Player::new("p1", "Guard", TeamSide::Home)
//!     .with_archetype("NonStarterNonCloserOneStint")
//!     .with_expected_minutes(12.0);
//!
//! assert_eq!(compute_segments(&player).len(), 3);
//! assert_eq!(default_boundaries(&player), vec![18.0, 30.0]);
//!
//! apply_boundaries(&mut player, &[10.0, 30.0], 0.001);
//! assert!((player.expected_minutes - 20.0).abs() < 1e-9);
//! ```

mod boundaries;
mod occupancy;
mod segments;

pub use boundaries::{input_bounds, sanitize_boundaries, BoundaryEditor};
pub use occupancy::{OccupancyAggregator, OccupancyEvent};
pub use segments::{on_off_totals, SegmentComputer};

use crate::models::{Player, Segment, StepSeries, Team};

/// Segments for a player, using the built-in catalog.
pub fn compute_segments(player: &Player) -> Vec<Segment> {
    SegmentComputer::default().compute(player)
}

/// Editable boundaries for a player, using the built-in catalog.
pub fn default_boundaries(player: &Player) -> Vec<f64> {
    BoundaryEditor::default().default_boundaries(player)
}

/// Writes edited boundaries back into a player, using the built-in catalog.
pub fn apply_boundaries(player: &mut Player, ends: &[f64], min_gap: f64) {
    BoundaryEditor::default().apply_boundaries(player, ends, min_gap);
}

/// Players-on-court step series for a roster, using the built-in catalog.
pub fn team_occupancy_steps(team: &Team) -> StepSeries {
    OccupancyAggregator::default().team_steps(team)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StintTag, TeamSide, GAME_MINUTES};

    #[test]
    fn test_builtin_pipeline() {
        let mut starter = Player::new("s", "Starter", TeamSide::Home)
            .with_archetype("StarterCloserThreeStints")
            .with_expected_minutes(36.0);
        let bench = Player::new("b", "Bench", TeamSide::Home)
            .with_archetype("NonStarterNonCloserOneStint")
            .with_expected_minutes(12.0);

        let segments = compute_segments(&starter);
        assert_eq!(segments.len(), 5);
        assert_eq!(segments[0].tag, StintTag::On);
        assert!((segments[0].end - 12.0).abs() < 1e-9);

        let mut bounds = default_boundaries(&starter);
        assert_eq!(bounds.len(), 4);
        bounds[0] = 10.0;
        apply_boundaries(&mut starter, &bounds, 0.001);
        assert!((starter.expected_minutes - 34.0).abs() < 1e-9);

        let team = Team::new("Home")
            .with_player(starter)
            .with_player(bench);
        let series = team_occupancy_steps(&team);
        assert_eq!(series.times.first(), Some(&0.0));
        assert_eq!(series.times.last(), Some(&GAME_MINUTES));
        assert_eq!(series.count_at(5.0), 1);
        assert_eq!(series.count_at(14.0), 0);
        assert_eq!(series.count_at(20.0), 2);
    }

    #[test]
    fn test_unknown_archetype_is_quiet() {
        let mut p = Player::new("x", "X", TeamSide::Away).with_archetype("NotSet");
        assert!(compute_segments(&p).is_empty());
        assert!(default_boundaries(&p).is_empty());
        apply_boundaries(&mut p, &[1.0, 2.0], 0.001);
        assert!(p.stints_raw.is_empty());
    }
}
