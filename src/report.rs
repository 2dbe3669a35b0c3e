//! Advisory team totals.
//!
//! Computes the two roster-level checks a coach watches while editing.
//! Results are informational; nothing in the timeline engine consults them.
//!
//! # Metrics
//!
//! | Metric | Definition | Target |
//! |--------|-----------|--------|
//! | Closer total | Σ clamp(closer_weighting, 0, 1) | 5.0 |
//! | Expected minutes | Σ clamp(expected_minutes, 0, 48) | 240.0 |

use serde::{Deserialize, Serialize};

use crate::config::RotationConfig;
use crate::models::{Team, GAME_MINUTES};

/// Whether a total is within tolerance of its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetStatus {
    /// Within tolerance.
    Ok,
    /// Off target.
    Bad,
}

impl TargetStatus {
    /// Compares `total` against `target`.
    pub fn evaluate(total: f64, target: f64, tolerance: f64) -> Self {
        if (total - target).abs() <= tolerance {
            TargetStatus::Ok
        } else {
            TargetStatus::Bad
        }
    }

    /// Whether the status is `Ok`.
    pub fn is_ok(self) -> bool {
        self == TargetStatus::Ok
    }
}

fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

fn clamp_or_zero(value: f64, max: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, max)
    } else {
        0.0
    }
}

/// Sum of closer weightings, each clamped to `[0, 1]`, rounded to 6 decimals.
pub fn closer_sum(team: &Team) -> f64 {
    round6(
        team.players
            .iter()
            .map(|p| clamp_or_zero(p.closer_weighting, 1.0))
            .sum(),
    )
}

/// Sum of expected minutes, each clamped to `[0, 48]`, rounded to 6 decimals.
pub fn expected_minutes_sum(team: &Team) -> f64 {
    round6(
        team.players
            .iter()
            .map(|p| clamp_or_zero(p.expected_minutes, GAME_MINUTES))
            .sum(),
    )
}

/// Team totals and their statuses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamReport {
    /// Team name.
    pub team: String,
    /// Closer weighting total.
    pub closer_total: f64,
    /// Closer weighting status.
    pub closer_status: TargetStatus,
    /// Expected minutes total.
    pub minutes_total: f64,
    /// Expected minutes status.
    pub minutes_status: TargetStatus,
}

impl TeamReport {
    /// Computes the report for a roster.
    pub fn calculate(team: &Team, config: &RotationConfig) -> Self {
        let closer_total = closer_sum(team);
        let minutes_total = expected_minutes_sum(team);
        Self {
            team: team.name.clone(),
            closer_total,
            closer_status: TargetStatus::evaluate(
                closer_total,
                config.closer_target,
                config.tolerance,
            ),
            minutes_total,
            minutes_status: TargetStatus::evaluate(
                minutes_total,
                config.minutes_target,
                config.tolerance,
            ),
        }
    }

    /// Whether both totals are on target.
    pub fn is_ok(&self) -> bool {
        self.closer_status.is_ok() && self.minutes_status.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Player, TeamSide};

    fn team(rows: &[(f64, f64)]) -> Team {
        rows.iter()
            .enumerate()
            .fold(Team::new("Home"), |t, (i, &(minutes, closer))| {
                t.with_player(
                    Player::new(format!("p{i}"), "P", TeamSide::Home)
                        .with_expected_minutes(minutes)
                        .with_closer_weighting(closer),
                )
            })
    }

    #[test]
    fn test_status_tolerance() {
        assert_eq!(TargetStatus::evaluate(5.0, 5.0, 0.01), TargetStatus::Ok);
        assert_eq!(TargetStatus::evaluate(4.995, 5.0, 0.01), TargetStatus::Ok);
        assert_eq!(TargetStatus::evaluate(4.98, 5.0, 0.01), TargetStatus::Bad);
        assert!(!TargetStatus::Bad.is_ok());
    }

    #[test]
    fn test_closer_sum_clamps() {
        let t = team(&[(0.0, 1.5), (0.0, -0.5), (0.0, 0.25), (0.0, f64::NAN)]);
        assert!((closer_sum(&t) - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_minutes_sum_clamps() {
        let t = team(&[(60.0, 0.0), (-4.0, 0.0), (30.5, 0.0)]);
        assert!((expected_minutes_sum(&t) - 78.5).abs() < 1e-12);
    }

    #[test]
    fn test_sum_rounding() {
        let t = team(&[(0.0, 0.1), (0.0, 0.2)]);
        assert_eq!(closer_sum(&t), 0.3);
    }

    #[test]
    fn test_team_report_ok() {
        let t = team(&[(48.0, 1.0), (48.0, 1.0), (48.0, 1.0), (48.0, 1.0), (48.0, 1.0)]);
        let report = TeamReport::calculate(&t, &RotationConfig::default());
        assert_eq!(report.minutes_total, 240.0);
        assert_eq!(report.closer_total, 5.0);
        assert!(report.is_ok());
        assert_eq!(report.team, "Home");
    }

    #[test]
    fn test_team_report_bad() {
        let t = team(&[(36.0, 1.0), (36.0, 1.0), (24.0, 0.5)]);
        let report = TeamReport::calculate(&t, &RotationConfig::default());
        assert_eq!(report.minutes_status, TargetStatus::Bad);
        assert_eq!(report.closer_status, TargetStatus::Bad);
        assert!(!report.is_ok());

        let relaxed = RotationConfig::default()
            .with_minutes_target(96.0)
            .with_closer_target(2.5);
        assert!(TeamReport::calculate(&t, &relaxed).is_ok());
    }

    #[test]
    fn test_empty_team() {
        let report = TeamReport::calculate(&Team::new("Away"), &RotationConfig::default());
        assert_eq!(report.closer_total, 0.0);
        assert_eq!(report.minutes_total, 0.0);
        assert!(!report.is_ok());
    }
}
