//! Tunables for boundary editing and team reporting.

use serde::{Deserialize, Serialize};

/// Default minimum spacing between edited boundaries (minutes).
pub const DEFAULT_MIN_GAP: f64 = 0.001;

/// Engine and reporting settings.
///
/// Deserializes with every field optional; missing fields take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    /// Minimum spacing between consecutive boundaries (minutes).
    pub min_gap: f64,
    /// Team closer weighting target.
    pub closer_target: f64,
    /// Team expected minutes target (5 players × 48).
    pub minutes_target: f64,
    /// Allowed deviation from a target.
    pub tolerance: f64,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            min_gap: DEFAULT_MIN_GAP,
            closer_target: 5.0,
            minutes_target: 240.0,
            tolerance: 0.01,
        }
    }
}

impl RotationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum boundary gap.
    pub fn with_min_gap(mut self, min_gap: f64) -> Self {
        self.min_gap = min_gap;
        self
    }

    /// Sets the closer weighting target.
    pub fn with_closer_target(mut self, target: f64) -> Self {
        self.closer_target = target;
        self
    }

    /// Sets the expected minutes target.
    pub fn with_minutes_target(mut self, target: f64) -> Self {
        self.minutes_target = target;
        self
    }

    /// Sets the target tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// The configured gap if usable, otherwise [`DEFAULT_MIN_GAP`].
    pub fn effective_min_gap(&self) -> f64 {
        if self.min_gap.is_finite() && self.min_gap > 0.0 {
            self.min_gap
        } else {
            DEFAULT_MIN_GAP
        }
    }
}
