//! Derived timeline values.
//!
//! Segments and step series are recomputed from player data on every
//! call. They are views, not state.

use serde::{Deserialize, Serialize};

use super::StintTag;

/// Length of a game (minutes).
pub const GAME_MINUTES: f64 = 48.0;

/// A concrete stint interval `[start, end]` in game minutes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start (minutes).
    pub start: f64,
    /// End (minutes).
    pub end: f64,
    /// On or off court.
    pub tag: StintTag,
}

impl Segment {
    /// Creates a segment.
    pub fn new(start: f64, end: f64, tag: StintTag) -> Self {
        Self { start, end, tag }
    }

    /// Length (minutes). Zero for a degenerate segment.
    #[inline]
    pub fn duration(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }

    /// Whether this is an on-court segment.
    #[inline]
    pub fn is_on(&self) -> bool {
        self.tag.is_on()
    }
}

/// A right-continuous step function over the game clock.
///
/// `times` and `counts` are parallel. Two consecutive points may share a
/// time; the later one is the value from that instant onwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepSeries {
    /// Breakpoints (minutes), non-decreasing.
    pub times: Vec<f64>,
    /// Value at each breakpoint.
    pub counts: Vec<u32>,
}

impl StepSeries {
    /// Number of points.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Iterates `(time, count)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, u32)> + '_ {
        self.times.iter().copied().zip(self.counts.iter().copied())
    }

    /// Value of the step function at `time`.
    ///
    /// Returns 0 before the first point.
    pub fn count_at(&self, time: f64) -> u32 {
        self.points()
            .take_while(|&(t, _)| t <= time)
            .last()
            .map_or(0, |(_, c)| c)
    }

    /// Highest value reached.
    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}
