//! Team on-court occupancy.
//!
//! Merges the on-court segments of a roster into a single step function
//! counting players on the floor over the game clock.
//!
//! # Algorithm (sweep line)
//!
//! 1. Every on-segment of positive length emits `(start, +1)` and `(end, -1)`.
//! 2. `(0, 0)` and `(48, 0)` are always added so the domain endpoints exist.
//! 3. Events are sorted by time; at equal times `-1` sorts before `+1`, so a
//!    substitution at one instant never shows a transient extra player.
//! 4. For each distinct time, emit the value before and after applying all
//!    of its deltas.
//! 5. Consecutive duplicate points are dropped and the last point is at 48.
//!
//! # Complexity
//! O(E log E) for E = 2 × on-segments + 2.

use std::cmp::Ordering;

use crate::catalog::ArchetypeCatalog;
use crate::models::{Player, StepSeries, Team, GAME_MINUTES};

use super::segments::{clamp_minutes, SegmentComputer};

/// A change in the on-court count at an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OccupancyEvent {
    /// Game time (minutes).
    pub time: f64,
    /// `+1` sub in, `-1` sub out, `0` domain marker.
    pub delta: i32,
}

impl OccupancyEvent {
    fn new(time: f64, delta: i32) -> Self {
        Self { time, delta }
    }

    /// Sweep order: by time, then decrements before increments.
    fn sweep_cmp(&self, other: &Self) -> Ordering {
        self.time
            .total_cmp(&other.time)
            .then(self.delta.cmp(&other.delta))
    }
}

/// Builds the team occupancy step series.
#[derive(Debug, Clone, Copy)]
pub struct OccupancyAggregator<'a> {
    computer: SegmentComputer<'a>,
}

impl Default for OccupancyAggregator<'static> {
    fn default() -> Self {
        Self::new(ArchetypeCatalog::builtin())
    }
}

impl<'a> OccupancyAggregator<'a> {
    /// Creates an aggregator reading from `catalog`.
    pub fn new(catalog: &'a ArchetypeCatalog) -> Self {
        Self {
            computer: SegmentComputer::new(catalog),
        }
    }

    /// Sorted sweep events for a set of players, domain markers included.
    pub fn events<'p>(&self, players: impl IntoIterator<Item = &'p Player>) -> Vec<OccupancyEvent> {
        let mut events = Vec::new();
        for player in players {
            for segment in self.computer.compute(player) {
                if !segment.is_on() {
                    continue;
                }
                let start = clamp_minutes(segment.start);
                let end = clamp_minutes(segment.end);
                if end > start {
                    events.push(OccupancyEvent::new(start, 1));
                    events.push(OccupancyEvent::new(end, -1));
                }
            }
        }
        events.push(OccupancyEvent::new(0.0, 0));
        events.push(OccupancyEvent::new(GAME_MINUTES, 0));

        events.sort_by(OccupancyEvent::sweep_cmp);
        events
    }

    /// Step series for any set of players.
    pub fn steps<'p>(&self, players: impl IntoIterator<Item = &'p Player>) -> StepSeries {
        let events = self.events(players);

        let mut points: Vec<(f64, i64)> = Vec::with_capacity(events.len() * 2);
        let mut curr: i64 = 0;
        let mut i = 0;
        while i < events.len() {
            let t = events[i].time;
            points.push((t, curr));
            while i < events.len() && events[i].time == t {
                curr += i64::from(events[i].delta);
                i += 1;
            }
            points.push((t, curr));
        }

        points.dedup_by(|next, prev| is_close(prev.0, next.0) && prev.1 == next.1);

        if points.last().map_or(true, |&(t, _)| t != GAME_MINUTES) {
            let last = points.last().map_or(0, |&(_, c)| c);
            points.push((GAME_MINUTES, last));
        }

        StepSeries {
            times: points.iter().map(|&(t, _)| t).collect(),
            counts: points
                .iter()
                .map(|&(_, c)| u32::try_from(c.max(0)).unwrap_or(u32::MAX))
                .collect(),
        }
    }

    /// Step series for a roster.
    pub fn team_steps(&self, team: &Team) -> StepSeries {
        self.steps(&team.players)
    }
}

fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs())
}
