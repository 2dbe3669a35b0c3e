//! Boundary editing.
//!
//! A player's L segments are edited through their L−1 inner boundaries
//! (the end of every segment but the last, which always ends at 48).
//!
//! - [`BoundaryEditor::default_boundaries`]: segments → boundaries.
//! - [`BoundaryEditor::apply_boundaries`]: boundaries → `expected_minutes`
//!   and `stints_raw`.
//!
//! The write-back divides each duration by its group total, which is the
//! inverse of the weight × total step in the segment computer, so
//! reading the boundaries back after an edit yields the same boundaries.
//!
//! Any candidate list is first sanitized into a strictly increasing list
//! where every boundary keeps at least `min_gap` of room before 48 for
//! the boundaries after it.

use log::{debug, warn};

use crate::catalog::ArchetypeCatalog;
use crate::config::{RotationConfig, DEFAULT_MIN_GAP};
use crate::models::{Player, StintTag, GAME_MINUTES};

use super::segments::{clamp_minutes, SegmentComputer};

/// Allowed `(min, max)` for boundary `index` out of `count`, given the
/// previous boundary (0.0 for the first).
///
/// When the window is empty (gap too large for the count) the minimum wins.
pub fn input_bounds(index: usize, previous: f64, count: usize, min_gap: f64) -> (f64, f64) {
    let remaining = count.saturating_sub(index + 1);
    let lo = previous + min_gap;
    let hi = GAME_MINUTES - remaining as f64 * min_gap;
    (lo, hi)
}

/// Sanitizes candidate boundaries into `count` strictly increasing values.
///
/// Missing or non-finite candidates are placed `min_gap` after the
/// previous boundary; extra candidates are ignored. A non-finite or
/// non-positive `min_gap` is replaced by [`DEFAULT_MIN_GAP`].
pub fn sanitize_boundaries(candidates: &[f64], count: usize, min_gap: f64) -> Vec<f64> {
    let min_gap = if is_usable_gap(min_gap) {
        min_gap
    } else {
        warn!("invalid boundary gap {min_gap}, using {DEFAULT_MIN_GAP}");
        DEFAULT_MIN_GAP
    };
    let mut out = Vec::with_capacity(count);
    let mut previous = 0.0;
    for k in 0..count {
        let (lo, hi) = input_bounds(k, previous, count, min_gap);
        let candidate = candidates
            .get(k)
            .copied()
            .filter(|v| v.is_finite())
            .unwrap_or(lo);
        let value = candidate.min(hi).max(lo);
        if value != candidate {
            debug!("boundary {k} moved from {candidate} to {value}");
        }
        out.push(value);
        previous = value;
    }
    out
}

fn is_usable_gap(gap: f64) -> bool {
    gap.is_finite() && gap > 0.0
}

/// Converts segments to editable boundaries and writes edits back.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryEditor<'a> {
    computer: SegmentComputer<'a>,
    min_gap: f64,
}

impl Default for BoundaryEditor<'static> {
    fn default() -> Self {
        Self::new(ArchetypeCatalog::builtin())
    }
}

impl<'a> BoundaryEditor<'a> {
    /// Creates an editor with the default minimum gap.
    pub fn new(catalog: &'a ArchetypeCatalog) -> Self {
        Self {
            computer: SegmentComputer::new(catalog),
            min_gap: DEFAULT_MIN_GAP,
        }
    }

    /// Creates an editor using the configured minimum gap.
    pub fn with_config(catalog: &'a ArchetypeCatalog, config: &RotationConfig) -> Self {
        Self::new(catalog).with_min_gap(config.effective_min_gap())
    }

    /// Sets the spacing used by [`default_boundaries`](Self::default_boundaries)
    /// and as fallback for an unusable gap passed to
    /// [`apply_boundaries`](Self::apply_boundaries).
    pub fn with_min_gap(mut self, min_gap: f64) -> Self {
        if is_usable_gap(min_gap) {
            self.min_gap = min_gap;
        } else {
            warn!("ignoring invalid boundary gap {min_gap}, keeping {}", self.min_gap);
        }
        self
    }

    /// The default spacing.
    pub fn min_gap(&self) -> f64 {
        self.min_gap
    }

    /// Number of editable boundaries.
    ///
    /// `None` when the player has no archetype or a single-stint one;
    /// the caller should not offer an editor then.
    pub fn boundary_count(&self, player: &Player) -> Option<usize> {
        let archetype = self.computer.resolve(player)?;
        (archetype.len() > 1).then(|| archetype.len() - 1)
    }

    /// Current boundaries: the end of every segment except the last.
    ///
    /// Empty when the player has no archetype or a single stint.
    pub fn default_boundaries(&self, player: &Player) -> Vec<f64> {
        let segments = self.computer.compute(player);
        if segments.len() <= 1 {
            return Vec::new();
        }
        let ends: Vec<f64> = segments[..segments.len() - 1]
            .iter()
            .map(|s| s.end)
            .collect();
        sanitize_boundaries(&ends, ends.len(), self.min_gap)
    }

    /// Applies edited boundaries to the player.
    ///
    /// Sets `expected_minutes` to the total on-court duration and each
    /// `stints_raw[i]` to its duration over its group total (0 when the
    /// group total is 0). No-op without an archetype or with a single stint.
    pub fn apply_boundaries(&self, player: &mut Player, ends: &[f64], min_gap: f64) {
        let Some(archetype) = self.computer.resolve(player) else {
            return;
        };
        let len = archetype.len();
        if len <= 1 {
            return;
        }

        let gap = if is_usable_gap(min_gap) {
            min_gap
        } else {
            warn!("invalid boundary gap {min_gap}, using {}", self.min_gap);
            self.min_gap
        };
        let bounds = sanitize_boundaries(ends, len - 1, gap);

        let starts = std::iter::once(0.0).chain(bounds.iter().copied());
        let stops = bounds.iter().copied().chain(std::iter::once(GAME_MINUTES));
        let durations: Vec<f64> = starts.zip(stops).map(|(s, e)| (e - s).max(0.0)).collect();

        let mut on_total = 0.0;
        let mut off_total = 0.0;
        for (&tag, &d) in archetype.stint_pattern.iter().zip(&durations) {
            match tag {
                StintTag::On => on_total += d,
                StintTag::Off => off_total += d,
            }
        }

        player.expected_minutes = clamp_minutes(on_total);
        player.stints_raw = archetype
            .stint_pattern
            .iter()
            .zip(&durations)
            .map(|(&tag, &d)| {
                let total = match tag {
                    StintTag::On => on_total,
                    StintTag::Off => off_total,
                };
                if total > 0.0 {
                    d / total
                } else {
                    0.0
                }
            })
            .collect();

        debug!(
            "player '{}' edited: {:.3} on-court minutes over {} stints",
            player.id, player.expected_minutes, len
        );
    }
}
