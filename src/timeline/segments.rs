//! Weight → segment computation.
//!
//! # Algorithm
//!
//! 1. Resolve the player's archetype (absent → no segments).
//! 2. Pad/truncate `stints_raw` to the pattern length L.
//! 3. Any group (on or off) whose weights sum to exactly 0 gets equal
//!    shares `1 / group_size`. Other groups are used as given, even if
//!    they do not sum to 1.
//! 4. `on_total = clamp(expected_minutes, 0, 48)`, `off_total = 48 - on_total`.
//! 5. Each stint lasts `weight × group_total` (floored at 0); stints are laid
//!    out in pattern order from t=0, clamped at 48.
//! 6. The last segment always ends at exactly 48.
//!
//! # Complexity
//! O(L).

use log::trace;

use crate::catalog::ArchetypeCatalog;
use crate::models::{Archetype, Player, Segment, StintTag, GAME_MINUTES};

/// Clamps a minutes value into `[0, 48]`. Non-finite input becomes 0.
pub(crate) fn clamp_minutes(minutes: f64) -> f64 {
    if minutes.is_finite() {
        minutes.clamp(0.0, GAME_MINUTES)
    } else {
        0.0
    }
}

/// On- and off-court totals for an expected minutes value.
///
/// Always sums to exactly 48.
pub fn on_off_totals(expected_minutes: f64) -> (f64, f64) {
    let on_total = clamp_minutes(expected_minutes);
    (on_total, GAME_MINUTES - on_total)
}

/// Turns a player's weights into concrete segments.
#[derive(Debug, Clone, Copy)]
pub struct SegmentComputer<'a> {
    catalog: &'a ArchetypeCatalog,
}

impl Default for SegmentComputer<'static> {
    fn default() -> Self {
        Self::new(ArchetypeCatalog::builtin())
    }
}

impl<'a> SegmentComputer<'a> {
    /// Creates a computer reading from `catalog`.
    pub fn new(catalog: &'a ArchetypeCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog in use.
    pub fn catalog(&self) -> &'a ArchetypeCatalog {
        self.catalog
    }

    /// Resolves the player's archetype, if any.
    pub fn resolve(&self, player: &Player) -> Option<&'a Archetype> {
        let archetype = player
            .archetype_id
            .as_deref()
            .and_then(|id| self.catalog.get(id));
        if archetype.is_none() {
            trace!("player '{}' has no resolvable archetype", player.id);
        }
        archetype
    }

    /// Weights actually used for the segments: length L, with empty
    /// groups filled by equal shares.
    ///
    /// Returns `stints_raw` unchanged when there is no archetype.
    pub fn effective_weights(&self, player: &Player) -> Vec<f64> {
        match self.resolve(player) {
            Some(archetype) => default_filled_weights(archetype, &player.stints_raw),
            None => player.stints_raw.clone(),
        }
    }

    /// Computes the player's segments.
    ///
    /// Returns exactly L contiguous segments covering `[0, 48]`, or an
    /// empty list if the archetype cannot be resolved.
    pub fn compute(&self, player: &Player) -> Vec<Segment> {
        let Some(archetype) = self.resolve(player) else {
            return Vec::new();
        };

        let weights = default_filled_weights(archetype, &player.stints_raw);
        let (on_total, off_total) = on_off_totals(player.expected_minutes);

        let mut segments = Vec::with_capacity(archetype.len());
        let mut t = 0.0;
        for (&tag, &weight) in archetype.stint_pattern.iter().zip(&weights) {
            let group_total = match tag {
                StintTag::On => on_total,
                StintTag::Off => off_total,
            };
            // f64::max also maps NaN to 0.
            let duration = (weight * group_total).max(0.0);
            let end = (t + duration).min(GAME_MINUTES);
            segments.push(Segment::new(t, end, tag));
            t = end;
        }

        if let Some(last) = segments.last_mut() {
            last.end = GAME_MINUTES;
        }
        segments
    }

    /// Sums of the raw on-stint and off-stint weights, without default filling.
    ///
    /// `None` if the archetype cannot be resolved.
    pub fn split_on_off_sums(&self, player: &Player) -> Option<(f64, f64)> {
        let archetype = self.resolve(player)?;
        let mut on_sum = 0.0;
        let mut off_sum = 0.0;
        for (&tag, &w) in archetype.stint_pattern.iter().zip(&player.stints_raw) {
            match tag {
                StintTag::On => on_sum += w,
                StintTag::Off => off_sum += w,
            }
        }
        Some((on_sum, off_sum))
    }
}

/// Pads or truncates `raw` to the pattern length and fills all-zero groups.
fn default_filled_weights(archetype: &Archetype, raw: &[f64]) -> Vec<f64> {
    let mut weights: Vec<f64> = raw.iter().copied().take(archetype.len()).collect();
    weights.resize(archetype.len(), 0.0);

    let (on_idx, off_idx) = archetype.split_indices();
    fill_equal_if_zero(&mut weights, &on_idx);
    fill_equal_if_zero(&mut weights, &off_idx);
    weights
}

fn fill_equal_if_zero(weights: &mut [f64], group: &[usize]) {
    if group.is_empty() {
        return;
    }
    let sum: f64 = group.iter().map(|&i| weights[i]).sum();
    if sum == 0.0 {
        let share = 1.0 / group.len() as f64;
        for &i in group {
            weights[i] = share;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeamSide;
    use StintTag::{Off, On};

    const EPS: f64 = 1e-9;

    fn catalog() -> ArchetypeCatalog {
        ArchetypeCatalog::new(vec![
            Archetype::new("OnOffOn", vec![On, Off, On]),
            Archetype::new("OffOnOff", vec![Off, On, Off]),
            Archetype::new("Single", vec![Off]),
            Archetype::new("AllOn", vec![On, On]),
        ])
        .unwrap()
    }

    fn player(archetype: &str, minutes: f64, stints: Vec<f64>) -> Player {
        Player::new("p", "P", TeamSide::Home)
            .with_archetype(archetype)
            .with_expected_minutes(minutes)
            .with_stints(stints)
    }

    fn assert_covering(segments: &[Segment]) {
        assert_eq!(segments[0].start, 0.0);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert_eq!(segments.last().unwrap().end, GAME_MINUTES);
    }

    #[test]
    fn test_on_off_totals_sum_to_game() {
        for m in [-5.0, 0.0, 12.5, 30.0, 48.0, 60.0, f64::NAN] {
            let (on, off) = on_off_totals(m);
            assert_eq!(on + off, GAME_MINUTES);
            assert!((0.0..=GAME_MINUTES).contains(&on));
        }
    }

    #[test]
    fn test_equal_share_default() {
        let catalog = catalog();
        let computer = SegmentComputer::new(&catalog);
        let segments = computer.compute(&player("OnOffOn", 30.0, vec![]));

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], Segment::new(0.0, 15.0, On));
        assert_eq!(segments[1], Segment::new(15.0, 33.0, Off));
        assert_eq!(segments[2], Segment::new(33.0, 48.0, On));
    }

    #[test]
    fn test_explicit_weights_follow_pattern_order() {
        let catalog = catalog();
        let computer = SegmentComputer::new(&catalog);
        let segments = computer.compute(&player("OffOnOff", 12.0, vec![1.0, 1.0, 0.0]));

        assert_eq!(segments[0], Segment::new(0.0, 36.0, Off));
        assert_eq!(segments[1], Segment::new(36.0, 48.0, On));
        assert_eq!(segments[2], Segment::new(48.0, 48.0, Off));
        assert_covering(&segments);
    }

    #[test]
    fn test_no_renormalization() {
        let catalog = catalog();
        let computer = SegmentComputer::new(&catalog);
        // On-weights sum to 0.7: on stints only fill 70% of on_total.
        let segments = computer.compute(&player("OnOffOn", 20.0, vec![0.4, 1.0, 0.3]));

        assert!((segments[0].duration() - 8.0).abs() < EPS);
        assert!((segments[1].duration() - 28.0).abs() < EPS);
        // Last segment absorbs the remainder up to 48.
        assert!((segments[2].start - 36.0).abs() < EPS);
        assert_eq!(segments[2].end, GAME_MINUTES);
    }

    #[test]
    fn test_padding_and_truncation() {
        let catalog = catalog();
        let computer = SegmentComputer::new(&catalog);

        let short = computer.effective_weights(&player("OnOffOn", 30.0, vec![0.25]));
        assert_eq!(short, vec![0.25, 1.0, 0.0]);

        let long = computer.effective_weights(&player("OnOffOn", 30.0, vec![0.5, 1.0, 0.5, 9.0]));
        assert_eq!(long, vec![0.5, 1.0, 0.5]);
        assert_eq!(computer.compute(&player("OnOffOn", 30.0, vec![0.5, 1.0, 0.5, 9.0])).len(), 3);
    }

    #[test]
    fn test_overfull_weights_clamped_at_game_end() {
        let catalog = catalog();
        let computer = SegmentComputer::new(&catalog);
        let segments = computer.compute(&player("OnOffOn", 40.0, vec![1.0, 1.0, 1.0]));

        assert_eq!(segments[0], Segment::new(0.0, 40.0, On));
        assert_eq!(segments[1], Segment::new(40.0, 48.0, Off));
        assert_eq!(segments[2], Segment::new(48.0, 48.0, On));
    }

    #[test]
    fn test_negative_weight_floored() {
        let catalog = catalog();
        let computer = SegmentComputer::new(&catalog);
        let segments = computer.compute(&player("OnOffOn", 30.0, vec![-0.5, 1.0, 1.0]));
        assert_eq!(segments[0].duration(), 0.0);
        assert_covering(&segments);
    }

    #[test]
    fn test_minutes_clamped() {
        let catalog = catalog();
        let computer = SegmentComputer::new(&catalog);
        let over = computer.compute(&player("OnOffOn", 70.0, vec![]));
        assert_eq!(over[0], Segment::new(0.0, 24.0, On));
        assert_eq!(over[1].duration(), 0.0);

        let under = computer.compute(&player("OnOffOn", -3.0, vec![]));
        assert_eq!(under[0].duration(), 0.0);
        assert_eq!(under[1], Segment::new(0.0, 48.0, Off));
    }

    #[test]
    fn test_all_on_pattern() {
        let catalog = catalog();
        let computer = SegmentComputer::new(&catalog);
        let segments = computer.compute(&player("AllOn", 10.0, vec![]));
        assert_eq!(segments[0], Segment::new(0.0, 5.0, On));
        assert_eq!(segments[1], Segment::new(5.0, 48.0, On));
    }

    #[test]
    fn test_single_stint_covers_game() {
        let catalog = catalog();
        let computer = SegmentComputer::new(&catalog);
        let segments = computer.compute(&player("Single", 0.0, vec![]));
        assert_eq!(segments, vec![Segment::new(0.0, 48.0, Off)]);
    }

    #[test]
    fn test_missing_archetype_yields_nothing() {
        let catalog = catalog();
        let computer = SegmentComputer::new(&catalog);
        assert!(computer.compute(&player("Nope", 30.0, vec![])).is_empty());

        let unset = Player::new("p", "P", TeamSide::Home).with_expected_minutes(30.0);
        assert!(computer.compute(&unset).is_empty());
        assert!(computer.split_on_off_sums(&unset).is_none());
        assert!(computer.effective_weights(&unset).is_empty());
    }

    #[test]
    fn test_split_on_off_sums_uses_raw_weights() {
        let catalog = catalog();
        let computer = SegmentComputer::new(&catalog);
        let sums = computer.split_on_off_sums(&player("OnOffOn", 30.0, vec![0.3, 0.9])).unwrap();
        assert!((sums.0 - 0.3).abs() < EPS);
        assert!((sums.1 - 0.9).abs() < EPS);

        let empty = computer.split_on_off_sums(&player("OnOffOn", 30.0, vec![])).unwrap();
        assert_eq!(empty, (0.0, 0.0));
    }

    #[test]
    fn test_builtin_archetypes_cover_game() {
        let computer = SegmentComputer::default();
        for archetype in computer.catalog().iter() {
            for minutes in [0.0, 7.5, 24.0, 36.0, 48.0] {
                let p = player(&archetype.id, minutes, vec![]);
                let segments = computer.compute(&p);
                assert_eq!(segments.len(), archetype.len());
                assert_covering(&segments);
                let on: f64 = segments.iter().filter(|s| s.is_on()).map(Segment::duration).sum();
                if archetype.on_indices().is_empty() {
                    assert_eq!(on, 0.0);
                } else {
                    assert!((on - minutes).abs() < 1e-6, "{} at {minutes}", archetype.id);
                }
            }
        }
    }
}
