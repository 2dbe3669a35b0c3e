//! Archetype (rotation pattern) model.
//!
//! An archetype is a fixed, ordered pattern of on-court and off-court
//! stints describing the expected shape of a player's rotation.
//! Stint positions are the unit every per-player weight is aligned to.

use serde::{Deserialize, Serialize};

/// Whether a stint is spent on the court or on the bench.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StintTag {
    /// Player is on the court.
    On,
    /// Player is on the bench.
    Off,
}

impl StintTag {
    /// Whether this is an on-court stint.
    #[inline]
    pub fn is_on(self) -> bool {
        matches!(self, StintTag::On)
    }
}

/// A named on/off stint pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Archetype {
    /// Unique archetype identifier.
    pub id: String,
    /// Human-readable label.
    pub name: String,
    /// Whether this archetype starts the game.
    pub starter: bool,
    /// Ordered stint pattern.
    pub stint_pattern: Vec<StintTag>,
}

/// Identifier of the special star archetype, treated as a starter
/// regardless of its flag.
pub const STAR_ARCHETYPE_ID: &str = "Star";

impl Archetype {
    /// Creates an archetype with the given pattern. The label defaults to the id.
    pub fn new(id: impl Into<String>, stint_pattern: Vec<StintTag>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            starter: false,
            stint_pattern,
        }
    }

    /// Sets the label.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the starter flag.
    pub fn with_starter(mut self, starter: bool) -> Self {
        self.starter = starter;
        self
    }

    /// Number of stints (L).
    #[inline]
    pub fn len(&self) -> usize {
        self.stint_pattern.len()
    }

    /// Whether the pattern has no stints.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stint_pattern.is_empty()
    }

    /// Tag at a stint position.
    pub fn tag(&self, index: usize) -> Option<StintTag> {
        self.stint_pattern.get(index).copied()
    }

    /// Positions of on-court stints, in pattern order.
    pub fn on_indices(&self) -> Vec<usize> {
        self.indices_where(StintTag::On)
    }

    /// Positions of off-court stints, in pattern order.
    pub fn off_indices(&self) -> Vec<usize> {
        self.indices_where(StintTag::Off)
    }

    /// Partitions stint positions into `(on, off)` groups.
    pub fn split_indices(&self) -> (Vec<usize>, Vec<usize>) {
        (self.on_indices(), self.off_indices())
    }

    /// Whether this archetype should be listed among the starters.
    ///
    /// The star archetype counts as a starter even if its flag says otherwise.
    pub fn is_starter_like(&self) -> bool {
        self.starter || self.id == STAR_ARCHETYPE_ID
    }

    fn indices_where(&self, wanted: StintTag) -> Vec<usize> {
        self.stint_pattern
            .iter()
            .enumerate()
            .filter(|&(_, tag)| *tag == wanted)
            .map(|(i, _)| i)
            .collect()
    }
}
