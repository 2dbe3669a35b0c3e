//! Player, team and game models.
//!
//! A player's rotation is stored only as `expected_minutes` plus the
//! per-stint weights in `stints_raw`. Concrete segments are always
//! derived from those two fields and never stored.

use serde::{Deserialize, Serialize};

use crate::catalog::ArchetypeCatalog;

/// One of the two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamSide {
    /// Home side.
    #[serde(rename = "HomeTeam")]
    Home,
    /// Away side.
    #[serde(rename = "AwayTeam")]
    Away,
}

impl TeamSide {
    /// Label used by the import/export collaborator.
    pub fn label(self) -> &'static str {
        match self {
            TeamSide::Home => "HomeTeam",
            TeamSide::Away => "AwayTeam",
        }
    }
}

/// A player and their rotation plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Player identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Side the player belongs to.
    pub team: TeamSide,
    /// Referenced archetype. `None` = not yet configured.
    pub archetype_id: Option<String>,
    /// Intended on-court minutes over a 48-minute game.
    pub expected_minutes: f64,
    /// Likelihood of closing the game (0.0..1.0).
    pub closer_weighting: f64,
    /// Spread multiplier consumed downstream (default 1.0).
    pub stddev_scaler: f64,
    /// Per-stint weights aligned to the archetype pattern.
    ///
    /// On-stint weights are fractions of the on-court total, off-stint
    /// weights fractions of the off-court total.
    pub stints_raw: Vec<f64>,
}

impl Player {
    /// Creates an unconfigured player.
    pub fn new(id: impl Into<String>, name: impl Into<String>, team: TeamSide) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            team,
            archetype_id: None,
            expected_minutes: 0.0,
            closer_weighting: 0.0,
            stddev_scaler: 1.0,
            stints_raw: Vec::new(),
        }
    }

    /// Sets the archetype reference without touching the weights.
    pub fn with_archetype(mut self, archetype_id: impl Into<String>) -> Self {
        self.archetype_id = Some(archetype_id.into());
        self
    }

    /// Sets the expected minutes.
    pub fn with_expected_minutes(mut self, minutes: f64) -> Self {
        self.expected_minutes = minutes;
        self
    }

    /// Sets the closer weighting.
    pub fn with_closer_weighting(mut self, weighting: f64) -> Self {
        self.closer_weighting = weighting;
        self
    }

    /// Sets the standard deviation scaler.
    pub fn with_stddev_scaler(mut self, scaler: f64) -> Self {
        self.stddev_scaler = scaler;
        self
    }

    /// Sets the per-stint weights.
    pub fn with_stints(mut self, stints_raw: Vec<f64>) -> Self {
        self.stints_raw = stints_raw;
        self
    }

    /// Changes the archetype reference.
    ///
    /// Switching to a different archetype clears `stints_raw` so the new
    /// pattern starts from its equal-share default. Re-selecting the
    /// current archetype keeps the weights. Returns whether it changed.
    pub fn set_archetype(&mut self, archetype_id: Option<String>) -> bool {
        if self.archetype_id == archetype_id {
            return false;
        }
        self.archetype_id = archetype_id;
        self.stints_raw.clear();
        true
    }

    /// Whether this player should be listed among the starters.
    pub fn is_starter_like(&self, catalog: &ArchetypeCatalog) -> bool {
        self.archetype_id
            .as_deref()
            .and_then(|id| catalog.get(id))
            .is_some_and(|a| a.is_starter_like())
    }
}

/// A team roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Display name.
    pub name: String,
    /// Players in roster order.
    pub players: Vec<Player>,
}

impl Team {
    /// Creates an empty team.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            players: Vec::new(),
        }
    }

    /// Adds a player.
    pub fn with_player(mut self, player: Player) -> Self {
        self.players.push(player);
        self
    }

    /// Starter-like players, in roster order.
    pub fn starters<'a>(&'a self, catalog: &ArchetypeCatalog) -> Vec<&'a Player> {
        self.players
            .iter()
            .filter(|p| p.is_starter_like(catalog))
            .collect()
    }

    /// Remaining players, in roster order.
    pub fn bench<'a>(&'a self, catalog: &ArchetypeCatalog) -> Vec<&'a Player> {
        self.players
            .iter()
            .filter(|p| !p.is_starter_like(catalog))
            .collect()
    }

    /// Finds a player by id.
    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Finds a player by id for editing.
    pub fn player_mut(&mut self, id: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }
}

/// Both rosters of a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameData {
    /// Home roster.
    pub home_team: Team,
    /// Away roster.
    pub away_team: Team,
}

impl Default for GameData {
    fn default() -> Self {
        Self {
            home_team: Team::new("Home"),
            away_team: Team::new("Away"),
        }
    }
}

impl GameData {
    /// Creates a game with two empty rosters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Roster for a side.
    pub fn team(&self, side: TeamSide) -> &Team {
        match side {
            TeamSide::Home => &self.home_team,
            TeamSide::Away => &self.away_team,
        }
    }

    /// Mutable roster for a side.
    pub fn team_mut(&mut self, side: TeamSide) -> &mut Team {
        match side {
            TeamSide::Home => &mut self.home_team,
            TeamSide::Away => &mut self.away_team,
        }
    }

    /// Adds a player to the roster matching their side.
    pub fn add_player(&mut self, player: Player) {
        self.team_mut(player.team).players.push(player);
    }

    /// All players, home first.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.home_team.players.iter().chain(&self.away_team.players)
    }
}
