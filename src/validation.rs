//! Advisory roster validation.
//!
//! Checks the imported rosters against the catalog and reports every
//! problem found. The timeline engine never calls this: it accepts any
//! input and degrades gracefully. Detects:
//! - Duplicate player IDs
//! - Unknown archetype references
//! - Stint weight lists that do not match the archetype length
//! - Expected minutes outside `[0, 48]`
//! - Closer weightings outside `[0, 1]`

use std::collections::HashSet;

use crate::catalog::ArchetypeCatalog;
use crate::models::{GameData, Player, GAME_MINUTES};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending player ID.
    pub player_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two players share the same ID.
    DuplicateId,
    /// A player references an archetype missing from the catalog.
    UnknownArchetype,
    /// `stints_raw` length differs from the archetype pattern length.
    StintCountMismatch,
    /// Expected minutes outside `[0, 48]` or not a number.
    MinutesOutOfRange,
    /// Closer weighting outside `[0, 1]` or not a number.
    CloserOutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, player: &Player, message: impl Into<String>) -> Self {
        Self {
            kind,
            player_id: player.id.clone(),
            message: message.into(),
        }
    }
}

/// Validates both rosters of a game.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(game: &GameData, catalog: &ArchetypeCatalog) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for player in game.players() {
        if !ids.insert(player.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                player,
                format!("Duplicate player ID: {}", player.id),
            ));
        }
        check_player(player, catalog, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_player(player: &Player, catalog: &ArchetypeCatalog, errors: &mut Vec<ValidationError>) {
    if let Some(id) = player.archetype_id.as_deref() {
        match catalog.get(id) {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::UnknownArchetype,
                player,
                format!("Player '{}' references unknown archetype '{id}'", player.id),
            )),
            // An empty list means "use the default shape".
            Some(arch) if !player.stints_raw.is_empty() && player.stints_raw.len() != arch.len() => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::StintCountMismatch,
                    player,
                    format!(
                        "Player '{}' has {} stint weights, archetype '{id}' has {} stints",
                        player.id,
                        player.stints_raw.len(),
                        arch.len()
                    ),
                ));
            }
            Some(_) => {}
        }
    }

    let minutes = player.expected_minutes;
    if !(0.0..=GAME_MINUTES).contains(&minutes) {
        errors.push(ValidationError::new(
            ValidationErrorKind::MinutesOutOfRange,
            player,
            format!("Player '{}' expected minutes {minutes} outside [0, 48]", player.id),
        ));
    }

    let closer = player.closer_weighting;
    if !(0.0..=1.0).contains(&closer) {
        errors.push(ValidationError::new(
            ValidationErrorKind::CloserOutOfRange,
            player,
            format!("Player '{}' closer weighting {closer} outside [0, 1]", player.id),
        ));
    }
}
