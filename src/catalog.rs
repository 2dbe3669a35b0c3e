//! Archetype catalog.
//!
//! Immutable registry of rotation archetypes, looked up by id. The
//! built-in table is constructed once per process and shared read-only,
//! so concurrent lookups need no locking.
//!
//! An unknown id is a normal condition ("player not configured yet"),
//! not an error.

use std::collections::HashMap;

use log::{debug, info};
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::{CatalogError, Result};
use crate::models::{Archetype, StintTag};

/// Read-only registry of archetypes, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct ArchetypeCatalog {
    archetypes: Vec<Archetype>,
    index: HashMap<String, usize>,
}

static BUILTIN: Lazy<ArchetypeCatalog> = Lazy::new(|| {
    let catalog = ArchetypeCatalog::from_entries(builtin_entries());
    info!("built-in archetype catalog ready ({} archetypes)", catalog.len());
    catalog
});

/// Table shape accepted by [`ArchetypeCatalog::from_json`].
#[derive(Debug, Deserialize)]
struct CatalogTable {
    archetypes: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    starter: bool,
    stint_pattern: Vec<StintTag>,
}

impl From<CatalogEntry> for Archetype {
    fn from(entry: CatalogEntry) -> Self {
        let name = entry.name.unwrap_or_else(|| entry.id.clone());
        Archetype::new(entry.id, entry.stint_pattern)
            .with_name(name)
            .with_starter(entry.starter)
    }
}

impl ArchetypeCatalog {
    /// The catalog the tool ships with.
    pub fn builtin() -> &'static ArchetypeCatalog {
        &BUILTIN
    }

    /// Builds a catalog from a list of archetypes.
    ///
    /// # Errors
    /// [`CatalogError::DuplicateId`] or [`CatalogError::EmptyPattern`].
    pub fn new(archetypes: Vec<Archetype>) -> Result<Self> {
        let mut index = HashMap::with_capacity(archetypes.len());
        for (i, arch) in archetypes.iter().enumerate() {
            if arch.is_empty() {
                return Err(CatalogError::EmptyPattern(arch.id.clone()));
            }
            if index.insert(arch.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateId(arch.id.clone()));
            }
        }
        debug!("archetype catalog built with {} entries", archetypes.len());
        Ok(Self { archetypes, index })
    }

    /// Parses a `{"archetypes": [...]}` table.
    ///
    /// A missing `name` defaults to the id; a missing `starter` to `false`.
    pub fn from_json(json: &str) -> Result<Self> {
        let table: CatalogTable = serde_json::from_str(json)?;
        Self::new(table.archetypes.into_iter().map(Archetype::from).collect())
    }

    // Built-in table is known to be well-formed.
    fn from_entries(archetypes: Vec<Archetype>) -> Self {
        let index = archetypes
            .iter()
            .enumerate()
            .map(|(i, a)| (a.id.clone(), i))
            .collect();
        Self { archetypes, index }
    }

    /// Looks up an archetype.
    pub fn get(&self, id: &str) -> Option<&Archetype> {
        self.index.get(id).map(|&i| &self.archetypes[i])
    }

    /// Whether an id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Archetype ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.archetypes.iter().map(|a| a.id.as_str())
    }

    /// Archetypes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Archetype> {
        self.archetypes.iter()
    }

    /// Number of archetypes.
    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }

    /// `(on, off)` stint positions of an archetype; both empty if unknown.
    pub fn split_on_off_indices(&self, id: &str) -> (Vec<usize>, Vec<usize>) {
        self.get(id)
            .map(Archetype::split_indices)
            .unwrap_or_default()
    }
}

fn builtin_entries() -> Vec<Archetype> {
    use StintTag::{Off, On};

    let entry = |id: &str, name: &str, starter: bool, pattern: &[StintTag]| {
        Archetype::new(id, pattern.to_vec())
            .with_name(name)
            .with_starter(starter)
    };

    vec![
        entry(
            "StarterCloserThreeStints",
            "Starter, 3 on-stints, closer-capable",
            true,
            &[On, Off, On, Off, On],
        ),
        entry(
            "StarterCloserFourStints",
            "Starter, 4 on-stints, closer-capable",
            true,
            &[On, Off, On, Off, On, Off, On],
        ),
        entry(
            "StarterCloserFiveStints",
            "Starter, 5 on-stints, closer-capable",
            true,
            &[On, Off, On, Off, On, Off, On, Off, On],
        ),
        entry(
            "NonStarterNonCloserOneStint",
            "Bench, single on-stint, non-closer",
            false,
            &[Off, On, Off],
        ),
        entry(
            "NonStarterNonCloserTwoStints",
            "Bench, 2 on-stints, non-closer",
            false,
            &[Off, On, Off, On, Off],
        ),
        entry(
            "NonStarterNonCloserThreeStints",
            "Bench, 3 on-stints, non-closer",
            false,
            &[Off, On, Off, On, Off, On, Off],
        ),
        entry(
            "NonStarterCloserThreeStints",
            "Bench, 3 on-stints, closer-capable",
            false,
            &[Off, On, Off, On, Off, On],
        ),
        entry(
            "NonStarterCloserFourStints",
            "Bench, 4 on-stints, closer-capable",
            false,
            &[Off, On, Off, On, Off, On, Off, On],
        ),
        entry(
            "GarbageTime",
            "Garbage Time (does not play)",
            false,
            &[Off],
        ),
        entry(
            "Star",
            "Star (special rule must sub off at 12 and 36 min)",
            true,
            &[On, Off, On, Off, On],
        ),
    ]
}
