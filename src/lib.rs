//! Rotation planning engine for the U-Engine ecosystem.
//!
//! Turns a coach's rough rotation plan (an archetype of alternating
//! on/off stints, a target of on-court minutes, and per-stint weights)
//! into concrete minute-by-minute segments, lets an editor move the
//! boundaries between those segments, and aggregates a roster into a
//! players-on-court curve.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Archetype`, `Player`, `Team`, `GameData`,
//!   `Segment`, `StepSeries`
//! - **`catalog`**: Read-only archetype registry (built-in table or JSON)
//! - **`timeline`**: `SegmentComputer`, `BoundaryEditor`, `OccupancyAggregator`
//! - **`report`**: Advisory team totals (closer weighting, expected minutes)
//! - **`validation`**: Advisory roster checks
//! - **`config`**: Editing and reporting settings
//!
//! # Architecture
//!
//! Every timeline operation is pure and never fails: missing archetypes
//! yield empty output, out-of-range numbers are clamped, and malformed
//! boundary edits are sanitized. CSV import/export and rendering live
//! outside this crate.

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod timeline;
pub mod validation;

pub use catalog::ArchetypeCatalog;
pub use config::RotationConfig;
pub use error::CatalogError;
