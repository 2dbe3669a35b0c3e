//! Rotation domain models.
//!
//! Provides the value types the timeline engine reads and writes.
//!
//! # Domain Mappings
//!
//! | u-rotation | Meaning |
//! |------------|---------|
//! | Archetype | Fixed on/off stint pattern |
//! | Player | Minutes target + per-stint weights |
//! | Segment | Concrete `[start, end]` stint interval |
//! | StepSeries | Players-on-court count over the game clock |

mod archetype;
mod player;
mod segment;

pub use archetype::{Archetype, StintTag, STAR_ARCHETYPE_ID};
pub use player::{GameData, Player, Team, TeamSide};
pub use segment::{Segment, StepSeries, GAME_MINUTES};
