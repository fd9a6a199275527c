//! Progression: XP and leveling after a win, plus the meta-run that
//! carries collection, deck selection, stage and stats between matches.

pub mod enemies;
pub mod leveling;
pub mod run;

pub use enemies::{enemy_for_stage, Enemy, ENEMIES};
pub use leveling::{LevelUp, Progression};
pub use run::{DeckBuilder, PlayerStats, RunState};
