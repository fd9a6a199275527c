//! Session facade used by presentation code.
//!
//! - `Engine`: Owns the catalog, run, current match and AI
//! - `Screen`: Which top-level screen is showing

pub mod game;
pub mod screen;

pub use game::{EndTurnReport, Engine};
pub use screen::Screen;
