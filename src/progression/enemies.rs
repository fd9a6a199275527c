//! Enemy roster, one entry per run stage.

use serde::Serialize;

/// A roster entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Enemy {
    pub id: &'static str,
    pub name: &'static str,
}

/// Stage 1, 2 and 3 opponents.
pub const ENEMIES: [Enemy; 3] = [
    Enemy {
        id: "drone",
        name: "Security Drone",
    },
    Enemy {
        id: "horror",
        name: "Glitch Horror",
    },
    Enemy {
        id: "architect",
        name: "The Architect",
    },
];

/// Opponent for a run stage. Stages past the roster face the last entry.
#[must_use]
pub fn enemy_for_stage(stage: u32) -> &'static Enemy {
    let index = (stage.max(1) as usize - 1).min(ENEMIES.len() - 1);
    &ENEMIES[index]
}
