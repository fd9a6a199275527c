//! Experience and leveling.
//!
//! A human win grants a fixed XP award. Every full threshold of XP converts
//! into a level, and each level raises max health and fully heals.
//!
//! ```
//! use recursion_ccg::core::{EngineConfig, Player, PlayerId};
//! use recursion_ccg::progression::Progression;
//!
//! let progression = Progression::from_config(&EngineConfig::default());
//! let mut player = Player::new(PlayerId::P1, "Player 1", 20, 3);
//! player.xp = 150;
//!
//! let level_up = progression.award_win(&mut player);
//!
//! assert_eq!(level_up.levels_gained, 1);
//! assert_eq!((player.xp, player.level), (50, 2));
//! assert_eq!((player.health, player.max_health), (30, 30));
//! ```

use serde::{Deserialize, Serialize};

use crate::core::config::EngineConfig;
use crate::core::player::Player;

/// Result of granting XP.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUp {
    pub xp_gained: u32,
    pub levels_gained: u32,
    /// XP after conversion into levels.
    pub xp: u32,
    pub level: u32,
    pub max_health: i64,
}

/// XP and leveling rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progression {
    pub xp_award: u32,
    pub xp_threshold: u32,
    pub health_per_level: i64,
}

impl Progression {
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            xp_award: config.xp_award,
            xp_threshold: config.xp_threshold,
            health_per_level: config.health_per_level,
        }
    }

    /// Grant the win award.
    pub fn award_win(&self, player: &mut Player) -> LevelUp {
        self.grant_xp(player, self.xp_award)
    }

    /// Grant `xp` and convert full thresholds into levels.
    ///
    /// Level and max health never decrease. A level-up sets health to the new
    /// max health; without one, health is untouched.
    pub fn grant_xp(&self, player: &mut Player, xp: u32) -> LevelUp {
        let mut total = player.xp.saturating_add(xp);
        let mut levels_gained = 0;

        if self.xp_threshold > 0 {
            while total >= self.xp_threshold {
                total -= self.xp_threshold;
                levels_gained += 1;
            }
        }

        player.xp = total;
        player.level += levels_gained;

        if levels_gained > 0 {
            player.max_health += i64::from(levels_gained) * self.health_per_level;
            player.health = player.max_health;
            tracing::info!(
                player = %player.id,
                level = player.level,
                max_health = player.max_health,
                "level up"
            );
        }

        LevelUp {
            xp_gained: xp,
            levels_gained,
            xp: player.xp,
            level: player.level,
            max_health: player.max_health,
        }
    }
}

impl Default for Progression {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}
