//! Engine configuration.
//!
//! Every tunable number of the game lives in `EngineConfig`. The defaults
//! reproduce the standard ruleset; tests and tools override single values
//! with the `with_*` builders.
//!
//! ```
//! use recursion_ccg::core::EngineConfig;
//!
//! let config = EngineConfig::default()
//!     .with_seed(7)
//!     .with_hand_target(5);
//!
//! assert_eq!(config.hand_target, 5);
//! assert_eq!(config.max_plays, 3);
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Hand size the refill rule drives toward.
    pub hand_target: usize,

    /// Health and max health of a fresh player.
    pub starting_health: i64,

    /// Plays granted at the start of each turn.
    pub max_plays: u32,

    /// Extra opponent health per run stage past the first.
    pub stage_health_bonus: i64,

    /// XP granted to the human player on a win.
    pub xp_award: u32,

    /// XP needed per level.
    pub xp_threshold: u32,

    /// Max health gained per level.
    pub health_per_level: i64,

    /// Maximum number of keys in a built deck.
    pub max_deck_size: usize,

    /// Number of cards offered after a win.
    pub loot_choices: usize,

    /// Delay before the AI starts its turn.
    pub ai_think_delay_ms: u64,

    /// Delay between consecutive AI plays.
    pub ai_play_delay_ms: u64,

    /// Number of save slots the slot manager accepts.
    pub max_save_slots: usize,

    /// Shuffle the starting deck before dealing. Off by default: decks are
    /// dealt in list order and only reshuffles randomize.
    pub shuffle_starting_deck: bool,

    /// Master RNG seed.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hand_target: 10,
            starting_health: 20,
            max_plays: 3,
            stage_health_bonus: 5,
            xp_award: 100,
            xp_threshold: 200,
            health_per_level: 10,
            max_deck_size: 50,
            loot_choices: 3,
            ai_think_delay_ms: 1000,
            ai_play_delay_ms: 800,
            max_save_slots: 3,
            shuffle_starting_deck: false,
            seed: 42,
        }
    }
}

impl EngineConfig {
    /// Set the master RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the hand refill target.
    #[must_use]
    pub fn with_hand_target(mut self, target: usize) -> Self {
        self.hand_target = target;
        self
    }

    /// Set the starting health of a fresh player.
    #[must_use]
    pub fn with_starting_health(mut self, health: i64) -> Self {
        self.starting_health = health;
        self
    }

    /// Set the per-turn plays budget.
    #[must_use]
    pub fn with_max_plays(mut self, plays: u32) -> Self {
        self.max_plays = plays;
        self
    }

    /// Set both AI delays. Zero disables pacing.
    #[must_use]
    pub fn with_ai_delays(mut self, think_ms: u64, play_ms: u64) -> Self {
        self.ai_think_delay_ms = think_ms;
        self.ai_play_delay_ms = play_ms;
        self
    }

    /// Shuffle starting decks before dealing.
    #[must_use]
    pub fn with_shuffled_start(mut self, shuffle: bool) -> Self {
        self.shuffle_starting_deck = shuffle;
        self
    }

    /// Opponent health for a given run stage (stage 1 is the base).
    #[must_use]
    pub fn opponent_health(&self, run_stage: u32) -> i64 {
        let extra_stages = i64::from(run_stage.saturating_sub(1));
        self.starting_health + extra_stages * self.stage_health_bonus
    }

    #[must_use]
    pub fn ai_think_delay(&self) -> Duration {
        Duration::from_millis(self.ai_think_delay_ms)
    }

    #[must_use]
    pub fn ai_play_delay(&self) -> Duration {
        Duration::from_millis(self.ai_play_delay_ms)
    }
}
