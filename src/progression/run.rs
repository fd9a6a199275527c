//! Meta-run state that outlives a single match.
//!
//! A run tracks the card collection, the deck being built, the current
//! stage, loot offered after a win, and the human player's persistent
//! stats. Only this state is saved; match state never is.

use serde::{Deserialize, Serialize};

use super::enemies::{enemy_for_stage, Enemy};
use super::leveling::LevelUp;
use crate::cards::{CardCatalog, CardKey, DEFAULT_DECK_KEYS};
use crate::core::{EngineConfig, GameRng, Player, PlayerId};

/// Human stats carried between matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub level: u32,
    pub xp: u32,
    pub health: i64,
    pub max_health: i64,
}

impl PlayerStats {
    /// Level 1 stats at full starting health.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            level: 1,
            xp: 0,
            health: config.starting_health,
            max_health: config.starting_health,
        }
    }

    /// Copy the stats of a seated player.
    #[must_use]
    pub fn of(player: &Player) -> Self {
        Self {
            level: player.level,
            xp: player.xp,
            health: player.health,
            max_health: player.max_health,
        }
    }

    /// Apply to a fresh player. A non-positive stored health starts the
    /// player at max health.
    pub fn apply_to(&self, player: &mut Player) {
        player.level = self.level;
        player.xp = self.xp;
        player.max_health = self.max_health;
        player.health = if self.health > 0 {
            self.health
        } else {
            self.max_health
        };
    }
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

/// Deck selection in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckBuilder {
    pub selected_card_keys: Vec<CardKey>,
    pub max_deck_size: usize,
}

impl DeckBuilder {
    #[must_use]
    pub fn new(max_deck_size: usize) -> Self {
        Self {
            selected_card_keys: Vec::new(),
            max_deck_size,
        }
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.selected_card_keys.len() >= self.max_deck_size
    }

    /// Append a key. Returns `false` when the deck is full.
    pub fn add(&mut self, key: CardKey) -> bool {
        if self.is_full() {
            return false;
        }
        self.selected_card_keys.push(key);
        true
    }

    /// Remove the key at `index`. Out of range is a no-op.
    pub fn remove(&mut self, index: usize) -> Option<CardKey> {
        (index < self.selected_card_keys.len()).then(|| self.selected_card_keys.remove(index))
    }
}

/// Persistent run progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunState {
    pub collection: Vec<CardKey>,
    /// Starts at 1.
    pub run_stage: u32,
    pub deck_builder: DeckBuilder,
    pub pending_loot: Vec<CardKey>,
    pub player_stats: PlayerStats,
    /// XP granted by the most recent match; 0 unless the human won.
    pub last_xp_gain: u32,
}

impl RunState {
    /// A fresh run: the default collection, stage 1, nothing selected.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            collection: DEFAULT_DECK_KEYS.iter().map(|&k| CardKey::from(k)).collect(),
            run_stage: 1,
            deck_builder: DeckBuilder::new(config.max_deck_size),
            pending_loot: Vec::new(),
            player_stats: PlayerStats::from_config(config),
            last_xp_gain: 0,
        }
    }

    // === Deck Builder ===

    /// Add a key to the deck selection if there is room.
    pub fn add_to_deck(&mut self, key: impl Into<CardKey>) -> bool {
        let key = key.into();
        let added = self.deck_builder.add(key.clone());
        if !added {
            tracing::debug!(%key, "deck is full");
        }
        added
    }

    pub fn remove_from_deck(&mut self, index: usize) -> Option<CardKey> {
        self.deck_builder.remove(index)
    }

    // === Loot ===

    /// Offer `count` uniformly random catalog keys, repeats allowed.
    pub fn generate_loot(&mut self, catalog: &CardCatalog, rng: &mut GameRng, count: usize) -> &[CardKey] {
        self.pending_loot = (0..count)
            .filter_map(|_| rng.choose(catalog.keys()).cloned())
            .collect();
        tracing::debug!(offer = ?self.pending_loot, "loot generated");
        &self.pending_loot
    }

    /// Add a key to the collection and clear the offer.
    pub fn claim_loot(&mut self, key: impl Into<CardKey>) {
        let key = key.into();
        tracing::info!(%key, "loot claimed");
        self.collection.push(key);
        self.pending_loot.clear();
    }

    // === Stages ===

    pub fn next_stage(&mut self) {
        self.run_stage += 1;
        tracing::info!(stage = self.run_stage, "advanced run stage");
    }

    /// Opponent for the current stage.
    #[must_use]
    pub fn enemy(&self) -> &'static Enemy {
        enemy_for_stage(self.run_stage)
    }

    /// Start over: default collection, stage 1, empty deck, default stats.
    pub fn reset_progress(&mut self, config: &EngineConfig) {
        *self = Self::new(config);
        tracing::info!("run progress reset");
    }

    // === Match Seating ===

    /// Deck keys the human plays with: the selection, or the default list
    /// when nothing is selected.
    #[must_use]
    pub fn deck_keys(&self) -> Vec<CardKey> {
        if self.deck_builder.selected_card_keys.is_empty() {
            DEFAULT_DECK_KEYS.iter().map(|&k| CardKey::from(k)).collect()
        } else {
            self.deck_builder.selected_card_keys.clone()
        }
    }

    /// Build the human player from persisted stats, with empty piles.
    #[must_use]
    pub fn human_player(&self, config: &EngineConfig) -> Player {
        let mut player = Player::new(PlayerId::P1, "Player 1", config.starting_health, config.max_plays);
        self.player_stats.apply_to(&mut player);
        player
    }

    /// Build the stage opponent, with empty piles.
    #[must_use]
    pub fn opponent_player(&self, config: &EngineConfig) -> Player {
        Player::new(
            PlayerId::P2,
            self.enemy().name,
            config.opponent_health(self.run_stage),
            config.max_plays,
        )
        .ai()
    }

    /// Copy the human's live stats into the run.
    pub fn sync_player(&mut self, player: &Player) {
        self.player_stats = PlayerStats::of(player);
    }

    /// Record the XP from a finished match.
    pub fn record_xp_gain(&mut self, level_up: Option<LevelUp>) {
        self.last_xp_gain = level_up.map_or(0, |l| l.xp_gained);
    }

    /// Rewrite renamed keys in the collection and deck selection.
    ///
    /// Unknown keys are kept; they are skipped when a deck is built.
    pub fn migrate_legacy_keys(&mut self, catalog: &CardCatalog) {
        let migrate = |key: &mut CardKey| {
            if let Some(current) = catalog.canonical_key(key.as_str()) {
                if current != &*key {
                    tracing::debug!(legacy = %key, %current, "migrated card key");
                    *key = current.clone();
                }
            }
        };
        self.collection.iter_mut().for_each(migrate);
        self.deck_builder.selected_card_keys.iter_mut().for_each(migrate);
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}
