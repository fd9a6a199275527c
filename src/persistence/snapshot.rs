//! Flat save snapshot.
//!
//! `SaveData` is the only state that is ever persisted: collection, run
//! stage, deck selection and the human's stats. Field names are camelCase
//! on the wire.
//!
//! ```
//! use recursion_ccg::persistence::SaveData;
//! use recursion_ccg::progression::RunState;
//!
//! let data = SaveData::from_run(&RunState::default());
//! let json = data.to_json().unwrap();
//!
//! assert!(json.contains("\"runStage\":1"));
//! assert_eq!(SaveData::from_json(&json).unwrap(), data);
//! ```

use serde::{Deserialize, Serialize};

use super::error::Result;
use crate::cards::{CardCatalog, CardKey};
use crate::core::{EngineConfig, Player, PlayerPair};
use crate::progression::{DeckBuilder, PlayerStats, RunState};

/// Persisted run progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveData {
    pub collection: Vec<CardKey>,
    pub run_stage: u32,
    pub deck_builder: DeckBuilder,
    pub player_stats: PlayerStats,
}

impl SaveData {
    /// Capture the persistent part of a run.
    #[must_use]
    pub fn from_run(run: &RunState) -> Self {
        Self {
            collection: run.collection.clone(),
            run_stage: run.run_stage,
            deck_builder: run.deck_builder.clone(),
            player_stats: run.player_stats,
        }
    }

    /// Rebuild a run, migrating legacy card keys.
    ///
    /// Loot offers and the last XP gain are not persisted and start empty.
    #[must_use]
    pub fn into_run(self, config: &EngineConfig, catalog: &CardCatalog) -> RunState {
        let mut run = RunState {
            collection: self.collection,
            run_stage: self.run_stage.max(1),
            deck_builder: self.deck_builder,
            player_stats: self.player_stats,
            ..RunState::new(config)
        };
        run.migrate_legacy_keys(catalog);
        run
    }

    /// Minimal players for menu display, without a match.
    #[must_use]
    pub fn menu_players(&self, config: &EngineConfig) -> PlayerPair<Player> {
        let run = RunState {
            run_stage: self.run_stage.max(1),
            player_stats: self.player_stats,
            ..RunState::new(config)
        };
        PlayerPair::from_parts(run.human_player(config), run.opponent_player(config))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
