//! # recursion-ccg
//!
//! A turn-based card battle engine: one human against a scripted AI, with
//! per-player deck/hand/discard cycling, a timeline of every card played,
//! and run progression between matches.
//!
//! ## Design Principles
//!
//! 1. **One Owner**: `Engine` owns the match and the run. Callers mutate
//!    through `&mut Engine` and read through `PublicState`.
//!
//! 2. **Data-Driven Cards**: Card effects are tagged `Effect` values
//!    interpreted by `EffectResolver`, not closures.
//!
//! 3. **Reproducible**: All shuffling goes through a seeded `GameRng`, so a
//!    seed and an action list replay the same match.
//!
//! ## Modules
//!
//! - `core`: Player IDs, players, match state, actions, RNG, configuration
//! - `cards`: Card definitions, instances and the standard catalog
//! - `zones`: Per-player deck, hand and discard piles
//! - `timeline`: Append-only ledger of played cards
//! - `effects`: Effect values and their resolver
//! - `rules`: Turn/phase state machine and action validation
//! - `progression`: XP, leveling, enemy roster and run state
//! - `ai`: Scripted AI turn loop behind policy and pacer traits
//! - `persistence`: Save snapshots, key-value stores and save slots
//! - `engine`: The `Engine` facade

pub mod core;
pub mod cards;
pub mod zones;
pub mod timeline;
pub mod effects;
pub mod rules;
pub mod progression;
pub mod ai;
pub mod persistence;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Action, CheckpointError, EngineConfig, GameRng, GameRngState, InstanceAllocator, InstanceId,
    MatchOutcome, MatchState, Player, PlayerId, PlayerPair, PlayerView, PublicState,
};

pub use crate::cards::{
    CardCatalog, CardDefinition, CardInstance, CardKey, CardType, DEFAULT_DECK_KEYS,
};

pub use crate::zones::Piles;

pub use crate::timeline::{Timeline, TimelineEntry};

pub use crate::effects::{Amount, Effect, EffectEvent, EffectReport, EffectResolver};

pub use crate::rules::{ActionOutcome, InvalidAction, Phase, PlayOutcome, TurnChange, TurnRules};

pub use crate::progression::{Enemy, LevelUp, PlayerStats, Progression, RunState};

pub use crate::ai::{AiController, AiPolicy, AiTurnReport, GreedyPolicy, NoDelay, Pacer, SleepPacer};

pub use crate::persistence::{
    FileStore, KeyValueStore, MemoryStore, PersistenceError, SaveData, SaveSlot, SaveSlotManager,
};

pub use crate::engine::{EndTurnReport, Engine, Screen};
