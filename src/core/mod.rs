//! Core engine types: instance IDs, players, match state, actions, RNG,
//! configuration.
//!
//! Everything else in the crate builds on these. `MatchState` is the only
//! owner of match-scoped data.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use entity::{InstanceAllocator, InstanceId};
pub use player::{InvalidPlayerId, Player, PlayerId, PlayerPair};
pub use rng::{GameRng, GameRngState};
pub use config::EngineConfig;
pub use action::Action;
pub use state::{CheckpointError, MatchOutcome, MatchState, PlayerView, PublicState};
