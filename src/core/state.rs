//! Match state and its read-only projection.
//!
//! ## MatchState
//!
//! Everything scoped to one match:
//! - Both players (health, plays, piles, progression stats)
//! - Current player and turn counter
//! - Outcome, once decided
//! - Timeline
//! - RNG and instance-ID allocator
//!
//! Player mutation goes through `MatchState::modify_player`, which is also
//! where win detection lives.
//!
//! ## PublicState
//!
//! Cloneable snapshot handed to presentation code.

use serde::{Deserialize, Serialize};

use super::config::EngineConfig;
use super::entity::InstanceAllocator;
use super::player::{Player, PlayerId, PlayerPair};
use super::rng::GameRng;
use crate::cards::CardInstance;
use crate::progression::{LevelUp, Progression};
use crate::timeline::Timeline;

/// How a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub winner: PlayerId,
    /// Progression applied to the winner; `None` when the winner is AI.
    pub level_up: Option<LevelUp>,
}

/// Errors raised by binary match checkpoints.
#[derive(Debug, thiserror::Error)]
pub enum CheckpointError {
    #[error("no match is in progress")]
    NoActiveMatch,

    #[error("failed to encode match checkpoint: {0}")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode match checkpoint: {0}")]
    Decode(#[source] bincode::Error),
}

/// State of one match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchState {
    pub(crate) players: PlayerPair<Player>,
    pub(crate) current: PlayerId,
    /// Starts at 1; increments when play returns to p1.
    pub(crate) turn: u32,
    pub(crate) outcome: Option<MatchOutcome>,
    pub(crate) timeline: Timeline,
    pub(crate) rng: GameRng,
    pub(crate) ids: InstanceAllocator,
    pub(crate) config: EngineConfig,
}

impl MatchState {
    /// Seat two players and deal opening hands.
    ///
    /// `ids` must be the allocator the players' decks were built with, so
    /// later instances never collide with dealt ones.
    #[must_use]
    pub fn new(
        mut players: PlayerPair<Player>,
        mut rng: GameRng,
        ids: InstanceAllocator,
        config: EngineConfig,
    ) -> Self {
        for (_, player) in players.iter_mut() {
            if config.shuffle_starting_deck {
                player.piles.shuffle_deck(&mut rng);
            }
            player.piles.refill_hand(config.hand_target, &mut rng);
        }

        tracing::info!(
            p1 = %players[PlayerId::P1].name,
            p2 = %players[PlayerId::P2].name,
            "match started"
        );

        Self {
            players,
            current: PlayerId::P1,
            turn: 1,
            outcome: None,
            timeline: Timeline::new(),
            rng,
            ids,
            config,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn players(&self) -> &PlayerPair<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&MatchOutcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.outcome.map(|o| o.winner)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // === Player Mutation ===

    /// Apply `modifier` to a player, then check for a winner.
    ///
    /// If the modified player's health is at or below zero and no winner is
    /// set yet, the other player wins and, unless AI-controlled, receives the
    /// win award. Returns the outcome only on the call that decided it.
    pub fn modify_player<F>(&mut self, id: PlayerId, modifier: F) -> Option<MatchOutcome>
    where
        F: FnOnce(&mut Player),
    {
        modifier(&mut self.players[id]);

        if self.outcome.is_some() || !self.players[id].is_defeated() {
            return None;
        }

        let winner = id.opponent();
        let level_up = if self.players[winner].is_ai {
            None
        } else {
            let progression = Progression::from_config(&self.config);
            Some(progression.award_win(&mut self.players[winner]))
        };

        let outcome = MatchOutcome { winner, level_up };
        self.outcome = Some(outcome);

        tracing::info!(winner = %winner, turn = self.turn, "match decided");
        Some(outcome)
    }

    /// Lower a player's health. Returns the outcome if this decided the match.
    pub fn damage(&mut self, target: PlayerId, amount: i64) -> Option<MatchOutcome> {
        self.modify_player(target, |p| p.health = p.health.saturating_sub(amount))
    }

    /// Raise a player's health, never above max health.
    ///
    /// Returns the health actually gained.
    pub fn heal(&mut self, target: PlayerId, amount: i64) -> i64 {
        let before = self.players[target].health;
        self.modify_player(target, |p| {
            p.health = p.max_health.min(p.health.saturating_add(amount));
        });
        self.players[target].health - before
    }

    pub fn grant_plays(&mut self, target: PlayerId, amount: u32) {
        self.modify_player(target, |p| p.plays = p.plays.saturating_add(amount));
    }

    /// Draw cards one at a time. Returns the number actually drawn.
    pub fn draw_cards(&mut self, target: PlayerId, count: usize) -> usize {
        let player = &mut self.players[target];
        (0..count)
            .take_while(|_| player.piles.draw_card(&mut self.rng).is_some())
            .count()
    }

    /// Refill a player's hand to the configured target.
    pub(crate) fn refill_hand(&mut self, target: PlayerId) -> usize {
        let hand_target = self.config.hand_target;
        self.players[target]
            .piles
            .refill_hand(hand_target, &mut self.rng)
    }

    // === Projection ===

    /// Read-only snapshot of this match.
    #[must_use]
    pub fn public_state(&self, run_stage: u32) -> PublicState {
        PublicState {
            players: self.players.map(|_, p| PlayerView::from(p)),
            timeline: self.timeline.clone(),
            current: self.current,
            turn: self.turn,
            winner: self.winner(),
            run_stage,
        }
    }

    // === Checkpoints ===

    /// Encode the full match, RNG position included.
    pub fn checkpoint(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(CheckpointError::Encode)
    }

    /// Decode a match written by `checkpoint`.
    pub fn restore(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes).map_err(CheckpointError::Decode)
    }
}

/// What presentation code sees of a player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub health: i64,
    pub max_health: i64,
    pub plays: u32,
    pub max_plays: u32,
    pub is_ai: bool,
    pub xp: u32,
    pub level: u32,
    pub hand: Vec<CardInstance>,
    pub deck_size: usize,
    pub discard_size: usize,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            health: player.health,
            max_health: player.max_health,
            plays: player.plays,
            max_plays: player.max_plays,
            is_ai: player.is_ai,
            xp: player.xp,
            level: player.level,
            hand: player.piles.hand().to_vec(),
            deck_size: player.piles.deck().len(),
            discard_size: player.piles.discard().len(),
        }
    }
}

/// Read-only projection of the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicState {
    pub players: PlayerPair<PlayerView>,
    pub timeline: Timeline,
    pub current: PlayerId,
    pub turn: u32,
    pub winner: Option<PlayerId>,
    pub run_stage: u32,
}
