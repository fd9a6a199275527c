//! The AI turn loop.
//!
//! One call to `AiController::run_turn` plays a whole AI turn:
//! 1. Pause for the think delay
//! 2. Ask the policy for an action
//! 3. Play the chosen card, pause for the play delay, go back to 2
//! 4. Or end the turn and stop
//!
//! The loop also stops as soon as the match is decided. A policy choice the
//! rules reject ends the turn.

use std::time::Duration;

use super::pacer::{Pacer, SleepPacer};
use super::policy::{AiPolicy, GreedyPolicy};
use crate::cards::CardKey;
use crate::core::{EngineConfig, GameRng, MatchOutcome, MatchState, PlayerId};
use crate::rules::{ActionOutcome, InvalidAction, TurnChange, TurnRules};

/// What the AI did during one turn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AiTurnReport {
    /// Keys of the cards played, in order.
    pub cards_played: Vec<CardKey>,
    /// Set if the AI ended its turn.
    pub turn_change: Option<TurnChange>,
    /// Set if a play decided the match.
    pub decided: Option<MatchOutcome>,
    /// A policy choice the rules rejected.
    pub rejected: Option<InvalidAction>,
    /// Pauses requested from the pacer, in order.
    pub pauses: Vec<Duration>,
}

/// Drives AI-controlled players.
pub struct AiController {
    policy: Box<dyn AiPolicy>,
    pacer: Box<dyn Pacer>,
    rng: GameRng,
    think_delay: Duration,
    play_delay: Duration,
}

impl AiController {
    /// Greedy policy, real-time pacing, delays from `config`.
    #[must_use]
    pub fn new(config: &EngineConfig, rng: GameRng) -> Self {
        Self {
            policy: Box::new(GreedyPolicy),
            pacer: Box::new(SleepPacer),
            rng,
            think_delay: config.ai_think_delay(),
            play_delay: config.ai_play_delay(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: impl AiPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    #[must_use]
    pub fn with_pacer(mut self, pacer: impl Pacer + 'static) -> Self {
        self.pacer = Box::new(pacer);
        self
    }

    /// Run the current player's turn if that player is AI.
    ///
    /// Does nothing when the match is over or a human is to act.
    pub fn run_turn(&mut self, state: &mut MatchState) -> AiTurnReport {
        let mut report = AiTurnReport::default();
        let player = state.current();
        if state.is_over() || !state.player(player).is_ai {
            return report;
        }

        tracing::debug!(%player, "ai turn started");
        self.pause(self.think_delay, &mut report);

        while !state.is_over() {
            let action = self.policy.choose(state, player, &mut self.rng);
            match TurnRules::apply(state, player, action) {
                Ok(ActionOutcome::Played(outcome)) => {
                    report.cards_played.push(outcome.card.key().clone());
                    if let Some(decided) = outcome.decided {
                        report.decided = Some(decided);
                        break;
                    }
                    self.pause(self.play_delay, &mut report);
                }
                Ok(ActionOutcome::TurnEnded(change)) => {
                    report.turn_change = Some(change);
                    break;
                }
                Err(err) => {
                    report.rejected = Some(err);
                    self.end_turn(state, player, &mut report);
                    break;
                }
            }
        }

        tracing::debug!(
            %player,
            played = report.cards_played.len(),
            decided = report.decided.is_some(),
            "ai turn finished"
        );
        report
    }

    fn end_turn(&mut self, state: &mut MatchState, player: PlayerId, report: &mut AiTurnReport) {
        match TurnRules::end_turn(state) {
            Ok(change) => report.turn_change = Some(change),
            Err(err) => tracing::warn!(%player, %err, "ai could not end its turn"),
        }
    }

    fn pause(&mut self, duration: Duration, report: &mut AiTurnReport) {
        report.pauses.push(duration);
        self.pacer.pause(duration);
    }
}

impl std::fmt::Debug for AiController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiController")
            .field("think_delay", &self.think_delay)
            .field("play_delay", &self.play_delay)
            .finish_non_exhaustive()
    }
}
