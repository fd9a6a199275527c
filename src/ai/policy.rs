//! AI decision policies.
//!
//! A policy looks at the match and picks the next `Action` for the player
//! whose turn it is. Policies never mutate state; the controller applies
//! their choice through the same rules path a human uses.

use crate::core::{Action, GameRng, MatchState, PlayerId};
use crate::rules::TurnRules;

/// Chooses the next action for an AI-controlled player.
pub trait AiPolicy: Send {
    /// Pick an action for `player`.
    ///
    /// Returning `Action::EndTurn` ends the AI's turn.
    fn choose(&self, state: &MatchState, player: PlayerId, rng: &mut GameRng) -> Action;
}

/// Play the first affordable card in hand order; end the turn when nothing
/// is affordable.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPolicy;

impl AiPolicy for GreedyPolicy {
    fn choose(&self, state: &MatchState, player: PlayerId, _rng: &mut GameRng) -> Action {
        let actor = state.player(player);
        actor
            .piles
            .hand()
            .iter()
            .find(|c| c.cost() <= actor.plays)
            .map_or(Action::EndTurn, |c| Action::PlayCard(c.id))
    }
}

/// Pick uniformly among legal actions, ending the turn included.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPolicy;

impl AiPolicy for RandomPolicy {
    fn choose(&self, state: &MatchState, player: PlayerId, rng: &mut GameRng) -> Action {
        let actions = TurnRules::legal_actions(state, player);
        rng.choose(&actions).copied().unwrap_or(Action::EndTurn)
    }
}
