//! Turn and phase state machine.
//!
//! A match is always in one of three phases: awaiting an action from p1,
//! awaiting an action from p2, or over. `TurnRules` is the only code that
//! changes whose turn it is, the turn counter or the plays budget at turn
//! start.
//!
//! ## Playing a card
//!
//! On success, in order:
//! 1. Deduct the cost from the actor's plays
//! 2. Move the card from hand to discard
//! 3. Resolve its effect
//! 4. Append it to the timeline
//! 5. Refill the actor's hand
//!
//! A rejected play changes nothing.

use serde::{Deserialize, Serialize};

use super::error::InvalidAction;
use crate::cards::CardInstance;
use crate::core::{Action, InstanceId, MatchOutcome, MatchState, PlayerId};
use crate::effects::{EffectReport, EffectResolver};
use crate::timeline::TimelineEntry;

/// Current phase of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    AwaitingAction(PlayerId),
    GameOver { winner: PlayerId },
}

/// Result of a successful card play.
#[derive(Clone, Debug)]
pub struct PlayOutcome {
    pub card: CardInstance,
    pub report: EffectReport,
    /// Cards drawn by the post-play refill.
    pub refilled: usize,
    /// Set if this play decided the match.
    pub decided: Option<MatchOutcome>,
}

/// Result of ending a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnChange {
    pub previous: PlayerId,
    pub current: PlayerId,
    pub turn: u32,
    /// Cards drawn into the incoming player's hand.
    pub drawn: usize,
}

/// Result of applying an `Action`.
#[derive(Clone, Debug)]
pub enum ActionOutcome {
    Played(PlayOutcome),
    TurnEnded(TurnChange),
}

/// The turn/phase state machine.
pub struct TurnRules;

impl TurnRules {
    /// Current phase.
    #[must_use]
    pub fn phase(state: &MatchState) -> Phase {
        match state.winner() {
            Some(winner) => Phase::GameOver { winner },
            None => Phase::AwaitingAction(state.current()),
        }
    }

    /// Play a card from `player`'s hand.
    pub fn play_card(
        state: &mut MatchState,
        player: PlayerId,
        card_id: InstanceId,
    ) -> Result<PlayOutcome, InvalidAction> {
        Self::validate_play(state, player, card_id).map_err(|err| {
            tracing::warn!(%player, card = %card_id, %err, "play rejected");
            err
        })?;

        let cost = state.player(player).piles.find_in_hand(card_id).map_or(0, |c| c.cost());

        let mut card = None;
        state.modify_player(player, |p| {
            p.plays -= cost;
            card = p.piles.discard_from_hand(card_id);
        });
        let card = card.ok_or(InvalidAction::CardNotInHand {
            player,
            card: card_id,
        })?;

        tracing::debug!(%player, card = %card.key(), cost, "card played");

        let report = EffectResolver::resolve(state, player, &card.definition.effect);

        let turn = state.turn;
        state.timeline.push(TimelineEntry {
            card: card.clone(),
            owner: player,
            turn,
        });

        let refilled = state.refill_hand(player);
        let decided = report.decided();

        Ok(PlayOutcome {
            card,
            report,
            refilled,
            decided,
        })
    }

    fn validate_play(
        state: &MatchState,
        player: PlayerId,
        card_id: InstanceId,
    ) -> Result<(), InvalidAction> {
        if PlayerId::new(player.0).is_none() {
            return Err(InvalidAction::UnknownPlayer { player });
        }
        if state.is_over() {
            return Err(InvalidAction::MatchOver);
        }
        if state.current() != player {
            return Err(InvalidAction::NotYourTurn { player });
        }

        let actor = state.player(player);
        let card = actor
            .piles
            .find_in_hand(card_id)
            .ok_or(InvalidAction::CardNotInHand {
                player,
                card: card_id,
            })?;

        if card.cost() > actor.plays {
            return Err(InvalidAction::InsufficientPlays {
                cost: card.cost(),
                plays: actor.plays,
            });
        }
        Ok(())
    }

    /// End the current player's turn.
    ///
    /// The turn counter advances only when play returns to p1. The incoming
    /// player's plays reset to max and their hand is refilled.
    pub fn end_turn(state: &mut MatchState) -> Result<TurnChange, InvalidAction> {
        if state.is_over() {
            tracing::warn!("end turn rejected: match is over");
            return Err(InvalidAction::MatchOver);
        }

        let previous = state.current;
        let incoming = previous.opponent();
        if previous == PlayerId::P2 {
            state.turn += 1;
        }
        state.current = incoming;

        state.modify_player(incoming, |p| p.plays = p.max_plays);
        let drawn = state.refill_hand(incoming);

        tracing::debug!(
            from = %previous,
            to = %incoming,
            turn = state.turn,
            drawn,
            "turn ended"
        );

        Ok(TurnChange {
            previous,
            current: incoming,
            turn: state.turn,
            drawn,
        })
    }

    /// Apply an action on behalf of `player`.
    pub fn apply(
        state: &mut MatchState,
        player: PlayerId,
        action: Action,
    ) -> Result<ActionOutcome, InvalidAction> {
        match action {
            Action::PlayCard(card_id) => {
                Self::play_card(state, player, card_id).map(ActionOutcome::Played)
            }
            Action::EndTurn => {
                if state.current() != player && !state.is_over() {
                    tracing::warn!(%player, "end turn rejected: not this player's turn");
                    return Err(InvalidAction::NotYourTurn { player });
                }
                Self::end_turn(state).map(ActionOutcome::TurnEnded)
            }
        }
    }

    /// Actions `player` may take right now, plays first in hand order.
    #[must_use]
    pub fn legal_actions(state: &MatchState, player: PlayerId) -> Vec<Action> {
        if state.is_over() || state.current() != player {
            return Vec::new();
        }

        let actor = state.player(player);
        actor
            .piles
            .hand()
            .iter()
            .filter(|c| c.cost() <= actor.plays)
            .map(|c| Action::PlayCard(c.id))
            .chain(std::iter::once(Action::EndTurn))
            .collect()
    }
}
