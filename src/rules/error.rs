//! Rejected player actions.

use crate::core::{InstanceId, PlayerId};

/// Why an action was rejected.
///
/// A rejected action leaves the match untouched, so callers may simply
/// ignore the error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAction {
    #[error("no match is in progress")]
    NoActiveMatch,

    #[error("the match is already over")]
    MatchOver,

    #[error("it is not {player}'s turn")]
    NotYourTurn { player: PlayerId },

    #[error("unknown player {player:?}")]
    UnknownPlayer { player: PlayerId },

    #[error("card {card} is not in {player}'s hand")]
    CardNotInHand { player: PlayerId, card: InstanceId },

    #[error("not enough plays: card costs {cost}, {plays} left")]
    InsufficientPlays { cost: u32, plays: u32 },
}
