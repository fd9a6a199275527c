//! Player actions.
//!
//! A turn consists of zero or more card plays followed by ending the turn.
//! Both human input and the AI policy produce the same `Action` values, and
//! the engine applies them through the same path.

use serde::{Deserialize, Serialize};

use super::entity::InstanceId;

/// A single decision by the acting player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Play the card instance from hand.
    PlayCard(InstanceId),
    /// Pass control to the other player.
    EndTurn,
}

impl Action {
    /// The card this action plays, if any.
    #[must_use]
    pub fn card(self) -> Option<InstanceId> {
        match self {
            Action::PlayCard(id) => Some(id),
            Action::EndTurn => None,
        }
    }
}
