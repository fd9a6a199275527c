//! Card instances - a definition dealt into a match.
//!
//! `CardInstance` pairs a `CardDefinition` with a unique `InstanceId`. The
//! instance moves between hand, deck and discard; the definition never
//! changes.

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardKey, CardType};
use crate::core::entity::InstanceId;

/// A card in a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique ID for this copy.
    pub id: InstanceId,

    /// The card's static data.
    pub definition: CardDefinition,
}

impl CardInstance {
    /// Create an instance of a definition.
    #[must_use]
    pub fn new(id: InstanceId, definition: CardDefinition) -> Self {
        Self { id, definition }
    }

    #[must_use]
    pub fn key(&self) -> &CardKey {
        &self.definition.key
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    #[must_use]
    pub fn cost(&self) -> u32 {
        self.definition.cost
    }

    #[must_use]
    pub fn card_type(&self) -> CardType {
        self.definition.card_type
    }
}
