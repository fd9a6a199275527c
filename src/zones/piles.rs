//! Per-player card piles: hand, deck and discard.
//!
//! `Piles` owns every card instance a player has in a match. Cards only ever
//! move between the three piles, so `total()` is constant for the whole
//! match.
//!
//! The deck is drawn from the front. When a draw finds the deck empty, the
//! discard pile is shuffled with the match RNG and becomes the new deck.
//!
//! ```
//! use recursion_ccg::cards::CardCatalog;
//! use recursion_ccg::core::{GameRng, InstanceAllocator};
//! use recursion_ccg::zones::Piles;
//!
//! let catalog = CardCatalog::standard();
//! let mut ids = InstanceAllocator::new();
//! let mut rng = GameRng::new(1);
//!
//! let deck = catalog.build_deck(&["strike"; 12], &mut ids);
//! let mut piles = Piles::from_deck(deck);
//! piles.refill_hand(10, &mut rng);
//!
//! assert_eq!(piles.hand().len(), 10);
//! assert_eq!(piles.deck().len(), 2);
//! assert_eq!(piles.total(), 12);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::cards::CardInstance;
use crate::core::entity::InstanceId;
use crate::core::rng::GameRng;

/// Hand, deck and discard of one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piles {
    hand: Vec<CardInstance>,
    /// Draw order: front is the next card.
    deck: VecDeque<CardInstance>,
    discard: Vec<CardInstance>,
}

impl Piles {
    /// Create piles with every card in the deck, in the given order.
    #[must_use]
    pub fn from_deck(cards: Vec<CardInstance>) -> Self {
        Self {
            hand: Vec::new(),
            deck: cards.into(),
            discard: Vec::new(),
        }
    }

    #[must_use]
    pub fn hand(&self) -> &[CardInstance] {
        &self.hand
    }

    #[must_use]
    pub fn deck(&self) -> &VecDeque<CardInstance> {
        &self.deck
    }

    #[must_use]
    pub fn discard(&self) -> &[CardInstance] {
        &self.discard
    }

    /// Number of cards across all three piles.
    #[must_use]
    pub fn total(&self) -> usize {
        self.hand.len() + self.deck.len() + self.discard.len()
    }

    /// Find a card in hand by instance ID.
    #[must_use]
    pub fn find_in_hand(&self, id: InstanceId) -> Option<&CardInstance> {
        self.hand.iter().find(|c| c.id == id)
    }

    /// Shuffle the deck in place.
    pub fn shuffle_deck(&mut self, rng: &mut GameRng) {
        rng.shuffle(self.deck.make_contiguous());
    }

    /// Move the whole discard pile under the deck in a fresh random order.
    ///
    /// Returns the number of cards moved.
    pub fn reshuffle_discard(&mut self, rng: &mut GameRng) -> usize {
        if self.discard.is_empty() {
            return 0;
        }

        let mut cards = std::mem::take(&mut self.discard);
        rng.shuffle(&mut cards);
        let moved = cards.len();
        self.deck.extend(cards);

        tracing::debug!(moved, "reshuffled discard into deck");
        moved
    }

    /// Draw one card into the hand.
    ///
    /// Reshuffles the discard pile first if the deck is empty. Returns the
    /// drawn card's ID, or `None` if both deck and discard are empty.
    pub fn draw_card(&mut self, rng: &mut GameRng) -> Option<InstanceId> {
        if self.deck.is_empty() {
            self.reshuffle_discard(rng);
        }

        let card = self.deck.pop_front()?;
        let id = card.id;
        self.hand.push(card);
        Some(id)
    }

    /// Draw until the hand holds `target` cards or no supply is left.
    ///
    /// Returns the number of cards drawn. A hand already at or above the
    /// target is left alone.
    pub fn refill_hand(&mut self, target: usize, rng: &mut GameRng) -> usize {
        let mut drawn = 0;
        while self.hand.len() < target {
            if self.draw_card(rng).is_none() {
                break;
            }
            drawn += 1;
        }
        drawn
    }

    /// Remove a card from the hand without placing it anywhere.
    ///
    /// Callers must put the card back into one of the piles; `discard_from_hand`
    /// is the usual way.
    pub(crate) fn take_from_hand(&mut self, id: InstanceId) -> Option<CardInstance> {
        let index = self.hand.iter().position(|c| c.id == id)?;
        Some(self.hand.remove(index))
    }

    /// Move a hand card to the top of the discard pile.
    ///
    /// Returns a copy of the moved card, or `None` if it was not in hand.
    pub fn discard_from_hand(&mut self, id: InstanceId) -> Option<CardInstance> {
        let card = self.take_from_hand(id)?;
        self.discard.push(card.clone());
        Some(card)
    }
}
