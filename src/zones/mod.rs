//! Card piles.
//!
//! Each player owns a hand, a deck and a discard pile. Hand size is driven
//! toward a target by `Piles::refill_hand`; an exhausted deck is replenished
//! by shuffling the discard pile.

pub mod piles;

pub use piles::Piles;
