//! Effect definitions.
//!
//! A card's effect is plain data: a tagged `Effect` value that the
//! `EffectResolver` interprets against a live match. Effects are always
//! relative to the acting player: damage hits the opponent, everything else
//! benefits the actor.

use serde::{Deserialize, Serialize};

/// A numeric effect magnitude.
///
/// Recursor cards scale with the number of entries in the timeline at the
/// moment the effect resolves. The card being played is not yet in the
/// timeline at that point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Amount {
    /// A constant value.
    Fixed(i64),
    /// `multiplier` × timeline length.
    PerTimelineEntry { multiplier: i64 },
}

impl Amount {
    #[must_use]
    pub const fn fixed(value: i64) -> Self {
        Self::Fixed(value)
    }

    #[must_use]
    pub const fn per_timeline_entry(multiplier: i64) -> Self {
        Self::PerTimelineEntry { multiplier }
    }

    /// Evaluate against the current timeline length.
    #[must_use]
    pub fn evaluate(self, timeline_len: usize) -> i64 {
        match self {
            Amount::Fixed(value) => value,
            Amount::PerTimelineEntry { multiplier } => {
                let len = i64::try_from(timeline_len).unwrap_or(i64::MAX);
                len.saturating_mul(multiplier)
            }
        }
    }
}

/// An effect a card produces when played.
///
/// ## Leaf Effects
///
/// - `Damage`: Lower the opponent's health
/// - `Heal`: Raise the actor's health, never above max health
/// - `Draw`: Draw cards one at a time (the reshuffle rule applies)
/// - `GrantPlays`: Add to the actor's plays this turn
///
/// ## Composite Effects
///
/// - `Composite`: Run several effects in order
/// - `WhenTimelineExceeds`: Run an effect only on a long enough timeline
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Opponent loses health.
    Damage { amount: Amount },

    /// Actor gains health, clamped to max health.
    Heal { amount: Amount },

    /// Actor draws `count` cards.
    Draw { count: usize },

    /// Actor gains extra plays.
    GrantPlays { amount: u32 },

    /// Execute multiple effects in sequence.
    Composite(Vec<Effect>),

    /// Execute `effect` only if the timeline has more than `threshold`
    /// entries.
    WhenTimelineExceeds {
        threshold: usize,
        effect: Box<Effect>,
    },
}

impl Effect {
    /// Create a fixed damage effect.
    pub fn damage(amount: i64) -> Self {
        Self::Damage {
            amount: Amount::Fixed(amount),
        }
    }

    /// Create a fixed heal effect.
    pub fn heal(amount: i64) -> Self {
        Self::Heal {
            amount: Amount::Fixed(amount),
        }
    }

    /// Create a draw cards effect.
    pub fn draw(count: usize) -> Self {
        Self::Draw { count }
    }

    pub fn grant_plays(amount: u32) -> Self {
        Self::GrantPlays { amount }
    }

    /// Create a sequence of effects.
    pub fn composite(effects: impl IntoIterator<Item = Effect>) -> Self {
        Self::Composite(effects.into_iter().collect())
    }

    /// Create a timeline-gated effect.
    pub fn when_timeline_exceeds(threshold: usize, effect: Effect) -> Self {
        Self::WhenTimelineExceeds {
            threshold,
            effect: Box::new(effect),
        }
    }
}

impl Default for Effect {
    fn default() -> Self {
        Self::Composite(Vec::new())
    }
}
