//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: "Strike" costs
//! 1 play and deals 2 damage no matter which copy is played.
//!
//! Instance-specific data (which copy, which pile) is tracked separately in
//! `CardInstance`.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

use crate::effects::Effect;

/// Catalog key of a card definition (`"strike"`, `"momentum"`, ...).
///
/// Keys are what persisted data stores, so they are plain strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardKey(pub String);

impl CardKey {
    /// Create a new card key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for CardKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CardKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Card type.
///
/// The type is informational for Action and Echo; Recursor marks cards whose
/// effect scales with the timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    /// Plain one-shot effect.
    Action,
    /// Fixed multi-part effect.
    Echo,
    /// Effect scaled by timeline length.
    Recursor,
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardType::Action => "Action",
            CardType::Echo => "Echo",
            CardType::Recursor => "Recursor",
        };
        f.write_str(name)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use recursion_ccg::cards::{CardDefinition, CardType};
/// use recursion_ccg::effects::Effect;
///
/// let strike = CardDefinition::new("strike", "Strike", CardType::Action, 1)
///     .with_description("Deal 2 damage.")
///     .with_power(2)
///     .with_effect(Effect::damage(2));
///
/// assert_eq!(strike.cost, 1);
/// assert_eq!(strike.power, Some(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Catalog key.
    pub key: CardKey,

    /// Display name.
    pub name: String,

    pub card_type: CardType,

    /// Plays spent to play this card.
    pub cost: u32,

    /// Rules text.
    pub description: String,

    /// Headline number shown on the card face, if any.
    #[serde(default)]
    pub power: Option<i64>,

    /// What happens when the card is played.
    pub effect: Effect,
}

impl CardDefinition {
    /// Create a definition with no effect and no description.
    #[must_use]
    pub fn new(
        key: impl Into<CardKey>,
        name: impl Into<String>,
        card_type: CardType,
        cost: u32,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            card_type,
            cost,
            description: String::new(),
            power: None,
            effect: Effect::default(),
        }
    }

    /// Set the rules text (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the display power (builder pattern).
    #[must_use]
    pub fn with_power(mut self, power: i64) -> Self {
        self.power = Some(power);
        self
    }

    /// Set the effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = effect;
        self
    }

    /// Check whether the card scales with the timeline.
    #[must_use]
    pub fn is_recursor(&self) -> bool {
        self.card_type == CardType::Recursor
    }
}
