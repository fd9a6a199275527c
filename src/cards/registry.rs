//! Card catalog for definition lookup.
//!
//! The `CardCatalog` stores every card definition available to a game,
//! keyed by `CardKey`. It also knows legacy aliases (keys that were renamed)
//! so persisted decks keep working.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardKey, CardType};
use super::instance::CardInstance;
use crate::core::entity::InstanceAllocator;

/// Registry of card definitions.
///
/// Iteration follows registration order, which keeps loot rolls and
/// listings reproducible.
///
/// ## Example
///
/// ```
/// use recursion_ccg::cards::{CardCatalog, CardDefinition, CardType};
/// use recursion_ccg::effects::Effect;
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(
///     CardDefinition::new("strike", "Strike", CardType::Action, 1)
///         .with_effect(Effect::damage(2)),
/// );
///
/// let found = catalog.get("strike").unwrap();
/// assert_eq!(found.name, "Strike");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardKey, CardDefinition>,
    order: Vec<CardKey>,
    aliases: FxHashMap<CardKey, CardKey>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Re-registering a key replaces the definition in place and returns the
    /// old one.
    pub fn register(&mut self, card: CardDefinition) -> Option<CardDefinition> {
        let key = card.key.clone();
        let previous = self.cards.insert(key.clone(), card);
        if previous.is_none() {
            self.order.push(key);
        }
        previous
    }

    /// Register a legacy key that resolves to an existing card.
    pub fn register_alias(&mut self, legacy: impl Into<CardKey>, current: impl Into<CardKey>) {
        self.aliases.insert(legacy.into(), current.into());
    }

    /// Get a card definition by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CardDefinition> {
        self.cards.get(key)
    }

    /// Map a possibly legacy key to the key the catalog uses today.
    ///
    /// Returns `None` when the key is unknown under either name.
    #[must_use]
    pub fn canonical_key(&self, key: &str) -> Option<&CardKey> {
        if let Some(card) = self.cards.get(key) {
            return Some(&card.key);
        }
        self.aliases.get(key).filter(|current| self.cards.contains_key(current.as_str()))
    }

    /// Get a definition by key, following legacy aliases.
    #[must_use]
    pub fn resolve(&self, key: &str) -> Option<&CardDefinition> {
        self.canonical_key(key).and_then(|k| self.cards.get(k.as_str()))
    }

    /// Check if a key is registered (aliases excluded).
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.cards.contains_key(key)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.order.iter().filter_map(|key| self.cards.get(key.as_str()))
    }

    /// All registered keys in registration order.
    #[must_use]
    pub fn keys(&self) -> &[CardKey] {
        &self.order
    }

    /// Find cards by type.
    pub fn find_by_type(&self, card_type: CardType) -> impl Iterator<Item = &CardDefinition> {
        self.iter().filter(move |c| c.card_type == card_type)
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardDefinition>
    where
        F: Fn(&CardDefinition) -> bool,
    {
        self.iter().filter(move |c| predicate(c))
    }

    /// Create a fresh instance of a card.
    pub fn instantiate(&self, key: &str, ids: &mut InstanceAllocator) -> Option<CardInstance> {
        self.resolve(key)
            .map(|def| CardInstance::new(ids.alloc(), def.clone()))
    }

    /// Build a deck from a key list, in list order.
    ///
    /// Unknown keys are skipped.
    pub fn build_deck<K>(&self, keys: &[K], ids: &mut InstanceAllocator) -> Vec<CardInstance>
    where
        K: AsRef<str>,
    {
        keys.iter()
            .filter_map(|key| {
                let key = key.as_ref();
                let card = self.instantiate(key, ids);
                if card.is_none() {
                    tracing::debug!(key, "skipping unknown card key");
                }
                card
            })
            .collect()
    }
}
