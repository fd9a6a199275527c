//! The timeline: an append-only record of every card played in a match.
//!
//! Backed by `im::Vector` so projections and checkpoints clone it in O(1).

use serde::{Deserialize, Serialize};

use crate::cards::CardInstance;
use crate::core::player::PlayerId;

/// One played card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub card: CardInstance,
    pub owner: PlayerId,
    /// Turn number the card was played on.
    pub turn: u32,
}

/// Ordered log of played cards.
///
/// Only the turn rules append to it; entries are never removed or
/// reordered during a match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    entries: im::Vector<TimelineEntry>,
}

impl Timeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: TimelineEntry) {
        tracing::debug!(
            card = %entry.card.key(),
            owner = %entry.owner,
            turn = entry.turn,
            len = self.entries.len() + 1,
            "timeline entry"
        );
        self.entries.push_back(entry);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in play order.
    pub fn iter(&self) -> impl Iterator<Item = &TimelineEntry> {
        self.entries.iter()
    }

    /// Most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&TimelineEntry> {
        self.entries.last()
    }

    /// Entries played by one player.
    pub fn by_owner(&self, owner: PlayerId) -> impl Iterator<Item = &TimelineEntry> {
        self.entries.iter().filter(move |e| e.owner == owner)
    }

    /// Entries matching an arbitrary predicate.
    pub fn matching<F>(&self, predicate: F) -> impl Iterator<Item = &TimelineEntry>
    where
        F: Fn(&TimelineEntry) -> bool,
    {
        self.entries.iter().filter(move |e| predicate(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardCatalog;
    use crate::core::entity::InstanceAllocator;

    fn timeline() -> Timeline {
        let catalog = CardCatalog::standard();
        let mut ids = InstanceAllocator::new();
        let mut timeline = Timeline::new();

        let plays = [
            ("strike", PlayerId::P1, 1),
            ("defend", PlayerId::P1, 1),
            ("momentum", PlayerId::P2, 1),
            ("strike", PlayerId::P1, 2),
        ];
        for (key, owner, turn) in plays {
            if let Some(card) = catalog.instantiate(key, &mut ids) {
                timeline.push(TimelineEntry { card, owner, turn });
            }
        }
        timeline
    }

    #[test]
    fn test_append_order() {
        let timeline = timeline();
        let keys: Vec<_> = timeline.iter().map(|e| e.card.key().as_str()).collect();

        assert_eq!(timeline.len(), 4);
        assert_eq!(keys, vec!["strike", "defend", "momentum", "strike"]);
        assert_eq!(timeline.last().map(|e| e.turn), Some(2));
    }

    #[test]
    fn test_by_owner() {
        let timeline = timeline();

        assert_eq!(timeline.by_owner(PlayerId::P1).count(), 3);
        assert_eq!(timeline.by_owner(PlayerId::P2).count(), 1);
    }

    #[test]
    fn test_matching() {
        let timeline = timeline();

        let strikes = timeline.matching(|e| e.card.key().as_str() == "strike").count();
        let recursors = timeline.matching(|e| e.card.definition.is_recursor()).count();
        assert_eq!(strikes, 2);
        assert_eq!(recursors, 1);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = timeline();
        let mut copy = original.clone();
        let extra = copy.last().cloned();
        if let Some(entry) = extra {
            copy.push(entry);
        }

        assert_eq!(original.len(), 4);
        assert_eq!(copy.len(), 5);
    }
}
