//! The standard card set and default deck list.

use super::definition::{CardDefinition, CardType};
use super::registry::CardCatalog;
use crate::effects::{Amount, Effect};

/// Default 50-card deck, dealt in this order.
pub const DEFAULT_DECK_KEYS: [&str; 50] = [
    "strike", "strike", "strike", "strike", "strike",
    "strike", "strike", "strike", "strike", "strike",
    "defend", "defend", "defend", "defend", "defend",
    "defend", "defend", "defend", "defend", "defend",
    "heavy_strike", "heavy_strike", "heavy_strike", "heavy_strike", "heavy_strike",
    "fortify", "fortify", "fortify", "fortify", "fortify",
    "quick_thinking", "quick_thinking", "quick_thinking", "quick_thinking", "quick_thinking",
    "research", "research", "research",
    "overthink", "overthink",
    "meditate", "meditate",
    "focus", "focus",
    "momentum", "momentum",
    "knowledge_bank", "knowledge_bank",
    "data_leak", "backup_protocol",
];

/// Renamed keys that may still appear in saved data: (legacy, current).
pub const LEGACY_ALIASES: [(&str, &str); 1] = [("overclock", "overthink")];

impl CardCatalog {
    /// The standard card set.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = CardCatalog::new();

        // Basic attacks
        catalog.register(
            CardDefinition::new("strike", "Strike", CardType::Action, 1)
                .with_description("Deal 2 damage.")
                .with_power(2)
                .with_effect(Effect::damage(2)),
        );
        catalog.register(
            CardDefinition::new("heavy_strike", "Heavy Strike", CardType::Action, 2)
                .with_description("Deal 5 damage.")
                .with_power(5)
                .with_effect(Effect::damage(5)),
        );
        catalog.register(
            CardDefinition::new("execute", "Execute", CardType::Action, 3)
                .with_description("Deal 8 damage.")
                .with_power(8)
                .with_effect(Effect::damage(8)),
        );

        // Basic defence
        catalog.register(
            CardDefinition::new("defend", "Defend", CardType::Action, 1)
                .with_description("Gain 3 Defence.")
                .with_power(3)
                .with_effect(Effect::heal(3)),
        );
        catalog.register(
            CardDefinition::new("fortify", "Fortify", CardType::Action, 2)
                .with_description("Gain 6 Defence.")
                .with_power(6)
                .with_effect(Effect::heal(6)),
        );
        catalog.register(
            CardDefinition::new("barrier", "Barrier", CardType::Action, 3)
                .with_description("Gain 10 Defence.")
                .with_power(10)
                .with_effect(Effect::heal(10)),
        );

        // Utility
        catalog.register(
            CardDefinition::new("quick_thinking", "Quick Thinking", CardType::Action, 0)
                .with_description("Draw 1 card.")
                .with_effect(Effect::draw(1)),
        );
        catalog.register(
            CardDefinition::new("research", "Research", CardType::Action, 1)
                .with_description("Draw 2 cards.")
                .with_effect(Effect::draw(2)),
        );
        catalog.register(
            CardDefinition::new("meditate", "Meditate", CardType::Action, 1)
                .with_description("Gain 2 Plays.")
                .with_effect(Effect::grant_plays(2)),
        );
        catalog.register(
            CardDefinition::new("overthink", "Overthink", CardType::Action, 2)
                .with_description("Draw 3 cards.")
                .with_effect(Effect::draw(3)),
        );
        catalog.register(
            CardDefinition::new("focus", "Focus", CardType::Action, 0)
                .with_description("Gain 1 Play.")
                .with_effect(Effect::grant_plays(1)),
        );

        // Echoes
        catalog.register(
            CardDefinition::new("data_leak", "Data Leak", CardType::Echo, 1)
                .with_description("Deal 3 damage to opponent.")
                .with_power(3)
                .with_effect(Effect::damage(3)),
        );
        catalog.register(
            CardDefinition::new("backup_protocol", "Backup Protocol", CardType::Echo, 1)
                .with_description("Gain 4 Defence.")
                .with_power(4)
                .with_effect(Effect::heal(4)),
        );
        catalog.register(
            CardDefinition::new("system_pulse", "System Pulse", CardType::Echo, 2)
                .with_description("Deal 4 damage and gain 2 Defence.")
                .with_power(4)
                .with_effect(Effect::composite([Effect::damage(4), Effect::heal(2)])),
        );
        catalog.register(
            CardDefinition::new("reboot_sequence", "Reboot Sequence", CardType::Echo, 2)
                .with_description("Draw 2 cards and gain 1 Play.")
                .with_effect(Effect::composite([Effect::draw(2), Effect::grant_plays(1)])),
        );

        // Recursors
        catalog.register(
            CardDefinition::new("momentum", "Momentum", CardType::Recursor, 2)
                .with_description("Deal 1 damage for every card in the timeline.")
                .with_effect(Effect::Damage {
                    amount: Amount::per_timeline_entry(1),
                }),
        );
        catalog.register(
            CardDefinition::new("knowledge_bank", "Knowledge Bank", CardType::Recursor, 2)
                .with_description("Gain 1 Defence for every card in the timeline.")
                .with_effect(Effect::Heal {
                    amount: Amount::per_timeline_entry(1),
                }),
        );
        catalog.register(
            CardDefinition::new("recursive_blast", "Recursive Blast", CardType::Recursor, 3)
                .with_description("Deal 2 damage for every card in the timeline.")
                .with_effect(Effect::Damage {
                    amount: Amount::per_timeline_entry(2),
                }),
        );
        catalog.register(
            CardDefinition::new("feedback_loop", "Feedback Loop", CardType::Recursor, 1)
                .with_description("Gain 1 Play if the timeline has more than 5 cards.")
                .with_effect(Effect::when_timeline_exceeds(5, Effect::grant_plays(1))),
        );

        for (legacy, current) in LEGACY_ALIASES {
            catalog.register_alias(legacy, current);
        }

        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_size() {
        let catalog = CardCatalog::standard();

        assert_eq!(catalog.len(), 19);
        assert_eq!(catalog.find_by_type(CardType::Echo).count(), 4);
        assert_eq!(catalog.find_by_type(CardType::Recursor).count(), 4);
    }

    #[test]
    fn test_default_deck_is_fully_known() {
        let catalog = CardCatalog::standard();

        assert!(DEFAULT_DECK_KEYS.iter().all(|key| catalog.contains(key)));
    }

    #[test]
    fn test_costs() {
        let catalog = CardCatalog::standard();
        let cost = |key: &str| catalog.get(key).map(|c| c.cost);

        assert_eq!(cost("quick_thinking"), Some(0));
        assert_eq!(cost("focus"), Some(0));
        assert_eq!(cost("execute"), Some(3));
        assert_eq!(cost("recursive_blast"), Some(3));
        assert_eq!(cost("feedback_loop"), Some(1));
    }

    #[test]
    fn test_legacy_overclock_resolves() {
        let catalog = CardCatalog::standard();

        assert_eq!(
            catalog.resolve("overclock").map(|c| c.key.as_str()),
            Some("overthink")
        );
    }
}
