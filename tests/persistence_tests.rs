//! Save snapshot and save-slot tests against both stores.

mod common;

use recursion_ccg::ai::{AiController, NoDelay};
use recursion_ccg::cards::CardKey;
use recursion_ccg::core::{EngineConfig, GameRng, PlayerId};
use recursion_ccg::engine::{Engine, Screen};
use recursion_ccg::persistence::{
    FileStore, KeyValueStore, MemoryStore, PersistenceError, SaveData, SaveSlotManager,
    ACTIVE_SLOT_KEY, SAVE_SLOTS_KEY,
};

fn engine() -> Engine {
    common::init_tracing();
    let config = EngineConfig::default();
    let ai = AiController::new(&config, GameRng::new(6)).with_pacer(NoDelay);
    Engine::new(config).with_ai(ai)
}

/// Test that a fourth distinct slot is refused.
#[test]
fn test_slots_full() {
    let engine = engine();
    let slots = SaveSlotManager::from_config(MemoryStore::new(), engine.config());

    for id in ["slot-1", "slot-2", "slot-3"] {
        engine.save_to_slot(&slots, id, id).unwrap();
    }
    let err = engine.save_to_slot(&slots, "slot-4", "Fourth").unwrap_err();

    assert!(matches!(err, PersistenceError::SlotsFull { max: 3 }));
    assert_eq!(slots.all_slots().unwrap().len(), 3);
    assert_eq!(slots.active_slot_id().unwrap().as_deref(), Some("slot-3"));
}

/// Test that unknown keys in a save are kept but never dealt.
#[test]
fn test_unknown_keys_skipped() {
    let json = r#"{
        "collection": ["strike", "lost_card"],
        "runStage": 1,
        "deckBuilder": { "selectedCardKeys": ["strike", "lost_card", "defend"], "maxDeckSize": 50 },
        "playerStats": { "level": 1, "xp": 0, "health": 20, "maxHealth": 20 }
    }"#;
    let mut engine = engine();

    engine.load_snapshot(SaveData::from_json(json).unwrap());
    assert!(engine
        .run()
        .collection
        .contains(&CardKey::from("lost_card")));

    let state = engine.continue_run();
    let human = state.player(PlayerId::P1);
    assert_eq!(human.piles.total(), 2);
    assert!(human.piles.hand().iter().all(|c| c.key().as_str() != "lost_card"));
}

/// Test that the renamed card key loads as its current name.
#[test]
fn test_legacy_key_loads() {
    let json = r#"{
        "collection": ["overclock"],
        "runStage": 0,
        "deckBuilder": { "selectedCardKeys": ["overclock"], "maxDeckSize": 50 },
        "playerStats": { "level": 1, "xp": 0, "health": 20, "maxHealth": 20 }
    }"#;
    let mut engine = engine();

    engine.load_snapshot(SaveData::from_json(json).unwrap());

    assert_eq!(engine.run().collection, vec![CardKey::from("overthink")]);
    assert_eq!(engine.run().run_stage, 1);
    let state = engine.continue_run();
    assert_eq!(state.player(PlayerId::P1).piles.hand()[0].key().as_str(), "overthink");
}

/// Test the menu view built from a save without starting a match.
#[test]
fn test_menu_view_from_snapshot() {
    let mut engine = engine();
    let mut data = engine.snapshot();
    data.run_stage = 3;
    data.player_stats.level = 4;

    engine.load_snapshot(data);
    let view = engine.public_state();

    assert!(engine.match_state().is_none());
    assert_eq!(view.run_stage, 3);
    assert_eq!(view.players[PlayerId::P1].level, 4);
    assert_eq!(view.players[PlayerId::P2].name, "The Architect");
    assert_eq!(view.players[PlayerId::P2].health, 30);
}

/// Test a full save cycle on disk.
#[test]
fn test_file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = engine();
    {
        let store = FileStore::new(dir.path()).unwrap();
        let slots = SaveSlotManager::from_config(store, engine.config());
        let created = engine.new_game(&slots, "Disk Run").unwrap();
        assert_eq!(engine.screen(), Screen::DeckBuilder);

        engine.add_to_deck("strike");
        engine.next_stage();
        engine.save_active(&slots).unwrap();
        assert_eq!(slots.active_slot_id().unwrap(), Some(created.id));
    }

    let store = FileStore::new(dir.path()).unwrap();
    assert!(store.get(SAVE_SLOTS_KEY).unwrap().is_some());
    assert!(store.get(ACTIVE_SLOT_KEY).unwrap().is_some());

    let slots = SaveSlotManager::from_config(store, engine.config());
    let active = slots.active_slot_id().unwrap().unwrap();
    let mut restored = self::engine();
    assert!(restored.load_slot(&slots, &active).unwrap());

    assert_eq!(restored.run().run_stage, 2);
    assert_eq!(restored.snapshot(), engine.snapshot());
}

/// Test that deleting the active slot can clear the active marker.
#[test]
fn test_delete_active_slot() {
    let engine = engine();
    let slots = SaveSlotManager::from_config(MemoryStore::new(), engine.config());
    engine.save_to_slot(&slots, "slot-1", "Only").unwrap();

    slots.delete_slot("slot-1").unwrap();
    slots.set_active_slot_id(None).unwrap();

    assert!(slots.all_slots().unwrap().is_empty());
    assert_eq!(engine.save_active(&slots).unwrap(), None);
}
