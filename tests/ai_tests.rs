//! AI controller tests, directly and through the engine.

mod common;

use std::time::Duration;

use recursion_ccg::ai::{AiController, AiPolicy, NoDelay, Pacer, RandomPolicy};
use recursion_ccg::cards::{CardCatalog, CardKey, DEFAULT_DECK_KEYS};
use recursion_ccg::core::{
    Action, EngineConfig, GameRng, InstanceAllocator, MatchState, Player, PlayerId, PlayerPair,
};
use recursion_ccg::engine::Engine;
use recursion_ccg::rules::{InvalidAction, TurnRules};
use recursion_ccg::zones::Piles;

/// Pacer that records requested pauses into a shared log.
#[derive(Clone, Default)]
struct LogPacer(std::sync::Arc<std::sync::Mutex<Vec<Duration>>>);

impl Pacer for LogPacer {
    fn pause(&mut self, duration: Duration) {
        self.0.lock().unwrap().push(duration);
    }
}

/// Policy that always picks a card the AI does not hold.
struct Confused;

impl AiPolicy for Confused {
    fn choose(&self, _state: &MatchState, _player: PlayerId, _rng: &mut GameRng) -> Action {
        Action::PlayCard(recursion_ccg::core::InstanceId(9_999))
    }
}

/// P2 is AI with `ai_keys`; it is P2's turn.
fn ai_to_move(ai_keys: &[&str]) -> MatchState {
    common::init_tracing();
    let catalog = CardCatalog::standard();
    let mut ids = InstanceAllocator::new();
    let players = PlayerPair::new(|id| {
        if id == PlayerId::P1 {
            let deck = catalog.build_deck(&DEFAULT_DECK_KEYS, &mut ids);
            Player::new(id, "Player 1", 20, 3).with_piles(Piles::from_deck(deck))
        } else {
            let deck = catalog.build_deck(ai_keys, &mut ids);
            Player::new(id, "Security Drone", 20, 3)
                .ai()
                .with_piles(Piles::from_deck(deck))
        }
    });
    let mut state = MatchState::new(players, GameRng::new(3), ids, EngineConfig::default());
    TurnRules::end_turn(&mut state).unwrap();
    state
}

fn controller() -> AiController {
    common::init_tracing();
    AiController::new(&EngineConfig::default(), GameRng::new(4)).with_pacer(NoDelay)
}

/// Test the fallback: nothing affordable, so the AI only ends its turn.
#[test]
fn test_ai_fallback_ends_turn() {
    let mut state = ai_to_move(&["execute", "barrier", "recursive_blast"]);
    state.modify_player(PlayerId::P2, |p| p.plays = 2);

    let report = controller().run_turn(&mut state);

    assert!(report.cards_played.is_empty());
    assert!(report.turn_change.is_some());
    assert!(state.timeline().is_empty());
    assert_eq!(state.current(), PlayerId::P1);
}

/// Test that the AI plays the first affordable card in hand order.
#[test]
fn test_ai_plays_in_hand_order() {
    let mut state = ai_to_move(&["execute", "strike", "defend", "strike"]);
    state.modify_player(PlayerId::P2, |p| p.plays = 2);

    let report = controller().run_turn(&mut state);

    let played: Vec<&str> = report.cards_played.iter().map(CardKey::as_str).collect();
    assert_eq!(played, vec!["strike", "defend"]);
    assert_eq!(state.player(PlayerId::P1).health, 18);
}

/// Test the pacing sequence: think once, then a pause after each play.
#[test]
fn test_ai_pacing() {
    let log = LogPacer::default();
    let mut ai = AiController::new(&EngineConfig::default(), GameRng::new(4)).with_pacer(log.clone());
    let mut state = ai_to_move(&["strike"; 20]);

    ai.run_turn(&mut state);

    let pauses = log.0.lock().unwrap().clone();
    assert_eq!(
        pauses,
        vec![
            Duration::from_millis(1000),
            Duration::from_millis(800),
            Duration::from_millis(800),
            Duration::from_millis(800),
        ]
    );
}

/// Test that a rejected policy choice ends the AI turn.
#[test]
fn test_rejected_choice_ends_turn() {
    let mut state = ai_to_move(&["strike"; 20]);
    let mut ai = controller().with_policy(Confused);

    let report = ai.run_turn(&mut state);

    assert!(matches!(report.rejected, Some(InvalidAction::CardNotInHand { .. })));
    assert!(report.turn_change.is_some());
    assert_eq!(state.current(), PlayerId::P1);
}

/// Test that the AI stops as soon as it wins.
#[test]
fn test_ai_stops_on_win() {
    let mut state = ai_to_move(&["strike"; 20]);
    state.damage(PlayerId::P1, 18);

    let report = controller().run_turn(&mut state);

    assert_eq!(report.cards_played.len(), 1);
    assert_eq!(report.decided.map(|o| o.winner), Some(PlayerId::P2));
    assert!(report.turn_change.is_none());
    assert_eq!(state.winner(), Some(PlayerId::P2));
}

/// Test that a random policy only picks legal actions.
#[test]
fn test_random_policy_completes_turns() {
    let mut state = ai_to_move(&DEFAULT_DECK_KEYS);
    let mut ai = controller().with_policy(RandomPolicy);

    let report = ai.run_turn(&mut state);

    assert!(report.rejected.is_none());
    assert!(report.turn_change.is_some() || report.decided.is_some());
}

/// Test a whole match driven through the engine until someone wins.
#[test]
fn test_engine_match_reaches_a_winner() {
    let config = EngineConfig::default().with_seed(21).with_shuffled_start(true);
    let ai = AiController::new(&config, GameRng::new(8)).with_pacer(NoDelay);
    let mut engine = Engine::new(config).with_ai(ai);
    engine.start_game(None);

    for _ in 0..1_000 {
        let state = engine.match_state().unwrap();
        if state.is_over() {
            break;
        }
        let affordable = TurnRules::legal_actions(state, PlayerId::P1)
            .into_iter()
            .find_map(|a| a.card());
        match affordable {
            Some(card) => {
                engine.play_card(card, PlayerId::P1).unwrap();
            }
            None => {
                let report = engine.end_turn().unwrap();
                assert!(!report.ai_turns.is_empty());
            }
        }
    }

    let state = engine.match_state().unwrap();
    assert!(state.is_over());
    assert!(state.timeline().len() > 0);
}
