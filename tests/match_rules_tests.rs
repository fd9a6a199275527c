//! Turn and play rules, exercised through `MatchState` and `TurnRules`.

mod common;

use recursion_ccg::cards::{CardCatalog, DEFAULT_DECK_KEYS};
use recursion_ccg::core::{
    EngineConfig, GameRng, InstanceAllocator, InstanceId, MatchState, Player, PlayerId, PlayerPair,
};
use recursion_ccg::rules::{InvalidAction, Phase, TurnRules};
use recursion_ccg::zones::Piles;

/// Two human players with the given decks.
fn seat(p1_keys: &[&str], p2_keys: &[&str]) -> MatchState {
    common::init_tracing();
    let catalog = CardCatalog::standard();
    let config = EngineConfig::default();
    let mut ids = InstanceAllocator::new();
    let players = PlayerPair::new(|id| {
        let keys = if id == PlayerId::P1 { p1_keys } else { p2_keys };
        let deck = catalog.build_deck(keys, &mut ids);
        Player::new(id, id.key(), config.starting_health, config.max_plays)
            .with_piles(Piles::from_deck(deck))
    });
    MatchState::new(players, GameRng::new(42), ids, config)
}

fn standard_match() -> MatchState {
    seat(&DEFAULT_DECK_KEYS, &DEFAULT_DECK_KEYS)
}

fn hand_card(state: &MatchState, player: PlayerId, key: &str) -> InstanceId {
    state
        .player(player)
        .piles
        .hand()
        .iter()
        .find(|c| c.key().as_str() == key)
        .map(|c| c.id)
        .expect("card should be in hand")
}

/// Test the strike example: cost 1, 2 damage.
#[test]
fn test_strike_example() {
    let mut state = standard_match();
    let strike = hand_card(&state, PlayerId::P1, "strike");

    let outcome = TurnRules::play_card(&mut state, PlayerId::P1, strike).unwrap();

    assert_eq!(outcome.report.damage_dealt(), 2);
    assert_eq!(state.player(PlayerId::P2).health, 18);
    assert_eq!(state.player(PlayerId::P1).plays, 2);
    assert_eq!(state.timeline().len(), 1);
    assert!(state.player(PlayerId::P1).piles.find_in_hand(strike).is_none());
    assert!(outcome.decided.is_none());
}

/// Test the postconditions of every successful play.
#[test]
fn test_play_postconditions() {
    let mut state = standard_match();
    let total = state.player(PlayerId::P1).piles.total();

    for _ in 0..3 {
        let player = state.player(PlayerId::P1);
        let plays = player.plays;
        let Some(card) = player.piles.hand().iter().find(|c| c.cost() <= plays).cloned() else {
            break;
        };

        TurnRules::play_card(&mut state, PlayerId::P1, card.id).unwrap();

        let player = state.player(PlayerId::P1);
        assert_eq!(player.plays, plays - card.cost());
        assert!(player.piles.find_in_hand(card.id).is_none());
        assert!(player.piles.hand().len() <= 10);
        assert_eq!(player.piles.total(), total);
    }
}

/// Test that rejected actions leave the state untouched.
#[test]
fn test_rejections_leave_state_unchanged() {
    let mut state = seat(&["execute"; 12], &DEFAULT_DECK_KEYS);
    state.modify_player(PlayerId::P1, |p| p.plays = 2);
    let execute = hand_card(&state, PlayerId::P1, "execute");
    let before = state.public_state(1);

    assert_eq!(
        TurnRules::play_card(&mut state, PlayerId::P1, execute).unwrap_err(),
        InvalidAction::InsufficientPlays { cost: 3, plays: 2 }
    );

    let p2_card = state.player(PlayerId::P2).piles.hand()[0].id;
    assert_eq!(
        TurnRules::play_card(&mut state, PlayerId::P2, p2_card).unwrap_err(),
        InvalidAction::NotYourTurn {
            player: PlayerId::P2
        }
    );

    assert_eq!(
        TurnRules::play_card(&mut state, PlayerId::P1, p2_card).unwrap_err(),
        InvalidAction::CardNotInHand {
            player: PlayerId::P1,
            card: p2_card
        }
    );

    assert_eq!(state.public_state(1), before);
}

/// Test that the timeline grows by exactly one per successful play.
#[test]
fn test_timeline_counts_successful_plays() {
    let mut state = standard_match();
    let mut successes = 0;

    for _ in 0..4 {
        for player in PlayerId::both() {
            let hand: Vec<InstanceId> = state.player(player).piles.hand().iter().map(|c| c.id).collect();
            for card in hand {
                if TurnRules::play_card(&mut state, player, card).is_ok() {
                    successes += 1;
                }
            }
            if state.is_over() {
                break;
            }
            TurnRules::end_turn(&mut state).unwrap();
        }
        if state.is_over() {
            break;
        }
    }

    assert!(successes > 0);
    assert_eq!(state.timeline().len(), successes);
}

/// Test the turn counter sequence.
#[test]
fn test_turn_counter() {
    let mut state = standard_match();
    assert_eq!((state.turn(), state.current()), (1, PlayerId::P1));

    TurnRules::end_turn(&mut state).unwrap();
    assert_eq!((state.turn(), state.current()), (1, PlayerId::P2));

    TurnRules::end_turn(&mut state).unwrap();
    assert_eq!((state.turn(), state.current()), (2, PlayerId::P1));
}

/// Test that the incoming player's plays reset and hand refills.
#[test]
fn test_end_turn_resets_incoming_player() {
    let mut state = standard_match();
    let strike = hand_card(&state, PlayerId::P1, "strike");
    TurnRules::play_card(&mut state, PlayerId::P1, strike).unwrap();
    TurnRules::end_turn(&mut state).unwrap();

    state.modify_player(PlayerId::P2, |p| p.plays = 0);
    TurnRules::end_turn(&mut state).unwrap();

    let p1 = state.player(PlayerId::P1);
    assert_eq!(p1.plays, p1.max_plays);
    assert_eq!(p1.piles.hand().len(), 10);
}

/// Test that the winner is decided once and never changes.
#[test]
fn test_single_win() {
    let mut state = standard_match();

    let decided = state.damage(PlayerId::P2, 25).unwrap();
    assert_eq!(decided.winner, PlayerId::P1);
    let xp = state.player(PlayerId::P1).xp;

    assert!(state.damage(PlayerId::P2, 5).is_none());
    assert!(state.damage(PlayerId::P1, 50).is_none());
    state.heal(PlayerId::P2, 40);

    assert_eq!(state.winner(), Some(PlayerId::P1));
    assert_eq!(state.player(PlayerId::P1).xp, xp);
    assert_eq!(TurnRules::phase(&state), Phase::GameOver { winner: PlayerId::P1 });
    assert_eq!(TurnRules::end_turn(&mut state).unwrap_err(), InvalidAction::MatchOver);
}

/// Test that a lethal play reports the outcome and ends the match.
#[test]
fn test_lethal_play_decides_match() {
    let mut state = seat(&["execute"; 12], &DEFAULT_DECK_KEYS);
    state.damage(PlayerId::P2, 15);
    let execute = hand_card(&state, PlayerId::P1, "execute");

    let outcome = TurnRules::play_card(&mut state, PlayerId::P1, execute).unwrap();

    assert_eq!(outcome.decided.map(|o| o.winner), Some(PlayerId::P1));
    assert!(state.is_over());
    assert!(TurnRules::legal_actions(&state, PlayerId::P1).is_empty());
}
