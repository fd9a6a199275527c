//! Pile-count invariant under arbitrary play sequences.
//!
//! Cards never enter or leave a player's piles during a match, so
//! `|hand| + |deck| + |discard|` stays fixed whatever happens.

mod common;

use proptest::prelude::*;
use recursion_ccg::cards::{CardCatalog, DEFAULT_DECK_KEYS};
use recursion_ccg::core::{
    EngineConfig, GameRng, InstanceAllocator, MatchState, Player, PlayerId, PlayerPair,
};
use recursion_ccg::rules::TurnRules;
use recursion_ccg::zones::Piles;

#[derive(Clone, Debug)]
enum Step {
    /// Play the n-th card in the current player's hand, wrapping.
    Play(usize),
    EndTurn,
    Draw(usize),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => (0usize..10).prop_map(Step::Play),
        1 => Just(Step::EndTurn),
        1 => (0usize..6).prop_map(Step::Draw),
    ]
}

fn seat(seed: u64, deck_len: usize) -> MatchState {
    common::init_tracing();
    let catalog = CardCatalog::standard();
    let config = EngineConfig::default().with_shuffled_start(true);
    let mut ids = InstanceAllocator::new();
    let players = PlayerPair::new(|id| {
        let deck = catalog.build_deck(&DEFAULT_DECK_KEYS[..deck_len], &mut ids);
        Player::new(id, id.key(), config.starting_health, config.max_plays)
            .with_piles(Piles::from_deck(deck))
    });
    MatchState::new(players, GameRng::new(seed), ids, config)
}

fn totals(state: &MatchState) -> [usize; 2] {
    PlayerId::both().map(|id| state.player(id).piles.total())
}

proptest! {
    #[test]
    fn pile_totals_are_constant(
        seed in any::<u64>(),
        deck_len in 1usize..=50,
        steps in prop::collection::vec(step(), 0..120),
    ) {
        let mut state = seat(seed, deck_len);
        let expected = [deck_len, deck_len];
        prop_assert_eq!(totals(&state), expected);

        for step in steps {
            let player = state.current();
            match step {
                Step::Play(n) => {
                    let hand = state.player(player).piles.hand();
                    if !hand.is_empty() {
                        let card = hand[n % hand.len()].id;
                        let _ = TurnRules::play_card(&mut state, player, card);
                    }
                }
                Step::EndTurn => {
                    let _ = TurnRules::end_turn(&mut state);
                }
                Step::Draw(count) => {
                    state.draw_cards(player, count);
                }
            }

            prop_assert_eq!(totals(&state), expected);
            for id in PlayerId::both() {
                prop_assert!(state.player(id).piles.hand().len() <= deck_len);
            }
        }
    }

    #[test]
    fn hand_refills_to_target_or_supply(seed in any::<u64>(), deck_len in 1usize..=50) {
        let state = seat(seed, deck_len);

        for id in PlayerId::both() {
            prop_assert_eq!(state.player(id).piles.hand().len(), deck_len.min(10));
        }
    }
}
