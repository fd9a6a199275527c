//! The engine facade.
//!
//! `Engine` owns everything presentation code talks to: the card catalog,
//! configuration, the meta-run, the current match and the AI. Every
//! transition goes through `&mut self`, so no caller ever observes a
//! half-applied play.

use super::screen::Screen;
use crate::ai::{AiController, AiTurnReport};
use crate::cards::{CardCatalog, CardKey, DEFAULT_DECK_KEYS};
use crate::core::{
    CheckpointError, EngineConfig, GameRng, InstanceAllocator, InstanceId, MatchState, Player,
    PlayerId, PlayerPair, PlayerView, PublicState,
};
use crate::persistence::{self, KeyValueStore, SaveData, SaveSlot, SaveSlotManager};
use crate::progression::{Enemy, RunState};
use crate::rules::{InvalidAction, PlayOutcome, TurnChange, TurnRules};
use crate::timeline::Timeline;
use crate::zones::Piles;

/// Result of a human `end_turn`, including any AI turns that followed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndTurnReport {
    pub change: TurnChange,
    /// AI turns run before control came back, in order.
    pub ai_turns: Vec<AiTurnReport>,
}

/// Single entry point for a game session.
#[derive(Debug)]
pub struct Engine {
    catalog: CardCatalog,
    config: EngineConfig,
    run: RunState,
    current: Option<MatchState>,
    screen: Screen,
    rng: GameRng,
    ai: AiController,
}

impl Engine {
    /// Standard catalog, greedy real-time AI, RNG seeded from `config`.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let mut rng = GameRng::new(config.seed);
        let ai = AiController::new(&config, rng.fork());

        Self {
            catalog: CardCatalog::standard(),
            run: RunState::new(&config),
            current: None,
            screen: Screen::Menu,
            rng,
            ai,
            config,
        }
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: CardCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    #[must_use]
    pub fn with_ai(mut self, ai: AiController) -> Self {
        self.ai = ai;
        self
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn run(&self) -> &RunState {
        &self.run
    }

    /// The match in progress, if any.
    #[must_use]
    pub fn match_state(&self) -> Option<&MatchState> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn set_screen(&mut self, screen: Screen) {
        tracing::debug!(from = %self.screen, to = %screen, "screen changed");
        self.screen = screen;
    }

    /// Opponent for the current run stage.
    #[must_use]
    pub fn enemy(&self) -> &'static Enemy {
        self.run.enemy()
    }

    // === Match Lifecycle ===

    /// Start a match, replacing any match in progress.
    ///
    /// The human plays `deck_keys`, or the standard list when `None` or
    /// empty. The opponent always plays the standard list. Unknown keys are
    /// skipped.
    pub fn start_game(&mut self, deck_keys: Option<&[CardKey]>) -> &MatchState {
        let keys: Vec<CardKey> = match deck_keys {
            Some(keys) if !keys.is_empty() => keys.to_vec(),
            _ => DEFAULT_DECK_KEYS.iter().map(|&k| CardKey::from(k)).collect(),
        };

        let mut ids = InstanceAllocator::new();
        let human_deck = self.catalog.build_deck(&keys, &mut ids);
        let opponent_deck = self.catalog.build_deck(&DEFAULT_DECK_KEYS, &mut ids);

        let players = PlayerPair::from_parts(
            self.run
                .human_player(&self.config)
                .with_piles(Piles::from_deck(human_deck)),
            self.run
                .opponent_player(&self.config)
                .with_piles(Piles::from_deck(opponent_deck)),
        );

        let state = MatchState::new(players, self.rng.fork(), ids, self.config.clone());
        tracing::info!(stage = self.run.run_stage, deck = keys.len(), "game started");

        self.run.last_xp_gain = 0;
        self.screen = Screen::Game;
        self.current.insert(state)
    }

    /// Start a match with the run's deck selection.
    pub fn continue_run(&mut self) -> &MatchState {
        let keys = self.run.deck_keys();
        self.start_game(Some(&keys))
    }

    /// Drop the current match and go back to the menu.
    pub fn reset_game(&mut self) {
        if self.current.take().is_some() {
            tracing::info!("game reset");
        }
        self.screen = Screen::Menu;
    }

    /// Leave a decided match.
    ///
    /// A human win moves to the loot screen with a fresh offer; any other
    /// result resets to the menu. Returns `None` while no decided match
    /// exists.
    pub fn finish_match(&mut self) -> Option<Screen> {
        let winner = self.current.as_ref()?.winner()?;
        let human_won = !self.current.as_ref()?.player(winner).is_ai;

        if human_won {
            self.current = None;
            self.generate_loot();
            self.screen = Screen::Loot;
        } else {
            self.reset_game();
        }
        Some(self.screen)
    }

    // === Player Operations ===

    /// Play a card on behalf of `player`.
    pub fn play_card(
        &mut self,
        card_id: InstanceId,
        player: PlayerId,
    ) -> Result<PlayOutcome, InvalidAction> {
        let state = self.current.as_mut().ok_or_else(no_active_match)?;
        let outcome = TurnRules::play_card(state, player, card_id)?;
        self.sync_run();
        Ok(outcome)
    }

    /// End the current turn, then run AI turns until a human is to act or
    /// the match is decided.
    pub fn end_turn(&mut self) -> Result<EndTurnReport, InvalidAction> {
        let state = self.current.as_mut().ok_or_else(no_active_match)?;
        let change = TurnRules::end_turn(state)?;
        let ai_turns = drive_ai(&mut self.ai, state);
        self.sync_run();
        Ok(EndTurnReport { change, ai_turns })
    }

    /// Copy the human's live stats and any win award into the run.
    fn sync_run(&mut self) {
        let Some(state) = &self.current else {
            return;
        };
        self.run.sync_player(state.player(PlayerId::P1));
        if let Some(outcome) = state.outcome() {
            self.run.record_xp_gain(outcome.level_up);
        }
    }

    // === Projection ===

    /// Read-only view of the match, or of the menu players when no match is
    /// in progress.
    #[must_use]
    pub fn public_state(&self) -> PublicState {
        match &self.current {
            Some(state) => state.public_state(self.run.run_stage),
            None => PublicState {
                players: self.menu_players().map(|_, p| PlayerView::from(p)),
                timeline: Timeline::new(),
                current: PlayerId::P1,
                turn: 1,
                winner: None,
                run_stage: self.run.run_stage,
            },
        }
    }

    /// Players built from run progress alone, with empty piles.
    #[must_use]
    pub fn menu_players(&self) -> PlayerPair<Player> {
        self.snapshot().menu_players(&self.config)
    }

    // === Run Operations ===

    pub fn add_to_deck(&mut self, key: impl Into<CardKey>) -> bool {
        self.run.add_to_deck(key)
    }

    pub fn remove_from_deck(&mut self, index: usize) -> Option<CardKey> {
        self.run.remove_from_deck(index)
    }

    /// Offer a fresh set of loot keys.
    pub fn generate_loot(&mut self) -> &[CardKey] {
        let count = self.config.loot_choices;
        self.run.generate_loot(&self.catalog, &mut self.rng, count)
    }

    pub fn claim_loot(&mut self, key: impl Into<CardKey>) {
        self.run.claim_loot(key);
    }

    pub fn next_stage(&mut self) {
        self.run.next_stage();
    }

    /// Claim a loot card, advance the stage and open the deck builder.
    pub fn take_loot(&mut self, key: impl Into<CardKey>) {
        self.claim_loot(key);
        self.next_stage();
        self.open_deck_builder();
    }

    pub fn open_deck_builder(&mut self) {
        self.set_screen(Screen::DeckBuilder);
    }

    /// Wipe run progress and any match in progress.
    pub fn reset_progress(&mut self) {
        self.current = None;
        self.run.reset_progress(&self.config);
        self.screen = Screen::Menu;
    }

    // === Saves ===

    /// Persistable snapshot of the run.
    #[must_use]
    pub fn snapshot(&self) -> SaveData {
        SaveData::from_run(&self.run)
    }

    /// Replace run progress with a snapshot. Any match is dropped.
    pub fn load_snapshot(&mut self, data: SaveData) {
        self.current = None;
        self.run = data.into_run(&self.config, &self.catalog);
        self.screen = Screen::Menu;
        tracing::info!(stage = self.run.run_stage, "run loaded");
    }

    /// Save the run under `id` and make it the active slot.
    pub fn save_to_slot<S: KeyValueStore>(
        &self,
        slots: &SaveSlotManager<S>,
        id: &str,
        name: &str,
    ) -> persistence::Result<SaveSlot> {
        let slot = slots.save_to_slot(id, name, self.snapshot())?;
        slots.set_active_slot_id(Some(id))?;
        Ok(slot)
    }

    /// Save over the active slot, keeping its name.
    ///
    /// Returns `Ok(None)` when there is no active slot or it no longer
    /// exists.
    pub fn save_active<S: KeyValueStore>(
        &self,
        slots: &SaveSlotManager<S>,
    ) -> persistence::Result<Option<SaveSlot>> {
        let Some(id) = slots.active_slot_id()? else {
            return Ok(None);
        };
        let Some(existing) = slots.slot(&id)? else {
            return Ok(None);
        };
        slots.save_to_slot(&id, &existing.name, self.snapshot()).map(Some)
    }

    /// Reset progress, save it to a new active slot and open the deck
    /// builder.
    pub fn new_game<S: KeyValueStore>(
        &mut self,
        slots: &SaveSlotManager<S>,
        name: &str,
    ) -> persistence::Result<SaveSlot> {
        self.reset_progress();
        let id = slots.create_slot_id();
        let slot = self.save_to_slot(slots, &id, name)?;
        self.open_deck_builder();
        Ok(slot)
    }

    /// Load a slot, make it active and open the deck builder.
    ///
    /// Returns `Ok(false)` if the slot does not exist.
    pub fn load_slot<S: KeyValueStore>(
        &mut self,
        slots: &SaveSlotManager<S>,
        id: &str,
    ) -> persistence::Result<bool> {
        let Some(slot) = slots.slot(id)? else {
            return Ok(false);
        };
        self.load_snapshot(slot.data);
        slots.set_active_slot_id(Some(id))?;
        self.open_deck_builder();
        Ok(true)
    }

    // === Checkpoints ===

    /// Binary checkpoint of the match in progress.
    pub fn checkpoint(&self) -> Result<Vec<u8>, CheckpointError> {
        self.current
            .as_ref()
            .ok_or(CheckpointError::NoActiveMatch)?
            .checkpoint()
    }

    /// Resume a checkpointed match. If the AI is to act, its turns run
    /// before this returns.
    pub fn restore(&mut self, bytes: &[u8]) -> Result<Vec<AiTurnReport>, CheckpointError> {
        let state = self.current.insert(MatchState::restore(bytes)?);
        let ai_turns = drive_ai(&mut self.ai, state);
        self.screen = Screen::Game;
        self.sync_run();
        Ok(ai_turns)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

fn no_active_match() -> InvalidAction {
    tracing::warn!("action rejected: no match in progress");
    InvalidAction::NoActiveMatch
}

/// Run AI turns while an AI player is to act.
fn drive_ai(ai: &mut AiController, state: &mut MatchState) -> Vec<AiTurnReport> {
    let mut turns = Vec::new();
    while !state.is_over() && state.player(state.current()).is_ai {
        let report = ai.run_turn(state);
        let progressed = report.turn_change.is_some() || report.decided.is_some();
        turns.push(report);
        if !progressed {
            break;
        }
    }
    turns
}
