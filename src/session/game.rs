//! The game session aggregate.
//!
//! `GameSession` owns the board, the seated players and their hands, the
//! deck, the active turn and its undo stack. Every mutating operation either
//! completes fully or returns an error with the session untouched.
//!
//! ## Turn flow
//!
//! 1. `place` cards one at a time (each checked against the line rules and
//!    the turn's single-line constraint), optionally `undo`ing them
//! 2. `finish_turn` refills the hand if anything was placed and passes play
//!    to the next seat
//!
//! Alternatively `swap_cards` exchanges cards with the deck and ends the turn.
//!
//! ## Networked mode
//!
//! A session built with `from_snapshot` has a local player. Operations by the
//! local player outside their turn are rejected with `NotYourTurn`. In
//! hot-seat mode the acting player is always the active one.
//!
//! A networked session only knows the size of the draw pile. Refills and
//! exchanges there move counts, never cards: dealt cards become concealed
//! until the next snapshot shows them.

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use crate::board::{Board, Coordinate};
use crate::cards::{Card, Deck, DeckFactory, StandardDeckFactory};
use crate::core::{
    Action, ActionError, ActionRecord, ConfigError, GameConfig, PlacementError, Player, PlayerId,
    UndoError,
};
use crate::rules::{blocked_cells, filtered_candidates, is_legal_placement, unfiltered_candidates};
use crate::turn::{Placement, Turn, UndoEntry, UndoStack};

/// Result of an exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapOutcome {
    /// Cards sent to the deck (and, deck permitting, replaced).
    pub swapped: usize,
}

/// The draw pile as this session knows it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeckView {
    /// Every remaining card in draw order.
    Local(Deck),
    /// Only the pile size, as reported by the server.
    Remote { remaining: usize },
}

impl DeckView {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            DeckView::Local(deck) => deck.len(),
            DeckView::Remote { remaining } => *remaining,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The cards themselves, when known.
    #[must_use]
    pub fn cards(&self) -> Option<&Deck> {
        match self {
            DeckView::Local(deck) => Some(deck),
            DeckView::Remote { .. } => None,
        }
    }
}

/// A single game in progress.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub(crate) config: GameConfig,
    pub(crate) board: Board,
    pub(crate) players: Vec<Player>,
    /// Seat index of the active player.
    pub(crate) active: usize,
    /// The player this session acts for in networked mode.
    pub(crate) local_player: Option<PlayerId>,
    pub(crate) deck: DeckView,
    pub(crate) turn: Turn,
    pub(crate) undo: UndoStack,
    pub(crate) turn_number: u32,
    pub(crate) sequence: u32,
    pub(crate) history: Vector<ActionRecord>,
}

impl GameSession {
    /// Start a hot-seat game with the standard shuffled 64-card deck.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let mut factory = StandardDeckFactory::new(config.seed);
        Self::with_factory(config, &mut factory)
    }

    /// Start a hot-seat game with cards from `factory`.
    ///
    /// Hands are dealt in seat order from the front of the deck. If the
    /// config asks for it, the next card then goes to the origin.
    pub fn with_factory(
        config: GameConfig,
        factory: &mut impl DeckFactory,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut deck = factory.build();
        let mut players: Vec<Player> = config
            .players
            .iter()
            .map(|seat| Player::new(seat.id, seat.nickname.clone()))
            .collect();

        for player in &mut players {
            for card in deck.draw_up_to(config.hand_size) {
                player.add_card(card);
            }
        }

        let mut board = Board::new();
        if config.seed_origin {
            if let Some(card) = deck.draw() {
                let seeded = board.place(card, Coordinate::ORIGIN);
                debug_assert!(seeded.is_ok(), "a fresh board has a free origin");
            }
        }

        let first = players[0].id;
        info!(
            players = players.len(),
            hand_size = config.hand_size,
            deck = deck.len(),
            seed = config.seed,
            "game session started"
        );

        Ok(Self {
            config,
            board,
            players,
            active: 0,
            local_player: None,
            deck: DeckView::Local(deck),
            turn: Turn::new(first),
            undo: UndoStack::new(),
            turn_number: 1,
            sequence: 0,
            history: Vector::new(),
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.players[self.active].id
    }

    /// The networked-mode viewer, if any.
    #[must_use]
    pub fn local_player(&self) -> Option<PlayerId> {
        self.local_player
    }

    /// The player whose hand the presentation layer shows and acts with.
    #[must_use]
    pub fn acting_player(&self) -> PlayerId {
        self.local_player.unwrap_or_else(|| self.active_player())
    }

    /// A player's visible hand.
    #[must_use]
    pub fn hand(&self, id: PlayerId) -> Option<&[Card]> {
        self.player(id).map(Player::hand)
    }

    /// Remaining cards in draw order. `None` in networked mode.
    #[must_use]
    pub fn deck(&self) -> Option<&Deck> {
        self.deck.cards()
    }

    #[must_use]
    pub fn deck_view(&self) -> &DeckView {
        &self.deck
    }

    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn turn(&self) -> &Turn {
        &self.turn
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Accepted actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    fn is_local_turn(&self) -> bool {
        self.local_player
            .map_or(true, |local| local == self.active_player())
    }

    // === Operations ===

    /// Play the card at `card_index` of the active hand onto `(x, y)`.
    pub fn place(&mut self, card_index: usize, x: i32, y: i32) -> Result<(), PlacementError> {
        if !self.is_local_turn() {
            return Err(PlacementError::NotYourTurn);
        }

        let pos = Coordinate::new(x, y);
        let player = &self.players[self.active];
        let card = player
            .card(card_index)
            .ok_or(PlacementError::InvalidHandIndex {
                index: card_index,
                hand_len: player.hand_len(),
            })?;

        is_legal_placement(card, pos, &self.board, self.board.is_empty())?;
        if !self.turn.is_valid_placement(pos, &self.board) {
            return Err(PlacementError::TurnLineViolation { x, y });
        }

        self.board.place(card, pos)?;
        self.players[self.active].remove_card(card_index);
        self.turn.record(Placement { card, at: pos });
        self.undo.push(UndoEntry {
            card,
            at: pos,
            hand_index: card_index,
        });

        debug!(
            player = self.active_player().raw(),
            card = %card,
            x,
            y,
            placed_this_turn = self.turn.len(),
            "card placed"
        );
        self.record(Action::place(card_index, x, y));
        Ok(())
    }

    /// Take back the most recent placement of this turn.
    pub fn undo(&mut self) -> Result<(), UndoError> {
        if !self.is_local_turn() {
            return Err(UndoError::NotYourTurn);
        }
        let entry = self.undo.pop().ok_or(UndoError::NothingToUndo)?;

        self.board.remove(entry.at);
        self.players[self.active].insert_card(entry.hand_index, entry.card);
        self.turn.pop();

        debug!(
            player = self.active_player().raw(),
            card = %entry.card,
            x = entry.at.x,
            y = entry.at.y,
            "placement undone"
        );
        self.record(Action::Undo);
        Ok(())
    }

    /// End the turn.
    ///
    /// If anything was placed the hand is refilled from the deck up to the
    /// configured hand size (fewer if the deck runs out); an empty turn is a
    /// pass. Either way play moves to the next seat. Does nothing outside the
    /// local player's turn.
    pub fn finish_turn(&mut self) {
        if !self.is_local_turn() {
            warn!(
                local = self.acting_player().raw(),
                active = self.active_player().raw(),
                "finish_turn outside local turn ignored"
            );
            return;
        }

        if self.turn.is_empty() {
            info!(player = self.active_player().raw(), "turn passed");
        } else {
            let player = &self.players[self.active];
            let missing = self.config.hand_size.saturating_sub(player.cards_count());
            let dealt = self.deal(self.active, missing);
            info!(
                player = self.active_player().raw(),
                placed = self.turn.len(),
                dealt,
                deck = self.deck.len(),
                "turn finished"
            );
        }

        self.record(Action::FinishTurn);
        self.advance();
    }

    /// Exchange the cards at `indices` with the deck and end the turn.
    ///
    /// An empty selection passes. Indices are deduplicated and out-of-range
    /// ones are ignored. Removed cards go to the back of the deck before the
    /// same number is drawn from the front.
    pub fn swap_cards(&mut self, indices: &[usize]) -> Result<SwapOutcome, PlacementError> {
        if !self.is_local_turn() {
            return Err(PlacementError::NotYourTurn);
        }
        if !self.turn.is_empty() {
            return Err(PlacementError::SwapAfterPlacement);
        }

        let hand_len = self.players[self.active].hand_len();

        let mut selected: SmallVec<[usize; 4]> = SmallVec::new();
        for &index in indices {
            if index < hand_len {
                selected.push(index);
            } else {
                warn!(index, hand_len, "swap index out of range ignored");
            }
        }
        selected.sort_unstable_by(|a, b| b.cmp(a));
        selected.dedup();

        for &index in &selected {
            if let Some(card) = self.players[self.active].remove_card(index) {
                self.return_to_deck(card);
            }
        }
        let swapped = selected.len();
        self.deal(self.active, swapped);

        let player = self.active_player().raw();
        if swapped == 0 {
            info!(player, "turn passed");
        } else {
            info!(player, swapped, deck = self.deck.len(), "cards exchanged");
        }

        self.record(Action::swap(indices));
        self.advance();
        Ok(SwapOutcome { swapped })
    }

    /// Cells to highlight.
    ///
    /// With no selection (or an index outside the acting hand) these are all
    /// empty cells next to a card. With a selected card, only cells where it
    /// could legally go this turn. Empty while the local player waits.
    #[must_use]
    pub fn candidates(&self, selected: Option<usize>) -> Vec<Coordinate> {
        if !self.is_local_turn() {
            return Vec::new();
        }
        let card = selected.and_then(|index| {
            self.player(self.acting_player())
                .and_then(|player| player.card(index))
        });

        match card {
            Some(card) => filtered_candidates(&self.board, card, &self.turn),
            None => unfiltered_candidates(&self.board),
        }
    }

    /// Empty cells the grid should grey out.
    #[must_use]
    pub fn dead_cells(&self) -> Vec<Coordinate> {
        blocked_cells(&self.board)
    }

    /// Apply an action built by the presentation layer.
    pub fn apply(&mut self, action: &Action) -> Result<(), ActionError> {
        match action {
            Action::Place { card_index, at } => self.place(*card_index, at.x, at.y)?,
            Action::Undo => self.undo()?,
            Action::FinishTurn => self.finish_turn(),
            Action::Swap { indices } => {
                self.swap_cards(indices)?;
            }
        }
        Ok(())
    }

    // === Internals ===

    fn record(&mut self, action: Action) {
        let record = ActionRecord::new(
            self.active_player(),
            action,
            self.turn_number,
            self.sequence,
        );
        self.sequence += 1;
        self.history.push_back(record);
    }

    /// Deal up to `count` cards to the seat at `seat`, returning how many.
    ///
    /// A remote pile deals concealed cards.
    fn deal(&mut self, seat: usize, count: usize) -> usize {
        let player = &mut self.players[seat];
        match &mut self.deck {
            DeckView::Local(deck) => {
                let cards = deck.draw_up_to(count);
                let dealt = cards.len();
                for card in cards {
                    player.add_card(card);
                }
                dealt
            }
            DeckView::Remote { remaining } => {
                let dealt = count.min(*remaining);
                *remaining -= dealt;
                player.set_concealed(player.concealed() + dealt);
                dealt
            }
        }
    }

    fn return_to_deck(&mut self, card: Card) {
        match &mut self.deck {
            DeckView::Local(deck) => deck.put_back(card),
            DeckView::Remote { remaining } => *remaining += 1,
        }
    }

    /// Hand play to the next seat with a fresh turn.
    fn advance(&mut self) {
        self.active = (self.active + 1) % self.players.len();
        let next = self.players[self.active].id;

        self.turn = Turn::new(next);
        self.undo.clear();
        self.turn_number += 1;
        self.sequence = 0;

        info!(
            player = next.raw(),
            nickname = %self.players[self.active].nickname,
            turn = self.turn_number,
            "turn started"
        );
    }
}
