//! Helpers shared by the integration tests.

#![allow(dead_code)]

use triad_tiles::board::Axis;
use triad_tiles::cards::{full_set, Card, FixedDeckFactory};
use triad_tiles::rules::{check_line, line_with};
use triad_tiles::{Board, GameConfig, GameSession};

/// Route engine logs to the test harness. Filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn card(shape: &str, color: &str, number: u8) -> Card {
    Card::parse(shape, color, number).unwrap()
}

/// Every maximal line on the board obeys the attribute rule.
pub fn all_lines_valid(board: &Board) -> bool {
    board.iter().all(|(pos, card)| {
        Axis::BOTH
            .iter()
            .all(|&axis| check_line(&line_with(card, pos, axis, board)))
    })
}

/// Cards on the table, in hands (seen or concealed) and in the deck.
pub fn cards_in_play(session: &GameSession) -> usize {
    session.board().len()
        + session.players().iter().map(|p| p.cards_count()).sum::<usize>()
        + session.deck_len()
}

/// Every card whose identity this session knows: the table and all
/// visible hands, plus the deck when it is held locally.
pub fn known_cards(session: &GameSession) -> Vec<Card> {
    let mut cards: Vec<Card> = session.board().iter().map(|(_, card)| card).collect();
    for player in session.players() {
        cards.extend_from_slice(player.hand());
    }
    if let Some(deck) = session.deck() {
        cards.extend(deck.iter().copied());
    }
    cards
}

/// No card is known to be in two places at once.
pub fn all_distinct(cards: &[Card]) -> bool {
    cards
        .iter()
        .enumerate()
        .all(|(i, card)| !cards[i + 1..].contains(card))
}

/// A two-player game on an empty board where the deck starts with `front`
/// followed by the rest of the full set in canonical order.
pub fn scripted_session(front: &[Card]) -> GameSession {
    let mut cards = front.to_vec();
    cards.extend(full_set().into_iter().filter(|c| !front.contains(c)));
    let config = GameConfig::default().with_empty_board();
    GameSession::with_factory(config, &mut FixedDeckFactory::new(cards)).unwrap()
}

/// Place the first card of the acting hand that fits anywhere, if any.
pub fn place_any(session: &mut GameSession) -> bool {
    let hand_len = session
        .hand(session.active_player())
        .map_or(0, |hand| hand.len());
    for index in 0..hand_len {
        if let Some(&pos) = session.candidates(Some(index)).first() {
            session.place(index, pos.x, pos.y).unwrap();
            return true;
        }
    }
    false
}
