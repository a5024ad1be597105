//! Networked-mode session view.
//!
//! A `SessionSnapshot` is what the game server reports for one viewer: every
//! player's card count and score, whose turn it is, the table, the deck size
//! and the viewer's own hand. Unknown JSON fields are ignored.
//!
//! Rebuilding a session from a snapshot reconstructs the board and the local
//! hand exactly. Other players' hands become concealed counts and the deck
//! becomes a bare count: the server alone knows which cards it holds. A card
//! listed twice across table and hand is rejected. Remote state is only ever
//! applied whole: `replace_with` either swaps in a complete new session or
//! leaves the current one alone.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{DeckView, GameSession};
use crate::board::{Board, Coordinate};
use crate::cards::Card;
use crate::core::{GameConfig, Player, PlayerId, PlayerSeat, SnapshotError};
use crate::turn::{Turn, UndoStack};

/// Public information about one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub nickname: String,
    pub cards_count: usize,
    #[serde(default)]
    pub score: u32,
}

/// A card on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCard {
    pub x: i32,
    pub y: i32,
    pub card: Card,
}

/// The server's view of a game for one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub players: Vec<PlayerSummary>,
    /// The viewing player.
    pub player_id: PlayerId,
    pub current_turn_id: PlayerId,
    pub table_cards: Vec<TableCard>,
    pub deck_cards_count: usize,
    /// The viewing player's hand.
    pub hands_cards: Vec<Card>,
    /// Server timestamp in milliseconds.
    #[serde(default)]
    pub time: u64,
}

impl SessionSnapshot {
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl GameSession {
    /// Build a networked-mode session viewed by `snapshot.player_id`.
    pub fn from_snapshot(snapshot: &SessionSnapshot) -> Result<Self, SnapshotError> {
        Self::restore(snapshot, GameConfig::default())
    }

    /// Replace this session wholesale with one built from `snapshot`.
    ///
    /// Hand size, seed and refresh settings carry over; seating comes from
    /// the snapshot. On error nothing changes.
    pub fn replace_with(&mut self, snapshot: &SessionSnapshot) -> Result<(), SnapshotError> {
        let next = Self::restore(snapshot, self.config.clone())?;
        *self = next;
        Ok(())
    }

    /// Project this session into the wire view of the acting player.
    #[must_use]
    pub fn snapshot(&self, time: u64) -> SessionSnapshot {
        let viewer = self.acting_player();

        let players = self
            .players
            .iter()
            .map(|p| PlayerSummary {
                id: p.id,
                nickname: p.nickname.clone(),
                cards_count: p.cards_count(),
                score: p.score,
            })
            .collect();

        let mut table_cards: Vec<TableCard> = self
            .board
            .iter()
            .map(|(pos, card)| TableCard {
                x: pos.x,
                y: pos.y,
                card,
            })
            .collect();
        table_cards.sort_by_key(|t| (t.y, t.x));

        let hands_cards = self
            .player(viewer)
            .map(|p| p.hand().to_vec())
            .unwrap_or_default();

        SessionSnapshot {
            players,
            player_id: viewer,
            current_turn_id: self.active_player(),
            table_cards,
            deck_cards_count: self.deck.len(),
            hands_cards,
            time,
        }
    }

    fn restore(snapshot: &SessionSnapshot, base: GameConfig) -> Result<Self, SnapshotError> {
        if snapshot.players.is_empty() {
            return Err(SnapshotError::NoPlayers);
        }
        let active = snapshot
            .players
            .iter()
            .position(|p| p.id == snapshot.current_turn_id)
            .ok_or(SnapshotError::UnknownCurrentPlayer(snapshot.current_turn_id.raw()))?;
        if !snapshot.players.iter().any(|p| p.id == snapshot.player_id) {
            return Err(SnapshotError::UnknownLocalPlayer(snapshot.player_id.raw()));
        }

        let mut seen = FxHashSet::default();
        let visible = snapshot
            .table_cards
            .iter()
            .map(|table| table.card)
            .chain(snapshot.hands_cards.iter().copied());
        for card in visible {
            if !seen.insert(card) {
                return Err(SnapshotError::DuplicateCard(card));
            }
        }

        let mut board = Board::new();
        for table in &snapshot.table_cards {
            board
                .place(table.card, Coordinate::new(table.x, table.y))
                .map_err(|_| SnapshotError::DuplicateCell {
                    x: table.x,
                    y: table.y,
                })?;
        }

        let players: Vec<Player> = snapshot
            .players
            .iter()
            .map(|summary| {
                let mut player = Player::new(summary.id, summary.nickname.clone());
                player.score = summary.score;
                if summary.id == snapshot.player_id {
                    player.set_hand(snapshot.hands_cards.clone());
                    player.set_concealed(
                        summary.cards_count.saturating_sub(snapshot.hands_cards.len()),
                    );
                } else {
                    player.set_concealed(summary.cards_count);
                }
                player
            })
            .collect();

        let deck = DeckView::Remote {
            remaining: snapshot.deck_cards_count,
        };

        let seats = players
            .iter()
            .map(|p| PlayerSeat {
                id: p.id,
                nickname: p.nickname.clone(),
            })
            .collect();
        let config = base.with_players(seats);

        info!(
            local = snapshot.player_id.raw(),
            active = snapshot.current_turn_id.raw(),
            table = board.len(),
            deck = deck.len(),
            time = snapshot.time,
            "session restored from snapshot"
        );

        Ok(Self {
            config,
            board,
            players,
            active,
            local_player: Some(snapshot.player_id),
            deck,
            turn: Turn::new(snapshot.current_turn_id),
            undo: UndoStack::new(),
            turn_number: 1,
            sequence: 0,
            history: Vector::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlacementError;

    const SERVER_JSON: &str = r#"{
        "players": [
            {"id": 10, "nickname": "Ann", "cards_count": 4, "score": 3},
            {"id": 20, "nickname": "Ben", "cards_count": 4, "score": 0}
        ],
        "player_id": 20,
        "current_turn_id": 10,
        "table_cards": [
            {"x": 0, "y": 0, "card": {"shape": "circle", "color": "red", "number": 1}},
            {"x": 1, "y": 0, "card": {"shape": "square", "color": "red", "number": 1}}
        ],
        "deck_cards_count": 50,
        "hands_cards": [
            {"shape": "triangle", "color": "red", "number": 1},
            {"shape": "cross", "color": "blue", "number": 2},
            {"shape": "circle", "color": "green", "number": 3},
            {"shape": "square", "color": "yellow", "number": 4}
        ],
        "time": 1700000000000,
        "game_status": "running"
    }"#;

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let snapshot = SessionSnapshot::from_json(SERVER_JSON).unwrap();
        assert_eq!(snapshot.players.len(), 2);
        assert_eq!(snapshot.player_id, PlayerId::new(20));
        assert_eq!(snapshot.table_cards[1].card, Card::parse("square", "red", 1).unwrap());
    }

    #[test]
    fn test_from_snapshot_rebuilds_view() {
        let snapshot = SessionSnapshot::from_json(SERVER_JSON).unwrap();
        let session = GameSession::from_snapshot(&snapshot).unwrap();

        assert_eq!(session.board().len(), 2);
        assert_eq!(session.active_player(), PlayerId::new(10));
        assert_eq!(session.local_player(), Some(PlayerId::new(20)));
        assert_eq!(session.hand(PlayerId::new(20)).unwrap().len(), 4);
        assert_eq!(session.hand(PlayerId::new(10)).unwrap().len(), 0);
        assert_eq!(session.player(PlayerId::new(10)).unwrap().cards_count(), 4);
        assert_eq!(session.player(PlayerId::new(10)).unwrap().score, 3);
        assert_eq!(session.deck_len(), 50);
    }

    #[test]
    fn test_networked_rejects_out_of_turn() {
        let snapshot = SessionSnapshot::from_json(SERVER_JSON).unwrap();
        let mut session = GameSession::from_snapshot(&snapshot).unwrap();

        assert_eq!(session.place(0, 2, 0), Err(PlacementError::NotYourTurn));
        assert_eq!(session.swap_cards(&[0]), Err(PlacementError::NotYourTurn));
        session.finish_turn();
        assert_eq!(session.active_player(), PlayerId::new(10));
        assert!(session.history().is_empty());
        assert!(session.candidates(None).is_empty());
        assert!(session.candidates(Some(0)).is_empty());
    }

    #[test]
    fn test_restored_deck_is_count_only() {
        let snapshot = SessionSnapshot::from_json(SERVER_JSON).unwrap();
        let session = GameSession::from_snapshot(&snapshot).unwrap();

        assert!(session.deck().is_none());
        assert_eq!(session.deck_view(), &DeckView::Remote { remaining: 50 });
    }

    #[test]
    fn test_card_on_table_and_in_hand_rejected() {
        let mut snapshot = SessionSnapshot::from_json(SERVER_JSON).unwrap();
        let on_table = snapshot.table_cards[0].card;
        snapshot.hands_cards[1] = on_table;
        assert!(matches!(
            GameSession::from_snapshot(&snapshot),
            Err(SnapshotError::DuplicateCard(card)) if card == on_table
        ));
    }

    #[test]
    fn test_networked_local_turn_plays() {
        let mut snapshot = SessionSnapshot::from_json(SERVER_JSON).unwrap();
        snapshot.current_turn_id = PlayerId::new(20);
        let mut session = GameSession::from_snapshot(&snapshot).unwrap();

        // triangle red 1 completes circle/square/triangle in red 1s.
        assert!(session.candidates(Some(0)).contains(&Coordinate::new(2, 0)));
        session.place(0, 2, 0).unwrap();
        assert_eq!(session.hand(PlayerId::new(20)).unwrap().len(), 3);
    }

    #[test]
    fn test_unknown_current_player() {
        let mut snapshot = SessionSnapshot::from_json(SERVER_JSON).unwrap();
        snapshot.current_turn_id = PlayerId::new(99);
        assert!(matches!(
            GameSession::from_snapshot(&snapshot),
            Err(SnapshotError::UnknownCurrentPlayer(99))
        ));
    }

    #[test]
    fn test_duplicate_cell_rejected() {
        let mut snapshot = SessionSnapshot::from_json(SERVER_JSON).unwrap();
        snapshot.table_cards[1].x = 0;
        assert!(matches!(
            GameSession::from_snapshot(&snapshot),
            Err(SnapshotError::DuplicateCell { x: 0, y: 0 })
        ));
    }

    #[test]
    fn test_replace_with_keeps_old_on_error() {
        let mut session = GameSession::new(GameConfig::default()).unwrap();
        let board = session.board().clone();

        let mut bad = SessionSnapshot::from_json(SERVER_JSON).unwrap();
        bad.player_id = PlayerId::new(77);
        assert!(matches!(
            session.replace_with(&bad),
            Err(SnapshotError::UnknownLocalPlayer(77))
        ));
        assert_eq!(session.board(), &board);
        assert_eq!(session.local_player(), None);

        let good = SessionSnapshot::from_json(SERVER_JSON).unwrap();
        session.replace_with(&good).unwrap();
        assert_eq!(session.local_player(), Some(PlayerId::new(20)));
        assert_eq!(session.board().len(), 2);
    }

    #[test]
    fn test_snapshot_table_sorted_and_json_shape() {
        let session = GameSession::new(GameConfig::default()).unwrap();
        let snapshot = session.snapshot(42);

        assert_eq!(snapshot.player_id, PlayerId::new(1));
        assert_eq!(snapshot.current_turn_id, PlayerId::new(1));
        assert_eq!(snapshot.table_cards.len(), 1);
        assert_eq!(snapshot.deck_cards_count, 55);

        let value: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(value["table_cards"][0]["x"], 0);
        assert_eq!(value["players"][1]["cards_count"], 4);
        assert_eq!(value["time"], 42);
    }
}
