//! Position suite: game status, legal move counts and mate-in-one searches.

use serde::Deserialize;

use chess_core::board::{search, Board, Color, GameStatus, SearchParams};

#[derive(Deserialize)]
struct PositionSet {
    positions: Vec<Position>,
}

#[derive(Deserialize)]
struct Position {
    name: String,
    fen: String,
    side: String,
    status: String,
    #[serde(default)]
    legal_moves: Option<usize>,
    #[serde(default)]
    best_move: Option<String>,
}

impl Position {
    fn color(&self) -> Color {
        match self.side.as_str() {
            "white" => Color::White,
            "black" => Color::Black,
            other => panic!("{}: unknown side {other}", self.name),
        }
    }

    fn status(&self) -> GameStatus {
        match self.status.as_str() {
            "ongoing" => GameStatus::Ongoing,
            "check" => GameStatus::Check,
            "checkmate" => GameStatus::Checkmate,
            "stalemate" => GameStatus::Stalemate,
            other => panic!("{}: unknown status {other}", self.name),
        }
    }
}

fn load() -> PositionSet {
    let data = include_str!("data/positions.json");
    serde_json::from_str(data).expect("invalid positions.json")
}

#[test]
fn status_suite() {
    for position in load().positions {
        let board = Board::from_fen(&position.fen);
        let color = position.color();
        assert_eq!(
            board.game_status(color),
            position.status(),
            "status mismatch for {}",
            position.name
        );
    }
}

#[test]
fn legal_move_counts() {
    for position in load().positions {
        let Some(expected) = position.legal_moves else {
            continue;
        };
        let board = Board::from_fen(&position.fen);
        assert_eq!(
            board.legal_moves(position.color()).len(),
            expected,
            "move count mismatch for {}",
            position.name
        );
    }
}

#[test]
fn mate_in_one_suite() {
    let params = SearchParams::fixed_depth(3);
    for position in load().positions {
        let Some(expected) = position.best_move.as_deref() else {
            continue;
        };
        let color = position.color();
        let mut board = Board::from_fen(&position.fen);
        let result = search(&board, color, &params);
        let mv = result
            .best_move
            .unwrap_or_else(|| panic!("no move for {}", position.name));
        assert_eq!(mv.to_string(), expected, "wrong move for {}", position.name);

        board.make_move(&mv).expect("search returned an illegal move");
        assert!(
            board.is_checkmate(color.opponent()),
            "{} does not mate in {}",
            mv,
            position.name
        );
    }
}
