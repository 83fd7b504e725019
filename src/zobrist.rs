//! Zobrist hashing for chess positions.
//!
//! A hash covers every piece (kind, color, square), the has-moved flag of
//! kings and rooks, and optionally the side to move. Keys come from a fixed
//! seed so hashes are stable across runs.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Board, Color, Piece};

pub(crate) struct ZobristKeys {
    // piece_keys[kind][color][square_index]
    pub(crate) piece_keys: [[[u64; 64]; 2]; 6],
    // moved_keys[color][square_index], mixed in for moved kings and rooks
    pub(crate) moved_keys: [[u64; 64]; 2],
    pub(crate) black_to_move_key: u64,
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64);
        let mut piece_keys = [[[0; 64]; 2]; 6];
        let mut moved_keys = [[0; 64]; 2];

        for kind in &mut piece_keys {
            for color in kind.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        for color in &mut moved_keys {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }

        let black_to_move_key = rng.gen();

        ZobristKeys {
            piece_keys,
            moved_keys,
            black_to_move_key,
        }
    }

    #[inline]
    fn piece_key(&self, piece: &Piece) -> u64 {
        let idx = piece.square.as_index();
        let color = piece.color.index();
        let mut key = self.piece_keys[piece.kind.index()][color][idx];
        if piece.has_moved && piece.tracks_movement() {
            key ^= self.moved_keys[color][idx];
        }
        key
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

/// Hash of the pieces on `board`, ignoring whose turn it is
#[must_use]
pub fn board_hash(board: &Board) -> u64 {
    board
        .pieces()
        .fold(0, |hash, piece| hash ^ ZOBRIST.piece_key(piece))
}

/// Hash of `board` with `side_to_move` to play
#[must_use]
pub fn position_hash(board: &Board, side_to_move: Color) -> u64 {
    let hash = board_hash(board);
    match side_to_move {
        Color::White => hash,
        Color::Black => hash ^ ZOBRIST.black_to_move_key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    #[test]
    fn test_hash_is_stable() {
        assert_eq!(board_hash(&Board::new()), board_hash(&Board::new()));
    }

    #[test]
    fn test_side_to_move_changes_hash() {
        let board = Board::new();
        assert_ne!(
            position_hash(&board, Color::White),
            position_hash(&board, Color::Black)
        );
    }

    #[test]
    fn test_transposition_hashes_equal() {
        let mut a = Board::new();
        let mut b = Board::new();
        let knight = |board: &Board, sq: &str| board.get_piece(sq.parse().unwrap()).unwrap();

        assert!(a.move_piece(&knight(&a, "g1"), "f3".parse().unwrap()));
        assert!(a.move_piece(&knight(&a, "b1"), "c3".parse().unwrap()));
        assert!(b.move_piece(&knight(&b, "b1"), "c3".parse().unwrap()));
        assert!(b.move_piece(&knight(&b, "g1"), "f3".parse().unwrap()));

        assert_eq!(board_hash(&a), board_hash(&b));
    }

    #[test]
    fn test_moved_flag_changes_hash() {
        let fresh = Board::from_fen("4k3/8/8/8/8/8/8/4K2R");
        let moved = Board::from_fen("4k3/8/8/8/8/8/8/4K2R w - - 0 1");
        assert!(!fresh.get_piece(Square(7, 7)).unwrap().has_moved);
        assert!(moved.get_piece(Square(7, 7)).unwrap().has_moved);
        assert_ne!(board_hash(&fresh), board_hash(&moved));
    }
}
