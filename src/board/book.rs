//! Opening book for Black's first two replies.
//!
//! Lines are keyed by White's first move. When White opened with something
//! the book does not know, a default line is used. A line is only followed
//! while Black's earlier moves match it.

use rand::seq::SliceRandom;
use rand::Rng;

use super::PieceKind::{Knight as N, Pawn as P};
use super::{Board, Color, Move, MoveRecord, PieceKind, Square};

/// Black moves covered by each line
pub const BOOK_DEPTH: usize = 2;

/// A named sequence of Black replies
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpeningLine {
    pub name: &'static str,
    pub moves: [MoveRecord; BOOK_DEPTH],
}

const fn rec(kind: PieceKind, from: &[u8; 2], to: &[u8; 2]) -> MoveRecord {
    MoveRecord::new(kind, Square::at(from), Square::at(to))
}

const fn line(name: &'static str, first: MoveRecord, second: MoveRecord) -> OpeningLine {
    OpeningLine {
        name,
        moves: [first, second],
    }
}

const KING_PAWN: &[OpeningLine] = &[
    line("Sicilian Defense", rec(P, b"c7", b"c5"), rec(P, b"d7", b"d6")),
    line("French Defense", rec(P, b"e7", b"e6"), rec(P, b"d7", b"d5")),
    line("Open Game", rec(P, b"e7", b"e5"), rec(N, b"b8", b"c6")),
    line("Caro-Kann Defense", rec(P, b"c7", b"c6"), rec(P, b"d7", b"d5")),
];

const QUEEN_PAWN: &[OpeningLine] = &[
    line("Queen's Gambit Declined", rec(P, b"d7", b"d5"), rec(P, b"e7", b"e6")),
    line("King's Indian Defense", rec(N, b"g8", b"f6"), rec(P, b"g7", b"g6")),
    line("Slav Defense", rec(P, b"d7", b"d5"), rec(P, b"c7", b"c6")),
];

const ENGLISH: &[OpeningLine] = &[
    line("Symmetrical English", rec(P, b"c7", b"c5"), rec(N, b"b8", b"c6")),
    line("Reversed Sicilian", rec(P, b"e7", b"e5"), rec(N, b"g8", b"f6")),
];

const RETI: &[OpeningLine] = &[line("Reti Opening", rec(P, b"d7", b"d5"), rec(N, b"g8", b"f6"))];

const DEFAULT_LINE: &[OpeningLine] = &[line("Indian Setup", rec(N, b"g8", b"f6"), rec(P, b"d7", b"d5"))];

const BOOK: &[(MoveRecord, &[OpeningLine])] = &[
    (rec(P, b"e2", b"e4"), KING_PAWN),
    (rec(P, b"d2", b"d4"), QUEEN_PAWN),
    (rec(P, b"c2", b"c4"), ENGLISH),
    (rec(N, b"g1", b"f3"), RETI),
];

/// Lines answering White's first move, or the default line.
#[must_use]
pub fn book_lines(first: &MoveRecord) -> &'static [OpeningLine] {
    BOOK.iter()
        .find(|(key, _)| key == first)
        .map_or(DEFAULT_LINE, |(_, lines)| *lines)
}

/// Book reply for Black, if the game is still inside the book.
///
/// Picks uniformly among the lines consistent with the game so far. The
/// returned move is legal on `board`; a book move that is not is dropped.
pub fn get_book_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Move> {
    let history = board.history();
    if history.len() % 2 == 0 || history.len() > 2 * BOOK_DEPTH - 1 {
        return None;
    }
    let ply = history.len() / 2;
    let black_moves: Vec<MoveRecord> = history.iter().skip(1).step_by(2).copied().collect();

    let candidates: Vec<&OpeningLine> = book_lines(&history[0])
        .iter()
        .filter(|line| line.moves[..ply] == black_moves[..])
        .collect();
    let chosen = candidates.choose(rng)?.moves[ply];

    let piece = board.get_piece(chosen.from)?;
    if piece.color != Color::Black || piece.kind != chosen.kind {
        return None;
    }
    board
        .legal_moves_for(&piece)
        .contains(&chosen.to)
        .then(|| Move::new(piece, chosen.to))
}
