//! Board shared between a renderer and the game driver.

use std::io;
use std::sync::Arc;

use parking_lot::RwLock;

use super::SearchJob;
use crate::board::{Board, Color, MoveError, Piece, SearchParams, SearchResult, Square};

/// Board behind a read-write lock.
///
/// Moves are applied under the write lock, so a reader sees a position
/// either before or after a move, castling rook included, never between.
#[derive(Clone, Debug, Default)]
pub struct SharedBoard {
    inner: Arc<RwLock<Board>>,
}

impl SharedBoard {
    #[must_use]
    pub fn new(board: Board) -> Self {
        SharedBoard {
            inner: Arc::new(RwLock::new(board)),
        }
    }

    /// Copy of the current position
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.inner.read().clone()
    }

    /// Run `f` against the board under the read lock
    pub fn read<R>(&self, f: impl FnOnce(&Board) -> R) -> R {
        f(&self.inner.read())
    }

    #[must_use]
    pub fn get_piece(&self, sq: Square) -> Option<Piece> {
        self.inner.read().get_piece(sq)
    }

    #[must_use]
    pub fn get_possible_moves(&self, color: Color) -> Vec<(Piece, Vec<Square>)> {
        self.inner.read().get_possible_moves(color)
    }

    /// [`Board::move_piece`] under the write lock
    pub fn move_piece(&self, piece: &Piece, dest: Square) -> bool {
        self.inner.write().move_piece(piece, dest)
    }

    /// [`Board::try_move_piece`] under the write lock
    pub fn try_move_piece(&self, piece: &Piece, dest: Square) -> Result<(), MoveError> {
        self.inner.write().try_move_piece(piece, dest)
    }

    /// Start a background search on a snapshot of the current position.
    pub fn spawn_search(&self, color: Color, params: SearchParams) -> io::Result<SearchJob> {
        let board = self.inner.read();
        SearchJob::spawn(&board, color, params)
    }

    /// Play a search result's move. Fails if the position changed so that
    /// the move is no longer legal.
    pub fn apply_result(&self, result: &SearchResult) -> bool {
        match result.best_move {
            Some(mv) => self.move_piece(&mv.piece, mv.to),
            None => false,
        }
    }
}
