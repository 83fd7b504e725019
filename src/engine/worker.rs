//! Background search job.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use log::info;
use parking_lot::Mutex;

use crate::board::{find_best_move, Board, Color, SearchParams, SearchResult};

/// Search thread stack size (16 MB)
const SEARCH_STACK_SIZE: usize = 16 * 1024 * 1024;

/// A search running on its own thread against a private copy of the board.
///
/// The result is published through a mutex slot once the search ends.
pub struct SearchJob {
    slot: Arc<Mutex<Option<SearchResult>>>,
    finished: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl SearchJob {
    /// Start searching for `color`'s move on a copy of `board`.
    ///
    /// Later changes to `board` do not affect the running search.
    pub fn spawn(board: &Board, color: Color, params: SearchParams) -> io::Result<Self> {
        let slot = Arc::new(Mutex::new(None));
        let finished = Arc::new(AtomicBool::new(false));

        let search_board = board.clone();
        let slot_clone = Arc::clone(&slot);
        let finished_clone = Arc::clone(&finished);

        let handle = thread::Builder::new()
            .name("search".to_string())
            .stack_size(SEARCH_STACK_SIZE)
            .spawn(move || {
                let start = Instant::now();
                let result = find_best_move(&search_board, color, &params);
                match result.best_move {
                    Some(mv) => info!(
                        "search for {color} finished: {mv} score {} in {:?}{}",
                        result.score,
                        start.elapsed(),
                        if result.terminated { " (time limit)" } else { "" }
                    ),
                    None => info!("search for {color} finished: no legal move"),
                }
                *slot_clone.lock() = Some(result);
                finished_clone.store(true, Ordering::Release);
            })?;

        Ok(SearchJob {
            slot,
            finished,
            handle,
        })
    }

    /// True once the result is available
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Acquire)
    }

    /// The result, if the search has finished
    #[must_use]
    pub fn try_result(&self) -> Option<SearchResult> {
        *self.slot.lock()
    }

    /// Block until the search ends.
    ///
    /// Returns `None` only if the search thread panicked.
    pub fn wait(self) -> Option<SearchResult> {
        if self.handle.join().is_err() {
            return None;
        }
        self.slot.lock().take()
    }
}
