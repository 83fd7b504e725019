//! Driver-facing engine layer.
//!
//! Runs searches on a worker thread so the caller never blocks, and wraps a
//! board in a lock so readers never observe a half-applied move.

mod shared;
mod worker;

pub use shared::SharedBoard;
pub use worker::SearchJob;
