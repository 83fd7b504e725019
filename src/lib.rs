pub mod board;
pub mod cache;
pub mod config;
pub mod engine;
pub mod zobrist;

pub use board::{Board, Color, Move, Piece, PieceKind, Square};
pub use cache::PositionCache;
pub use config::EngineConfig;
